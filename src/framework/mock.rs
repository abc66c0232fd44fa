//! # Mock Helpers
//!
//! Utilities for testing client wrappers without running a [`StoreActor`](crate::framework::StoreActor).
//!
//! [`create_mock_client`] returns a real [`StoreClient`] plus the receiving end of its
//! channel. The test drives the client from a spawned task, pulls the request off the
//! receiver with one of the `expect_*` helpers, asserts on it, and answers through the
//! returned responder. Error paths (closed actor, dropped reply) are easy to inject this way.
//!
//! ```rust,ignore
//! let (client, mut receiver) = create_mock_client::<Product>(10);
//! let task = tokio::spawn(async move { ProductClient::new(client).require(ProductId(1)).await });
//!
//! let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
//! assert_eq!(id, ProductId(1));
//! responder.send(Ok(None)).unwrap();
//!
//! assert!(task.await.unwrap().is_err());
//! ```

use crate::framework::{CollectionEntity, FrameworkError, StoreClient, StoreRequest};
use tokio::sync::{mpsc, oneshot};

/// Responder half handed back by the `expect_*` helpers.
pub type Responder<R> = oneshot::Sender<Result<R, FrameworkError>>;

/// Creates a client whose requests land on a receiver the test controls.
pub fn create_mock_client<T: CollectionEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Load request
pub async fn expect_load<T: CollectionEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<Responder<usize>> {
    match receiver.recv().await {
        Some(StoreRequest::Load { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: CollectionEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<Responder<Vec<T>>> {
    match receiver.recv().await {
        Some(StoreRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: CollectionEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Add request
pub async fn expect_add<T: CollectionEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Draft, Responder<Option<T::Id>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Add { draft, respond_to }) => Some((draft, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: CollectionEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T, Responder<bool>)> {
    match receiver.recv().await {
        Some(StoreRequest::Update { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: CollectionEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, Responder<bool>)> {
    match receiver.recv().await {
        Some(StoreRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Tag {
        id: u32,
        label: String,
    }

    impl CollectionEntity for Tag {
        type Id = u32;
        type Draft = String;
        type Stored = Tag;
        type RejectError = std::convert::Infallible;

        fn id(&self) -> u32 {
            self.id
        }
        fn first_id() -> u32 {
            1
        }
        fn next_id(max: u32) -> Option<u32> {
            max.checked_add(1)
        }
        fn from_draft(id: u32, label: String) -> Self {
            Self { id, label }
        }
        fn from_stored(stored: Tag) -> Result<Self, Self::RejectError> {
            Ok(stored)
        }
    }

    #[tokio::test]
    async fn test_expect_add_sees_draft() {
        let (client, mut receiver) = create_mock_client::<Tag>(4);
        let task = tokio::spawn(async move { client.add("urgent".to_string()).await });

        let (draft, responder) = expect_add(&mut receiver).await.expect("Expected Add request");
        assert_eq!(draft, "urgent");
        responder.send(Ok(Some(9))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(Some(9)));
    }

    #[tokio::test]
    async fn test_wrong_request_kind_is_none() {
        let (client, mut receiver) = create_mock_client::<Tag>(4);
        let task = tokio::spawn(async move { client.list().await });

        assert!(expect_get(&mut receiver).await.is_none());
        // The responder was dropped with the unmatched request.
        assert_eq!(task.await.unwrap(), Err(FrameworkError::ActorDropped));
    }

    #[tokio::test]
    async fn test_closed_receiver_reports_actor_closed() {
        let (client, receiver) = create_mock_client::<Tag>(4);
        drop(receiver);
        assert_eq!(client.get(1).await, Err(FrameworkError::ActorClosed));
    }
}
