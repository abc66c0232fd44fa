//! # Store Messages
//!
//! The requests a [`StoreClient`](crate::framework::StoreClient) sends to a
//! [`StoreActor`](crate::framework::StoreActor). One variant per store operation, each
//! carrying a oneshot sender for the reply.

use crate::framework::entity::CollectionEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
#[derive(Debug)]
pub enum StoreRequest<T: CollectionEntity> {
    /// Re-read the persisted snapshot. Replies with the loaded size.
    Load { respond_to: Response<usize> },
    /// Snapshot of the whole collection, in order.
    List { respond_to: Response<Vec<T>> },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Replies `None` if the id space is exhausted.
    Add {
        draft: T::Draft,
        respond_to: Response<Option<T::Id>>,
    },
    /// Replies `true` if an entity with the same id was replaced.
    Update {
        item: T,
        respond_to: Response<bool>,
    },
    /// Replies `true` if an entity was removed.
    Delete {
        id: T::Id,
        respond_to: Response<bool>,
    },
}
