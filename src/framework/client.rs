//! # Generic Client
//!
//! This module defines the generic client for communicating with a store actor.

use crate::framework::entity::CollectionEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::StoreRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe, cloneable handle to a [`StoreActor`](crate::framework::StoreActor).
///
/// Holds only the sender half of the request channel. Every call is one request and one
/// reply; the actor answers requests strictly in the order they arrive.
pub struct StoreClient<T: CollectionEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

// Manual impl: a derive would demand `T: Clone` bounds on the associated types too.
impl<T: CollectionEntity> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: CollectionEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> StoreRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn load(&self) -> Result<usize, FrameworkError> {
        self.request(|respond_to| StoreRequest::Load { respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| StoreRequest::List { respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    /// `Ok(None)` means the store had no id left to assign.
    pub async fn add(&self, draft: T::Draft) -> Result<Option<T::Id>, FrameworkError> {
        self.request(|respond_to| StoreRequest::Add { draft, respond_to })
            .await
    }

    pub async fn update(&self, item: T) -> Result<bool, FrameworkError> {
        self.request(|respond_to| StoreRequest::Update { item, respond_to })
            .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<bool, FrameworkError> {
        self.request(|respond_to| StoreRequest::Delete { id, respond_to })
            .await
    }
}
