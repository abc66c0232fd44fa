//! # CollectionClient Trait
//!
//! Provides a common interface for entity-specific clients, adding default read and delete
//! methods built on top of a generic [`StoreClient`].
use crate::framework::{CollectionEntity, FrameworkError, StoreClient};
use async_trait::async_trait;

/// Trait for entity-specific clients to inherit the standard store operations.
///
/// Implementors supply the inner [`StoreClient`] and an error mapping; `load`, `list`, `get`
/// and `delete` come for free. Operations whose payload needs domain handling (`add`,
/// `update`) stay on the concrete client.
#[async_trait]
pub trait CollectionClient<T: CollectionEntity>: Send + Sync {
    /// The entity-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Map framework errors to the entity-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Re-read the persisted snapshot, returning how many entities were loaded.
    #[tracing::instrument(skip(self))]
    async fn load(&self) -> Result<usize, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().load().await.map_err(Self::map_error)
    }

    /// Fetch the whole collection in order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID. `Ok(false)` means nothing had that id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<bool, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
