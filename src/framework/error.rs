//! # Framework Errors
//!
//! [`StoreError`] covers what can go wrong between the collection and its storage slot.
//! The store absorbs these itself (fail-soft) and only logs them.
//!
//! [`FrameworkError`] covers the channel between a [`StoreClient`](crate::framework::StoreClient)
//! and its [`StoreActor`](crate::framework::StoreActor).

use crate::storage::StorageError;

/// Errors raised while reading or writing a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Snapshot is not valid JSON for this collection: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot is not a sequence")]
    NotASequence,

    #[error("Snapshot element rejected: {0}")]
    Rejected(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}
