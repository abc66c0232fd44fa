//! Generic collection management.
//!
//! This module provides the building blocks for keeping an ordered collection of records
//! in memory and mirroring it into a key-value storage slot.
//!
//! # Main Components
//!
//! - [`CollectionEntity`] - Trait that record types implement to be managed by a store
//! - [`CollectionStore`] - The synchronous store: CRUD, id assignment, snapshot mirroring
//! - [`StoreActor`] / [`StoreClient`] - One task owning a store, and the cloneable handle to it
//! - [`CollectionClient`] - Default client methods for entity-specific wrappers
//! - [`StoreError`], [`FrameworkError`] - Error types
//!
//! # Testing
//!
//! See the [`mock`] module for utilities to test clients without running an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::CollectionClient;
pub use entity::CollectionEntity;
pub use error::{FrameworkError, StoreError};
pub use message::{Response, StoreRequest};
pub use store::CollectionStore;
