//! # CollectionEntity Trait
//!
//! The contract a record type implements to be managed by a [`CollectionStore`](crate::framework::CollectionStore).
//! It names the id type, the creation payload (a draft without an id), and the loosely typed
//! shape read back from a persisted snapshot.
//!
//! The store owns identity assignment. An entity only says what the first id is and what comes
//! after a given id; the store applies "max + 1" over whatever is currently in the collection.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to live in a [`CollectionStore`](crate::framework::CollectionStore).
///
/// # Associated Types
/// - `Id`: ordered so the store can find the current maximum.
/// - `Draft`: the creation payload. Never carries an id.
/// - `Stored`: what one element of a persisted snapshot deserializes into before it is
///   turned into a full entity. Keeping it separate from `Self` lets an entity accept
///   sloppy persisted data (numbers stored as text, missing fields) without loosening
///   its own field types.
pub trait CollectionEntity: Clone + Debug + Serialize + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Copy + Eq + Ord + Hash + Display + Debug + Send + Sync + 'static;

    /// The data required to create a new instance.
    type Draft: Debug + Send + Sync + 'static;

    /// One element of a persisted snapshot, before conversion.
    type Stored: DeserializeOwned;

    /// Why a snapshot element was refused by [`from_stored`](Self::from_stored).
    type RejectError: std::error::Error + Send + Sync + 'static;

    /// Returns this entity's identifier.
    fn id(&self) -> Self::Id;

    /// The id handed out when the collection is empty.
    fn first_id() -> Self::Id;

    /// The id handed out when `max` is the largest id in the collection.
    ///
    /// `None` when the id space is exhausted. The result must be an id that
    /// [`from_stored`](Self::from_stored) accepts, or a saved collection would not load back.
    fn next_id(max: Self::Id) -> Option<Self::Id>;

    /// Builds the full entity from an assigned id and a draft.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    /// Converts one snapshot element. An `Err` rejects the whole snapshot.
    fn from_stored(stored: Self::Stored) -> Result<Self, Self::RejectError>;
}

/// Short type name used as the `entity_type` field in logs (e.g. `Product`).
pub(crate) fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
