//! Error types for the Product store.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during product operations through the client.
///
/// The store itself never fails; these only come from the channel to the store actor
/// or from [`ProductClient::require`](crate::clients::ProductClient::require).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// Every id up to [`MAX_PRODUCT_ID`](crate::model::MAX_PRODUCT_ID) is taken by the current maximum.
    #[error("No product id left to assign")]
    IdsExhausted,

    /// An error occurred while communicating with the store actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Why a persisted product was refused. Any refusal empties the whole load.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SnapshotError {
    #[error("Product id {0} is outside 1..={max}", max = crate::model::MAX_PRODUCT_ID)]
    IdOutOfRange(u64),
}
