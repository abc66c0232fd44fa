//! Pure data structures (DTOs) implementing the [`CollectionEntity`](crate::framework::CollectionEntity) trait.

pub mod product;

pub use product::*;
