//! # Product Store
//!
//! The product collection: a [`CollectionStore`] of [`Product`] mirrored into the `"products"`
//! storage slot as a JSON array of `{id, name, category, price, quantity}` objects.
//!
//! ## Structure
//!
//! - [`entity`] - [`CollectionEntity`](crate::framework::CollectionEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] returned by the product client
//! - [`open`] / [`spawn`] - factory functions
//!
//! ## Usage
//!
//! Synchronous, owned:
//!
//! ```rust
//! use product_inventory::model::ProductDraft;
//! use product_inventory::product_store;
//! use product_inventory::storage::MemoryStorage;
//!
//! let mut store = product_store::open(MemoryStorage::new());
//! let id = store.add(ProductDraft::new("Pen", "Office", "1.50", "10")).unwrap();
//! assert_eq!(store.get_by_id(id).unwrap().price, 1.5);
//! ```
//!
//! Behind an actor, for async callers:
//!
//! ```rust
//! use product_inventory::model::ProductDraft;
//! use product_inventory::product_store;
//! use product_inventory::storage::MemoryStorage;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_store::spawn(MemoryStorage::new(), 8);
//!     let handle = tokio::spawn(actor.run());
//!
//!     let id = client.add_product(ProductDraft::new("Mug", "Kitchen", 5, 3)).await?;
//!     assert_eq!(id.0, 1);
//!
//!     drop(client);
//!     let store = handle.await?;
//!     assert_eq!(store.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::framework::{CollectionStore, StoreActor};
use crate::model::Product;
use crate::storage::KeyValueStorage;

/// The fixed storage slot holding the product snapshot.
pub const STORAGE_KEY: &str = "products";

/// The product collection over storage `S`.
pub type ProductStore<S> = CollectionStore<Product, S>;

/// Opens the product store over `storage`, loading the current snapshot.
pub fn open<S: KeyValueStorage>(storage: S) -> ProductStore<S> {
    open_at(storage, STORAGE_KEY)
}

/// Opens the product store under a custom slot key.
pub fn open_at<S: KeyValueStorage>(storage: S, key: impl Into<String>) -> ProductStore<S> {
    CollectionStore::open(storage, key)
}

/// Opens the product store and puts it behind an actor.
///
/// The actor still has to be run (`tokio::spawn(actor.run())`).
pub fn spawn<S: KeyValueStorage>(
    storage: S,
    buffer_size: usize,
) -> (StoreActor<Product, S>, ProductClient) {
    let (actor, generic_client) = StoreActor::new(open(storage), buffer_size);
    (actor, ProductClient::new(generic_client))
}
