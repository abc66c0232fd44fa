//! # Product Inventory
//!
//! A small product inventory: an ordered collection of [`Product`](model::Product) records kept
//! in memory and mirrored into a key-value storage slot after every change.
//!
//! ## Architecture
//!
//! The crate is split into layers, bottom-up:
//!
//! ### 1. Storage ([`storage`])
//! A synchronous string slot behind the [`KeyValueStorage`](storage::KeyValueStorage) trait,
//! with an in-memory and a file-backed adapter.
//!
//! ### 2. The Engine ([`framework`])
//! The generic [`CollectionStore<T>`](framework::CollectionStore): id assignment, CRUD and
//! whole-snapshot persistence for any [`CollectionEntity`](framework::CollectionEntity).
//! The store never fails: bad snapshots load empty and failed writes are logged.
//! [`StoreActor`](framework::StoreActor) puts a store behind a channel for async callers.
//!
//! ### 3. The Domain ([`model`], [`product_store`])
//! The `Product` record, lenient numeric coercion for form input and persisted data, and the
//! product collection bound to the `"products"` slot.
//!
//! ### 4. The Interface ([`clients`], [`routes`])
//! [`ProductClient`](clients::ProductClient) wraps the generic client with product methods.
//! [`routes`] maps URL paths to the pages that would consume the store.
//!
//! ### 5. The Orchestrator ([`config`], [`lifecycle`])
//! [`InventorySystem`](lifecycle::InventorySystem) builds storage from an
//! [`InventoryConfig`](config::InventoryConfig), starts the actor and shuts it down.
//!
//! ## Concurrency
//!
//! A store is single-owner. Sharing goes through the actor, which handles one request at a
//! time, so an operation and its persistence write never interleave with another operation.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod product_store;
pub mod routes;
pub mod storage;
