//! Type-safe wrappers around [`StoreClient`](crate::framework::StoreClient).

pub mod product_client;

pub use product_client::*;
