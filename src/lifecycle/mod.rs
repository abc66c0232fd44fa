//! # Session Lifecycle
//!
//! Starting and stopping an inventory session.
//!
//! [`InventorySystem::new`] turns an [`InventoryConfig`](crate::config::InventoryConfig) into a
//! running session:
//!
//! 1. build the storage adapter the configuration names
//! 2. open the product store (this loads the snapshot once)
//! 3. spawn the store actor on the current Tokio runtime
//! 4. hand out a [`ProductClient`](crate::clients::ProductClient)
//!
//! [`InventorySystem::shutdown`] drops the client, waits for the actor to drain its queue and
//! returns the final store.
//!
//! ```rust
//! use product_inventory::config::InventoryConfig;
//! use product_inventory::lifecycle::InventorySystem;
//! use product_inventory::model::ProductDraft;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = InventorySystem::new(&InventoryConfig::in_memory());
//!     system
//!         .product_client
//!         .add_product(ProductDraft::new("Pen", "Office", "1.50", "10"))
//!         .await?;
//!
//!     let store = system.shutdown().await?;
//!     assert_eq!(store.len(), 1);
//!     Ok(())
//! }
//! ```
//!
//! [`setup_tracing`] installs the global subscriber; call it once from the binary.

mod inventory_system;
pub mod tracing;

pub use inventory_system::{InventorySystem, SystemError, SystemStorage};
pub use self::tracing::setup_tracing;
