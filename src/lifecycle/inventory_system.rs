//! # Inventory System
//!
//! Wires storage, the product store actor and its client into one running session.

use crate::clients::ProductClient;
use crate::config::InventoryConfig;
use crate::framework::StoreActor;
use crate::product_store::{self, ProductStore};
use crate::storage::KeyValueStorage;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Storage behind a running session. Boxed so the backend can be picked at runtime.
pub type SystemStorage = Box<dyn KeyValueStorage>;

#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    #[error("Store actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// A running inventory session: one product store actor and its client.
pub struct InventorySystem {
    /// Client for the product store actor. Clone it freely.
    pub product_client: ProductClient,

    handle: JoinHandle<ProductStore<SystemStorage>>,
}

impl InventorySystem {
    /// Starts a session over the storage `config` describes.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &InventoryConfig) -> Self {
        Self::with_storage(config.build_storage(), config)
    }

    /// Starts a session over caller-provided storage. Backend and data directory in `config`
    /// are ignored; key and channel capacity still apply.
    pub fn with_storage(storage: SystemStorage, config: &InventoryConfig) -> Self {
        info!(
            ?storage,
            key = %config.storage_key,
            capacity = config.channel_capacity,
            "Starting inventory system"
        );

        let store = product_store::open_at(storage, config.storage_key.as_str());
        let (actor, client) = StoreActor::new(store, config.channel_capacity.max(1));
        let handle = tokio::spawn(actor.run());

        Self {
            product_client: ProductClient::new(client),
            handle,
        }
    }

    /// Stops the session and returns the final store.
    ///
    /// Requests already queued are answered first. Clones of `product_client` held elsewhere
    /// keep the actor alive, so this only completes once they are dropped too.
    pub async fn shutdown(self) -> Result<ProductStore<SystemStorage>, SystemError> {
        info!("Shutting down inventory system...");
        drop(self.product_client);

        match self.handle.await {
            Ok(store) => {
                info!(size = store.len(), "Inventory system shutdown complete.");
                Ok(store)
            }
            Err(e) => {
                error!(error = %e, "Store actor task failed");
                Err(e.into())
            }
        }
    }
}
