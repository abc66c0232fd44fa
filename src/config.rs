//! Configuration for an inventory session.
//!
//! [`InventoryConfig`] says where the product snapshot lives and how the store actor is sized.
//! Defaults:
//!
//! - backend: [`StorageBackend::File`]
//! - data directory: the platform local data directory plus `product-inventory`
//!   (`~/.local/share/product-inventory` on Linux), or `./product-inventory` when the
//!   platform has none
//! - storage key: `products`
//! - channel capacity: 32
//!
//! Log verbosity is not configured here; it comes from `RUST_LOG` (see
//! [`setup_tracing`](crate::lifecycle::setup_tracing)).

use crate::product_store::STORAGE_KEY;
use crate::storage::{FileStorage, KeyValueStorage, MemoryStorage};
use std::path::PathBuf;

/// Which adapter holds the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Nothing survives the process.
    Memory,
    /// `<data_dir>/<storage_key>.json`.
    #[default]
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    pub backend: StorageBackend,
    pub data_dir: PathBuf,
    pub storage_key: String,
    pub channel_capacity: usize,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
            storage_key: STORAGE_KEY.to_string(),
            channel_capacity: 32,
        }
    }
}

impl InventoryConfig {
    /// In-memory configuration, handy for tests and throwaway sessions.
    pub fn in_memory() -> Self {
        Self::default().with_backend(StorageBackend::Memory)
    }

    pub fn with_backend(mut self, backend: StorageBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Capacity of the request channel. Clamped to at least 1.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }

    /// Builds the storage adapter this configuration describes.
    pub fn build_storage(&self) -> Box<dyn KeyValueStorage> {
        match self.backend {
            StorageBackend::Memory => Box::new(MemoryStorage::new()),
            StorageBackend::File => Box::new(FileStorage::new(&self.data_dir)),
        }
    }
}

fn default_data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("product-inventory");
    path
}
