//! # Persistent Store Adapters
//!
//! The collection store never touches a disk or a browser directly. It talks to a
//! [`KeyValueStorage`]: a synchronous string slot addressed by a fixed key.
//!
//! ## Adapters
//!
//! - [`MemoryStorage`] - `HashMap` behind an `Arc<RwLock<..>>`. Cheap to clone, so a test
//!   can keep one handle and inspect exactly what the store wrote through the other.
//! - [`FileStorage`] - one `<key>.json` file per slot under a data directory.
//!
//! Every adapter is treated as a serialization target only. What the string contains is
//! decided by the caller.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::fmt::Debug;
use std::path::PathBuf;

/// Errors raised by a storage adapter.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on slot '{key}' ({path}): {source}")]
    Io {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),

    #[error("Storage lock poisoned")]
    Poisoned,
}

/// A synchronous key-value slot store.
///
/// All methods take `&self`; implementations use interior mutability where they need it.
pub trait KeyValueStorage: Send + Sync + Debug {
    /// Reads the value stored under `key`. Returns `Ok(None)` if the slot is empty.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing whatever was there.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Clears the slot. Clearing an empty slot is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}
