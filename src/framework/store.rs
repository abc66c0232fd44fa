//! # Collection Store
//!
//! [`CollectionStore`] is the synchronous heart of the crate: an ordered `Vec` of entities
//! mirrored into one storage slot.
//!
//! ## Persistence
//!
//! Every mutating method ends with an explicit `persist()` call that serializes the *whole*
//! collection and overwrites the slot. There is no diffing, batching or deferral.
//!
//! ## Fail-soft
//!
//! Nothing here returns an error to the caller:
//! - an absent, malformed or non-array snapshot loads as an empty collection;
//! - a failed write is logged and dropped, and the in-memory state stays authoritative;
//! - `update`/`delete` on an unknown id are silent no-ops.
//! - `add` with no id left returns `None` and leaves the collection as it was.

use crate::framework::entity::{entity_type, CollectionEntity};
use crate::framework::error::StoreError;
use crate::storage::KeyValueStorage;
use serde_json::Value;
use tracing::{debug, info, warn};

/// An ordered collection of `T` mirrored into the storage slot `key`.
#[derive(Debug)]
pub struct CollectionStore<T: CollectionEntity, S: KeyValueStorage> {
    storage: S,
    key: String,
    items: Vec<T>,
    loaded: bool,
}

impl<T: CollectionEntity, S: KeyValueStorage> CollectionStore<T, S> {
    /// Creates an empty, not-yet-loaded store. Nothing is read until [`load`](Self::load).
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            items: Vec::new(),
            loaded: false,
        }
    }

    /// Creates a store and immediately loads the current snapshot.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let mut store = Self::new(storage, key);
        store.load();
        store
    }

    /// Replaces the in-memory collection with the persisted snapshot.
    ///
    /// Returns the number of entities loaded. Any read failure yields an empty collection.
    pub fn load(&mut self) -> usize {
        let entity_type = entity_type::<T>();
        self.items = match self.read_snapshot() {
            Ok(items) => items,
            Err(e) => {
                warn!(entity_type, key = %self.key, error = %e, "Snapshot unreadable, starting empty");
                Vec::new()
            }
        };
        self.loaded = true;
        info!(entity_type, key = %self.key, size = self.items.len(), "Loaded");
        self.items.len()
    }

    /// Appends a new entity built from `draft` and returns its id.
    ///
    /// The id is `first_id()` for an empty collection, else `next_id(max)`. Ids of deleted
    /// entities are only reused when they are above the current maximum.
    ///
    /// Returns `None` (and changes nothing) when no id is left above the current maximum.
    pub fn add(&mut self, draft: T::Draft) -> Option<T::Id> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, ?draft, "Add");

        let next = match self.items.iter().map(T::id).max() {
            Some(max) => T::next_id(max),
            None => Some(T::first_id()),
        };
        let Some(id) = next else {
            warn!(entity_type, size = self.items.len(), "Id space exhausted, draft dropped");
            return None;
        };
        self.items.push(T::from_draft(id, draft));
        info!(entity_type, %id, size = self.items.len(), "Created");

        self.persist();
        Some(id)
    }

    /// Replaces the entity with the same id, keeping its position.
    ///
    /// Returns `false` (and writes nothing) when no entity has that id.
    pub fn update(&mut self, item: T) -> bool {
        let id = item.id();
        let Some(slot) = self.items.iter_mut().find(|existing| existing.id() == id) else {
            return false;
        };
        *slot = item;
        info!(entity_type = entity_type::<T>(), %id, "Updated");

        self.persist();
        true
    }

    /// Removes every entity with this id, keeping the others in order.
    ///
    /// The snapshot is rewritten even when nothing matched. Returns whether anything was removed.
    pub fn delete(&mut self, id: T::Id) -> bool {
        let before = self.items.len();
        self.items.retain(|existing| existing.id() != id);
        let removed = self.items.len() != before;
        if removed {
            info!(entity_type = entity_type::<T>(), %id, size = self.items.len(), "Deleted");
        }

        self.persist();
        removed
    }

    pub fn get_by_id(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// The live collection, in insertion order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&self) {
        if let Err(e) = self.write_snapshot() {
            warn!(entity_type = entity_type::<T>(), key = %self.key, error = %e, "Persist failed");
        }
    }

    fn write_snapshot(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.items)?;
        self.storage.set_item(&self.key, &json)?;
        Ok(())
    }

    fn read_snapshot(&self) -> Result<Vec<T>, StoreError> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let Value::Array(elements) = serde_json::from_str::<Value>(&raw)? else {
            return Err(StoreError::NotASequence);
        };

        let mut items: Vec<T> = Vec::with_capacity(elements.len());
        for element in elements {
            let stored: T::Stored = serde_json::from_value(element)?;
            let item = T::from_stored(stored).map_err(|e| StoreError::Rejected(Box::new(e)))?;
            let id = item.id();
            if items.iter().any(|existing| existing.id() == id) {
                warn!(entity_type = entity_type::<T>(), %id, "Duplicate id in snapshot, keeping first");
                continue;
            }
            items.push(item);
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, StorageError};
    use serde::{Deserialize, Serialize};

    // --- Test Entity ---

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: u32,
        text: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("id 0 is reserved")]
    struct ReservedId;

    impl CollectionEntity for Note {
        type Id = u32;
        type Draft = String;
        type Stored = Note;
        type RejectError = ReservedId;

        fn id(&self) -> u32 {
            self.id
        }

        fn first_id() -> u32 {
            1
        }

        fn next_id(max: u32) -> Option<u32> {
            max.checked_add(1)
        }

        fn from_draft(id: u32, text: String) -> Self {
            Self { id, text }
        }

        fn from_stored(stored: Note) -> Result<Self, ReservedId> {
            if stored.id == 0 {
                return Err(ReservedId);
            }
            Ok(stored)
        }
    }

    /// Storage whose writes always fail.
    #[derive(Debug, Default)]
    struct ReadOnlyStorage {
        inner: MemoryStorage,
    }

    impl KeyValueStorage for ReadOnlyStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get_item(key)
        }

        fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::InvalidKey(key.to_string()))
        }

        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove_item(key)
        }
    }

    fn texts(store: &CollectionStore<Note, MemoryStorage>) -> Vec<&str> {
        store.items().iter().map(|n| n.text.as_str()).collect()
    }

    // --- Tests ---

    #[test]
    fn test_new_is_not_loaded_until_load() {
        let storage = MemoryStorage::with_item("notes", r#"[{"id":4,"text":"a"}]"#);
        let mut store: CollectionStore<Note, _> = CollectionStore::new(storage, "notes");
        assert!(!store.is_loaded());
        assert!(store.is_empty());

        assert_eq!(store.load(), 1);
        assert!(store.is_loaded());
        assert_eq!(store.get_by_id(4).unwrap().text, "a");
    }

    #[test]
    fn test_ids_increase_by_one() {
        let mut store: CollectionStore<Note, _> = CollectionStore::open(MemoryStorage::new(), "notes");
        let ids: Vec<u32> = (0..5).filter_map(|i| store.add(format!("n{i}"))).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_next_id_follows_max_not_length() {
        let storage = MemoryStorage::with_item(
            "notes",
            r#"[{"id":7,"text":"a"},{"id":3,"text":"b"}]"#,
        );
        let mut store: CollectionStore<Note, _> = CollectionStore::open(storage, "notes");
        assert_eq!(store.add("c".into()), Some(8));

        store.delete(8);
        store.delete(7);
        assert_eq!(store.add("d".into()), Some(4));

        store.delete(3);
        store.delete(4);
        assert!(store.is_empty());
        assert_eq!(store.add("e".into()), Some(1));
    }

    #[test]
    fn test_every_mutation_rewrites_snapshot() {
        let storage = MemoryStorage::new();
        let mut store: CollectionStore<Note, _> = CollectionStore::open(storage.clone(), "notes");

        store.add("a".into());
        assert_eq!(
            storage.get_item("notes").unwrap().as_deref(),
            Some(r#"[{"id":1,"text":"a"}]"#)
        );

        store.update(Note { id: 1, text: "b".into() });
        assert_eq!(
            storage.get_item("notes").unwrap().as_deref(),
            Some(r#"[{"id":1,"text":"b"}]"#)
        );

        store.delete(1);
        assert_eq!(storage.get_item("notes").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_update_unknown_id_writes_nothing() {
        let storage = MemoryStorage::with_item("notes", r#"[ {"id":1, "text":"a"} ]"#);
        let mut store: CollectionStore<Note, _> = CollectionStore::open(storage.clone(), "notes");

        assert!(!store.update(Note { id: 9, text: "x".into() }));
        assert_eq!(texts(&store), vec!["a"]);
        // Original formatting survives: no write happened.
        assert_eq!(
            storage.get_item("notes").unwrap().as_deref(),
            Some(r#"[ {"id":1, "text":"a"} ]"#)
        );
    }

    #[test]
    fn test_update_keeps_position() {
        let mut store: CollectionStore<Note, _> = CollectionStore::open(MemoryStorage::new(), "notes");
        for t in ["a", "b", "c"] {
            store.add(t.into());
        }
        assert!(store.update(Note { id: 2, text: "B".into() }));
        assert_eq!(texts(&store), vec!["a", "B", "c"]);
    }

    #[test]
    fn test_delete_preserves_order_and_ignores_unknown() {
        let mut store: CollectionStore<Note, _> = CollectionStore::open(MemoryStorage::new(), "notes");
        for t in ["a", "b", "c", "d"] {
            store.add(t.into());
        }
        assert!(store.delete(2));
        assert_eq!(texts(&store), vec!["a", "c", "d"]);

        assert!(!store.delete(42));
        assert_eq!(texts(&store), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_bad_snapshots_load_empty() {
        for raw in [
            "",
            "not json array",
            r#""a string""#,
            r#"{"id":1,"text":"a"}"#,
            "42",
            "null",
            r#"[{"id":"one","text":"a"}]"#,
            r#"[{"id":0,"text":"a"}]"#,
            "[1,2,3]",
        ] {
            let storage = MemoryStorage::with_item("notes", raw);
            let store: CollectionStore<Note, _> = CollectionStore::open(storage, "notes");
            assert!(store.is_loaded());
            assert!(store.is_empty(), "expected empty collection for {raw:?}");
        }
    }

    #[test]
    fn test_delete_unknown_id_still_rewrites_snapshot() {
        let storage = MemoryStorage::with_item("notes", r#"[ {"id":1, "text":"a"} ]"#);
        let mut store: CollectionStore<Note, _> = CollectionStore::open(storage.clone(), "notes");

        assert!(!store.delete(9));
        assert_eq!(texts(&store), vec!["a"]);
        assert_eq!(
            storage.get_item("notes").unwrap().as_deref(),
            Some(r#"[{"id":1,"text":"a"}]"#)
        );
    }

    #[test]
    fn test_add_refuses_when_ids_run_out() {
        let raw = format!(r#"[{{"id":{},"text":"last"}}]"#, u32::MAX);
        let storage = MemoryStorage::with_item("notes", raw.clone());
        let mut store: CollectionStore<Note, _> = CollectionStore::open(storage.clone(), "notes");

        assert_eq!(store.add("overflow".into()), None);
        assert_eq!(texts(&store), vec!["last"]);
        assert_eq!(storage.get_item("notes").unwrap(), Some(raw));

        // Freeing the top id makes room again.
        store.delete(u32::MAX);
        assert_eq!(store.add("fresh".into()), Some(1));
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let storage = MemoryStorage::with_item(
            "notes",
            r#"[{"id":1,"text":"a"},{"id":2,"text":"b"},{"id":1,"text":"c"}]"#,
        );
        let store: CollectionStore<Note, _> = CollectionStore::open(storage, "notes");
        assert_eq!(texts(&store), vec!["a", "b"]);
    }

    #[test]
    fn test_load_resyncs_from_storage() {
        let storage = MemoryStorage::new();
        let mut store: CollectionStore<Note, _> = CollectionStore::open(storage.clone(), "notes");
        store.add("a".into());

        storage
            .set_item("notes", r#"[{"id":10,"text":"x"},{"id":11,"text":"y"}]"#)
            .unwrap();
        assert_eq!(store.load(), 2);
        assert_eq!(texts(&store), vec!["x", "y"]);
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let mut store: CollectionStore<Note, _> =
            CollectionStore::open(ReadOnlyStorage::default(), "notes");
        assert_eq!(store.add("a".into()), Some(1));
        assert_eq!(store.add("b".into()), Some(2));
        assert_eq!(store.len(), 2);
        assert!(store.storage().inner.is_empty());
    }
}
