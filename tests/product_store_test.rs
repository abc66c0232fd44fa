use product_inventory::model::{Product, ProductDraft, ProductId, MAX_PRODUCT_ID};
use product_inventory::product_store::{self, STORAGE_KEY};
use product_inventory::storage::{FileStorage, KeyValueStorage, MemoryStorage};

fn snapshot(storage: &MemoryStorage) -> Option<String> {
    storage.get_item(STORAGE_KEY).unwrap()
}

/// Pen, Mug, delete Pen, Cup: ids never step back below the current maximum.
#[test]
fn test_add_delete_add_scenario() {
    let storage = MemoryStorage::new();
    let mut store = product_store::open(storage.clone());
    assert!(store.is_loaded());
    assert!(store.is_empty());

    let pen = store.add(ProductDraft::new("Pen", "Office", "1.50", "10")).unwrap();
    assert_eq!(pen, ProductId(1));
    let stored = store.get_by_id(pen).unwrap();
    assert_eq!(stored.price, 1.5);
    assert_eq!(stored.quantity, 10.0);

    let mug = store.add(ProductDraft::new("Mug", "Kitchen", 5, 3));
    assert_eq!(mug, Some(ProductId(2)));

    assert!(store.delete(pen));
    let names: Vec<_> = store.items().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Mug"]);

    let cup = store.add(ProductDraft::new("Cup", "Kitchen", 2, 6));
    assert_eq!(cup, Some(ProductId(3)));

    let reopened = product_store::open(storage);
    assert_eq!(reopened.items(), store.items());
}

#[test]
fn test_deleting_everything_restarts_ids_at_one() {
    let mut store = product_store::open(MemoryStorage::new());
    let a = store.add(ProductDraft::new("A", "X", 1, 1)).unwrap();
    let b = store.add(ProductDraft::new("B", "X", 1, 1)).unwrap();
    store.delete(b);
    store.delete(a);

    assert_eq!(store.add(ProductDraft::new("C", "X", 1, 1)), Some(ProductId(1)));
}

#[test]
fn test_non_array_snapshot_loads_empty() {
    let storage = MemoryStorage::with_item(STORAGE_KEY, "\"not json array\"");
    let store = product_store::open(storage.clone());
    assert!(store.is_loaded());
    assert!(store.is_empty());

    // Loading never rewrites the slot.
    assert_eq!(snapshot(&storage).as_deref(), Some("\"not json array\""));
}

#[test]
fn test_garbage_snapshot_loads_empty() {
    for raw in ["not json array", "{\"id\":1}", "[{\"id\":\"x\"}]", "[{\"id\":0}]", "42"] {
        let store = product_store::open(MemoryStorage::with_item(STORAGE_KEY, raw));
        assert!(store.is_empty(), "expected empty store for {raw}");
    }
}

#[test]
fn test_loose_snapshot_fields_are_coerced() {
    let raw = r#"[
        {"id": 7, "name": "Lamp", "category": "Home", "price": "19.99", "quantity": "", "color": "red"},
        {"id": 3, "name": "Rug", "category": "Home", "price": null}
    ]"#;
    let store = product_store::open(MemoryStorage::with_item(STORAGE_KEY, raw));

    assert_eq!(
        store.items(),
        [
            Product::new(ProductId(7), "Lamp", "Home", 19.99, 0.0),
            Product::new(ProductId(3), "Rug", "Home", 0.0, 0.0),
        ]
    );
}

#[test]
fn test_unknown_update_leaves_snapshot_untouched() {
    let storage = MemoryStorage::new();
    let mut store = product_store::open(storage.clone());
    store.add(ProductDraft::new("Pen", "Office", 1, 1));
    let before = snapshot(&storage);

    let replaced = store.update(Product::new(ProductId(99), "Ghost", "None", 1.0, 1.0));

    assert!(!replaced);
    assert_eq!(store.len(), 1);
    assert_eq!(snapshot(&storage), before);
}

#[test]
fn test_update_replaces_in_place() {
    let storage = MemoryStorage::new();
    let mut store = product_store::open(storage.clone());
    store.add(ProductDraft::new("Pen", "Office", 1, 1));
    let mug = store.add(ProductDraft::new("Mug", "Kitchen", 5, 3)).unwrap();
    store.add(ProductDraft::new("Cup", "Kitchen", 2, 6));

    assert!(store.update(Product::new(mug, "Big Mug", "Kitchen", 7.5, 1.0)));

    let names: Vec<_> = store.items().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Pen", "Big Mug", "Cup"]);
    assert_eq!(product_store::open(storage).get_by_id(mug).unwrap().price, 7.5);
}

#[test]
fn test_unknown_delete_keeps_collection() {
    let mut store = product_store::open(MemoryStorage::new());
    store.add(ProductDraft::new("Pen", "Office", 1, 1));

    assert!(!store.delete(ProductId(5)));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_unknown_delete_rewrites_snapshot() {
    let raw = r#"[ {"id": 1, "name": "Pen", "category": "Office", "price": "2", "quantity": 4} ]"#;
    let storage = MemoryStorage::with_item(STORAGE_KEY, raw);
    let mut store = product_store::open(storage.clone());

    assert!(!store.delete(ProductId(5)));

    assert_eq!(
        snapshot(&storage).as_deref(),
        Some(r#"[{"id":1,"name":"Pen","category":"Office","price":2.0,"quantity":4.0}]"#)
    );
}

#[test]
fn test_add_at_id_ceiling_keeps_snapshot_loadable() {
    let raw = format!(
        r#"[{{"id":{MAX_PRODUCT_ID},"name":"Last","category":"Edge","price":1,"quantity":1}}]"#
    );
    let storage = MemoryStorage::with_item(STORAGE_KEY, raw.clone());
    let mut store = product_store::open(storage.clone());
    assert_eq!(store.len(), 1);

    assert_eq!(store.add(ProductDraft::new("Next", "Edge", 1, 1)), None);
    assert_eq!(store.len(), 1);
    assert_eq!(snapshot(&storage), Some(raw));

    let reopened = product_store::open(storage);
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.items()[0].id, ProductId(MAX_PRODUCT_ID));
}

#[test]
fn test_add_just_below_id_ceiling() {
    let raw = format!(
        r#"[{{"id":{},"name":"Almost","category":"Edge","price":1,"quantity":1}}]"#,
        MAX_PRODUCT_ID - 1
    );
    let storage = MemoryStorage::with_item(STORAGE_KEY, raw);
    let mut store = product_store::open(storage.clone());

    assert_eq!(
        store.add(ProductDraft::new("Last", "Edge", 1, 1)),
        Some(ProductId(MAX_PRODUCT_ID))
    );
    assert_eq!(product_store::open(storage).len(), 2);
}

#[test]
fn test_file_storage_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = product_store::open(FileStorage::new(dir.path()));
    store.add(ProductDraft::new("Pen", "Office", "1.50", "10"));
    store.add(ProductDraft::new("Mug", "Kitchen", 5, 3));
    let written = store.items().to_vec();
    drop(store);

    assert!(dir.path().join("products.json").exists());
    let reopened = product_store::open(FileStorage::new(dir.path()));
    assert_eq!(reopened.items(), written.as_slice());
}
