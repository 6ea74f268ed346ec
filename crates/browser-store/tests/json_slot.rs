//! JsonSlot tests against the in-memory backend.

use browser_store::{JsonSlot, KeyValueStore, MemoryStore, StoreError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Row {
    id: u32,
    label: String,
}

fn rows() -> Vec<Row> {
    vec![
        Row { id: 2, label: "second".to_string() },
        Row { id: 1, label: "first".to_string() },
    ]
}

#[test]
fn test_write_then_read_preserves_order() {
    let slot = JsonSlot::new(MemoryStore::new(), "rows");
    slot.write(&rows()).unwrap();

    let loaded: Vec<Row> = slot.read().unwrap().unwrap();
    assert_eq!(loaded, rows());
}

#[test]
fn test_absent_slot_reads_none() {
    let slot = JsonSlot::new(MemoryStore::new(), "rows");
    assert_eq!(slot.read::<Vec<Row>>().unwrap(), None);
    assert!(slot.read_or_default::<Vec<Row>>().is_empty());
}

#[test]
fn test_null_slot_reads_none() {
    let slot = JsonSlot::new(MemoryStore::with_slot("rows", "null"), "rows");
    assert_eq!(slot.read::<Vec<Row>>().unwrap(), None);
}

#[test]
fn test_malformed_slot_is_error_but_defaults() {
    let slot = JsonSlot::new(MemoryStore::with_slot("rows", "[{\"id\": 1,"), "rows");
    assert!(matches!(slot.read::<Vec<Row>>(), Err(StoreError::Deserialize(_))));
    assert!(slot.read_or_default::<Vec<Row>>().is_empty());
}

#[test]
fn test_write_overwrites_whole_slot() {
    let store = MemoryStore::new();
    let slot = JsonSlot::new(store.clone(), "rows");
    slot.write(&rows()).unwrap();
    slot.write(&rows()[..1]).unwrap();

    let raw = store.raw("rows").unwrap();
    assert_eq!(raw, r#"[{"id":2,"label":"second"}]"#);
}

#[test]
fn test_slot_over_borrowed_store() {
    let store = MemoryStore::new();
    {
        let slot = JsonSlot::new(&store, "rows");
        slot.write(&rows()).unwrap();
        assert_eq!(slot.key(), "rows");
    }
    assert!(store.get("rows").unwrap().is_some());

    JsonSlot::new(&store, "rows").clear().unwrap();
    assert!(store.is_empty());
}
