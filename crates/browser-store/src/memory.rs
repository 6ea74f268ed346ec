//! In-Memory Store
//!
//! HashMap-backed store. Clones share the same slots, so a test can hand one
//! clone to the code under test and inspect the other.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::{KeyValueStore, StoreResult};

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one slot
    pub fn with_slot(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.slots.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    /// Raw slot contents, bypassing the trait
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_slots() {
        let store = MemoryStore::new();
        let handle = store.clone();

        store.set("k", "v").unwrap();
        assert_eq!(handle.raw("k"), Some("v".to_string()));
        assert_eq!(handle.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_ok() {
        let store = MemoryStore::with_slot("a", "1");
        store.remove("missing").unwrap();
        store.remove("a").unwrap();
        assert!(store.is_empty());
    }
}
