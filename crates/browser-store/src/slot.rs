//! Typed JSON Slot
//!
//! One named slot holding a JSON document.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{KeyValueStore, StoreError, StoreResult};

pub struct JsonSlot<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> JsonSlot<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Decode the slot. An absent slot and a stored JSON `null` both read as None.
    pub fn read<T: DeserializeOwned>(&self) -> StoreResult<Option<T>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        serde_json::from_str::<Option<T>>(&raw).map_err(|e| StoreError::Deserialize(e.to_string()))
    }

    /// Decode the slot, falling back to `T::default()` on any failure
    pub fn read_or_default<T: DeserializeOwned + Default>(&self) -> T {
        match self.read::<T>() {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "discarding unreadable slot");
                T::default()
            }
        }
    }

    /// Encode and overwrite the slot
    pub fn write<T: Serialize + ?Sized>(&self, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value).map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.store.set(&self.key, &raw)
    }

    pub fn clear(&self) -> StoreResult<()> {
        self.store.remove(&self.key)
    }
}
