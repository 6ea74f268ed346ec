//! Browser Key/Value Store
//!
//! Synchronous string slots backed by `localStorage`, plus a typed JSON view
//! over a single slot. An in-memory backend stands in for the browser in tests.

mod browser;
mod error;
mod memory;
mod slot;

pub use browser::BrowserStorage;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use slot::JsonSlot;

/// String-keyed blob store.
///
/// Every call completes synchronously. Implementations make no attempt to
/// coordinate concurrent writers: the last `set` wins.
pub trait KeyValueStore {
    /// Read the raw value of a slot (None when absent)
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrite a slot
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove a slot; removing an absent slot is not an error
    fn remove(&self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}
