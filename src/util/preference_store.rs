//! Key-value storage for the visitor's explicit theme choice.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort. A store that cannot be opened or written degrades
//! to "nothing stored" for the page load rather than failing initialization.

#[cfg(test)]
#[path = "preference_store_test.rs"]
mod preference_store_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Durable per-origin string store (a `localStorage` analogue).
pub trait PreferenceStore {
    /// Stored value for `key`, or `None` when absent or unreadable.
    fn read(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`. Failures are swallowed.
    fn write(&self, key: &str, value: &str);
}

/// In-memory store, used off-browser and as the reference implementation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.write(key, value);
        store
    }

    pub fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// Store used when persistent storage is disabled: nothing is ever kept.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullStore;

impl PreferenceStore for NullStore {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }

    fn write(&self, key: &str, _value: &str) {
        log::debug!("storage unavailable; not persisting '{key}'");
    }
}
