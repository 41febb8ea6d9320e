//! In-memory preference store.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{PreferenceStore, StoreError};

/// A preference store held in process memory.
///
/// Clones share the same entries, so a test can hand one clone to a
/// controller and inspect what it persisted through another.
///
/// # Example
///
/// ```rust
/// use folio_theme::{MemoryStore, PreferenceStore};
///
/// let store = MemoryStore::new().with_entry("theme", "dark");
/// assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, returning the store for chaining.
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Returns a copy of the value under `key`.
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.value(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
