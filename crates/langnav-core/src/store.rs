//! String key-value store abstraction.
//!
//! The browser offers two such stores: one persistent across sessions and
//! one scoped to the tab session. Both are reached through
//! [`KeyValueStore`]; [`MemoryStore`] stands in for either in tests.

use std::collections::HashMap;

use crate::error::{NavError, Result};

/// Minimal string key-value store.
pub trait KeyValueStore {
    /// Read the value for `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Deleting a missing key succeeds.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a single entry.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.into(), value.into());
        store
    }

    /// Reject every write and delete, like a browser with storage disabled.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_writable(&self, key: &str) -> Result<()> {
        if self.read_only {
            return Err(NavError::storage(key, "store is read-only"));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.check_writable(key)?;
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.check_writable(key)?;
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let mut store = MemoryStore::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        store.remove("k").unwrap();
    }

    #[test]
    fn with_entry_seeds_one_value() {
        let store = MemoryStore::with_entry("marker", "fr");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("marker").unwrap().as_deref(), Some("fr"));
        assert_eq!(store.get("other").unwrap(), None);
    }

    #[test]
    fn read_only_rejects_writes() {
        let mut store = MemoryStore::with_entry("k", "v").read_only();
        assert_eq!(
            store.set("k", "w"),
            Err(NavError::storage("k", "store is read-only"))
        );
        assert!(store.remove("k").is_err());
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
