//! Storage port and the in-memory backend.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::CacheError;

/// Raw key-value storage.
///
/// Values are opaque bytes; [`crate::Cache`] layers JSON on top. Each `set`
/// replaces the whole value for a key, so a write is either fully visible or
/// not at all.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Check whether `key` holds a value.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key)?.is_some())
    }

    /// List all keys, sorted.
    fn keys(&self) -> Result<Vec<String>, CacheError>;
}

/// Process-local store, the stand-in for browser storage in tests and for
/// throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<String, Vec<u8>>>, CacheError> {
        self.entries
            .lock()
            .map_err(|_| CacheError::StoreError("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        self.lock()?.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.lock()?.contains_key(key))
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        Ok(self.lock()?.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_set_get() {
        let store = MemoryStore::new();
        store.set("cart", b"[]").unwrap();
        assert_eq!(store.get("cart").unwrap(), Some(b"[]".to_vec()));
        assert!(store.exists("cart").unwrap());
    }

    #[test]
    fn test_memory_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("nope").unwrap(), None);
        assert!(!store.exists("nope").unwrap());
    }

    #[test]
    fn test_memory_overwrite_and_delete() {
        let store = MemoryStore::new();
        store.set("wishlist", b"[1]").unwrap();
        store.set("wishlist", b"[2]").unwrap();
        assert_eq!(store.get("wishlist").unwrap(), Some(b"[2]".to_vec()));

        store.delete("wishlist").unwrap();
        store.delete("wishlist").unwrap();
        assert_eq!(store.get("wishlist").unwrap(), None);
    }

    #[test]
    fn test_memory_keys_sorted() {
        let store = MemoryStore::new();
        store.set("wishlist", b"x").unwrap();
        store.set("cart", b"y").unwrap();
        assert_eq!(store.keys().unwrap(), vec!["cart", "wishlist"]);
    }
}
