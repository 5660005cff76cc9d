use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::{CacheError, KeyValueStore};

/// In-memory key-value store for tests and ephemeral carts.
///
/// Clones share the same underlying map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<u8>>>, CacheError> {
        self.entries
            .lock()
            .map_err(|e| CacheError::StoreError(e.to_string()))
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("cartItems", b"[]").unwrap();
        assert_eq!(other.get("cartItems").unwrap(), Some(b"[]".to_vec()));
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn test_overwrite() {
        let store = MemoryStore::new();
        store.set("k", b"1").unwrap();
        store.set("k", b"2").unwrap();
        assert_eq!(store.get("k").unwrap(), Some(b"2".to_vec()));
    }
}
