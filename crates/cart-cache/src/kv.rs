//! Key-Value store port with automatic serialization.

use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};

/// A byte-oriented key-value backend.
///
/// Methods take `&self` to match hosted stores such as Spin's, so in-process
/// backends use interior mutability.
pub trait KeyValueStore {
    /// Read the raw value for `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Check whether `key` holds a value.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key)?.is_some())
    }
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for &K {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        (**self).delete(key)
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        (**self).exists(key)
    }
}

/// Type-safe cache over any [`KeyValueStore`].
///
/// Values are stored as JSON.
///
/// # Example
///
/// ```rust
/// use cart_cache::{Cache, MemoryStore};
///
/// let cache = Cache::new(MemoryStore::new());
/// cache.set("greeting", &vec!["hello".to_string()]).unwrap();
/// let value: Option<Vec<String>> = cache.get("greeting").unwrap();
/// assert_eq!(value, Some(vec!["hello".to_string()]));
/// ```
#[derive(Debug, Clone)]
pub struct Cache<K> {
    store: K,
}

impl<K: KeyValueStore> Cache<K> {
    /// Wrap a backend.
    pub fn new(store: K) -> Self {
        Self { store }
    }

    /// Borrow the backend.
    pub fn store(&self) -> &K {
        &self.store
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist and
    /// [`CacheError::SerializeError`] if the stored bytes don't parse as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        tracing::trace!(key, bytes = bytes.len(), "cache write");
        self.store.set(key, &bytes)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Line {
        id: String,
        qty: u32,
    }

    #[test]
    fn test_typed_roundtrip() {
        let cache = Cache::new(MemoryStore::new());
        let lines = vec![Line { id: "a".into(), qty: 2 }];
        cache.set("lines", &lines).unwrap();

        let loaded: Option<Vec<Line>> = cache.get("lines").unwrap();
        assert_eq!(loaded, Some(lines));
    }

    #[test]
    fn test_missing_key() {
        let cache = Cache::new(MemoryStore::new());
        let loaded: Option<Vec<Line>> = cache.get("nope").unwrap();
        assert!(loaded.is_none());
        assert!(!cache.exists("nope").unwrap());
    }

    #[test]
    fn test_garbage_is_serialize_error() {
        let store = MemoryStore::new();
        store.set("lines", b"not json").unwrap();
        let cache = Cache::new(store);

        let result: Result<Option<Vec<Line>>, _> = cache.get("lines");
        assert!(matches!(result, Err(CacheError::SerializeError(_))));
    }

    #[test]
    fn test_delete() {
        let cache = Cache::new(MemoryStore::new());
        cache.set("k", &1u32).unwrap();
        cache.delete("k").unwrap();
        assert!(!cache.exists("k").unwrap());
        cache.delete("k").unwrap();
    }
}
