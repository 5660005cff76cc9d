//! Spin Key-Value Store backend, available on `wasm32` only.

use crate::{CacheError, KeyValueStore};

/// Store backed by Spin's Key-Value Store.
pub struct SpinStore {
    store: spin_sdk::key_value::Store,
}

impl SpinStore {
    /// Open the default Key-Value store.
    pub fn open_default() -> Result<Self, CacheError> {
        let store = spin_sdk::key_value::Store::open_default()
            .map_err(|e| CacheError::OpenError(e.to_string()))?;
        Ok(Self { store })
    }

    /// Open a named Key-Value store.
    pub fn open(name: &str) -> Result<Self, CacheError> {
        let store = spin_sdk::key_value::Store::open(name)
            .map_err(|e| CacheError::OpenError(e.to_string()))?;
        Ok(Self { store })
    }
}

impl KeyValueStore for SpinStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        self.store
            .get(key)
            .map_err(|e| CacheError::StoreError(e.to_string()))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        self.store
            .set(key, value)
            .map_err(|e| CacheError::StoreError(e.to_string()))
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store
            .delete(key)
            .map_err(|e| CacheError::StoreError(e.to_string()))
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store
            .exists(key)
            .map_err(|e| CacheError::StoreError(e.to_string()))
    }
}
