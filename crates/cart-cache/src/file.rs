//! Filesystem-backed key-value store.
//!
//! Each key is one file under the base directory:
//!
//! ```text
//! <base_dir>/
//! └── <key>.json
//! ```
//!
//! Writes go to a temporary sibling first and are renamed into place, so a
//! crash mid-write leaves the previous value intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{CacheError, KeyValueStore};

/// Filesystem-backed store for carts that survive restarts.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    /// Use `base` as the store directory. It is created on first write.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The store directory.
    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, CacheError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(CacheError::StoreError(format!("invalid key: {key:?}")));
        }
        Ok(self.base.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.base)?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(path = %path.display(), "wrote key");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("cart"));

        assert_eq!(store.get("cartItems").unwrap(), None);

        store.set("cartItems", b"[1,2]").unwrap();
        assert_eq!(store.get("cartItems").unwrap(), Some(b"[1,2]".to_vec()));
        assert!(dir.path().join("cart").join("cartItems.json").exists());

        store.delete("cartItems").unwrap();
        assert!(!store.exists("cartItems").unwrap());
        store.delete("cartItems").unwrap();
    }

    #[test]
    fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        FileStore::new(dir.path()).set("k", b"v").unwrap();

        let reopened = FileStore::new(dir.path());
        assert_eq!(reopened.get("k").unwrap(), Some(b"v".to_vec()));
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        for key in ["", "../etc", "a/b", ".hidden"] {
            assert!(store.set(key, b"x").is_err(), "{key:?} accepted");
        }
    }
}
