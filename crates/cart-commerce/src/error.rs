//! Cart error types.

use thiserror::Error;

/// Errors that can occur in cart operations.
///
/// Reads never produce these: an unreadable cart is treated as empty.
#[derive(Error, Debug)]
pub enum CartError {
    /// The storage backend rejected a write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The item list could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(feature = "storage")]
impl From<cart_cache::CacheError> for CartError {
    fn from(e: cart_cache::CacheError) -> Self {
        match e {
            cart_cache::CacheError::SerializeError(e) => CartError::Serialization(e.to_string()),
            other => CartError::Storage(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CartError {
    fn from(e: serde_json::Error) -> Self {
        CartError::Serialization(e.to_string())
    }
}
