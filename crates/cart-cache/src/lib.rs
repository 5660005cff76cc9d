//! Key-value storage for the cart widget.
//!
//! The cart persists one JSON document under one key. This crate defines the
//! storage port ([`KeyValueStore`]), a typed JSON wrapper over it ([`Cache`]),
//! and the backends:
//!
//! - [`MemoryStore`] for tests and throwaway carts
//! - [`FileStore`] for carts that survive restarts
//! - `SpinStore` (on `wasm32`) for Spin's Key-Value Store
//!
//! # Example
//!
//! ```rust
//! use cart_cache::{Cache, MemoryStore};
//!
//! let cache = Cache::new(MemoryStore::new());
//! cache.set("cartItems", &Vec::<u32>::new()).unwrap();
//! assert!(cache.exists("cartItems").unwrap());
//! ```

mod error;
mod file;
mod kv;
mod memory;
#[cfg(target_arch = "wasm32")]
mod spin;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::{Cache, KeyValueStore};
pub use memory::MemoryStore;
#[cfg(target_arch = "wasm32")]
pub use spin::SpinStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore};
}
