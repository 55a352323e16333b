//! Type-safe key-value persistence for the TAJ ordering widget.
//!
//! Provides a small, ergonomic API over the browser's `localStorage` with
//! automatic JSON serialization, plus an in-memory store for tests.
//!
//! # Example
//!
//! ```rust
//! use taj_cache::{CartStore, MemoryStore};
//! use taj_commerce::config::StorageConfig;
//!
//! let store = CartStore::new(MemoryStore::new(), StorageConfig::default());
//!
//! // Nothing stored yet
//! let cart = store.load_cart();
//! assert!(cart.is_empty());
//!
//! store.save_cart(&cart).unwrap();
//! store.set_language("jp").unwrap();
//! assert_eq!(store.language().as_deref(), Some("jp"));
//! ```

mod cart_store;
mod error;
mod kv;

pub use cart_store::CartStore;
pub use error::CacheError;
pub use kv::{BrowserStore, Cache, KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{BrowserStore, Cache, CacheError, CartStore, KeyValueStore, MemoryStore};
}
