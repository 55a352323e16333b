//! Key-value store wrapper with automatic serialization.

use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A string-to-string store, such as the browser's `localStorage`.
pub trait KeyValueStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError>;

    fn set_raw(&self, key: &str, value: &str) -> Result<(), CacheError>;
}

/// Type-safe cache over a [`KeyValueStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone)]
pub struct Cache<S> {
    store: S,
}

impl<S: KeyValueStore> Cache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust
    /// use taj_cache::{Cache, MemoryStore};
    ///
    /// let cache = Cache::new(MemoryStore::new());
    /// cache.set("count", &3u32).unwrap();
    /// let count: Option<u32> = cache.get("count").unwrap();
    /// assert_eq!(count, Some(3));
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get_raw(key)? {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let text = serde_json::to_string(value)?;
        self.store.set_raw(key, &text)
    }

    /// Get a value stored as plain text, without JSON encoding.
    pub fn get_text(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.store.get_raw(key)
    }

    /// Store a value as plain text, without JSON encoding.
    pub fn set_text(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.store.set_raw(key, value)
    }
}

/// In-memory store for tests and non-browser hosts.
///
/// Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The browser's `localStorage`.
#[derive(Debug, Clone)]
pub struct BrowserStore {
    #[cfg(target_arch = "wasm32")]
    storage: web_sys::Storage,
    #[cfg(not(target_arch = "wasm32"))]
    _phantom: std::marker::PhantomData<()>,
}

impl BrowserStore {
    /// Open the window's `localStorage`.
    #[cfg(target_arch = "wasm32")]
    pub fn open() -> Result<Self, CacheError> {
        let window =
            web_sys::window().ok_or_else(|| CacheError::OpenError("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| CacheError::OpenError(format!("{:?}", e)))?
            .ok_or_else(|| CacheError::OpenError("localStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn open() -> Result<Self, CacheError> {
        Err(CacheError::OpenError(
            "localStorage is only available in the browser".to_string(),
        ))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.storage
            .get_item(key)
            .map_err(|e| CacheError::StoreError(format!("{:?}", e)))
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| CacheError::StoreError(format!("{:?}", e)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for BrowserStore {
    fn get_raw(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Ok(None)
    }

    fn set_raw(&self, _key: &str, _value: &str) -> Result<(), CacheError> {
        Ok(())
    }
}
