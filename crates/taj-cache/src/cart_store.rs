//! Persistence of the cart and the language preference.

use crate::{Cache, CacheError, KeyValueStore};
use taj_commerce::cart::Cart;
use taj_commerce::config::StorageConfig;
use tracing::{debug, warn};

/// Reads and writes the widget's persisted state.
///
/// The cart is stored as a JSON array under the cart key; the language is
/// stored as a plain string under the language key.
#[derive(Debug, Clone)]
pub struct CartStore<S> {
    cache: Cache<S>,
    keys: StorageConfig,
}

impl<S: KeyValueStore> CartStore<S> {
    pub fn new(store: S, keys: StorageConfig) -> Self {
        Self {
            cache: Cache::new(store),
            keys,
        }
    }

    /// Load the persisted cart.
    ///
    /// A missing, unreadable or corrupt entry yields an empty cart.
    pub fn load_cart(&self) -> Cart {
        match self.cache.get::<Cart>(&self.keys.cart_key) {
            Ok(Some(cart)) => {
                debug!(lines = cart.len(), "Loaded stored cart");
                cart
            }
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(key = %self.keys.cart_key, error = %e, "Discarding unreadable cart");
                Cart::new()
            }
        }
    }

    /// Persist the whole cart.
    pub fn save_cart(&self, cart: &Cart) -> Result<(), CacheError> {
        self.cache.set(&self.keys.cart_key, cart)
    }

    /// Stored language code, if any.
    pub fn language(&self) -> Option<String> {
        match self.cache.get_text(&self.keys.language_key) {
            Ok(code) => code,
            Err(e) => {
                warn!(error = %e, "Could not read language preference");
                None
            }
        }
    }

    pub fn set_language(&self, code: &str) -> Result<(), CacheError> {
        self.cache.set_text(&self.keys.language_key, code)
    }
}
