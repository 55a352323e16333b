//! Checkout module.
//!
//! Contains the order submission body and the service's response.

mod order;

pub use order::{
    location_from_path, restaurant_slug, OrderConfirmation, OrderReceipt, OrderRequest,
    UNKNOWN_LOCATION,
};
