//! Order submission types.

use crate::cart::{Cart, CartLine};
use crate::error::CommerceError;
use crate::money::Yen;
use serde::{Deserialize, Serialize};

/// Location sent when the page path names no restaurant.
pub const UNKNOWN_LOCATION: &str = "unknown";

/// Body of the order-creation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Cart lines, with `name` replaced by the English name.
    pub items: Vec<CartLine>,
    pub total_amount: Yen,
    pub restaurant_location: String,
    /// Always empty; the widget collects no customer details.
    #[serde(default)]
    pub customer_info: serde_json::Map<String, serde_json::Value>,
}

impl OrderRequest {
    pub fn from_cart(
        cart: &Cart,
        restaurant_location: impl Into<String>,
    ) -> Result<Self, CommerceError> {
        let items = cart
            .lines()
            .iter()
            .cloned()
            .map(|mut line| {
                line.selection.item.name = line.selection.item.name_en.clone();
                line
            })
            .collect();

        Ok(Self {
            items,
            total_amount: cart.total()?,
            restaurant_location: restaurant_location.into(),
            customer_info: serde_json::Map::new(),
        })
    }
}

/// Restaurant slug of a page path: the segment after `/taj-`.
pub fn restaurant_slug(path: &str) -> Option<&str> {
    let start = path.find("/taj-")? + "/taj-".len();
    path[start..].split('/').next().filter(|slug| !slug.is_empty())
}

/// Restaurant location for orders, [`UNKNOWN_LOCATION`] off restaurant pages.
pub fn location_from_path(path: &str) -> String {
    restaurant_slug(path).unwrap_or(UNKNOWN_LOCATION).to_string()
}

/// Response of the order-creation service.
///
/// Error responses share this shape and may arrive with a non-2xx status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub qr_code_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl OrderReceipt {
    /// Turn an accepted receipt into a confirmation for display.
    pub fn into_confirmation(self, total: Yen) -> Result<OrderConfirmation, CommerceError> {
        if !self.success {
            return Err(CommerceError::OrderRejected(
                self.error
                    .unwrap_or_else(|| "Failed to create order".to_string()),
            ));
        }
        Ok(OrderConfirmation {
            order_number: self.order_number.unwrap_or_default(),
            qr_code_url: self.qr_code_url,
            total,
        })
    }
}

/// What the confirmation modal shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_number: String,
    pub qr_code_url: Option<String>,
    pub total: Yen,
}
