//! Widget configuration.
//!
//! Everything that differs between restaurant locations or deployments
//! lives here rather than in the flow logic.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::{CatalogId, CategoryCode, MenuItemId};
use crate::menu::MenuRules;

/// Top-level configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Browser storage keys.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Service endpoints.
    #[serde(default)]
    pub endpoints: EndpointConfig,

    /// Menu routing rules.
    #[serde(default)]
    pub menu: MenuConfig,

    /// Per-location overrides, keyed by location slug (`nikko`, `fuji`, ...).
    #[serde(default = "default_locations")]
    pub locations: HashMap<String, LocationConfig>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            endpoints: EndpointConfig::default(),
            menu: MenuConfig::default(),
            locations: default_locations(),
        }
    }
}

impl ShopConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String, CommerceError> {
        toml::to_string_pretty(self).map_err(|e| CommerceError::ConfigError(e.to_string()))
    }

    /// Curry category for a location, falling back to the menu default.
    pub fn curry_category(&self, location: &str) -> CategoryCode {
        self.locations
            .get(location)
            .map(|l| l.curry_category.clone())
            .unwrap_or_else(|| self.menu.default_curry_category.clone())
    }

    /// Resolve the menu rules for a location.
    pub fn rules_for_location(&self, location: &str) -> MenuRules {
        MenuRules {
            spice_categories: self.menu.spice_categories.clone(),
            curry_excluded_set_ids: self.menu.curry_excluded_set_ids.clone(),
            two_curry_ids: self.menu.two_curry_ids.clone(),
            kids_lunch_id: self.menu.kids_lunch_id.clone(),
            non_curry_ids: self.menu.non_curry_ids.clone(),
            curry_category: self.curry_category(location),
        }
    }
}

/// Storage keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Key holding the JSON cart.
    #[serde(default = "default_cart_key")]
    pub cart_key: String,

    /// Key holding the language preference.
    #[serde(default = "default_language_key")]
    pub language_key: String,
}

fn default_cart_key() -> String {
    "tajCart".to_string()
}

fn default_language_key() -> String {
    "tajLanguage".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            cart_key: default_cart_key(),
            language_key: default_language_key(),
        }
    }
}

/// Endpoint paths, relative to the page origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_menu_items")]
    pub menu_items: String,

    #[serde(default = "default_create_order")]
    pub create_order: String,

    /// Prefix; the location slug is appended as a path segment.
    #[serde(default = "default_gallery_images")]
    pub gallery_images: String,
}

fn default_menu_items() -> String {
    "/api/menu-items".to_string()
}

fn default_create_order() -> String {
    "/api/create-order".to_string()
}

fn default_gallery_images() -> String {
    "/api/gallery-images".to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            menu_items: default_menu_items(),
            create_order: default_create_order(),
            gallery_images: default_gallery_images(),
        }
    }
}

/// Menu routing rules shared by all locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default = "default_spice_categories")]
    pub spice_categories: Vec<CategoryCode>,

    #[serde(default = "default_curry_excluded_set_ids")]
    pub curry_excluded_set_ids: Vec<MenuItemId>,

    #[serde(default = "default_two_curry_ids")]
    pub two_curry_ids: Vec<MenuItemId>,

    #[serde(default = "default_kids_lunch_id")]
    pub kids_lunch_id: MenuItemId,

    #[serde(default = "default_non_curry_ids")]
    pub non_curry_ids: Vec<CatalogId>,

    /// Curry category for locations without an override.
    #[serde(default = "default_curry_category")]
    pub default_curry_category: CategoryCode,

    /// Location assumed when the page does not declare one.
    #[serde(default = "default_location")]
    pub default_location: String,
}

fn codes<T: From<&'static str>>(values: &[&'static str]) -> Vec<T> {
    values.iter().map(|v| T::from(*v)).collect()
}

fn default_spice_categories() -> Vec<CategoryCode> {
    codes(&["11", "17"])
}

fn default_curry_excluded_set_ids() -> Vec<MenuItemId> {
    codes(&["2", "4", "5", "6", "7", "8", "9", "17", "18"])
}

fn default_two_curry_ids() -> Vec<MenuItemId> {
    codes(&["1", "8"])
}

fn default_kids_lunch_id() -> MenuItemId {
    MenuItemId::new("17")
}

fn default_non_curry_ids() -> Vec<CatalogId> {
    codes(&["43"])
}

fn default_curry_category() -> CategoryCode {
    CategoryCode::new("17")
}

fn default_location() -> String {
    "okinawa".to_string()
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            spice_categories: default_spice_categories(),
            curry_excluded_set_ids: default_curry_excluded_set_ids(),
            two_curry_ids: default_two_curry_ids(),
            kids_lunch_id: default_kids_lunch_id(),
            non_curry_ids: default_non_curry_ids(),
            default_curry_category: default_curry_category(),
            default_location: default_location(),
        }
    }
}

/// Per-location settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub curry_category: CategoryCode,
}

fn default_locations() -> HashMap<String, LocationConfig> {
    let curry_11 = LocationConfig {
        curry_category: CategoryCode::new("11"),
    };
    HashMap::from([
        ("nikko".to_string(), curry_11.clone()),
        ("fuji".to_string(), curry_11),
        (
            "okinawa".to_string(),
            LocationConfig {
                curry_category: CategoryCode::new("17"),
            },
        ),
    ])
}
