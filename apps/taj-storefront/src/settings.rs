//! Storefront settings.
//!
//! The shop configuration plus the log filter, read from the `taj.toml`
//! embedded at build time. Start-up falls back to [`Settings::default`]
//! when the embedded document does not parse.

use serde::Deserialize;
use taj_commerce::config::ShopConfig;
use taj_commerce::CommerceError;

const EMBEDDED: &str = include_str!("../taj.toml");

/// Everything the storefront reads at start-up.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(flatten)]
    pub shop: ShopConfig,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl Settings {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        toml::from_str(content).map_err(|e| CommerceError::ConfigError(e.to_string()))
    }

    /// The settings compiled into the storefront.
    pub fn embedded() -> Result<Self, CommerceError> {
        Self::from_toml_str(EMBEDDED)
    }
}
