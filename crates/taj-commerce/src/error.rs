//! Commerce error types.

use thiserror::Error;

/// Errors that can occur while configuring items or building orders.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// A required `data-*` attribute is missing from the add-to-cart control.
    #[error("Missing item attribute: {0}")]
    MissingAttribute(&'static str),

    /// An attribute is present but cannot be parsed.
    #[error("Invalid item attribute {name}: {value:?}")]
    InvalidAttribute { name: &'static str, value: String },

    /// A selection arrived that the current step does not accept.
    #[error("Selection {selection} is not accepted while {state}")]
    InvalidSelection {
        state: &'static str,
        selection: &'static str,
    },

    /// The flow was asked to move between steps the table does not connect.
    #[error("Invalid flow transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    /// A selection arrived with no item being configured.
    #[error("No item configuration in progress")]
    NoActiveDraft,

    /// A piece price was chosen that the item does not carry.
    #[error("Item {0} has no price for the selected piece count")]
    UnresolvedPrice(String),

    /// The order service answered without accepting the order.
    #[error("Order rejected: {0}")]
    OrderRejected(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in price calculation")]
    Overflow,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::ConfigError(e.to_string())
    }
}
