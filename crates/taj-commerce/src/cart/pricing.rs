//! Rendered view of the cart.

use crate::cart::{Cart, CartLine};
use crate::error::CommerceError;
use crate::i18n::{Language, Text};
use crate::money::Yen;
use serde::{Deserialize, Serialize};

/// Everything the cart dropdown shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    /// Number of lines, shown on the toggle badge.
    pub count: usize,
    /// Localized message shown instead of lines when empty.
    pub empty_message: Option<String>,
    pub lines: Vec<LineSummary>,
    pub total: Yen,
    /// `¥1,200` style total.
    pub total_display: String,
    pub checkout_enabled: bool,
}

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSummary {
    /// Position in the cart, used by the remove control.
    pub index: usize,
    pub name: String,
    pub description: String,
    pub price_display: String,
}

impl LineSummary {
    fn build(index: usize, line: &CartLine, language: Language) -> Self {
        Self {
            index,
            name: line.name().to_string(),
            description: line.description(language),
            price_display: line.price().display(),
        }
    }
}

impl CartSummary {
    pub fn build(cart: &Cart, language: Language) -> Result<Self, CommerceError> {
        let total = cart.total()?;
        Ok(Self {
            count: cart.len(),
            empty_message: cart
                .is_empty()
                .then(|| language.text(Text::CartEmpty).to_string()),
            lines: cart
                .lines()
                .iter()
                .enumerate()
                .map(|(i, line)| LineSummary::build(i, line, language))
                .collect(),
            total,
            total_display: total.display(),
            checkout_enabled: !cart.is_empty(),
        })
    }
}
