//! Cart and cart line types.

use crate::error::CommerceError;
use crate::flow::DraftSelection;
use crate::i18n::{Language, Text};
use crate::ids::LineId;
use crate::money::Yen;
use crate::checkout::OrderRequest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Separator between the details of a cart line.
pub const DETAIL_SEPARATOR: &str = " | ";

/// A configured item in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Unique line identifier.
    #[serde(rename = "cartId", deserialize_with = "stored_line_id")]
    pub line_id: LineId,
    #[serde(flatten)]
    pub selection: DraftSelection,
    /// Always 1; repeated items are separate lines.
    #[serde(default = "one")]
    pub quantity: u32,
    /// When the line was added.
    pub timestamp: DateTime<Utc>,
}

fn one() -> u32 {
    1
}

/// Carts saved by earlier versions of the widget carry numeric line ids
/// (`Date.now() + Math.random()`); those keep their digits as the id.
fn stored_line_id<'de, D>(deserializer: D) -> Result<LineId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StoredId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match StoredId::deserialize(deserializer)? {
        StoredId::Text(id) => LineId::new(id),
        StoredId::Number(n) => LineId::new(n.to_string()),
    })
}

impl CartLine {
    /// Create a line with a fresh id and the current time.
    pub fn new(selection: DraftSelection) -> Self {
        Self {
            line_id: LineId::generate(),
            selection,
            quantity: 1,
            timestamp: Utc::now(),
        }
    }

    pub fn price(&self) -> Yen {
        self.selection.item.price
    }

    pub fn name(&self) -> &str {
        &self.selection.item.name
    }

    /// Details shown under the line name, in display order.
    pub fn details(&self, language: Language) -> Vec<String> {
        let s = &self.selection;
        let mut details = Vec::new();
        if let Some(curry) = &s.selected_curry {
            details.push(format!("{}: {}", language.text(Text::CurryDetail), curry));
        }
        if let Some(curry) = &s.selected_curry_2 {
            details.push(format!(
                "{}: {}",
                language.text(Text::SecondCurryDetail),
                curry
            ));
        }
        if let Some(spice) = &s.spice_level_text {
            details.push(format!("{}: {}", language.text(Text::SpiceDetail), spice));
        }
        if let Some(drink) = &s.drink_text {
            details.push(format!("{}: {}", language.text(Text::DrinkDetail), drink));
        }
        if let Some(portion) = s.portion {
            details.push(portion.code().to_uppercase());
        }
        details
    }

    /// Details joined for display.
    pub fn description(&self, language: Language) -> String {
        self.details(language).join(DETAIL_SEPARATOR)
    }
}

/// The committed cart, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a cart from its stored JSON form.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CommerceError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Append a finished draft and return its line id.
    pub fn add(&mut self, selection: DraftSelection) -> LineId {
        let line = CartLine::new(selection);
        let id = line.line_id.clone();
        self.lines.push(line);
        id
    }

    /// Remove the line at `index`. Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<CartLine> {
        if index < self.lines.len() {
            Some(self.lines.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Remove the lines with the given ids, keeping any others.
    pub fn remove_lines(&mut self, ids: &[LineId]) {
        self.lines.retain(|line| !ids.contains(&line.line_id));
    }

    pub fn line_ids(&self) -> Vec<LineId> {
        self.lines.iter().map(|line| line.line_id.clone()).collect()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line prices.
    pub fn total(&self) -> Result<Yen, CommerceError> {
        Yen::try_sum(self.lines.iter().map(CartLine::price)).ok_or(CommerceError::Overflow)
    }

    /// Build the order submission for this cart.
    pub fn to_order_request(
        &self,
        restaurant_location: impl Into<String>,
    ) -> Result<OrderRequest, CommerceError> {
        OrderRequest::from_cart(self, restaurant_location)
    }
}
