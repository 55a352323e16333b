//! The item being configured.

use crate::i18n::Language;
use crate::ids::CatalogId;
use crate::menu::{CurryChoice, Drink, MenuItemRef, PieceCount, SpiceLevel};
use serde::{Deserialize, Serialize};

/// A menu item plus the choices made for it so far.
///
/// Serializes with the field names the order backend expects, the item's
/// own fields flattened alongside the choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftSelection {
    #[serde(flatten)]
    pub item: MenuItemRef,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portion: Option<PieceCount>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pieces: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_curry: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_curry_id: Option<CatalogId>,

    #[serde(rename = "selectedCurry2", default, skip_serializing_if = "Option::is_none")]
    pub selected_curry_2: Option<String>,

    #[serde(rename = "selectedCurryId2", default, skip_serializing_if = "Option::is_none")]
    pub selected_curry_id_2: Option<CatalogId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spice_level: Option<SpiceLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spice_level_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drink: Option<Drink>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drink_text: Option<String>,
}

impl DraftSelection {
    /// Start a draft with no choices made.
    pub fn new(item: MenuItemRef) -> Self {
        Self {
            item,
            portion: None,
            pieces: None,
            selected_curry: None,
            selected_curry_id: None,
            selected_curry_2: None,
            selected_curry_id_2: None,
            spice_level: None,
            spice_level_text: None,
            drink: None,
            drink_text: None,
        }
    }

    /// Record a piece-count choice and rewrite the price to match.
    ///
    /// Returns `false` (leaving the draft untouched) if the item has no
    /// price for that count.
    pub(crate) fn apply_pieces(&mut self, pieces: PieceCount) -> bool {
        match self.item.piece_price(pieces) {
            Some(price) => {
                self.item.price = price;
                self.portion = Some(pieces);
                self.pieces = Some(pieces.pieces());
                true
            }
            None => false,
        }
    }

    /// Record a portion choice. The price follows the portion when the item
    /// carries a matching piece price and is kept otherwise.
    pub(crate) fn apply_portion(&mut self, portion: PieceCount) {
        if let Some(price) = self.item.piece_price(portion) {
            self.item.price = price;
        }
        self.portion = Some(portion);
    }

    pub(crate) fn apply_spice(&mut self, level: SpiceLevel, language: Language) {
        self.spice_level = Some(level);
        self.spice_level_text = Some(level.label(language).to_string());
    }

    pub(crate) fn apply_drink(&mut self, drink: Drink, language: Language) {
        self.drink = Some(drink);
        self.drink_text = Some(drink.label(language).to_string());
    }

    pub(crate) fn apply_first_curry(&mut self, curry: CurryChoice) {
        self.selected_curry_id = Some(curry.id);
        self.selected_curry = Some(curry.name);
    }

    pub(crate) fn apply_second_curry(&mut self, curry: CurryChoice) {
        self.selected_curry_id_2 = Some(curry.id);
        self.selected_curry_2 = Some(curry.name);
    }
}
