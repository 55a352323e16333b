//! Menu item types.

use crate::error::CommerceError;
use crate::i18n::{Language, Text};
use crate::ids::{CatalogId, CategoryCode, MenuItemId};
use crate::money::Yen;
use serde::{Deserialize, Serialize};

/// Item type as declared by `data-item-type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A set bundling a curry and/or drink and/or spice choice.
    SetMenu,
    /// A single dish. Unknown type strings read as this.
    #[default]
    #[serde(other)]
    Regular,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Regular => "regular",
            ItemKind::SetMenu => "set_menu",
        }
    }

    /// Anything other than `set_menu` is treated as a regular item.
    pub fn from_attr(s: &str) -> Self {
        if s.trim() == "set_menu" {
            ItemKind::SetMenu
        } else {
            ItemKind::Regular
        }
    }
}

/// Piece-count tier, also used as the portion choice of the spice step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceCount {
    #[serde(rename = "2p")]
    Two,
    #[serde(rename = "4p")]
    Four,
}

impl PieceCount {
    pub const ALL: [PieceCount; 2] = [PieceCount::Two, PieceCount::Four];

    /// Value of `data-portion`.
    pub fn code(&self) -> &'static str {
        match self {
            PieceCount::Two => "2p",
            PieceCount::Four => "4p",
        }
    }

    pub fn pieces(&self) -> u8 {
        match self {
            PieceCount::Two => 2,
            PieceCount::Four => 4,
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        match self {
            PieceCount::Two => language.text(Text::TwoPieces),
            PieceCount::Four => language.text(Text::FourPieces),
        }
    }
}

/// A menu item as described by the attributes of its add-to-cart control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemRef {
    pub id: MenuItemId,
    /// Display name in the page language.
    pub name: String,
    /// English name, sent with orders.
    pub name_en: String,
    /// Current price. Rewritten when a piece count or portion is chosen.
    pub price: Yen,
    #[serde(default)]
    pub category: CategoryCode,
    #[serde(rename = "type", default)]
    pub kind: ItemKind,
    #[serde(rename = "hasPortions", default)]
    pub has_portions: bool,
    #[serde(rename = "price2p", default, skip_serializing_if = "Option::is_none")]
    pub price_2p: Option<Yen>,
    #[serde(rename = "price4p", default, skip_serializing_if = "Option::is_none")]
    pub price_4p: Option<Yen>,
}

impl MenuItemRef {
    pub const ATTR_ID: &'static str = "data-item-id";
    pub const ATTR_NAME: &'static str = "data-item-name";
    pub const ATTR_NAME_EN: &'static str = "data-item-name-en";
    pub const ATTR_PRICE: &'static str = "data-item-price";
    pub const ATTR_CATEGORY: &'static str = "data-item-category";
    pub const ATTR_TYPE: &'static str = "data-item-type";
    pub const ATTR_HAS_PORTIONS: &'static str = "data-has-portions";
    pub const ATTR_PRICE_2P: &'static str = "data-price-2p";
    pub const ATTR_PRICE_4P: &'static str = "data-price-4p";

    /// Build an item from `data-*` attributes.
    ///
    /// `attr` returns the value of the named attribute, if present.
    ///
    /// # Errors
    /// Fails if the id is missing or the base price cannot be parsed. Piece
    /// prices that fail to parse, or are zero, are treated as absent.
    pub fn from_attributes<F>(attr: F) -> Result<Self, CommerceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let id = attr(Self::ATTR_ID)
            .filter(|v| !v.trim().is_empty())
            .ok_or(CommerceError::MissingAttribute(Self::ATTR_ID))?;
        let name = attr(Self::ATTR_NAME).unwrap_or_default();
        let name_en = attr(Self::ATTR_NAME_EN)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| name.clone());
        let raw_price = attr(Self::ATTR_PRICE)
            .ok_or(CommerceError::MissingAttribute(Self::ATTR_PRICE))?;
        let price = Yen::parse(&raw_price).ok_or(CommerceError::InvalidAttribute {
            name: Self::ATTR_PRICE,
            value: raw_price,
        })?;

        Ok(Self {
            id: MenuItemId::new(id.trim()),
            name,
            name_en,
            price,
            category: CategoryCode::new(attr(Self::ATTR_CATEGORY).unwrap_or_default()),
            kind: ItemKind::from_attr(&attr(Self::ATTR_TYPE).unwrap_or_default()),
            has_portions: attr(Self::ATTR_HAS_PORTIONS).as_deref() == Some("true"),
            price_2p: attr(Self::ATTR_PRICE_2P).and_then(|v| parse_piece_price(&v)),
            price_4p: attr(Self::ATTR_PRICE_4P).and_then(|v| parse_piece_price(&v)),
        })
    }

    /// Both piece prices are present.
    pub fn has_piece_prices(&self) -> bool {
        self.price_2p.is_some() && self.price_4p.is_some()
    }

    /// Price for a piece count, if the item carries one.
    pub fn piece_price(&self, pieces: PieceCount) -> Option<Yen> {
        match pieces {
            PieceCount::Two => self.price_2p,
            PieceCount::Four => self.price_4p,
        }
    }

    pub fn is_set_menu(&self) -> bool {
        self.kind == ItemKind::SetMenu
    }
}

fn parse_piece_price(value: &str) -> Option<Yen> {
    Yen::parse(value).filter(|price| *price != Yen::ZERO)
}

/// A record returned by the menu-items catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: CatalogId,
    pub name: String,
    #[serde(default)]
    pub price: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_attributes() {
        let a = attrs(&[
            ("data-item-id", "4"),
            ("data-item-name", "タンドリーチキン"),
            ("data-item-name-en", "Tandoori Chicken"),
            ("data-item-price", "900"),
            ("data-item-category", "5"),
            ("data-item-type", "regular"),
            ("data-has-portions", "false"),
            ("data-price-2p", "900"),
            ("data-price-4p", "1600"),
        ]);
        let item = MenuItemRef::from_attributes(|k| a.get(k).cloned()).unwrap();

        assert_eq!(item.id.as_str(), "4");
        assert_eq!(item.name_en, "Tandoori Chicken");
        assert_eq!(item.price, Yen::new(900));
        assert_eq!(item.kind, ItemKind::Regular);
        assert!(!item.has_portions);
        assert!(item.has_piece_prices());
        assert_eq!(item.piece_price(PieceCount::Four), Some(Yen::new(1600)));
    }

    #[test]
    fn test_english_name_falls_back_to_display_name() {
        let a = attrs(&[
            ("data-item-id", "3"),
            ("data-item-name", "Chicken Curry"),
            ("data-item-price", "1100"),
            ("data-item-type", "set_menu"),
        ]);
        let item = MenuItemRef::from_attributes(|k| a.get(k).cloned()).unwrap();
        assert_eq!(item.name_en, "Chicken Curry");
        assert!(item.is_set_menu());
        assert_eq!(item.price_2p, None);
    }

    #[test]
    fn test_zero_piece_price_is_absent() {
        let a = attrs(&[
            ("data-item-id", "12"),
            ("data-item-price", "800"),
            ("data-price-2p", "0"),
            ("data-price-4p", "1500"),
        ]);
        let item = MenuItemRef::from_attributes(|k| a.get(k).cloned()).unwrap();
        assert_eq!(item.price_2p, None);
        assert_eq!(item.price_4p, Some(Yen::new(1500)));
        assert!(!item.has_piece_prices());
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let a = attrs(&[("data-item-price", "1100")]);
        let err = MenuItemRef::from_attributes(|k| a.get(k).cloned()).unwrap_err();
        assert_eq!(err, CommerceError::MissingAttribute("data-item-id"));
    }

    #[test]
    fn test_unparseable_price_is_rejected() {
        let a = attrs(&[("data-item-id", "3"), ("data-item-price", "market")]);
        let err = MenuItemRef::from_attributes(|k| a.get(k).cloned()).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidAttribute { .. }));
    }

    #[test]
    fn test_serialized_field_names() {
        let a = attrs(&[
            ("data-item-id", "9"),
            ("data-item-name", "Naan Set"),
            ("data-item-price", "1300"),
            ("data-item-category", "3"),
            ("data-item-type", "set_menu"),
            ("data-has-portions", "true"),
        ]);
        let item = MenuItemRef::from_attributes(|k| a.get(k).cloned()).unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "set_menu");
        assert_eq!(json["hasPortions"], true);
        assert_eq!(json["price"], 1300);
        assert!(json.get("price2p").is_none());
    }
}
