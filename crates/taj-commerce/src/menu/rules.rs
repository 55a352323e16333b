//! Item classification rules.

use crate::ids::{CatalogId, CategoryCode, MenuItemId};
use crate::menu::{CatalogEntry, MenuItemRef};
use serde::{Deserialize, Serialize};

/// The first step an item needs after being added (or after its piece
/// count has been chosen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// Choose 2 or 4 pieces.
    PieceCount,
    /// Choose the set's curry.
    Curry,
    /// Choose the set's drink (and spice, except for the kids' set).
    Drink,
    /// Choose spice (and portion, when the item has portions).
    Spice,
    /// No choice needed.
    Direct,
}

/// Menu rules for one restaurant location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRules {
    /// Categories whose dishes need a spice choice.
    pub spice_categories: Vec<CategoryCode>,
    /// Set menus that skip the curry step.
    pub curry_excluded_set_ids: Vec<MenuItemId>,
    /// Set menus that take two curries.
    pub two_curry_ids: Vec<MenuItemId>,
    /// The kids' set.
    pub kids_lunch_id: MenuItemId,
    /// Catalog entries listed under a curry category that are not curries.
    pub non_curry_ids: Vec<CatalogId>,
    /// Category the curry list is fetched from at this location.
    pub curry_category: CategoryCode,
}

impl MenuRules {
    /// Decide the first step for an item.
    ///
    /// With `price_resolved` set the piece-count row is skipped, which is how
    /// the flow re-enters the table after a piece count was chosen.
    pub fn classify(&self, item: &MenuItemRef, price_resolved: bool) -> Route {
        if !price_resolved && item.has_piece_prices() {
            Route::PieceCount
        } else if item.is_set_menu() && !self.curry_excluded_set_ids.contains(&item.id) {
            Route::Curry
        } else if item.is_set_menu() {
            Route::Drink
        } else if self.spice_categories.contains(&item.category) {
            Route::Spice
        } else {
            Route::Direct
        }
    }

    pub fn needs_two_curries(&self, id: &MenuItemId) -> bool {
        self.two_curry_ids.contains(id)
    }

    pub fn is_kids_lunch(&self, id: &MenuItemId) -> bool {
        &self.kids_lunch_id == id
    }

    /// Whether a catalog entry may be offered as a curry.
    pub fn is_curry(&self, id: &CatalogId) -> bool {
        !self.non_curry_ids.contains(id)
    }

    /// Drop non-curry entries from a catalog response.
    pub fn curry_entries(&self, entries: Vec<CatalogEntry>) -> Vec<CatalogEntry> {
        entries.into_iter().filter(|e| self.is_curry(&e.id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShopConfig;
    use crate::menu::ItemKind;
    use crate::money::Yen;

    fn rules() -> MenuRules {
        ShopConfig::default().rules_for_location("nikko")
    }

    fn item(id: &str, category: &str, kind: ItemKind) -> MenuItemRef {
        MenuItemRef {
            id: MenuItemId::new(id),
            name: format!("Item {}", id),
            name_en: format!("Item {}", id),
            price: Yen::new(1000),
            category: CategoryCode::new(category),
            kind,
            has_portions: false,
            price_2p: None,
            price_4p: None,
        }
    }

    #[test]
    fn test_piece_prices_take_priority() {
        let mut set = item("1", "3", ItemKind::SetMenu);
        set.price_2p = Some(Yen::new(900));
        set.price_4p = Some(Yen::new(1600));
        assert_eq!(rules().classify(&set, false), Route::PieceCount);
        assert_eq!(rules().classify(&set, true), Route::Curry);
    }

    #[test]
    fn test_single_piece_price_is_ignored() {
        let mut dish = item("30", "11", ItemKind::Regular);
        dish.price_2p = Some(Yen::new(900));
        assert_eq!(rules().classify(&dish, false), Route::Spice);
    }

    #[test]
    fn test_set_menus() {
        let r = rules();
        assert_eq!(r.classify(&item("1", "3", ItemKind::SetMenu), false), Route::Curry);
        assert_eq!(r.classify(&item("3", "3", ItemKind::SetMenu), false), Route::Curry);
        for excluded in ["2", "4", "5", "6", "7", "8", "9", "17", "18"] {
            assert_eq!(
                r.classify(&item(excluded, "3", ItemKind::SetMenu), false),
                Route::Drink,
                "set {} should go straight to drinks",
                excluded
            );
        }
    }

    #[test]
    fn test_curry_categories_need_spice() {
        let r = rules();
        assert_eq!(r.classify(&item("3", "11", ItemKind::Regular), false), Route::Spice);
        assert_eq!(r.classify(&item("40", "17", ItemKind::Regular), false), Route::Spice);
        assert_eq!(r.classify(&item("50", "2", ItemKind::Regular), false), Route::Direct);
    }

    #[test]
    fn test_non_curry_entries_are_filtered() {
        let entries = vec![
            CatalogEntry { id: CatalogId::new("41"), name: "Butter Chicken".into(), price: None },
            CatalogEntry { id: CatalogId::new("43"), name: "Pulao".into(), price: None },
        ];
        let curries = rules().curry_entries(entries);
        assert_eq!(curries.len(), 1);
        assert_eq!(curries[0].name, "Butter Chicken");
    }
}
