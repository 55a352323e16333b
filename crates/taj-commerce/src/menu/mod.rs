//! Menu module.
//!
//! Contains the menu item read from the page, the option catalogs offered by
//! the modal steps, and the rules that decide which steps an item needs.

mod item;
mod options;
mod rules;

pub use item::{CatalogEntry, ItemKind, MenuItemRef, PieceCount};
pub use options::{CurryChoice, Drink, SpiceLevel};
pub use rules::{MenuRules, Route};
