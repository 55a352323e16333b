//! Ordering domain types and logic for the TAJ restaurant widget.
//!
//! This crate has no browser dependencies; the storefront app feeds it
//! page attributes and user choices and renders what it returns.
//!
//! - **Menu**: Menu items, options and the routing rules per location
//! - **Flow**: The item configuration state machine
//! - **Cart**: Committed cart lines and the rendered summary
//! - **Checkout**: Order submission and confirmation
//!
//! # Example
//!
//! ```rust
//! use taj_commerce::prelude::*;
//!
//! let rules = ShopConfig::default().rules_for_location("nikko");
//! let mut flow = ConfigurationFlow::new(rules);
//!
//! let item = MenuItemRef {
//!     id: MenuItemId::new("3"),
//!     name: "Chicken Curry".to_string(),
//!     name_en: "Chicken Curry".to_string(),
//!     price: Yen::new(1200),
//!     category: CategoryCode::new("11"),
//!     kind: ItemKind::Regular,
//!     has_portions: false,
//!     price_2p: None,
//!     price_4p: None,
//! };
//!
//! flow.start(item).unwrap();
//! let done = flow
//!     .select(Selection::Spice(SpiceLevel::Medium), Language::English)
//!     .unwrap();
//!
//! let mut cart = Cart::new();
//! if let Transition::Complete(draft) = done {
//!     cart.add(draft);
//! }
//! assert_eq!(cart.total().unwrap().display(), "¥1,200");
//! ```

pub mod config;
pub mod error;
pub mod i18n;
pub mod ids;
pub mod money;

pub mod cart;
pub mod checkout;
pub mod flow;
pub mod menu;

pub use config::ShopConfig;
pub use error::CommerceError;
pub use ids::*;
pub use money::Yen;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::ShopConfig;
    pub use crate::error::CommerceError;
    pub use crate::i18n::{Language, LanguageSignals, Text};
    pub use crate::ids::*;
    pub use crate::money::Yen;

    // Menu
    pub use crate::menu::{
        CatalogEntry, CurryChoice, Drink, ItemKind, MenuItemRef, MenuRules, PieceCount, Route,
        SpiceLevel,
    };

    // Flow
    pub use crate::flow::{
        ConfigurationFlow, CurryPosition, DraftSelection, FlowState, Prompt, Selection,
        Transition,
    };

    // Cart
    pub use crate::cart::{Cart, CartLine, CartSummary, LineSummary};

    // Checkout
    pub use crate::checkout::{OrderConfirmation, OrderReceipt, OrderRequest};
}
