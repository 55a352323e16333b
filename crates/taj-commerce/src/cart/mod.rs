//! Shopping cart module.
//!
//! Contains the committed cart, its lines and the rendered summary.

mod cart;
mod pricing;

pub use cart::{Cart, CartLine, DETAIL_SEPARATOR};
pub use pricing::{CartSummary, LineSummary};
