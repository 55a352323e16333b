//! Page decoration: scroll animations, the restaurant carousel and
//! navigation helpers. Independent of the cart widget.

pub mod carousel;
pub mod page;

#[cfg(target_arch = "wasm32")]
pub mod effects;

pub use carousel::Carousel;
pub use page::{PageKind, Stagger};
