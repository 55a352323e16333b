//! Item configuration flow.
//!
//! An added item is classified, then walked through the piece-count, spice,
//! curry and drink steps it needs before it becomes a cart line.

mod draft;
mod machine;
mod state;

pub use draft::DraftSelection;
pub use machine::{ConfigurationFlow, CurryPosition, PendingChoices, Prompt, Transition};
pub use state::{FlowState, Selection, SelectionKind};
