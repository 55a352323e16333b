//! Flow states and the transition table.

use crate::menu::{CurryChoice, Drink, PieceCount, SpiceLevel};
use serde::{Deserialize, Serialize};

/// Steps of the item configuration flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FlowState {
    /// Nothing being configured.
    #[default]
    Idle,
    /// Piece-count modal open.
    AwaitingPrice,
    /// Spice modal open, with the portion group when the item has portions.
    AwaitingSpice,
    /// Curry modal open for the first (or only) curry.
    AwaitingCurry1,
    /// Curry modal reopened for the second curry.
    AwaitingCurry2,
    /// Drink modal open, with the spice group except for the kids' set.
    AwaitingDrink,
    /// The last draft was handed to the cart.
    Complete,
}

/// Allowed step changes. Abandoning (back to `Idle`) and starting a new item
/// are always allowed and are not listed.
const TRANSITIONS: &[(FlowState, FlowState)] = &[
    (FlowState::Idle, FlowState::AwaitingPrice),
    (FlowState::Idle, FlowState::AwaitingSpice),
    (FlowState::Idle, FlowState::AwaitingCurry1),
    (FlowState::Idle, FlowState::AwaitingDrink),
    (FlowState::Idle, FlowState::Complete),
    (FlowState::AwaitingPrice, FlowState::AwaitingSpice),
    (FlowState::AwaitingPrice, FlowState::AwaitingCurry1),
    (FlowState::AwaitingPrice, FlowState::AwaitingDrink),
    (FlowState::AwaitingPrice, FlowState::Complete),
    (FlowState::AwaitingSpice, FlowState::Complete),
    (FlowState::AwaitingCurry1, FlowState::AwaitingCurry2),
    (FlowState::AwaitingCurry1, FlowState::AwaitingDrink),
    (FlowState::AwaitingCurry2, FlowState::AwaitingDrink),
    (FlowState::AwaitingDrink, FlowState::Complete),
];

/// Which selections each step accepts.
const ACCEPTS: &[(FlowState, SelectionKind)] = &[
    (FlowState::AwaitingPrice, SelectionKind::Pieces),
    (FlowState::AwaitingSpice, SelectionKind::Spice),
    (FlowState::AwaitingSpice, SelectionKind::Portion),
    (FlowState::AwaitingCurry1, SelectionKind::Curry),
    (FlowState::AwaitingCurry2, SelectionKind::Curry),
    (FlowState::AwaitingDrink, SelectionKind::Drink),
    (FlowState::AwaitingDrink, SelectionKind::Spice),
];

impl FlowState {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowState::Idle => "idle",
            FlowState::AwaitingPrice => "awaiting_price",
            FlowState::AwaitingSpice => "awaiting_spice",
            FlowState::AwaitingCurry1 => "awaiting_curry_1",
            FlowState::AwaitingCurry2 => "awaiting_curry_2",
            FlowState::AwaitingDrink => "awaiting_drink",
            FlowState::Complete => "complete",
        }
    }

    /// A modal is open for this state.
    pub fn is_awaiting(&self) -> bool {
        !matches!(self, FlowState::Idle | FlowState::Complete)
    }

    pub fn can_transition_to(&self, next: FlowState) -> bool {
        TRANSITIONS.contains(&(*self, next))
    }

    pub fn accepts(&self, kind: SelectionKind) -> bool {
        ACCEPTS.contains(&(*self, kind))
    }
}

/// A user choice inside one of the modals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Pieces(PieceCount),
    Spice(SpiceLevel),
    Portion(PieceCount),
    Curry(CurryChoice),
    Drink(Drink),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionKind {
    Pieces,
    Spice,
    Portion,
    Curry,
    Drink,
}

impl SelectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionKind::Pieces => "pieces",
            SelectionKind::Spice => "spice",
            SelectionKind::Portion => "portion",
            SelectionKind::Curry => "curry",
            SelectionKind::Drink => "drink",
        }
    }
}

impl Selection {
    pub fn kind(&self) -> SelectionKind {
        match self {
            Selection::Pieces(_) => SelectionKind::Pieces,
            Selection::Spice(_) => SelectionKind::Spice,
            Selection::Portion(_) => SelectionKind::Portion,
            Selection::Curry(_) => SelectionKind::Curry,
            Selection::Drink(_) => SelectionKind::Drink,
        }
    }
}
