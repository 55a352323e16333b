//! The configuration state machine.

use crate::error::CommerceError;
use crate::flow::{DraftSelection, FlowState, Selection};
use crate::i18n::{Language, Text};
use crate::ids::CategoryCode;
use crate::menu::{Drink, MenuItemRef, MenuRules, PieceCount, Route, SpiceLevel};
use crate::money::Yen;
use tracing::{debug, trace};

/// Which curry a curry prompt is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurryPosition {
    /// The item takes a single curry.
    Only,
    /// First of two.
    First,
    /// Second of two.
    Second,
}

impl CurryPosition {
    /// Suffix appended to the curry modal title.
    pub fn title_suffix(&self, language: Language) -> Option<&'static str> {
        match self {
            CurryPosition::Only => None,
            CurryPosition::First => Some(language.text(Text::SelectFirstCurry)),
            CurryPosition::Second => Some(language.text(Text::SelectSecondCurry)),
        }
    }
}

/// What the next modal has to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    PieceCount { price_2p: Yen, price_4p: Yen },
    Spice { portion_required: bool },
    Curry {
        category: CategoryCode,
        position: CurryPosition,
    },
    Drink {
        spice_required: bool,
        drinks: Vec<Drink>,
    },
}

/// Result of feeding an item or a selection into the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A new step opened.
    Prompt(Prompt),
    /// The current step still needs another choice.
    Waiting,
    /// The draft is finished and ready for the cart.
    Complete(DraftSelection),
}

/// Choices made in the open step that have not been applied yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PendingChoices {
    pub spice: Option<SpiceLevel>,
    pub portion: Option<PieceCount>,
    pub drink: Option<Drink>,
}

/// Drives one draft at a time through the modal steps.
#[derive(Debug, Clone)]
pub struct ConfigurationFlow {
    rules: MenuRules,
    state: FlowState,
    draft: Option<DraftSelection>,
    pending: PendingChoices,
    prompt: Option<Prompt>,
}

impl ConfigurationFlow {
    pub fn new(rules: MenuRules) -> Self {
        Self {
            rules,
            state: FlowState::Idle,
            draft: None,
            pending: PendingChoices::default(),
            prompt: None,
        }
    }

    pub fn rules(&self) -> &MenuRules {
        &self.rules
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn draft(&self) -> Option<&DraftSelection> {
        self.draft.as_ref()
    }

    /// The prompt of the open step, if any.
    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    pub fn pending(&self) -> PendingChoices {
        self.pending
    }

    /// Begin configuring an item. An unfinished draft is discarded.
    pub fn start(&mut self, item: MenuItemRef) -> Result<Transition, CommerceError> {
        if self.state.is_awaiting() {
            debug!(state = self.state.as_str(), "Discarding unfinished draft");
        }
        self.abandon();

        let route = self.rules.classify(&item, false);
        debug!(item = %item.id, route = ?route, "Starting item configuration");
        self.draft = Some(DraftSelection::new(item));
        self.route(route)
    }

    /// Drop the draft, e.g. when a modal is dismissed.
    pub fn abandon(&mut self) {
        self.state = FlowState::Idle;
        self.draft = None;
        self.pending = PendingChoices::default();
        self.prompt = None;
    }

    /// Apply a choice made in the open modal.
    pub fn select(
        &mut self,
        selection: Selection,
        language: Language,
    ) -> Result<Transition, CommerceError> {
        if self.draft.is_none() {
            return Err(CommerceError::NoActiveDraft);
        }
        let kind = selection.kind();
        if !self.state.accepts(kind) {
            return Err(self.rejected(kind.as_str()));
        }

        match selection {
            Selection::Pieces(pieces) => {
                let draft = self.draft.as_mut().ok_or(CommerceError::NoActiveDraft)?;
                if !draft.apply_pieces(pieces) {
                    return Err(CommerceError::UnresolvedPrice(draft.item.id.to_string()));
                }
                let route = self.rules.classify(&draft.item, true);
                trace!(price = %draft.item.price, route = ?route, "Piece count chosen");
                self.route(route)
            }
            Selection::Spice(level) => {
                if self.state == FlowState::AwaitingDrink && self.is_kids_set() {
                    return Err(self.rejected("spice"));
                }
                self.pending.spice = Some(level);
                self.finish_step(language)
            }
            Selection::Portion(portion) => {
                if !self.current_item().map(|i| i.has_portions).unwrap_or(false) {
                    return Err(self.rejected("portion"));
                }
                self.pending.portion = Some(portion);
                self.finish_step(language)
            }
            Selection::Curry(curry) => {
                if !self.rules.is_curry(&curry.id) {
                    return Err(self.rejected("curry"));
                }
                let first = self.state == FlowState::AwaitingCurry1;
                let two_curries = self
                    .current_item()
                    .map(|i| self.rules.needs_two_curries(&i.id))
                    .unwrap_or(false);
                let draft = self.draft.as_mut().ok_or(CommerceError::NoActiveDraft)?;
                if first {
                    draft.apply_first_curry(curry);
                } else {
                    draft.apply_second_curry(curry);
                }

                if first && two_curries {
                    let prompt = Prompt::Curry {
                        category: self.rules.curry_category.clone(),
                        position: CurryPosition::Second,
                    };
                    self.enter(FlowState::AwaitingCurry2, prompt)
                } else {
                    let prompt = self.drink_prompt();
                    self.enter(FlowState::AwaitingDrink, prompt)
                }
            }
            Selection::Drink(drink) => {
                if !Drink::offered(self.is_kids_set()).contains(&drink) {
                    return Err(self.rejected("drink"));
                }
                self.pending.drink = Some(drink);
                self.finish_step(language)
            }
        }
    }

    fn route(&mut self, route: Route) -> Result<Transition, CommerceError> {
        let item = self.current_item().ok_or(CommerceError::NoActiveDraft)?;
        match route {
            Route::PieceCount => {
                let (price_2p, price_4p) = match (item.price_2p, item.price_4p) {
                    (Some(p2), Some(p4)) => (p2, p4),
                    _ => return Err(CommerceError::UnresolvedPrice(item.id.to_string())),
                };
                self.enter(
                    FlowState::AwaitingPrice,
                    Prompt::PieceCount { price_2p, price_4p },
                )
            }
            Route::Curry => {
                let position = if self.rules.needs_two_curries(&item.id) {
                    CurryPosition::First
                } else {
                    CurryPosition::Only
                };
                let prompt = Prompt::Curry {
                    category: self.rules.curry_category.clone(),
                    position,
                };
                self.enter(FlowState::AwaitingCurry1, prompt)
            }
            Route::Drink => {
                let prompt = self.drink_prompt();
                self.enter(FlowState::AwaitingDrink, prompt)
            }
            Route::Spice => {
                let prompt = Prompt::Spice {
                    portion_required: item.has_portions,
                };
                self.enter(FlowState::AwaitingSpice, prompt)
            }
            Route::Direct => self.complete(),
        }
    }

    /// Complete the open step once all of its groups have a choice.
    fn finish_step(&mut self, language: Language) -> Result<Transition, CommerceError> {
        let pending = self.pending;
        let kids_set = self.is_kids_set();
        let draft = self.draft.as_mut().ok_or(CommerceError::NoActiveDraft)?;

        match self.state {
            FlowState::AwaitingSpice => {
                let Some(level) = pending.spice else {
                    return Ok(Transition::Waiting);
                };
                if draft.item.has_portions && pending.portion.is_none() {
                    return Ok(Transition::Waiting);
                }
                draft.apply_spice(level, language);
                if let Some(portion) = pending.portion {
                    draft.apply_portion(portion);
                }
                self.complete()
            }
            FlowState::AwaitingDrink => {
                let Some(drink) = pending.drink else {
                    return Ok(Transition::Waiting);
                };
                if !kids_set && pending.spice.is_none() {
                    return Ok(Transition::Waiting);
                }
                draft.apply_drink(drink, language);
                if let Some(level) = pending.spice.filter(|_| !kids_set) {
                    draft.apply_spice(level, language);
                }
                self.complete()
            }
            _ => Ok(Transition::Waiting),
        }
    }

    fn enter(&mut self, next: FlowState, prompt: Prompt) -> Result<Transition, CommerceError> {
        self.move_to(next)?;
        self.prompt = Some(prompt.clone());
        Ok(Transition::Prompt(prompt))
    }

    fn complete(&mut self) -> Result<Transition, CommerceError> {
        self.move_to(FlowState::Complete)?;
        self.prompt = None;
        let draft = self.draft.take().ok_or(CommerceError::NoActiveDraft)?;
        debug!(item = %draft.item.id, price = %draft.item.price, "Item configured");
        Ok(Transition::Complete(draft))
    }

    fn move_to(&mut self, next: FlowState) -> Result<(), CommerceError> {
        if !self.state.can_transition_to(next) {
            return Err(CommerceError::InvalidTransition {
                from: self.state.as_str(),
                to: next.as_str(),
            });
        }
        trace!(from = self.state.as_str(), to = next.as_str(), "Flow transition");
        self.state = next;
        self.pending = PendingChoices::default();
        Ok(())
    }

    fn drink_prompt(&self) -> Prompt {
        let kids_set = self.is_kids_set();
        Prompt::Drink {
            spice_required: !kids_set,
            drinks: Drink::offered(kids_set),
        }
    }

    fn current_item(&self) -> Option<&MenuItemRef> {
        self.draft.as_ref().map(|d| &d.item)
    }

    fn is_kids_set(&self) -> bool {
        self.current_item()
            .map(|i| i.is_set_menu() && self.rules.is_kids_lunch(&i.id))
            .unwrap_or(false)
    }

    fn rejected(&self, selection: &'static str) -> CommerceError {
        CommerceError::InvalidSelection {
            state: self.state.as_str(),
            selection,
        }
    }
}
