//! The cart widget's controller.
//!
//! Owns the cart, the configuration flow and the widget's view state. It
//! performs no I/O itself: [`ShopController::dispatch`] returns an
//! [`Effect`] for the caller to run, and the results come back through
//! [`ShopController::curries_loaded`] and [`ShopController::order_finished`].

use taj_cache::{CartStore, KeyValueStore};
use taj_commerce::cart::{Cart, CartSummary};
use taj_commerce::checkout::{location_from_path, OrderConfirmation, OrderReceipt, OrderRequest};
use taj_commerce::config::ShopConfig;
use taj_commerce::flow::{
    ConfigurationFlow, CurryPosition, DraftSelection, FlowState, Prompt, Selection, Transition,
};
use taj_commerce::i18n::{Language, Text};
use taj_commerce::menu::{CatalogEntry, CurryChoice, MenuItemRef};
use taj_commerce::{CategoryCode, CommerceError, LineId, Yen};
use taj_data::FetchError;
use tracing::{debug, info, warn};

/// How long the cart toggle pulses after an add.
pub const PULSE_MS: u32 = 200;

/// What the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// An add-to-cart control was clicked.
    AddItem(MenuItemRef),
    /// An option was picked in the open modal.
    Select(Selection),
    /// The open modal was closed without finishing.
    DismissModal,
    ToggleCart,
    /// A click landed outside the cart widget.
    CloseCart,
    RemoveLine(usize),
    ClearCart,
    Checkout,
    /// The confirmation or error notice was dismissed.
    DismissNotice,
    SetLanguage(Language),
    PulseFinished,
}

/// Work the caller has to carry out after a dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Pulse the cart toggle, then dispatch [`UiAction::PulseFinished`]
    /// after [`PULSE_MS`].
    Pulse,
    /// Fetch curry options and report back through
    /// [`ShopController::curries_loaded`].
    FetchCurries {
        request: u64,
        categories: Vec<CategoryCode>,
    },
    /// Submit the order and report back through
    /// [`ShopController::order_finished`].
    SubmitOrder(OrderRequest),
}

/// State of the curry option list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CurryOptions {
    #[default]
    Idle,
    Loading,
    Ready(Vec<CurryChoice>),
    /// The catalog returned no curries.
    Unavailable,
    /// The catalog could not be reached.
    Failed,
}

impl CurryOptions {
    /// Placeholder text shown instead of options.
    pub fn placeholder(&self, language: Language) -> Option<&'static str> {
        match self {
            CurryOptions::Loading => Some(language.text(Text::LoadingCurries)),
            CurryOptions::Unavailable => Some(language.text(Text::NoCurryOptions)),
            CurryOptions::Failed => Some(language.text(Text::CurryLoadFailed)),
            CurryOptions::Idle | CurryOptions::Ready(_) => None,
        }
    }
}

/// The four item modals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    Price,
    Spice,
    Curry,
    Drink,
}

impl ModalKind {
    pub const ALL: [ModalKind; 4] = [
        ModalKind::Price,
        ModalKind::Spice,
        ModalKind::Curry,
        ModalKind::Drink,
    ];

    /// Modal showing a prompt.
    pub fn for_prompt(prompt: &Prompt) -> Self {
        match prompt {
            Prompt::PieceCount { .. } => ModalKind::Price,
            Prompt::Spice { .. } => ModalKind::Spice,
            Prompt::Curry { .. } => ModalKind::Curry,
            Prompt::Drink { .. } => ModalKind::Drink,
        }
    }

    /// Element id of the modal.
    pub fn dom_id(&self) -> &'static str {
        match self {
            ModalKind::Price => "price-modal",
            ModalKind::Spice => "spice-modal",
            ModalKind::Curry => "curry-modal",
            ModalKind::Drink => "drink-modal",
        }
    }
}

/// Something shown over the page after checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Confirmation(OrderConfirmation),
    Error(String),
}

/// What the page tells the widget at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageContext {
    /// `data-restaurant-location` of the menu, if present.
    pub menu_location: Option<String>,
    /// Location path, used for the order's restaurant.
    pub path: String,
    pub language: Language,
}

/// The cart widget's state and behavior.
pub struct ShopController<S> {
    store: CartStore<S>,
    flow: ConfigurationFlow,
    cart: Cart,
    language: Language,
    restaurant_location: String,
    widget_open: bool,
    pulsing: bool,
    checkout_in_flight: bool,
    submitted_total: Yen,
    /// Lines sent with the order in flight. Lines added meanwhile stay.
    submitted_lines: Vec<LineId>,
    curry_options: CurryOptions,
    curry_request: u64,
    notice: Option<Notice>,
}

impl<S: KeyValueStore> ShopController<S> {
    /// Create the controller and load the persisted cart.
    pub fn new(config: &ShopConfig, store: CartStore<S>, page: PageContext) -> Self {
        let menu_location = page
            .menu_location
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| config.menu.default_location.clone());
        let rules = config.rules_for_location(&menu_location);
        let cart = store.load_cart();
        info!(
            location = %menu_location,
            curry_category = %rules.curry_category,
            lines = cart.len(),
            "Cart widget ready"
        );

        Self {
            store,
            flow: ConfigurationFlow::new(rules),
            cart,
            language: page.language,
            restaurant_location: location_from_path(&page.path),
            widget_open: false,
            pulsing: false,
            checkout_in_flight: false,
            submitted_total: Yen::ZERO,
            submitted_lines: Vec::new(),
            curry_options: CurryOptions::Idle,
            curry_request: 0,
            notice: None,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn flow_state(&self) -> FlowState {
        self.flow.state()
    }

    /// Prompt of the open modal.
    pub fn prompt(&self) -> Option<&Prompt> {
        self.flow.prompt()
    }

    pub fn draft(&self) -> Option<&DraftSelection> {
        self.flow.draft()
    }

    pub fn pending(&self) -> taj_commerce::flow::PendingChoices {
        self.flow.pending()
    }

    pub fn curry_options(&self) -> &CurryOptions {
        &self.curry_options
    }

    pub fn widget_open(&self) -> bool {
        self.widget_open
    }

    pub fn pulsing(&self) -> bool {
        self.pulsing
    }

    pub fn checkout_in_flight(&self) -> bool {
        self.checkout_in_flight
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn restaurant_location(&self) -> &str {
        &self.restaurant_location
    }

    /// Modal that should be showing, if any.
    pub fn open_modal(&self) -> Option<ModalKind> {
        self.flow.prompt().map(ModalKind::for_prompt)
    }

    /// Language preference saved by the page's language toggle.
    pub fn stored_language(&self) -> Option<String> {
        self.store.language()
    }

    /// Title of the open modal: the item name, plus the curry position
    /// when two curries are being chosen.
    pub fn modal_title(&self) -> Option<String> {
        let name = &self.flow.draft()?.item.name;
        let suffix = match self.flow.prompt()? {
            Prompt::Curry { position, .. } => position.title_suffix(self.language),
            _ => None,
        };
        Some(match suffix {
            Some(suffix) => format!("{}{}", name, suffix),
            None => name.clone(),
        })
    }

    /// The cart as the dropdown shows it.
    pub fn summary(&self) -> CartSummary {
        CartSummary::build(&self.cart, self.language).unwrap_or_else(|e| {
            warn!(error = %e, "Could not total the cart");
            CartSummary::default()
        })
    }

    /// Apply a user action.
    pub fn dispatch(&mut self, action: UiAction) -> Effect {
        debug!(action = ?action, "Dispatch");
        match action {
            UiAction::AddItem(item) => match self.flow.start(item) {
                Ok(transition) => self.on_transition(transition),
                Err(e) => self.ignore(e),
            },
            UiAction::Select(selection) => match self.flow.select(selection, self.language) {
                Ok(transition) => self.on_transition(transition),
                Err(e) => self.ignore(e),
            },
            UiAction::DismissModal => {
                self.flow.abandon();
                self.curry_options = CurryOptions::Idle;
                Effect::None
            }
            UiAction::ToggleCart => {
                self.widget_open = !self.widget_open;
                Effect::None
            }
            UiAction::CloseCart => {
                if self.widget_open {
                    debug!("Cart dropdown closed by outside click");
                }
                self.widget_open = false;
                Effect::None
            }
            UiAction::RemoveLine(index) => {
                if self.cart.remove(index).is_some() {
                    self.persist();
                } else {
                    debug!(index, "Ignoring removal of missing line");
                }
                Effect::None
            }
            UiAction::ClearCart => {
                self.cart.clear();
                self.persist();
                Effect::None
            }
            UiAction::Checkout => self.checkout(),
            UiAction::DismissNotice => {
                self.notice = None;
                Effect::None
            }
            UiAction::SetLanguage(language) => {
                self.language = language;
                Effect::None
            }
            UiAction::PulseFinished => {
                self.pulsing = false;
                Effect::None
            }
        }
    }

    /// Result of an [`Effect::FetchCurries`].
    ///
    /// Responses for an older request, or arriving after the curry step was
    /// left, are dropped.
    pub fn curries_loaded(
        &mut self,
        request: u64,
        result: Result<Vec<CatalogEntry>, FetchError>,
    ) {
        let awaiting_curry = matches!(
            self.flow.state(),
            FlowState::AwaitingCurry1 | FlowState::AwaitingCurry2
        );
        if request != self.curry_request || !awaiting_curry {
            debug!(request, current = self.curry_request, "Dropping stale curry options");
            return;
        }

        self.curry_options = match result {
            Ok(entries) => {
                let curries: Vec<CurryChoice> = self
                    .flow
                    .rules()
                    .curry_entries(entries)
                    .into_iter()
                    .map(CurryChoice::from)
                    .collect();
                if curries.is_empty() {
                    CurryOptions::Unavailable
                } else {
                    CurryOptions::Ready(curries)
                }
            }
            Err(e) => {
                warn!(error = %e, "Error loading curry options");
                CurryOptions::Failed
            }
        };
    }

    /// Result of an [`Effect::SubmitOrder`].
    pub fn order_finished(&mut self, result: Result<OrderReceipt, FetchError>) {
        self.checkout_in_flight = false;
        let submitted = std::mem::take(&mut self.submitted_lines);

        let confirmation = result
            .map_err(|e| e.to_string())
            .and_then(|receipt| {
                receipt
                    .into_confirmation(self.submitted_total)
                    .map_err(|e| e.to_string())
            });

        match confirmation {
            Ok(confirmation) => {
                info!(order = %confirmation.order_number, "Order created");
                self.notice = Some(Notice::Confirmation(confirmation));
                self.cart.remove_lines(&submitted);
                self.persist();
                self.widget_open = false;
            }
            Err(e) => {
                warn!(error = %e, "Checkout error");
                self.notice = Some(Notice::Error(
                    self.language.text(Text::CheckoutFailed).to_string(),
                ));
            }
        }
    }

    fn on_transition(&mut self, transition: Transition) -> Effect {
        match transition {
            Transition::Prompt(Prompt::Curry { category, position }) => {
                let reuse = position == CurryPosition::Second
                    && matches!(self.curry_options, CurryOptions::Ready(_));
                if reuse {
                    return Effect::None;
                }
                self.curry_request += 1;
                self.curry_options = CurryOptions::Loading;
                Effect::FetchCurries {
                    request: self.curry_request,
                    categories: vec![category],
                }
            }
            Transition::Prompt(_) => {
                self.curry_options = CurryOptions::Idle;
                Effect::None
            }
            Transition::Waiting => Effect::None,
            Transition::Complete(draft) => {
                self.curry_options = CurryOptions::Idle;
                let id = self.cart.add(draft);
                debug!(line = %id, lines = self.cart.len(), "Added to cart");
                self.persist();
                self.pulsing = true;
                Effect::Pulse
            }
        }
    }

    fn checkout(&mut self) -> Effect {
        if self.cart.is_empty() || self.checkout_in_flight {
            return Effect::None;
        }
        match self.cart.to_order_request(self.restaurant_location.clone()) {
            Ok(request) => {
                self.checkout_in_flight = true;
                self.submitted_total = request.total_amount;
                self.submitted_lines = self.cart.line_ids();
                Effect::SubmitOrder(request)
            }
            Err(e) => self.ignore(e),
        }
    }

    fn persist(&self) {
        if let Err(e) = self.store.save_cart(&self.cart) {
            warn!(error = %e, "Could not save cart");
        }
    }

    fn ignore(&self, error: CommerceError) -> Effect {
        warn!(error = %error, "Ignoring action");
        Effect::None
    }
}
