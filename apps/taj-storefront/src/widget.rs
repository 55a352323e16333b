//! Browser side of the cart widget.
//!
//! Holds the controller in a local signal, runs the effects it asks for and
//! turns page-level clicks into [`UiAction`]s.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use taj_cache::{BrowserStore, CartStore};
use taj_commerce::i18n::{Language, LanguageSignals};
use taj_commerce::menu::MenuItemRef;
use taj_data::{HttpShopApi, ShopApi};
use tracing::{debug, info, warn};
use wasm_bindgen::JsValue;
use web_sys::{Document, Event, Window};

use crate::app::ShopWidget;
use crate::browser::{self, listen, select};
use crate::controller::{Effect, Notice, PageContext, ShopController, UiAction, PULSE_MS};
use crate::settings::Settings;

/// Delay before re-reading the language after a toggle click, so the page's
/// own toggle handler runs first.
const LANGUAGE_REFRESH_MS: u32 = 100;

/// Handle shared by every component of the widget.
#[derive(Clone, Copy)]
pub struct Shop {
    state: RwSignal<ShopController<BrowserStore>, LocalStorage>,
    api: StoredValue<HttpShopApi, LocalStorage>,
}

impl Shop {
    pub fn new(controller: ShopController<BrowserStore>, api: HttpShopApi) -> Self {
        Self {
            state: RwSignal::new_local(controller),
            api: StoredValue::new_local(api),
        }
    }

    /// Read the controller, tracking the read.
    pub fn with<U>(&self, f: impl FnOnce(&ShopController<BrowserStore>) -> U) -> U {
        self.state.with(f)
    }

    pub fn language(&self) -> Language {
        self.with(|c| c.language())
    }

    /// Apply an action and run whatever it asks for.
    pub fn dispatch(self, action: UiAction) {
        if let Some(effect) = self.state.try_update(|c| c.dispatch(action)) {
            self.run(effect);
        }
    }

    fn run(self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Pulse => {
                set_timeout(
                    move || self.dispatch(UiAction::PulseFinished),
                    Duration::from_millis(u64::from(PULSE_MS)),
                );
            }
            Effect::FetchCurries {
                request,
                categories,
            } => {
                let api = self.api.get_value();
                spawn_local(async move {
                    let result = api.menu_items(&categories).await;
                    self.state.update(|c| c.curries_loaded(request, result));
                });
            }
            Effect::SubmitOrder(order) => {
                let api = self.api.get_value();
                spawn_local(async move {
                    let result = api.create_order(&order).await;
                    self.state.update(|c| c.order_finished(result));
                    self.alert_on_error();
                });
            }
        }
    }

    /// Checkout failures are shown as a browser alert.
    fn alert_on_error(self) {
        let message = self.state.with_untracked(|c| match c.notice() {
            Some(Notice::Error(message)) => Some(message.clone()),
            _ => None,
        });
        if let Some(message) = message {
            if let Ok(window) = browser::window() {
                let _ = window.alert_with_message(&message);
            }
            self.dispatch(UiAction::DismissNotice);
        }
    }

    /// Page-level listeners: add-to-cart delegation, outside clicks and the
    /// language toggle.
    fn listen_document(self, document: &Document) -> Result<(), JsValue> {
        listen(document, "click", move |event: Event| {
            let Some(target) = browser::target_element(&event) else {
                return;
            };

            if let Ok(Some(button)) = target.closest(".add-to-cart-btn") {
                match MenuItemRef::from_attributes(|name| button.get_attribute(name)) {
                    Ok(item) => {
                        debug!(item = %item.id, name = %item.name, "Adding to cart");
                        self.dispatch(UiAction::AddItem(item));
                    }
                    Err(e) => warn!(error = %e, "Ignoring add-to-cart click"),
                }
            }

            let outside = browser::document()
                .ok()
                .and_then(|d| d.get_element_by_id("cart-widget"))
                .is_some_and(|widget| !browser::event_passed_through(&event, &widget));
            if outside && self.state.with_untracked(|c| c.widget_open()) {
                self.dispatch(UiAction::CloseCart);
            }

            if let Ok(Some(_)) = target.closest(".toggle-switch, .language-label") {
                let refresh = browser::set_timeout(LANGUAGE_REFRESH_MS, move || {
                    let stored = self.state.with_untracked(|c| c.stored_language());
                    if let Ok(window) = browser::window() {
                        let language = language_signals(&window, stored).resolve();
                        self.dispatch(UiAction::SetLanguage(language));
                    }
                });
                if let Err(e) = refresh {
                    warn!(error = ?e, "Could not schedule language refresh");
                }
            }
        })
    }
}

/// Read the language signals the page offers.
pub fn language_signals(window: &Window, stored: Option<String>) -> LanguageSignals {
    let toggle = window.document().and_then(|document| {
        if select(&document, ".language-label.japanese.active").is_some() {
            Some(Language::Japanese)
        } else if select(&document, ".language-label.english.active").is_some() {
            Some(Language::English)
        } else {
            None
        }
    });
    LanguageSignals {
        toggle,
        query: browser::query_param(window, "lang"),
        stored,
        path: browser::path(window),
    }
}

/// Whether this page takes the cart widget.
pub fn wanted(document: &Document) -> bool {
    select(document, ".add-to-cart-btn").is_some()
        || document.get_element_by_id("cart-widget").is_some()
        || select(document, ".detailed-menu").is_some()
}

/// Create the controller and mount the widget on menu pages.
pub fn mount(window: &Window, document: &Document, settings: &Settings, api: HttpShopApi) {
    if !wanted(document) {
        debug!("No cart functionality needed on this page");
        return;
    }

    let store = match BrowserStore::open() {
        Ok(store) => CartStore::new(store, settings.shop.storage.clone()),
        Err(e) => {
            warn!(error = %e, "Cart widget disabled");
            return;
        }
    };
    let language = language_signals(window, store.language()).resolve();
    let page = PageContext {
        menu_location: select(document, ".detailed-menu")
            .and_then(|menu| menu.get_attribute("data-restaurant-location")),
        path: browser::path(window),
        language,
    };
    let controller = ShopController::new(&settings.shop, store, page);
    let document = document.clone();

    info!("Cart-enabled page detected, mounting cart widget");
    leptos::mount::mount_to_body(move || {
        let shop = Shop::new(controller, api);
        if let Err(e) = shop.listen_document(&document) {
            warn!(error = ?e, "Could not attach page listeners");
        }
        view! { <ShopWidget shop=shop/> }
    });
}
