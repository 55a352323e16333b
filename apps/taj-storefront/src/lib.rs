//! TAJ restaurant storefront
//!
//! Client-side behavior for the restaurant site, compiled to WASM:
//! - The cart widget and the item configuration modals (Leptos, CSR)
//! - Cart persistence in `localStorage`
//! - Order submission and the QR confirmation
//! - Page decoration: scroll animations, carousel, navigation helpers
//!
//! [`controller::ShopController`] holds all widget behavior and is
//! testable natively; the browser modules only render it and run the
//! effects it returns.

pub mod controller;
pub mod decoration;
pub mod logging;
pub mod settings;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
mod widget;

pub use controller::{Effect, ShopController, UiAction};
pub use settings::Settings;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use taj_data::{FetchClient, HttpShopApi};
    use tracing::warn;

    let parsed = Settings::embedded();
    logging::init(parsed.as_ref().map_or("info", |s| s.logging.filter.as_str()));
    let settings = parsed.unwrap_or_else(|e| {
        warn!(error = %e, "Invalid embedded taj.toml, using defaults");
        Settings::default()
    });

    let _ = leptos::task::Executor::init_wasm_bindgen();

    let (window, document) = match (browser::window(), browser::document()) {
        (Ok(window), Ok(document)) => (window, document),
        _ => {
            warn!("No browser window, nothing to do");
            return;
        }
    };

    let mut client = FetchClient::new();
    if let Some(origin) = browser::origin(&window) {
        client = client.with_base_url(origin);
    }
    let api = HttpShopApi::new(client, settings.shop.endpoints.clone());

    if let Err(e) = decoration::effects::init(&window, &document, api.clone()) {
        warn!(error = ?e, "Page behaviors failed to initialize");
    }
    widget::mount(&window, &document, &settings, api);
}
