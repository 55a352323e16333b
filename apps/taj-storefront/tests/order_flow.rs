//! Cart widget scenarios, driven through the controller with an in-memory
//! store and a scripted service.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use taj_cache::{Cache, CartStore, MemoryStore};
use taj_commerce::checkout::{OrderReceipt, OrderRequest};
use taj_commerce::config::ShopConfig;
use taj_commerce::flow::{CurryPosition, FlowState, Prompt, Selection};
use taj_commerce::i18n::Language;
use taj_commerce::menu::{CatalogEntry, CurryChoice, Drink, ItemKind, MenuItemRef, PieceCount, SpiceLevel};
use taj_commerce::{CatalogId, CategoryCode, MenuItemId, Yen};
use taj_data::{FetchError, GalleryImage, ShopApi};
use taj_storefront::controller::{
    CurryOptions, Effect, ModalKind, Notice, PageContext, ShopController, UiAction,
};

// ============================================================================
// Fixtures
// ============================================================================

#[derive(Default)]
struct ScriptedApi {
    curries: Vec<CatalogEntry>,
    fail_catalog: bool,
    receipt: Option<OrderReceipt>,
    menu_calls: Cell<usize>,
    orders: RefCell<Vec<OrderRequest>>,
}

impl ScriptedApi {
    fn with_curries() -> Self {
        Self {
            curries: vec![
                entry("41", "Butter Chicken"),
                entry("42", "Saag"),
                entry("43", "Pulao"),
            ],
            receipt: Some(OrderReceipt {
                success: true,
                order_number: Some("TAJ-20250101-ABCD1234".to_string()),
                qr_code_url: Some("/static/qr/TAJ-20250101-ABCD1234.png".to_string()),
                error: None,
            }),
            ..Self::default()
        }
    }
}

#[async_trait(?Send)]
impl ShopApi for ScriptedApi {
    async fn menu_items(&self, _categories: &[CategoryCode]) -> Result<Vec<CatalogEntry>, FetchError> {
        self.menu_calls.set(self.menu_calls.get() + 1);
        if self.fail_catalog {
            return Err(FetchError::RequestError("connection refused".to_string()));
        }
        Ok(self.curries.clone())
    }

    async fn create_order(&self, order: &OrderRequest) -> Result<OrderReceipt, FetchError> {
        self.orders.borrow_mut().push(order.clone());
        self.receipt.clone().ok_or_else(|| FetchError::HttpError {
            status: 500,
            message: "Internal Server Error".to_string(),
        })
    }

    async fn gallery_images(&self, _location: &str) -> Result<Vec<GalleryImage>, FetchError> {
        Ok(Vec::new())
    }
}

fn entry(id: &str, name: &str) -> CatalogEntry {
    CatalogEntry {
        id: CatalogId::new(id),
        name: name.to_string(),
        price: None,
    }
}

fn item(id: &str, category: &str, kind: ItemKind, price: i64) -> MenuItemRef {
    MenuItemRef {
        id: MenuItemId::new(id),
        name: format!("品目 {}", id),
        name_en: format!("Item {}", id),
        price: Yen::new(price),
        category: CategoryCode::new(category),
        kind,
        has_portions: false,
        price_2p: None,
        price_4p: None,
    }
}

fn controller(store: &MemoryStore, location: &str) -> ShopController<MemoryStore> {
    let config = ShopConfig::default();
    let page = PageContext {
        menu_location: Some(location.to_string()),
        path: format!("/taj-{}/menu", location),
        language: Language::English,
    };
    ShopController::new(&config, CartStore::new(store.clone(), config.storage.clone()), page)
}

fn stored_cart(store: &MemoryStore) -> Option<String> {
    Cache::new(store.clone()).get_text("tajCart").unwrap()
}

/// Run an effect the way the browser widget does.
async fn run(c: &mut ShopController<MemoryStore>, api: &ScriptedApi, effect: Effect) {
    match effect {
        Effect::None => {}
        Effect::Pulse => {
            assert!(c.pulsing());
            c.dispatch(UiAction::PulseFinished);
        }
        Effect::FetchCurries { request, categories } => {
            let result = api.menu_items(&categories).await;
            c.curries_loaded(request, result);
        }
        Effect::SubmitOrder(order) => {
            let result = api.create_order(&order).await;
            c.order_finished(result);
        }
    }
}

async fn act(c: &mut ShopController<MemoryStore>, api: &ScriptedApi, action: UiAction) {
    let effect = c.dispatch(action);
    run(c, api, effect).await;
}

// ============================================================================
// Configuration flow
// ============================================================================

#[tokio::test]
async fn test_curry_dish_asks_for_spice_only() {
    let store = MemoryStore::new();
    let api = ScriptedApi::with_curries();
    let mut c = controller(&store, "nikko");

    act(&mut c, &api, UiAction::AddItem(item("3", "11", ItemKind::Regular, 1200))).await;
    assert_eq!(c.open_modal(), Some(ModalKind::Spice));
    assert_eq!(c.prompt(), Some(&Prompt::Spice { portion_required: false }));
    assert_eq!(api.menu_calls.get(), 0);

    act(&mut c, &api, UiAction::Select(Selection::Spice(SpiceLevel::Medium))).await;
    assert_eq!(c.open_modal(), None);
    assert!(!c.pulsing());

    let line = &c.cart().lines()[0];
    assert_eq!(line.price(), Yen::new(1200));
    assert_eq!(line.selection.spice_level, Some(SpiceLevel::Medium));
    assert_eq!(line.selection.spice_level_text.as_deref(), Some("Medium"));
    assert!(stored_cart(&store).unwrap().contains("\"spiceLevel\":\"medium\""));
}

#[tokio::test]
async fn test_two_curry_set() {
    let store = MemoryStore::new();
    let api = ScriptedApi::with_curries();
    let mut c = controller(&store, "nikko");

    act(&mut c, &api, UiAction::AddItem(item("1", "3", ItemKind::SetMenu, 1800))).await;
    assert_eq!(c.open_modal(), Some(ModalKind::Curry));
    assert_eq!(c.modal_title().as_deref(), Some("品目 1 - Select First Curry"));
    assert_eq!(
        c.curry_options(),
        &CurryOptions::Ready(vec![
            CurryChoice::new("41", "Butter Chicken"),
            CurryChoice::new("42", "Saag"),
        ])
    );

    act(&mut c, &api, UiAction::Select(Selection::Curry(CurryChoice::new("41", "Butter Chicken")))).await;
    assert_eq!(c.flow_state(), FlowState::AwaitingCurry2);
    assert!(matches!(
        c.prompt(),
        Some(Prompt::Curry { position: CurryPosition::Second, .. })
    ));
    assert_eq!(c.modal_title().as_deref(), Some("品目 1 - Select Second Curry"));
    // The second prompt reuses the list already loaded.
    assert_eq!(api.menu_calls.get(), 1);

    act(&mut c, &api, UiAction::Select(Selection::Curry(CurryChoice::new("42", "Saag")))).await;
    assert_eq!(c.open_modal(), Some(ModalKind::Drink));

    act(&mut c, &api, UiAction::Select(Selection::Drink(Drink::MangoLassi))).await;
    assert!(c.cart().is_empty());
    assert_eq!(c.pending().drink, Some(Drink::MangoLassi));

    act(&mut c, &api, UiAction::Select(Selection::Spice(SpiceLevel::Hot))).await;
    let line = &c.cart().lines()[0].selection;
    assert_eq!(line.selected_curry.as_deref(), Some("Butter Chicken"));
    assert_eq!(line.selected_curry_2.as_deref(), Some("Saag"));
    assert_eq!(line.drink_text.as_deref(), Some("Mango Lassi"));
    assert_eq!(line.spice_level_text.as_deref(), Some("Hot"));
}

#[tokio::test]
async fn test_single_curry_set_uses_location_category() {
    let store = MemoryStore::new();
    let api = ScriptedApi::with_curries();
    let mut c = controller(&store, "okinawa");

    let effect = c.dispatch(UiAction::AddItem(item("3", "3", ItemKind::SetMenu, 1500)));
    match &effect {
        Effect::FetchCurries { categories, .. } => {
            assert_eq!(categories, &vec![CategoryCode::new("17")]);
        }
        other => panic!("expected a curry fetch, got {:?}", other),
    }
    assert_eq!(c.curry_options(), &CurryOptions::Loading);
    assert_eq!(c.modal_title().as_deref(), Some("品目 3"));
    run(&mut c, &api, effect).await;

    act(&mut c, &api, UiAction::Select(Selection::Curry(CurryChoice::new("41", "Butter Chicken")))).await;
    assert_eq!(c.flow_state(), FlowState::AwaitingDrink);
}

#[tokio::test]
async fn test_kids_lunch_offers_juice_without_spice() {
    let store = MemoryStore::new();
    let api = ScriptedApi::with_curries();
    let mut c = controller(&store, "nikko");

    act(&mut c, &api, UiAction::AddItem(item("17", "3", ItemKind::SetMenu, 800))).await;
    assert_eq!(
        c.prompt(),
        Some(&Prompt::Drink {
            spice_required: false,
            drinks: vec![Drink::OrangeJuice, Drink::AppleJuice],
        })
    );

    // Neither spice nor a grown-up drink is accepted.
    act(&mut c, &api, UiAction::Select(Selection::Spice(SpiceLevel::Mild))).await;
    act(&mut c, &api, UiAction::Select(Selection::Drink(Drink::Cola))).await;
    assert!(c.cart().is_empty());
    assert_eq!(c.open_modal(), Some(ModalKind::Drink));

    act(&mut c, &api, UiAction::Select(Selection::Drink(Drink::AppleJuice))).await;
    let line = &c.cart().lines()[0].selection;
    assert_eq!(line.drink, Some(Drink::AppleJuice));
    assert!(line.spice_level.is_none());
}

#[tokio::test]
async fn test_piece_count_rewrites_price_first() {
    let store = MemoryStore::new();
    let api = ScriptedApi::with_curries();
    let mut c = controller(&store, "nikko");

    let mut tandoori = item("5", "11", ItemKind::Regular, 900);
    tandoori.price_2p = Some(Yen::new(900));
    tandoori.price_4p = Some(Yen::new(1600));

    act(&mut c, &api, UiAction::AddItem(tandoori)).await;
    assert_eq!(c.open_modal(), Some(ModalKind::Price));

    act(&mut c, &api, UiAction::Select(Selection::Pieces(PieceCount::Four))).await;
    assert_eq!(c.open_modal(), Some(ModalKind::Spice));
    assert_eq!(c.draft().unwrap().item.price, Yen::new(1600));

    act(&mut c, &api, UiAction::Select(Selection::Spice(SpiceLevel::ExtraHot))).await;
    assert_eq!(c.cart().total().unwrap(), Yen::new(1600));
}

#[tokio::test]
async fn test_dismissing_a_modal_drops_the_draft() {
    let store = MemoryStore::new();
    let api = ScriptedApi::with_curries();
    let mut c = controller(&store, "nikko");

    act(&mut c, &api, UiAction::AddItem(item("3", "11", ItemKind::Regular, 1200))).await;
    act(&mut c, &api, UiAction::DismissModal).await;
    assert_eq!(c.flow_state(), FlowState::Idle);
    assert!(c.draft().is_none());

    act(&mut c, &api, UiAction::Select(Selection::Spice(SpiceLevel::Mild))).await;
    assert!(c.cart().is_empty());
}

#[tokio::test]
async fn test_plain_item_is_added_directly() {
    let store = MemoryStore::new();
    let api = ScriptedApi::with_curries();
    let mut c = controller(&store, "nikko");

    let effect = c.dispatch(UiAction::AddItem(item("60", "5", ItemKind::Regular, 350)));
    assert_eq!(effect, Effect::Pulse);
    assert!(c.pulsing());
    run(&mut c, &api, effect).await;
    assert!(!c.pulsing());
    assert_eq!(c.summary().count, 1);
}

// ============================================================================
// Curry loading
// ============================================================================

#[tokio::test]
async fn test_stale_curry_response_is_dropped() {
    let store = MemoryStore::new();
    let api = ScriptedApi::with_curries();
    let mut c = controller(&store, "nikko");

    let first = c.dispatch(UiAction::AddItem(item("3", "3", ItemKind::SetMenu, 1500)));
    c.dispatch(UiAction::DismissModal);
    let second = c.dispatch(UiAction::AddItem(item("10", "3", ItemKind::SetMenu, 1500)));

    let (Effect::FetchCurries { request: old, .. }, Effect::FetchCurries { request: new, .. }) =
        (first, second)
    else {
        panic!("expected two curry fetches");
    };
    assert!(new > old);

    c.curries_loaded(old, Ok(vec![entry("99", "Old Curry")]));
    assert_eq!(c.curry_options(), &CurryOptions::Loading);

    c.curries_loaded(new, Ok(vec![entry("41", "Butter Chicken")]));
    assert_eq!(
        c.curry_options(),
        &CurryOptions::Ready(vec![CurryChoice::new("41", "Butter Chicken")])
    );
}

#[tokio::test]
async fn test_curry_response_after_leaving_the_step_is_dropped() {
    let store = MemoryStore::new();
    let mut c = controller(&store, "nikko");

    let Effect::FetchCurries { request, .. } =
        c.dispatch(UiAction::AddItem(item("3", "3", ItemKind::SetMenu, 1500)))
    else {
        panic!("expected a curry fetch");
    };
    c.dispatch(UiAction::DismissModal);
    c.curries_loaded(request, Ok(vec![entry("41", "Butter Chicken")]));
    assert_eq!(c.curry_options(), &CurryOptions::Idle);
}

#[tokio::test]
async fn test_curry_placeholders() {
    let store = MemoryStore::new();
    let mut api = ScriptedApi::with_curries();
    api.curries = vec![entry("43", "Pulao")];
    let mut c = controller(&store, "nikko");

    act(&mut c, &api, UiAction::AddItem(item("3", "3", ItemKind::SetMenu, 1500))).await;
    assert_eq!(c.curry_options(), &CurryOptions::Unavailable);
    assert_eq!(
        c.curry_options().placeholder(Language::English),
        Some("No curry options available.")
    );

    api.fail_catalog = true;
    act(&mut c, &api, UiAction::AddItem(item("3", "3", ItemKind::SetMenu, 1500))).await;
    assert_eq!(c.curry_options(), &CurryOptions::Failed);
    // The flow stays open but cannot finish the curry step.
    assert_eq!(c.flow_state(), FlowState::AwaitingCurry1);
    act(&mut c, &api, UiAction::Select(Selection::Curry(CurryChoice::new("43", "Pulao")))).await;
    assert_eq!(c.flow_state(), FlowState::AwaitingCurry1);
}

// ============================================================================
// Cart
// ============================================================================

#[tokio::test]
async fn test_add_then_remove_restores_total() {
    let store = MemoryStore::new();
    let api = ScriptedApi::with_curries();
    let mut c = controller(&store, "nikko");

    act(&mut c, &api, UiAction::AddItem(item("60", "5", ItemKind::Regular, 350))).await;
    let before = c.cart().total().unwrap();

    act(&mut c, &api, UiAction::AddItem(item("61", "5", ItemKind::Regular, 1250))).await;
    assert_eq!(c.summary().total_display, "¥1,600");

    act(&mut c, &api, UiAction::RemoveLine(1)).await;
    assert_eq!(c.cart().total().unwrap(), before);

    // Out of range is ignored.
    act(&mut c, &api, UiAction::RemoveLine(5)).await;
    assert_eq!(c.cart().len(), 1);
}

#[tokio::test]
async fn test_remove_keeps_dropdown_open() {
    let store = MemoryStore::new();
    let api = ScriptedApi::with_curries();
    let mut c = controller(&store, "nikko");

    act(&mut c, &api, UiAction::AddItem(item("60", "5", ItemKind::Regular, 350))).await;
    act(&mut c, &api, UiAction::ToggleCart).await;
    act(&mut c, &api, UiAction::RemoveLine(0)).await;
    assert!(c.widget_open());

    act(&mut c, &api, UiAction::CloseCart).await;
    assert!(!c.widget_open());
}

#[tokio::test]
async fn test_clear_empties_storage_and_count() {
    let store = MemoryStore::new();
    let api = ScriptedApi::with_curries();
    let mut c = controller(&store, "nikko");

    act(&mut c, &api, UiAction::AddItem(item("60", "5", ItemKind::Regular, 350))).await;
    act(&mut c, &api, UiAction::ClearCart).await;

    assert_eq!(stored_cart(&store).as_deref(), Some("[]"));
    let summary = c.summary();
    assert_eq!(summary.count, 0);
    assert_eq!(summary.empty_message.as_deref(), Some("Your cart is empty"));
    assert!(!summary.checkout_enabled);
}

#[tokio::test]
async fn test_cart_survives_reload() {
    let store = MemoryStore::new();
    let api = ScriptedApi::with_curries();
    let mut c = controller(&store, "nikko");
    act(&mut c, &api, UiAction::AddItem(item("60", "5", ItemKind::Regular, 350))).await;

    let reloaded = controller(&store, "nikko");
    assert_eq!(reloaded.cart(), c.cart());
}

#[tokio::test]
async fn test_corrupt_storage_starts_empty() {
    let store = MemoryStore::new();
    Cache::new(store.clone()).set_text("tajCart", "{not json").unwrap();
    let c = controller(&store, "nikko");
    assert!(c.cart().is_empty());
}

#[tokio::test]
async fn test_cart_saved_by_the_page_script_loads() {
    let store = MemoryStore::new();
    let saved = r#"[{"id":"3","name":"チキンカレー","name_en":"Chicken Curry","price":1200,"category":"11","type":"regular","hasPortions":false,"price2p":null,"price4p":null,"spiceLevel":"medium","spiceLevelText":"中辛","cartId":1700000000000.123,"quantity":1,"timestamp":"2023-11-14T22:13:20.123Z"}]"#;
    Cache::new(store.clone()).set_text("tajCart", saved).unwrap();

    let c = controller(&store, "nikko");
    assert_eq!(c.cart().len(), 1);
    assert_eq!(c.cart().total().unwrap(), Yen::new(1200));
    assert_eq!(c.summary().count, 1);
    assert_eq!(c.cart().lines()[0].line_id.as_str(), "1700000000000.123");
}

#[tokio::test]
async fn test_summary_follows_language() {
    let store = MemoryStore::new();
    let api = ScriptedApi::with_curries();
    let mut c = controller(&store, "nikko");

    act(&mut c, &api, UiAction::SetLanguage(Language::Japanese)).await;
    assert_eq!(c.summary().empty_message.as_deref(), Some("カートは空です"));
    assert_eq!(c.language(), Language::Japanese);
}

// ============================================================================
// Checkout
// ============================================================================

#[tokio::test]
async fn test_empty_checkout_does_nothing() {
    let store = MemoryStore::new();
    let api = ScriptedApi::with_curries();
    let mut c = controller(&store, "nikko");

    let effect = c.dispatch(UiAction::Checkout);
    assert_eq!(effect, Effect::None);
    assert!(!c.checkout_in_flight());
    assert!(c.notice().is_none());
    assert!(api.orders.borrow().is_empty());
    assert_eq!(stored_cart(&store), None);
}

#[tokio::test]
async fn test_successful_checkout() {
    let store = MemoryStore::new();
    let api = ScriptedApi::with_curries();
    let mut c = controller(&store, "nikko");

    act(&mut c, &api, UiAction::AddItem(item("60", "5", ItemKind::Regular, 350))).await;
    act(&mut c, &api, UiAction::AddItem(item("3", "11", ItemKind::Regular, 1200))).await;
    act(&mut c, &api, UiAction::Select(Selection::Spice(SpiceLevel::Mild))).await;
    act(&mut c, &api, UiAction::ToggleCart).await;
    act(&mut c, &api, UiAction::Checkout).await;

    let orders = api.orders.borrow();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].restaurant_location, "nikko");
    assert_eq!(orders[0].total_amount, Yen::new(1550));
    assert_eq!(orders[0].items[0].name(), "Item 60");
    assert!(orders[0].customer_info.is_empty());

    match c.notice() {
        Some(Notice::Confirmation(confirmation)) => {
            assert_eq!(confirmation.order_number, "TAJ-20250101-ABCD1234");
            assert_eq!(confirmation.total, Yen::new(1550));
        }
        other => panic!("expected a confirmation, got {:?}", other),
    }
    assert!(c.cart().is_empty());
    assert_eq!(stored_cart(&store).as_deref(), Some("[]"));
    assert!(!c.widget_open());
    assert!(!c.checkout_in_flight());

    act(&mut c, &api, UiAction::DismissNotice).await;
    assert!(c.notice().is_none());
}

#[tokio::test]
async fn test_checkout_ignored_while_in_flight() {
    let store = MemoryStore::new();
    let api = ScriptedApi::with_curries();
    let mut c = controller(&store, "nikko");

    act(&mut c, &api, UiAction::AddItem(item("60", "5", ItemKind::Regular, 350))).await;
    let submit = c.dispatch(UiAction::Checkout);
    assert!(matches!(submit, Effect::SubmitOrder(_)));
    assert!(c.checkout_in_flight());

    assert_eq!(c.dispatch(UiAction::Checkout), Effect::None);

    run(&mut c, &api, submit).await;
    assert_eq!(api.orders.borrow().len(), 1);
    assert!(!c.checkout_in_flight());
}

#[tokio::test]
async fn test_item_added_during_submission_survives() {
    let store = MemoryStore::new();
    let api = ScriptedApi::with_curries();
    let mut c = controller(&store, "nikko");

    act(&mut c, &api, UiAction::AddItem(item("60", "5", ItemKind::Regular, 350))).await;
    let submit = c.dispatch(UiAction::Checkout);
    act(&mut c, &api, UiAction::AddItem(item("61", "5", ItemKind::Regular, 400))).await;
    run(&mut c, &api, submit).await;

    let orders = api.orders.borrow();
    assert_eq!(orders[0].items.len(), 1);
    assert_eq!(orders[0].items[0].name(), "Item 60");
    assert!(matches!(c.notice(), Some(Notice::Confirmation(_))));

    assert_eq!(c.cart().len(), 1);
    assert_eq!(c.cart().lines()[0].name(), "品目 61");
    assert_eq!(c.cart().total().unwrap(), Yen::new(400));
    assert!(stored_cart(&store).unwrap().contains("\"id\":\"61\""));
}

#[tokio::test]
async fn test_failed_checkout_keeps_cart() {
    let store = MemoryStore::new();
    let api = ScriptedApi {
        receipt: None,
        ..ScriptedApi::with_curries()
    };
    let mut c = controller(&store, "fuji");

    act(&mut c, &api, UiAction::AddItem(item("60", "5", ItemKind::Regular, 350))).await;
    act(&mut c, &api, UiAction::Checkout).await;

    assert_eq!(c.cart().len(), 1);
    assert!(!c.checkout_in_flight());
    match c.notice() {
        Some(Notice::Error(message)) => assert!(message.starts_with("Sorry")),
        other => panic!("expected an error notice, got {:?}", other),
    }

    // Retry is possible.
    assert!(matches!(c.dispatch(UiAction::Checkout), Effect::SubmitOrder(_)));
}

#[tokio::test]
async fn test_rejected_order_keeps_cart() {
    let store = MemoryStore::new();
    let api = ScriptedApi {
        receipt: Some(OrderReceipt {
            success: false,
            error: Some("Invalid order data".to_string()),
            ..OrderReceipt::default()
        }),
        ..ScriptedApi::with_curries()
    };
    let mut c = controller(&store, "nikko");
    c.dispatch(UiAction::SetLanguage(Language::Japanese));

    act(&mut c, &api, UiAction::AddItem(item("60", "5", ItemKind::Regular, 350))).await;
    act(&mut c, &api, UiAction::Checkout).await;

    assert_eq!(c.cart().len(), 1);
    assert!(matches!(c.notice(), Some(Notice::Error(m)) if m.starts_with("申し訳")));
}

#[tokio::test]
async fn test_unknown_restaurant_location() {
    let store = MemoryStore::new();
    let api = ScriptedApi::with_curries();
    let config = ShopConfig::default();
    let page = PageContext {
        menu_location: None,
        path: "/menu".to_string(),
        language: Language::English,
    };
    let mut c = ShopController::new(&config, CartStore::new(store.clone(), config.storage.clone()), page);
    assert_eq!(c.restaurant_location(), "unknown");

    // Without a declared location the default menu rules apply.
    let effect = c.dispatch(UiAction::AddItem(item("3", "3", ItemKind::SetMenu, 1500)));
    assert!(matches!(
        effect,
        Effect::FetchCurries { ref categories, .. } if categories == &vec![CategoryCode::new("17")]
    ));
    run(&mut c, &api, effect).await;
}
