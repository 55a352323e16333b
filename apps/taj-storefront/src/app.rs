//! Cart widget and item modal components.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use taj_commerce::flow::{Prompt, Selection};
use taj_commerce::i18n::Text;
use taj_commerce::menu::{CurryChoice, Drink, PieceCount, SpiceLevel};
use taj_commerce::Yen;

use crate::controller::{CurryOptions, ModalKind, Notice, UiAction};
use crate::widget::Shop;

// ============================================================================
// Root
// ============================================================================

#[component]
pub fn ShopWidget(shop: Shop) -> impl IntoView {
    view! {
        <CartWidget shop=shop/>
        <PriceModal shop=shop/>
        <SpiceModal shop=shop/>
        <CurryModal shop=shop/>
        <DrinkModal shop=shop/>
        <OrderModal shop=shop/>
    }
}

// ============================================================================
// Cart
// ============================================================================

#[component]
fn CartWidget(shop: Shop) -> impl IntoView {
    let text = move |t: Text| shop.language().text(t);
    let summary = Memo::new(move |_| shop.with(|c| c.summary()));
    let in_flight = move || shop.with(|c| c.checkout_in_flight());

    view! {
        <div id="cart-widget" class="cart-widget">
            <button
                id="cart-toggle"
                class="cart-toggle"
                style:transform=move || if shop.with(|c| c.pulsing()) { "scale(1.2)" } else { "scale(1)" }
                on:click=move |_| shop.dispatch(UiAction::ToggleCart)
            >
                <i class="fas fa-shopping-cart"></i>
                <span id="cart-count" class="cart-count">{move || summary.with(|s| s.count)}</span>
            </button>
            <div id="cart-dropdown" class="cart-dropdown" class:active=move || shop.with(|c| c.widget_open())>
                <div class="cart-header">
                    <h3>{move || text(Text::CartTitle)}</h3>
                    <button id="clear-cart" class="clear-cart-btn" on:click=move |_| shop.dispatch(UiAction::ClearCart)>
                        <i class="fas fa-trash"></i>
                    </button>
                </div>
                <div id="cart-items" class="cart-items">
                    {move || {
                        let summary = summary.get();
                        match summary.empty_message {
                            Some(message) => view! { <div class="cart-empty">{message}</div> }.into_any(),
                            None => summary.lines.into_iter().map(|line| {
                                let index = line.index;
                                view! {
                                    <div class="cart-item">
                                        <div class="cart-item-info">
                                            <div class="cart-item-name">{line.name}</div>
                                            <div class="cart-item-details">{line.description}</div>
                                        </div>
                                        <div class="cart-item-price">{line.price_display}</div>
                                        <button
                                            class="cart-item-remove"
                                            data-index=index.to_string()
                                            on:click=move |_| shop.dispatch(UiAction::RemoveLine(index))
                                        >
                                            <i class="fas fa-times"></i>
                                        </button>
                                    </div>
                                }
                            }).collect_view().into_any(),
                        }
                    }}
                </div>
                <div class="cart-footer">
                    <div class="cart-total">
                        <strong>
                            {move || text(Text::Total)} ": ¥"
                            <span id="cart-total">{move || summary.with(|s| s.total.display_amount())}</span>
                        </strong>
                    </div>
                    <button
                        id="checkout-btn"
                        class="checkout-btn"
                        disabled=move || !summary.with(|s| s.checkout_enabled) || in_flight()
                        on:click=move |_| shop.dispatch(UiAction::Checkout)
                    >
                        {move || if in_flight() {
                            view! { <i class="fas fa-spinner fa-spin"></i> " " {text(Text::Processing)} }.into_any()
                        } else {
                            text(Text::GenerateOrder).into_any()
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}

// ============================================================================
// Item modals
// ============================================================================

/// Shared frame of the item modals. Clicking the backdrop or the close
/// button abandons the draft.
#[component]
fn ItemModal(shop: Shop, kind: ModalKind, children: Children) -> impl IntoView {
    let dismiss = move || shop.dispatch(UiAction::DismissModal);

    view! {
        <div
            id=kind.dom_id()
            class="modal"
            class:show=move || shop.with(|c| c.open_modal()) == Some(kind)
            on:click=move |ev: MouseEvent| {
                if ev.target() == ev.current_target() {
                    dismiss();
                }
            }
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h3 class="modal-item-name">{move || shop.with(|c| c.modal_title()).unwrap_or_default()}</h3>
                    <button class="modal-close" on:click=move |_| dismiss()>"×"</button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}

#[component]
fn PriceModal(shop: Shop) -> impl IntoView {
    let prices = move || {
        shop.with(|c| match c.prompt() {
            Some(Prompt::PieceCount { price_2p, price_4p }) => Some((*price_2p, *price_4p)),
            _ => None,
        })
    };

    view! {
        <ItemModal shop=shop kind=ModalKind::Price>
            <h4>{move || shop.language().text(Text::PiecesHeading)}</h4>
            <div class="price-options">
                {move || prices().map(|(price_2p, price_4p)| {
                    PieceCount::ALL.into_iter().map(|pieces| {
                        let price = match pieces {
                            PieceCount::Two => price_2p,
                            PieceCount::Four => price_4p,
                        };
                        view! {
                            <PriceOption shop=shop pieces=pieces price=price/>
                        }
                    }).collect_view()
                })}
            </div>
        </ItemModal>
    }
}

#[component]
fn PriceOption(shop: Shop, pieces: PieceCount, price: Yen) -> impl IntoView {
    view! {
        <button
            class="price-option"
            data-portion=pieces.code()
            on:click=move |_| shop.dispatch(UiAction::Select(Selection::Pieces(pieces)))
        >
            <span class="price-option-label">{move || pieces.label(shop.language())}</span>
            <span class="price-option-price">{price.display()}</span>
        </button>
    }
}

#[component]
fn SpiceModal(shop: Shop) -> impl IntoView {
    let portion_required = move || {
        shop.with(|c| matches!(c.prompt(), Some(Prompt::Spice { portion_required: true })))
    };
    let selected_portion = move || shop.with(|c| c.pending().portion);

    view! {
        <ItemModal shop=shop kind=ModalKind::Spice>
            <SpiceChoices shop=shop/>
            <div class="portion-selection" style:display=move || if portion_required() { "block" } else { "none" }>
                <h4>{move || shop.language().text(Text::PortionHeading)}</h4>
                {PieceCount::ALL.into_iter().map(|portion| view! {
                    <button
                        class="portion-option"
                        class:selected=move || selected_portion() == Some(portion)
                        data-portion=portion.code()
                        on:click=move |_| shop.dispatch(UiAction::Select(Selection::Portion(portion)))
                    >
                        {move || portion.label(shop.language())}
                    </button>
                }).collect_view()}
            </div>
        </ItemModal>
    }
}

/// Spice buttons, shared by the spice and drink modals.
#[component]
fn SpiceChoices(shop: Shop) -> impl IntoView {
    let selected = move || shop.with(|c| c.pending().spice);

    view! {
        <div class="spice-selection">
            <h4>{move || shop.language().text(Text::SpiceHeading)}</h4>
            {SpiceLevel::ALL.into_iter().map(|level| view! {
                <button
                    class="spice-option"
                    class:selected=move || selected() == Some(level)
                    data-spice=level.code()
                    on:click=move |_| shop.dispatch(UiAction::Select(Selection::Spice(level)))
                >
                    {move || level.label(shop.language())}
                </button>
            }).collect_view()}
        </div>
    }
}

#[component]
fn CurryModal(shop: Shop) -> impl IntoView {
    view! {
        <ItemModal shop=shop kind=ModalKind::Curry>
            <div id="curry-options-list" class="curry-options-list">
                {move || {
                    let options = shop.with(|c| c.curry_options().clone());
                    match options {
                        CurryOptions::Ready(curries) => curries
                            .into_iter()
                            .map(|curry| view! { <CurryOption shop=shop curry=curry/> })
                            .collect_view()
                            .into_any(),
                        other => other
                            .placeholder(shop.language())
                            .map(|message| view! { <p>{message}</p> })
                            .into_any(),
                    }
                }}
            </div>
        </ItemModal>
    }
}

#[component]
fn CurryOption(shop: Shop, curry: CurryChoice) -> impl IntoView {
    let id = curry.id.to_string();
    let name = curry.name.clone();

    view! {
        <button
            class="curry-option"
            data-curry-id=id
            data-curry-name=name.clone()
            on:click=move |_| shop.dispatch(UiAction::Select(Selection::Curry(curry.clone())))
        >
            {name}
        </button>
    }
}

#[component]
fn DrinkModal(shop: Shop) -> impl IntoView {
    let step = move || {
        shop.with(|c| match c.prompt() {
            Some(Prompt::Drink { spice_required, drinks }) => Some((*spice_required, drinks.clone())),
            _ => None,
        })
    };
    let spice_required = move || step().is_some_and(|(required, _)| required);
    let selected = move || shop.with(|c| c.pending().drink);

    view! {
        <ItemModal shop=shop kind=ModalKind::Drink>
            <div class="drink-selection">
                <h4>{move || shop.language().text(Text::DrinkHeading)}</h4>
                {move || step().map(|(_, drinks)| {
                    drinks.into_iter().map(|drink: Drink| view! {
                        <button
                            class="drink-option"
                            class:selected=move || selected() == Some(drink)
                            data-drink=drink.code()
                            on:click=move |_| shop.dispatch(UiAction::Select(Selection::Drink(drink)))
                        >
                            {move || drink.label(shop.language())}
                        </button>
                    }).collect_view()
                })}
            </div>
            <div class="spice-options-for-set" style:display=move || if spice_required() { "block" } else { "none" }>
                <SpiceChoices shop=shop/>
            </div>
        </ItemModal>
    }
}

// ============================================================================
// Order confirmation
// ============================================================================

#[component]
fn OrderModal(shop: Shop) -> impl IntoView {
    let confirmation = move || {
        shop.with(|c| match c.notice() {
            Some(Notice::Confirmation(confirmation)) => Some(confirmation.clone()),
            _ => None,
        })
    };

    view! {
        {move || confirmation().map(|order| {
            let language = shop.language();
            view! {
                <div
                    class="modal qr-modal show"
                    on:click=move |ev: MouseEvent| {
                        if ev.target() == ev.current_target() {
                            shop.dispatch(UiAction::DismissNotice);
                        }
                    }
                >
                    <div class="modal-content qr-modal-content">
                        <div class="modal-body qr-modal-body">
                            <div class="order-success">
                                <i class="fas fa-check-circle success-icon"></i>
                                <h4>{language.text(Text::OrderGenerated)}</h4>
                                <div class="qr-code-section">
                                    <h4>{language.text(Text::ShowQrToStaff)}</h4>
                                    <div class="qr-code-container">
                                        <img
                                            src=order.qr_code_url.clone().unwrap_or_default()
                                            alt=language.text(Text::OrderQrAlt)
                                            class="qr-code-image"
                                        />
                                    </div>
                                    <p class="qr-instructions">{language.text(Text::QrInstructions)}</p>
                                </div>
                                <p class="order-total">
                                    {language.text(Text::Total)} ": " {order.total.display()}
                                </p>
                                <h4>{language.text(Text::OrderNumber)} " #" {order.order_number.clone()}</h4>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
