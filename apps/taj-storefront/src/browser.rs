//! Thin helpers over `web-sys`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, UrlSearchParams, Window,
};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Current location path.
pub fn path(window: &Window) -> String {
    window.location().pathname().unwrap_or_default()
}

/// Value of a query parameter of the current location.
pub fn query_param(window: &Window, name: &str) -> Option<String> {
    let search = window.location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

/// Origin of the current page, used as the base of API calls.
pub fn origin(window: &Window) -> Option<String> {
    window.location().origin().ok()
}

/// All elements matching a selector; empty on an invalid selector.
pub fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First element matching a selector.
pub fn select(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// Attach an event listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout<F>(ms: u32, f: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        i32::try_from(ms).unwrap_or(i32::MAX),
    )?;
    Ok(())
}

/// Run `f` every `ms` milliseconds for the lifetime of the page.
pub fn set_interval<F>(ms: u32, f: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let callback = Closure::<dyn FnMut()>::new(f);
    window()?.set_interval_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        i32::try_from(ms).unwrap_or(i32::MAX),
    )?;
    callback.forget();
    Ok(())
}

/// Add a class, ignoring failures.
pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

/// Smoothly scroll an element with the given id to the top of the view.
pub fn scroll_to_section(id: &str) {
    let Some(element) = document().ok().and_then(|d| d.get_element_by_id(id)) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Whether an event passed through `element` on its way to the target.
///
/// Uses the composed path, so it still holds when the target was removed
/// from the document while the event was being handled.
pub fn event_passed_through(event: &Event, element: &Element) -> bool {
    event.composed_path().includes(element, 0)
}

/// The event target as an element.
pub fn target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}
