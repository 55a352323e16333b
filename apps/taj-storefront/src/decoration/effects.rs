//! Page behaviors wired into the DOM.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::task::spawn_local;
use taj_commerce::checkout::restaurant_slug;
use taj_data::{GalleryImage, HttpShopApi, ShopApi};
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use super::carousel::{Carousel, AUTOPLAY_MS};
use super::page::{
    self, nav, PageKind, FADE_IN_CLASS, FADE_IN_ON_SCROLL, FADE_IN_ROOT_MARGIN,
    FADE_IN_THRESHOLD, HERO_SLIDE_UPS, SCROLL_INDICATOR_TARGET, SLIDE_UP_CLASS,
};
use crate::browser::{self, add_class, listen, select, select_all, set_interval, set_timeout};

/// Install every page behavior for the current page.
///
/// A behavior whose elements are missing is skipped.
pub fn init(window: &Window, document: &Document, api: HttpShopApi) -> Result<(), JsValue> {
    smooth_scrolling(document)?;
    fade_in_on_scroll(document)?;
    parallax(window, document)?;
    install_nav_helpers(window)?;

    let path = browser::path(window);
    let kind = PageKind::detect(&path);
    debug!(page = kind.as_str(), "Page behaviors");

    if let Some(stagger) = kind.stagger() {
        for (index, element) in select_all(document, stagger.selector).into_iter().enumerate() {
            set_timeout(stagger.delay_ms(index), move || add_class(&element, FADE_IN_CLASS))?;
        }
    }

    match kind {
        PageKind::Home => home(document)?,
        PageKind::Restaurant => {
            if let Some(location) = restaurant_slug(&path) {
                carousel(document, api, location.to_string());
            }
        }
        PageKind::Contact => contact_form(document)?,
        _ => {}
    }

    info!("TAJ page behaviors initialized");
    Ok(())
}

fn smooth_scrolling(document: &Document) -> Result<(), JsValue> {
    for link in select_all(document, "a[href^=\"#\"]") {
        let href = link.get_attribute("href").unwrap_or_default();
        listen(&link, "click", move |event| {
            event.prevent_default();
            browser::scroll_to_section(href.trim_start_matches('#'));
        })?;
    }
    Ok(())
}

fn fade_in_on_scroll(document: &Document) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    add_class(&target, FADE_IN_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(FADE_IN_THRESHOLD));
    options.set_root_margin(FADE_IN_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for element in select_all(document, FADE_IN_ON_SCROLL) {
        observer.observe(&element);
    }
    Ok(())
}

fn parallax(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(hero) = select(document, ".hero-background")
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };
    let scroller = window.clone();
    listen(window, "scroll", move |_| {
        let offset = scroller.page_y_offset().unwrap_or(0.0);
        let _ = hero
            .style()
            .set_property("transform", &page::parallax_transform(offset));
    })
}

fn home(document: &Document) -> Result<(), JsValue> {
    if select(document, HERO_SLIDE_UPS[0].0).is_some() {
        for (selector, delay_ms) in HERO_SLIDE_UPS {
            if let Some(element) = select(document, selector) {
                set_timeout(delay_ms, move || add_class(&element, SLIDE_UP_CLASS))?;
            }
        }
    }

    if let Some(indicator) = select(document, ".hero-scroll-indicator") {
        listen(&indicator, "click", |_| {
            browser::scroll_to_section(SCROLL_INDICATOR_TARGET)
        })?;
    }
    Ok(())
}

fn contact_form(document: &Document) -> Result<(), JsValue> {
    let Some(form) = select(document, ".contact-form") else {
        return Ok(());
    };
    let button = form
        .query_selector("button[type=\"submit\"]")?
        .and_then(|b| b.dyn_into::<HtmlButtonElement>().ok());
    listen(&form, "submit", move |_| {
        if let Some(button) = &button {
            button.set_inner_html("<i class=\"fas fa-spinner fa-spin\"></i> Sending...");
            button.set_disabled(true);
        }
    })
}

fn carousel(document: &Document, api: HttpShopApi, location: String) {
    if select(document, ".carousel-container").is_none() {
        return;
    }
    let document = document.clone();
    spawn_local(async move {
        match api.gallery_images(&location).await {
            Ok(images) => {
                if let Err(e) = build_carousel(&document, images) {
                    warn!(error = ?e, "Could not build carousel");
                }
            }
            Err(e) => warn!(error = %e, location = %location, "Failed to load carousel images"),
        }
    });
}

fn build_carousel(document: &Document, images: Vec<GalleryImage>) -> Result<(), JsValue> {
    let Some(track) = document
        .get_element_by_id("carousel-track")
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };
    let Some(carousel) = Carousel::from_images(images) else {
        return Ok(());
    };

    for image in carousel.slides() {
        track.append_child(&slide(document, image)?)?;
    }

    let state = Rc::new(RefCell::new(carousel));
    let show = {
        let track = track.clone();
        move |carousel: &Carousel| {
            let _ = track
                .style()
                .set_property("transform", &carousel.track_transform());
        }
    };

    if let Some(prev) = select(document, ".carousel-prev") {
        let state = Rc::clone(&state);
        let show = show.clone();
        listen(&prev, "click", move |_| {
            let mut carousel = state.borrow_mut();
            carousel.prev();
            show(&carousel);
        })?;
    }
    if let Some(next) = select(document, ".carousel-next") {
        let state = Rc::clone(&state);
        let show = show.clone();
        listen(&next, "click", move |_| {
            let mut carousel = state.borrow_mut();
            carousel.next();
            show(&carousel);
        })?;
    }
    set_interval(AUTOPLAY_MS, move || {
        let mut carousel = state.borrow_mut();
        carousel.next();
        show(&carousel);
    })
}

fn slide(document: &Document, image: &GalleryImage) -> Result<Element, JsValue> {
    let slide = document.create_element("div")?;
    slide.set_class_name("carousel-slide");

    let img = document.create_element("img")?;
    img.set_attribute("src", &image.url)?;
    img.set_attribute("alt", &image.alt)?;
    img.set_attribute("loading", "lazy")?;

    let overlay = document.create_element("div")?;
    overlay.set_class_name("carousel-slide-overlay");
    let caption = document.create_element("h3")?;
    caption.set_text_content(Some(&image.alt));

    overlay.append_child(&caption)?;
    slide.append_child(&img)?;
    slide.append_child(&overlay)?;
    Ok(slide)
}

/// Expose the navigation helpers to page scripts as `window.TAJ`.
fn install_nav_helpers(window: &Window) -> Result<(), JsValue> {
    let helpers = js_sys::Object::new();
    let export = |name: &str, f: JsValue| {
        js_sys::Reflect::set(&helpers, &JsValue::from_str(name), &f).map(|_| ())
    };

    export(
        "scrollToSection",
        Closure::<dyn Fn(String)>::new(|id: String| browser::scroll_to_section(&id))
            .into_js_value(),
    )?;
    export(
        "navigateToHome",
        Closure::<dyn Fn()>::new(|| navigate(&nav::home())).into_js_value(),
    )?;
    export(
        "navigateToRestaurant",
        Closure::<dyn Fn(String)>::new(|l: String| navigate(&nav::restaurant(&l))).into_js_value(),
    )?;
    export(
        "navigateToMenu",
        Closure::<dyn Fn(String)>::new(|l: String| navigate(&nav::menu(&l))).into_js_value(),
    )?;
    export(
        "navigateToGallery",
        Closure::<dyn Fn(String)>::new(|l: String| navigate(&nav::gallery(&l))).into_js_value(),
    )?;
    export(
        "navigateToContact",
        Closure::<dyn Fn()>::new(|| navigate(&nav::contact())).into_js_value(),
    )?;
    export(
        "navigateToAbout",
        Closure::<dyn Fn()>::new(|| navigate(&nav::about())).into_js_value(),
    )?;

    js_sys::Reflect::set(window, &JsValue::from_str("TAJ"), &helpers)?;
    Ok(())
}

fn navigate(href: &str) {
    if let Ok(window) = browser::window() {
        if let Err(e) = window.location().set_href(href) {
            warn!(error = ?e, href, "Navigation failed");
        }
    }
}
