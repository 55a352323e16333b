//! Page detection and the timings of the page-specific animations.

/// Which kind of page is showing, from its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Home,
    Restaurant,
    Menu,
    Gallery,
    Contact,
    About,
    Other,
}

impl PageKind {
    /// Detect the page kind. Restaurant sub-pages are checked before the
    /// restaurant page itself.
    pub fn detect(path: &str) -> Self {
        let restaurant = path.contains("/taj-");
        if path == "/" || path == "/index.html" {
            PageKind::Home
        } else if restaurant && path.contains("/menu") {
            PageKind::Menu
        } else if restaurant && path.contains("/gallery") {
            PageKind::Gallery
        } else if restaurant {
            PageKind::Restaurant
        } else if path.contains("/contact") {
            PageKind::Contact
        } else if path.contains("/about") {
            PageKind::About
        } else {
            PageKind::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::Restaurant => "restaurant",
            PageKind::Menu => "menu",
            PageKind::Gallery => "gallery",
            PageKind::Contact => "contact",
            PageKind::About => "about",
            PageKind::Other => "other",
        }
    }

    /// Elements faded in one after another on this page, and the delay
    /// between them.
    pub fn stagger(&self) -> Option<Stagger> {
        let (selector, step_ms) = match self {
            PageKind::Restaurant => (".menu-card", 200),
            PageKind::Menu => (".menu-item", 100),
            PageKind::Gallery => (".gallery-item", 50),
            PageKind::About => (".value-card", 300),
            _ => return None,
        };
        Some(Stagger { selector, step_ms })
    }
}

/// A staggered fade-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub selector: &'static str,
    pub step_ms: u32,
}

impl Stagger {
    /// Delay before the element at `index` fades in.
    pub fn delay_ms(&self, index: usize) -> u32 {
        u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.step_ms)
    }
}

/// Class added by fade-in animations.
pub const FADE_IN_CLASS: &str = "animate-fade-in";

/// Class added by the home hero slide-ups.
pub const SLIDE_UP_CLASS: &str = "animate-slide-up";

/// Elements faded in the first time they scroll into view.
pub const FADE_IN_ON_SCROLL: &str = ".menu-card, .location-card, .contact-method, .menu-section, .locations-section, .contact-section";

pub const FADE_IN_THRESHOLD: f64 = 0.1;
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Home hero elements and when each slides up.
pub const HERO_SLIDE_UPS: [(&str, u32); 4] = [
    (".hero-title", 300),
    (".hero-subtitle", 600),
    (".hero-description", 900),
    (".hero-buttons", 1200),
];

/// Section the hero scroll indicator jumps to.
pub const SCROLL_INDICATOR_TARGET: &str = "locations-section";

/// Hero background moves against the scroll at this rate.
pub const PARALLAX_RATE: f64 = -0.5;

/// `transform` for the hero background at a scroll offset.
pub fn parallax_transform(scroll_y: f64) -> String {
    let offset = scroll_y * PARALLAX_RATE;
    // `0.0 * -0.5` is `-0.0`, which would print as "-0".
    let offset = if offset == 0.0 { 0.0 } else { offset };
    format!("translateY({}px)", offset)
}

/// Navigation targets exposed to page scripts.
pub mod nav {
    pub fn home() -> String {
        "/".to_string()
    }

    pub fn restaurant(location: &str) -> String {
        format!("/taj-{}", location)
    }

    pub fn menu(location: &str) -> String {
        format!("/taj-{}/menu", location)
    }

    pub fn gallery(location: &str) -> String {
        format!("/taj-{}/gallery", location)
    }

    pub fn contact() -> String {
        "/contact".to_string()
    }

    pub fn about() -> String {
        "/about".to_string()
    }
}
