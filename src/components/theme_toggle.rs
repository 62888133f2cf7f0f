//! Theme toggle behavior: startup resolution, the toggle control, and the
//! OS preference-change listener.
//!
//! Reads the persisted preference from `localStorage`, falling back to the
//! `prefers-color-scheme` media query, and applies the result as the
//! `data-theme` attribute on the `<html>` element. The toggle control writes
//! back to `localStorage` on every flip.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use crate::state::theme::{Theme, ThemeController, ThemePreferences};
use crate::util::storage;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use crate::util::dom;

/// localStorage key holding the explicit preference.
pub const STORAGE_KEY: &str = "theme";

/// Attribute on the document root that drives all theme CSS.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Id of the optional toggle control.
pub const TOGGLE_ID: &str = "theme-toggle";

#[cfg(feature = "hydrate")]
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Browser-backed preference host: `localStorage` for the persisted flag,
/// `matchMedia` for the OS preference, and the root `data-theme` attribute
/// for application.
#[derive(Clone, Copy)]
pub struct BrowserPreferences;

impl ThemePreferences for BrowserPreferences {
    fn stored(&self) -> Option<Theme> {
        storage::get(STORAGE_KEY).as_deref().and_then(Theme::parse)
    }

    fn store(&self, theme: Theme) {
        storage::set(STORAGE_KEY, theme.as_str());
    }

    fn system_prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
                .map_or(false, |query| query.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn apply(&self, theme: Theme) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(root) = dom::root_element() {
                let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }
}

/// Resolve and apply the startup theme, then wire the toggle control and
/// the OS preference-change listener. Returns the resolved startup theme.
///
/// A missing toggle control skips only the click wiring; resolution and the
/// OS listener still run.
pub fn wire_up() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let controller = Rc::new(RefCell::new(ThemeController::init(BrowserPreferences)));
        let startup = controller.borrow().current();

        if let Some(button) = dom::element_by_id(TOGGLE_ID) {
            let controller = Rc::clone(&controller);
            dom::listen(&button, "click", move |_: web_sys::Event| {
                controller.borrow_mut().toggle();
            });
        }

        if let Some(query) =
            web_sys::window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        {
            dom::listen(&query, "change", move |ev: web_sys::MediaQueryListEvent| {
                controller.borrow_mut().on_system_change(ev.matches());
            });
        }

        startup
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ThemeController::init(BrowserPreferences).current()
    }
}
