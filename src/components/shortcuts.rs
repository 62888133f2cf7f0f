//! Keyboard accessibility shortcuts.
//!
//! Alt+t synthesizes a click on the theme toggle control, so the keyboard
//! path and the pointer path share one code path.

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

#[cfg(feature = "hydrate")]
use crate::components::theme_toggle;
#[cfg(feature = "hydrate")]
use crate::util::dom;

/// Chord that toggles the theme. Key matching is case-sensitive, so
/// Alt+Shift+T reports `"T"` and does not qualify.
#[must_use]
pub fn is_theme_toggle_chord(alt: bool, key: &str) -> bool {
    alt && key == "t"
}

/// Listen for the toggle chord on the whole document.
pub fn wire_up() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = dom::document() else { return };
        dom::listen(&document, "keydown", move |ev: web_sys::KeyboardEvent| {
            if !is_theme_toggle_chord(ev.alt_key(), &ev.key()) {
                return;
            }
            ev.prevent_default();
            let Some(toggle) = dom::element_by_id(theme_toggle::TOGGLE_ID) else {
                return;
            };
            if let Some(toggle) = toggle.dyn_ref::<web_sys::HtmlElement>() {
                toggle.click();
            }
        });
    }
}
