//! Cursor spotlight: mirrors the pointer position into two CSS custom
//! properties consumed by decorative styling.
//!
//! Updates run through a short trailing debounce, so a burst of pointer
//! events costs a single style write.

#[cfg(test)]
#[path = "spotlight_test.rs"]
mod spotlight_test;

#[cfg(feature = "hydrate")]
use crate::util::debounce::Debounced;
#[cfg(feature = "hydrate")]
use crate::util::dom;

#[cfg(feature = "hydrate")]
const CURSOR_X_PROP: &str = "--cursor-x";
#[cfg(feature = "hydrate")]
const CURSOR_Y_PROP: &str = "--cursor-y";

#[cfg(feature = "hydrate")]
const POINTER_DEBOUNCE_MS: u32 = 10;

/// Pixel string for a viewport coordinate.
#[must_use]
pub fn px(value: i32) -> String {
    format!("{value}px")
}

/// Follow the pointer and publish its viewport coordinates on the
/// document root.
pub fn wire_up() {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = dom::document() else { return };

        let write = Debounced::new(POINTER_DEBOUNCE_MS, |(x, y): (i32, i32)| {
            let Some(style) = dom::root_style() else { return };
            let _ = style.set_property(CURSOR_X_PROP, &px(x));
            let _ = style.set_property(CURSOR_Y_PROP, &px(y));
        });

        dom::listen(&document, "mousemove", move |ev: web_sys::MouseEvent| {
            write.trigger((ev.client_x(), ev.client_y()));
        });
    }
}
