//! Transient toast notifications.
//!
//! Each call builds a fresh element with a full inline style reset, slides
//! it in from the right edge, holds it, slides it back out, and removes it
//! from the document. Calls never deduplicate or cancel one another, so
//! rapid triggers stack their toasts at the same anchor point.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use crate::state::theme::Theme;

#[cfg(feature = "hydrate")]
use crate::components::theme_toggle;
#[cfg(feature = "hydrate")]
use crate::util::dom;

/// What a notification reports. Picks the background color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

// Catppuccin accents: macchiato shades on dark, latte shades on light.
const GREEN_DARK: &str = "#a6da95";
const GREEN_LIGHT: &str = "#40a02b";
const RED_DARK: &str = "#ed8796";
const RED_LIGHT: &str = "#d20f39";

/// Delay before the slide-in starts, so the offscreen styles commit first.
#[cfg(feature = "hydrate")]
const SLIDE_IN_DELAY_MS: u64 = 10;

/// How long the toast stays fully visible.
#[cfg(feature = "hydrate")]
const VISIBLE_MS: u64 = 5000;

/// Slide-out duration. Matches the inline `transition` value.
#[cfg(feature = "hydrate")]
const SLIDE_OUT_MS: u64 = 300;

#[cfg(feature = "hydrate")]
const OFFSCREEN_TRANSFORM: &str = "translateX(400px)";

/// Background color for a toast of the given severity under the given
/// theme. Info toasts share the error palette.
#[must_use]
pub fn background_color(severity: Severity, theme: Theme) -> &'static str {
    match (severity, theme) {
        (Severity::Success, Theme::Dark) => GREEN_DARK,
        (Severity::Success, Theme::Light) => GREEN_LIGHT,
        (Severity::Error | Severity::Info, Theme::Dark) => RED_DARK,
        (Severity::Error | Severity::Info, Theme::Light) => RED_LIGHT,
    }
}

/// Show `message` as a toast. The color is resolved against the document
/// theme at call time, not at slide-in time.
pub fn show(message: &str, severity: Severity) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = dom::document() else { return };
        let Ok(el) = document.create_element("div") else { return };
        el.set_text_content(Some(message));

        let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() else { return };
        let style = el.style();
        for (property, value) in [
            ("position", "fixed"),
            ("top", "100px"),
            ("right", "20px"),
            ("padding", "16px 24px"),
            ("border-radius", "10px"),
            ("background-color", background_color(severity, document_theme())),
            ("color", "white"),
            ("font-weight", "600"),
            ("max-width", "400px"),
            ("box-shadow", "0 4px 12px rgba(0, 0, 0, 0.3)"),
            ("z-index", "9999"),
            ("opacity", "0"),
            ("transform", OFFSCREEN_TRANSFORM),
            ("transition", "all 0.3s ease"),
        ] {
            let _ = style.set_property(property, value);
        }

        let Some(body) = document.body() else { return };
        let _ = body.append_child(&el);

        wasm_bindgen_futures::spawn_local(async move {
            let style = el.style();

            gloo_timers::future::sleep(std::time::Duration::from_millis(SLIDE_IN_DELAY_MS)).await;
            let _ = style.set_property("opacity", "1");
            let _ = style.set_property("transform", "translateX(0)");

            gloo_timers::future::sleep(std::time::Duration::from_millis(VISIBLE_MS)).await;
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("transform", OFFSCREEN_TRANSFORM);

            gloo_timers::future::sleep(std::time::Duration::from_millis(SLIDE_OUT_MS)).await;
            el.remove();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (message, severity);
    }
}

/// Theme the document is currently rendered in, read off the root
/// `data-theme` attribute. Anything but an explicit dark marker counts as
/// light, matching the CSS default.
#[cfg(feature = "hydrate")]
fn document_theme() -> Theme {
    dom::root_element()
        .and_then(|root| root.get_attribute(theme_toggle::THEME_ATTRIBUTE))
        .as_deref()
        .and_then(Theme::parse)
        .unwrap_or(Theme::Light)
}
