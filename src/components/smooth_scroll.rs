//! Smooth scrolling for in-page anchor links.
//!
//! Clicks on `a[href^="#"]` links are intercepted and turned into an
//! animated scroll to the target's top edge. Bare `#` hrefs keep their
//! default jump behavior.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

#[cfg(feature = "hydrate")]
use crate::util::dom;

#[cfg(feature = "hydrate")]
const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

/// Fragment a clicked link should scroll to. Bare `#` hrefs and hrefs
/// without a leading `#` yield nothing and keep default navigation.
#[must_use]
pub fn anchor_fragment(href: &str) -> Option<&str> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        return None;
    }
    Some(fragment)
}

/// Intercept clicks on every in-page anchor present at wiring time. The
/// href is re-read at click time, so later href edits are honored.
pub fn wire_up() {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = dom::document() else { return };
        for anchor in dom::select_all(&document, ANCHOR_SELECTOR) {
            let link = anchor.clone();
            dom::listen(&anchor, "click", move |ev: web_sys::Event| {
                let Some(href) = link.get_attribute("href") else { return };
                let Some(fragment) = anchor_fragment(&href) else { return };
                ev.prevent_default();
                scroll_to(fragment);
            });
        }
    }
}

/// Animated scroll to the element with the given id, if it exists. The
/// default jump is already suppressed by the time this runs, so a missing
/// target means no movement at all.
#[cfg(feature = "hydrate")]
fn scroll_to(fragment: &str) {
    let Some(target) = dom::element_by_id(fragment) else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
