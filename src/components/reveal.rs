//! Scroll-reveal animation for card-style elements.
//!
//! Targets start invisible and offset downward, with a transition delay
//! staggered by document order. Once an element clears the visibility
//! threshold it fades into place and stays there; the animation is one-way
//! and never reverses when the element scrolls back out.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

#[cfg(feature = "hydrate")]
use crate::util::dom;

#[cfg(feature = "hydrate")]
const TARGET_SELECTOR: &str =
    ".stat-card, .skill-category, .card-item, .timeline-item, .education-card";

#[cfg(feature = "hydrate")]
const VISIBILITY_THRESHOLD: f64 = 0.15;

/// Pulls the trigger line 80px up from the viewport bottom, so elements
/// reveal only once they are well inside the view.
#[cfg(feature = "hydrate")]
const ROOT_MARGIN: &str = "0px 0px -80px 0px";

#[cfg(feature = "hydrate")]
const HIDDEN_OFFSET: &str = "translateY(30px)";

/// Transition for the target at `index`, delayed 0.1s per position so
/// neighboring cards reveal in a wave.
#[must_use]
pub fn staggered_transition(index: u32) -> String {
    let delay = f64::from(index) / 10.0;
    format!("opacity 0.6s ease {delay}s, transform 0.6s ease {delay}s")
}

/// Hide all reveal targets and observe them for their one-way reveal.
pub fn wire_up() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsValue, closure::Closure};

        let Some(document) = dom::document() else { return };
        let targets = dom::select_all(&document, TARGET_SELECTOR);

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from(VISIBILITY_THRESHOLD));
        options.set_root_margin(ROOT_MARGIN);

        let cb = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        reveal(&entry.target());
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let Ok(observer) =
            web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)
        else {
            return;
        };
        cb.forget();

        for (index, target) in (0u32..).zip(&targets) {
            prepare(target, index);
            observer.observe(target);
        }
    }
}

#[cfg(feature = "hydrate")]
fn prepare(target: &web_sys::Element, index: u32) {
    let Some(el) = target.dyn_ref::<web_sys::HtmlElement>() else {
        return;
    };
    let style = el.style();
    let _ = style.set_property("opacity", "0");
    let _ = style.set_property("transform", HIDDEN_OFFSET);
    let _ = style.set_property("transition", &staggered_transition(index));
}

#[cfg(feature = "hydrate")]
fn reveal(target: &web_sys::Element) {
    let Some(el) = target.dyn_ref::<web_sys::HtmlElement>() else {
        return;
    };
    let style = el.style();
    let _ = style.set_property("opacity", "1");
    let _ = style.set_property("transform", "translateY(0)");
}
