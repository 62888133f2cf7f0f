//! Scroll spy: keeps the navigation bar in sync with the section in view.
//!
//! Every `section` element is watched with a 30% visibility threshold. A
//! qualifying intersection clears the active marker from all navigation
//! items, then sets it on the one whose link targets the section.

#[cfg(test)]
#[path = "scroll_spy_test.rs"]
mod scroll_spy_test;

#[cfg(feature = "hydrate")]
use crate::util::dom;

const NAV_ITEM_SELECTOR: &str = ".nav-item";

#[cfg(feature = "hydrate")]
const SECTION_SELECTOR: &str = "section";
#[cfg(feature = "hydrate")]
const ACTIVE_CLASS: &str = "active";

#[cfg(feature = "hydrate")]
const VISIBILITY_THRESHOLD: f64 = 0.3;

/// Selector for the navigation item linking to `section_id`.
#[must_use]
pub fn nav_selector_for(section_id: &str) -> String {
    format!(r##"{NAV_ITEM_SELECTOR}[href="#{section_id}"]"##)
}

/// Observe every page section and keep the matching navigation item
/// marked active. When several sections intersect in one observation
/// batch, the last entry delivered wins.
pub fn wire_up() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast, JsValue, closure::Closure};

        let Some(document) = dom::document() else { return };
        let sections = dom::select_all(&document, SECTION_SELECTOR);
        let nav_items = dom::select_all(&document, NAV_ITEM_SELECTOR);

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from(VISIBILITY_THRESHOLD));

        let doc = document.clone();
        let cb = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        mark_active(&doc, &nav_items, &entry.target());
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

        for section in &sections {
            observer.observe(section);
        }
    }
}

/// Clear the active marker everywhere, then set it on the item linking to
/// `section`. A section without an id still clears the markers.
#[cfg(feature = "hydrate")]
fn mark_active(
    document: &web_sys::Document,
    nav_items: &[web_sys::Element],
    section: &web_sys::Element,
) {
    for item in nav_items {
        let _ = item.class_list().remove_1(ACTIVE_CLASS);
    }
    let Some(id) = section.get_attribute("id") else {
        return;
    };
    let Some(link) = document.query_selector(&nav_selector_for(&id)).ok().flatten() else {
        return;
    };
    let _ = link.class_list().add_1(ACTIVE_CLASS);
}
