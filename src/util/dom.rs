//! Window/document lookup and element-read glue shared by components.
//!
//! Everything here requires a browser environment and is compiled only under
//! `hydrate`; callers guard on the `Option` returns when elements are
//! missing from the page.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// The page document, when running in a browser.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Element with the given id, if present.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn element_by_id(id: &str) -> Option<web_sys::Element> {
    document()?.get_element_by_id(id)
}

/// The `<html>` element carrying the `data-theme` attribute.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn root_element() -> Option<web_sys::Element> {
    document()?.document_element()
}

/// Inline style of the document root, for custom-property writes.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn root_style() -> Option<web_sys::CssStyleDeclaration> {
    root_element()?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
        .map(|el| el.style())
}

/// Elements matching `selector`, in document order. Invalid selectors and
/// empty matches both yield an empty list.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn select_all(document: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    let mut elements = Vec::new();
    for index in 0..list.length() {
        if let Some(el) = list
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        {
            elements.push(el);
        }
    }
    elements
}

/// Current value of the text input or textarea with the given id; missing
/// or non-text elements read as empty.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn field_value(id: &str) -> String {
    let Some(el) = element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

/// Attach a page-lifetime event listener, leaking the closure.
#[cfg(feature = "hydrate")]
pub fn listen<E>(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = wasm_bindgen::closure::Closure::<dyn FnMut(E)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
