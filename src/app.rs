//! Application bootstrap: wires every page behavior exactly once.

use crate::components::{
    contact_form, reveal, scroll_spy, shortcuts, smooth_scroll, spotlight, theme_toggle,
};

/// Wire every page behavior, deferring to `DOMContentLoaded` when the
/// script runs before the document has finished parsing.
pub fn mount() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast, closure::Closure};

        if let Some(document) = crate::util::dom::document() {
            if document.ready_state() == "loading" {
                let cb = Closure::wrap(Box::new(wire_all) as Box<dyn FnMut()>);
                let _ = document.add_event_listener_with_callback(
                    "DOMContentLoaded",
                    cb.as_ref().unchecked_ref(),
                );
                cb.forget();
                return;
            }
        }
    }
    wire_all();
}

fn wire_all() {
    let theme = theme_toggle::wire_up();
    contact_form::wire_up();
    scroll_spy::wire_up();
    reveal::wire_up();
    smooth_scroll::wire_up();
    spotlight::wire_up();
    shortcuts::wire_up();

    log::info!("portfolio initialized");
    log::info!("theme: {}", theme.as_str());
}
