//! Page behavior components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component owns one user-visible behavior and exposes a `wire_up`
//! entry point that attaches its listeners. Components are independent;
//! a page missing one component's markup silently skips that component.

pub mod contact_form;
pub mod notification;
pub mod reveal;
pub mod scroll_spy;
pub mod shortcuts;
pub mod smooth_scroll;
pub mod spotlight;
pub mod theme_toggle;
