//! Trailing debounce over browser timeouts.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::rc::Rc;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

/// Coalesces a burst of triggers into one trailing action call.
///
/// Each trigger arms a fresh timeout carrying that trigger's payload and
/// replaces the previous one, cancelling it, so the action runs once per
/// burst with the most recent payload. The pending timeout is owned solely
/// by the wrapper. Without a browser event loop there are no timers, so
/// native triggers never deliver.
pub struct Debounced<T: 'static> {
    delay_ms: u32,
    action: Rc<dyn Fn(T)>,
    #[cfg(feature = "hydrate")]
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl<T: 'static> Debounced<T> {
    /// Wrap `action` so it runs `delay_ms` after the last trigger in a burst.
    #[must_use]
    pub fn new(delay_ms: u32, action: impl Fn(T) + 'static) -> Self {
        Self {
            delay_ms,
            action: Rc::new(action),
            #[cfg(feature = "hydrate")]
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Schedule `value` for delivery, replacing any pending delivery.
    pub fn trigger(&self, value: T) {
        #[cfg(feature = "hydrate")]
        {
            let action = Rc::clone(&self.action);
            let pending = Rc::clone(&self.pending);
            let timeout = Timeout::new(self.delay_ms, move || {
                pending.borrow_mut().take();
                action(value);
            });
            // Replacing the holder drops, and thereby cancels, the
            // previously armed timeout.
            *self.pending.borrow_mut() = Some(timeout);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.action, self.delay_ms, value);
        }
    }
}
