//! Utility helpers shared across behavior modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from behavior logic
//! so components stay small and the pure parts stay natively testable.

pub mod debounce;
pub mod dom;
pub mod storage;
