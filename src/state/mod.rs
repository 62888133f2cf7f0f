//! Pure state types, kept free of browser dependencies so resolution and
//! mutation rules test natively.

pub mod theme;
