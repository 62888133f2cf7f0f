#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn alt_t_is_the_toggle_chord() {
    assert!(is_theme_toggle_chord(true, "t"));
}

#[test]
fn anything_else_is_not() {
    assert!(!is_theme_toggle_chord(false, "t"));
    assert!(!is_theme_toggle_chord(true, "T"));
    assert!(!is_theme_toggle_chord(true, "x"));
    assert!(!is_theme_toggle_chord(false, ""));
}

#[test]
fn wire_up_is_noop_but_callable() {
    wire_up();
}
