#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn fragment_hrefs_resolve_to_their_id() {
    assert_eq!(anchor_fragment("#about"), Some("about"));
    assert_eq!(anchor_fragment("#a"), Some("a"));
}

#[test]
fn bare_hash_keeps_default_navigation() {
    assert_eq!(anchor_fragment("#"), None);
}

#[test]
fn non_fragment_hrefs_are_ignored() {
    assert_eq!(anchor_fragment(""), None);
    assert_eq!(anchor_fragment("https://example.com/#about"), None);
    assert_eq!(anchor_fragment("about"), None);
}

#[test]
fn wire_up_is_noop_but_callable() {
    wire_up();
}
