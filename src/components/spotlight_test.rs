#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn coordinates_format_as_pixel_lengths() {
    assert_eq!(px(0), "0px");
    assert_eq!(px(842), "842px");
    assert_eq!(px(-12), "-12px");
}

#[test]
fn wire_up_is_noop_but_callable() {
    wire_up();
}
