#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn first_target_reveals_without_delay() {
    assert_eq!(
        staggered_transition(0),
        "opacity 0.6s ease 0s, transform 0.6s ease 0s"
    );
}

#[test]
fn delay_grows_a_tenth_of_a_second_per_position() {
    assert_eq!(
        staggered_transition(3),
        "opacity 0.6s ease 0.3s, transform 0.6s ease 0.3s"
    );
    assert_eq!(
        staggered_transition(12),
        "opacity 0.6s ease 1.2s, transform 0.6s ease 1.2s"
    );
}

#[test]
fn wire_up_is_noop_but_callable() {
    wire_up();
}
