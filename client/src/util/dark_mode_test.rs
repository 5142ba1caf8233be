#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_defaults_to_light_outside_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_preference() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn theme_names() {
    assert_eq!(theme_name(true), "dark");
    assert_eq!(theme_name(false), "light");
    apply(true);
}
