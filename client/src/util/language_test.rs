#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_default_in_non_hydrate_tests() {
    assert_eq!(read_preference(), Language::En);
}

#[test]
fn select_returns_chosen_language() {
    assert_eq!(select(Language::Ar), Language::Ar);
    assert_eq!(select(Language::En), Language::En);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Language::Ar);
    apply(Language::En);
}
