#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn apply_language_returns_code_without_browser() {
    assert_eq!(apply_language(Language::Fr), "fr");
    assert_eq!(apply_language(Language::En), "en");
}

#[test]
fn scroll_to_top_is_noop_but_callable() {
    scroll_to_top();
}
