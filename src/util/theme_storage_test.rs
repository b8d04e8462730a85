#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn read_preference_is_none_off_browser() {
    assert_eq!(read_preference("theme"), None);
}

#[test]
fn persist_and_apply_are_noops_but_callable() {
    persist("theme", Theme::Light);
    apply(Theme::Dark);
    apply(Theme::Light);
}
