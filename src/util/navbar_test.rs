use super::*;

#[test]
fn zero_offset_is_not_scrolled() {
    assert!(!is_scrolled(0.0));
}

#[test]
fn any_positive_offset_is_scrolled() {
    assert!(is_scrolled(0.5));
    assert!(is_scrolled(1.0));
    assert!(is_scrolled(4_000.0));
}

#[test]
fn overscroll_above_top_is_not_scrolled() {
    assert!(!is_scrolled(-12.0));
}
