use super::*;

#[test]
fn empty_and_whitespace_values_are_blank() {
    assert!(is_blank(""));
    assert!(is_blank("   "));
    assert!(is_blank("\t\n"));
}

#[test]
fn surrounding_whitespace_does_not_hide_content() {
    assert!(!is_blank("x"));
    assert!(!is_blank("  x  "));
}
