use std::borrow::Cow;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::{decode_percent, decode_percent_utf16};

fn decoded(input: &str) -> Option<String> {
    decode_percent(input).map(Cow::into_owned)
}

// === Pass-through ===

#[test]
fn plain_text_is_borrowed() {
    assert!(matches!(decode_percent("users"), Some(Cow::Borrowed("users"))));
}

#[test]
fn text_around_escapes_is_kept() {
    assert_eq!(decoded("a%20b%20c").as_deref(), Some("a b c"));
    assert_eq!(decoded("%41bc").as_deref(), Some("Abc"));
    assert_eq!(decoded("ab%43").as_deref(), Some("abC"));
}

// === Multi-byte sequences ===

#[test]
fn two_byte_sequence() {
    assert_eq!(decoded("caf%C3%A9").as_deref(), Some("café"));
}

#[test]
fn lowercase_hex_digits() {
    assert_eq!(decoded("caf%c3%a9").as_deref(), Some("café"));
}

#[test]
fn three_byte_sequence() {
    assert_eq!(decoded("%E2%82%AC").as_deref(), Some("€"));
}

#[test]
fn four_byte_sequence() {
    assert_eq!(decoded("%F0%9F%98%80").as_deref(), Some("😀"));
}

// === Failures ===

#[test]
fn truncated_escape_fails() {
    assert_eq!(decoded("abc%2"), None);
    assert_eq!(decoded("abc%"), None);
}

#[test]
fn non_hex_digit_fails() {
    assert_eq!(decoded("%zz"), None);
    assert_eq!(decoded("%2g"), None);
}

#[test]
fn lone_continuation_byte_fails() {
    assert_eq!(decoded("%80"), None);
}

#[test]
fn incomplete_sequence_followed_by_text_fails() {
    assert_eq!(decoded("%C3x"), None);
    assert_eq!(decoded("%C3"), None);
}

#[test]
fn overlong_encoding_fails() {
    // Overlong '/'
    assert_eq!(decoded("%C0%AF"), None);
    // Overlong NUL in three bytes
    assert_eq!(decoded("%E0%80%80"), None);
}

#[test]
fn surrogate_code_point_fails() {
    assert_eq!(decoded("%ED%A0%80"), None);
}

#[test]
fn above_unicode_range_fails() {
    assert_eq!(decoded("%F4%90%80%80"), None);
}

// === UTF-16 output ===

#[test]
fn utf16_bmp_code_point() {
    assert_eq!(decode_percent_utf16("%C3%A9"), Some(vec![0x00E9]));
}

#[test]
fn utf16_supplementary_code_point_is_surrogate_pair() {
    assert_eq!(decode_percent_utf16("x%F0%9F%98%80"), Some(vec![0x0078, 0xD83D, 0xDE00]));
}

#[test]
fn utf16_failure_matches_string_failure() {
    assert_eq!(decode_percent_utf16("%C3x"), None);
}

// === Properties ===

proptest! {
    #[test]
    fn text_without_percent_round_trips(s in "[^%]{0,40}") {
        prop_assert_eq!(decoded(&s), Some(s.clone()));
    }

    #[test]
    fn encoded_text_decodes_back(s in "\\PC{0,20}") {
        let encoded: String = s.bytes().map(|b| format!("%{b:02X}")).collect();
        prop_assert_eq!(decoded(&encoded), Some(s.clone()));
    }

    #[test]
    fn utf16_agrees_with_string(s in "\\PC{0,20}") {
        let encoded: String = s.bytes().map(|b| format!("%{b:02x}")).collect();
        let expected: Vec<u16> = s.encode_utf16().collect();
        prop_assert_eq!(decode_percent_utf16(&encoded), Some(expected));
    }
}
