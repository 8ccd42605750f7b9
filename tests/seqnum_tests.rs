//! Tests for SEQNUM parsing.
//!
//! Validates base selection, lenient truncation and strict rejection.

use kuevent::Error;
use kuevent::seqnum::{parse, parse_with};

// =============================================================================
// Lenient Parsing Tests
// =============================================================================

#[test]
fn test_decimal() {
    assert_eq!(parse(b"0"), Ok(0));
    assert_eq!(parse(b"42"), Ok(42));
    assert_eq!(parse(b"18446744073709551615"), Ok(u64::MAX));
}

#[test]
fn test_hex_prefix() {
    assert_eq!(parse(b"0x10"), Ok(16));
    assert_eq!(parse(b"0XfF"), Ok(255));
}

#[test]
fn test_octal_prefix() {
    assert_eq!(parse(b"010"), Ok(8));
    assert_eq!(parse(b"00"), Ok(0));
}

#[test]
fn test_hex_prefix_without_digits_parses_zero() {
    assert_eq!(parse(b"0x"), Ok(0));
    assert_eq!(parse(b"0xg"), Ok(0));
}

#[test]
fn test_octal_stops_at_eight() {
    assert_eq!(parse(b"018"), Ok(1));
}

#[test]
fn test_leading_whitespace_and_plus() {
    assert_eq!(parse(b"  \t7"), Ok(7));
    assert_eq!(parse(b"+7"), Ok(7));
    assert_eq!(parse(b" +0x7"), Ok(7));
}

#[test]
fn test_trailing_garbage_truncates() {
    assert_eq!(parse(b"123abc"), Ok(123));
    assert_eq!(parse(b"99 "), Ok(99));
}

#[test]
fn test_overflow_saturates() {
    assert_eq!(parse(b"18446744073709551616"), Ok(u64::MAX));
    assert_eq!(parse(b"0x1ffffffffffffffff"), Ok(u64::MAX));
}

#[test]
fn test_no_digits_is_missing() {
    let values: [&[u8]; 6] = [b"", b" ", b"+", b"-1", b"abc", b"++1"];
    for value in values {
        assert_eq!(
            parse(value),
            Err(Error::MissingSequenceNumber),
            "{:?}",
            String::from_utf8_lossy(value)
        );
    }
}

// =============================================================================
// Strict Parsing Tests
// =============================================================================

#[test]
fn test_strict_accepts_clean_values() {
    assert_eq!(parse_with(b"42", true), Ok(42));
    assert_eq!(parse_with(b"0x2a", true), Ok(42));
    assert_eq!(parse_with(b"052", true), Ok(42));
}

#[test]
fn test_strict_rejects_trailing_bytes() {
    assert_eq!(
        parse_with(b"42x", true),
        Err(Error::InvalidSequenceNumber {
            value: "42x".to_string()
        })
    );
}

#[test]
fn test_strict_rejects_overflow() {
    assert!(matches!(
        parse_with(b"99999999999999999999999", true),
        Err(Error::InvalidSequenceNumber { .. })
    ));
}

#[test]
fn test_strict_still_reports_missing_digits() {
    assert_eq!(parse_with(b"", true), Err(Error::MissingSequenceNumber));
}

#[test]
fn test_negative_sign_is_rejected() {
    assert_eq!(parse(b"-1"), Err(Error::MissingSequenceNumber));
    assert_eq!(parse(b" -0x10"), Err(Error::MissingSequenceNumber));
    assert_eq!(parse_with(b"-1", true), Err(Error::MissingSequenceNumber));
}
