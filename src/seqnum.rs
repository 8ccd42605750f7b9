//! `SEQNUM` value parsing.
//!
//! The kernel prints sequence numbers in decimal, but values read back from
//! other producers are parsed the way `strtoull(s, NULL, 0)` would:
//!
//! - leading ASCII whitespace and a single `+` are skipped,
//! - a `-` sign is not accepted, since a sequence number cannot be negative
//!   (`strtoull` would wrap it around instead),
//! - `0x`/`0X` followed by a hex digit selects base 16,
//! - otherwise a leading `0` selects base 8,
//! - otherwise base 10.
//!
//! Digits are consumed until the first byte that is invalid for the base.
//! In lenient mode whatever follows is ignored and a value that does not
//! fit in `u64` saturates to `u64::MAX`. Strict mode rejects both.
//! A value without a single digit is always an error.

use tracing::debug;

use crate::{Error, Result};

/// Parses `value` with lenient semantics.
pub fn parse(value: &[u8]) -> Result<u64> {
    parse_with(value, false)
}

pub fn parse_with(value: &[u8], strict: bool) -> Result<u64> {
    let mut rest = value;
    while let [b' ' | b'\t'..=b'\r', tail @ ..] = rest {
        rest = tail;
    }
    if let [b'+', tail @ ..] = rest {
        rest = tail;
    }

    let (radix, rest) = match rest {
        [b'0', b'x' | b'X', hex, ..] if hex.is_ascii_hexdigit() => (16, &rest[2..]),
        [b'0', ..] => (8, rest),
        _ => (10, rest),
    };

    let end = rest
        .iter()
        .position(|&ch| !is_digit(ch, radix))
        .unwrap_or(rest.len());
    let (digits, trailing) = rest.split_at(end);

    if digits.is_empty() {
        return Err(Error::MissingSequenceNumber);
    }

    let num = match to_u64(digits, radix) {
        Some(num) => num,
        None if strict => return Err(Error::invalid_seqnum(value)),
        None => {
            debug!(value = %String::from_utf8_lossy(value), "SEQNUM overflows u64, saturating");
            u64::MAX
        }
    };

    if !trailing.is_empty() {
        if strict {
            return Err(Error::invalid_seqnum(value));
        }
        debug!(
            value = %String::from_utf8_lossy(value),
            ignored = trailing.len(),
            "ignoring trailing bytes after SEQNUM"
        );
    }

    Ok(num)
}

fn is_digit(ch: u8, radix: u32) -> bool {
    match radix {
        8 => matches!(ch, b'0'..=b'7'),
        16 => ch.is_ascii_hexdigit(),
        _ => ch.is_ascii_digit(),
    }
}

// `digits` holds only ASCII digits valid for `radix`, so `None` means overflow.
fn to_u64(digits: &[u8], radix: u32) -> Option<u64> {
    if radix == 10 {
        return ::atoi_simd::parse::<u64>(digits).ok();
    }
    let str = std::str::from_utf8(digits).ok()?;
    u64::from_str_radix(str, radix).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_classes() {
        assert!(is_digit(b'7', 8));
        assert!(!is_digit(b'8', 8));
        assert!(is_digit(b'f', 16));
        assert!(is_digit(b'F', 16));
        assert!(!is_digit(b'a', 10));
    }

    #[test]
    fn octal_prefix_is_a_digit() {
        assert_eq!(to_u64(b"0", 8), Some(0));
        assert_eq!(to_u64(b"017", 8), Some(15));
    }

    #[test]
    fn overflow_is_none() {
        assert_eq!(to_u64(b"18446744073709551616", 10), None);
        assert_eq!(to_u64(b"10000000000000000", 16), None);
        assert_eq!(to_u64(b"18446744073709551615", 10), Some(u64::MAX));
    }
}
