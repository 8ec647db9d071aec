//! Check digit computation and structural validation for ISBN-10 and ISBN-13.
//!
//! Both formats carry a trailing check digit:
//! - **ISBN-13**: weights alternate 1, 3, 1, 3, ... over the first 12 digits
//!   and the check value is `10 - (sum mod 10)`.
//! - **ISBN-10**: weights descend 10, 9, ..., 2 over the first 9 digits and
//!   the check value is `11 - (sum mod 11)`.
//!
//! See <https://en.wikipedia.org/wiki/International_Standard_Book_Number#Check_digits>.
//!
//! Inputs handed to the `is_valid_as_*` and `compute_*` helpers must already be
//! bare ASCII digits of the documented length. Anything else is reported as
//! [`Error::MalformedDigits`], not as an invalid ISBN.

use tracing::trace;

use crate::error::{Error, Result};

/// Number of digits in an ISBN-13.
pub const LENGTH: usize = 13;

/// Number of digits in an ISBN-10.
pub const OLD_LENGTH: usize = 10;

/// GS1 prefix used when upgrading an ISBN-10.
const BOOKLAND_PREFIX: &str = "978";

/// Check whether a digit sequence is a valid ISBN-10 or ISBN-13.
///
/// The sequence may contain single hyphens between digit groups
/// (`978-4-8443-3667-9`). Empty input, any other character, leading,
/// trailing or doubled hyphens, and a digit count other than 10 or 13 all
/// yield `false`.
pub fn is_valid(sequence: &str) -> bool {
    if !is_digit_sequence(sequence) {
        return false;
    }

    let normalized = remove_hyphen(sequence);
    let result = match normalized.len() {
        LENGTH => is_valid_as_isbn13(&normalized),
        OLD_LENGTH => is_valid_as_isbn10(&normalized),
        _ => return false,
    };
    matches!(result, Ok(true))
}

/// Check a bare 13-digit number against its ISBN-13 check digit.
///
/// Returns [`Error::MalformedDigits`] unless `number` is exactly 13 ASCII
/// digits.
pub fn is_valid_as_isbn13(number: &str) -> Result<bool> {
    let digits = number.as_bytes();
    if digits.len() != LENGTH || !all_digits(digits) {
        return Err(Error::malformed("13 ASCII digits", digits));
    }

    let expected = compute_isbn13_check_digit(digits)?;
    let actual = digits[LENGTH - 1] - b'0';
    Ok(expected == actual || (expected == 10 && actual == 0))
}

/// Check a bare 10-digit number against its ISBN-10 check digit.
///
/// A computed value of 10 is only matched by `X`, which the digit-only
/// precondition never admits, so those numbers always check as invalid.
/// A computed value of 11 is matched by `0`.
pub fn is_valid_as_isbn10(number: &str) -> Result<bool> {
    let digits = number.as_bytes();
    if digits.len() != OLD_LENGTH || !all_digits(digits) {
        return Err(Error::malformed("10 ASCII digits", digits));
    }

    let expected = compute_isbn10_check_digit(digits)?;
    let check = digits[OLD_LENGTH - 1];
    Ok(match expected {
        10 => check == b'X',
        11 => check == b'0',
        n => check - b'0' == n,
    })
}

/// Compute the ISBN-13 check value over the first 12 digits.
///
/// Accepts 12 digits (check digit absent) or the full 13. The result is in
/// `1..=10`; callers write 10 as the digit `0`.
pub fn compute_isbn13_check_digit(digits: &[u8]) -> Result<u8> {
    if (digits.len() != LENGTH && digits.len() != LENGTH - 1) || !all_digits(digits) {
        return Err(Error::malformed("12 or 13 ASCII digits", digits));
    }

    let sum: u32 = digits[..LENGTH - 1]
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d - b'0') * (if i % 2 == 0 { 1 } else { 3 }))
        .sum();
    Ok((10 - sum % 10) as u8)
}

/// Compute the ISBN-10 check value over the first 9 digits.
///
/// Accepts 9 digits (check digit absent) or the full 10. The result is in
/// `1..=11`: 10 stands for `X`, 11 for `0`.
pub fn compute_isbn10_check_digit(digits: &[u8]) -> Result<u8> {
    if (digits.len() != OLD_LENGTH && digits.len() != OLD_LENGTH - 1) || !all_digits(digits) {
        return Err(Error::malformed("9 or 10 ASCII digits", digits));
    }

    let sum: u32 = digits[..OLD_LENGTH - 1]
        .iter()
        .zip((2..=10u32).rev())
        .map(|(&d, weight)| u32::from(d - b'0') * weight)
        .sum();
    Ok((11 - sum % 11) as u8)
}

/// Convert an ISBN-10 to an ISBN-13, recomputing the check digit.
///
/// Hyphenation mirrors the input: `4-10-109205-2` becomes
/// `978-4-10-109205-8` and `4101092052` becomes `9784101092058`. For
/// hyphenated input the last segment is assumed to be the lone check digit;
/// this holds for well-formed ISBN-10 strings and is not re-checked.
///
/// The old check digit itself is not verified. Returns
/// [`Error::InvalidIsbn`] when the input is not 10 digits once hyphens are
/// removed.
pub fn to_isbn13(isbn10: &str) -> Result<String> {
    let normalized = remove_hyphen(isbn10);
    if normalized.len() != OLD_LENGTH || !all_digits(normalized.as_bytes()) {
        return Err(Error::InvalidIsbn(isbn10.to_string()));
    }

    let body = format!("{BOOKLAND_PREFIX}{}", &normalized[..OLD_LENGTH - 1]);
    let check = compute_isbn13_check_digit(body.as_bytes())? % 10;
    trace!(isbn10, check, "converting ISBN-10 to ISBN-13");

    // Only digits and hyphens remain, so byte slicing is on char boundaries.
    let isbn13 = if isbn10.contains('-') {
        format!("{BOOKLAND_PREFIX}-{}-{check}", &isbn10[..isbn10.len() - 2])
    } else {
        format!("{BOOKLAND_PREFIX}{}{check}", &isbn10[..isbn10.len() - 1])
    };
    Ok(isbn13)
}

/// Remove every hyphen from `s`.
pub fn remove_hyphen(s: &str) -> String {
    s.replace('-', "")
}

fn all_digits(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_digit)
}

/// Match the shape `digit+('-'digit+)*`.
fn is_digit_sequence(s: &str) -> bool {
    let bytes = s.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) if first.is_ascii_digit() && last.is_ascii_digit() => {}
        _ => return false,
    }

    bytes.iter().all(|&b| b.is_ascii_digit() || b == b'-')
        && !bytes.windows(2).any(|pair| pair == b"--")
}
