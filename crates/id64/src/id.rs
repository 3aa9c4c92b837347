//! Well-formedness, parsing, and ordering helpers for normalized id strings.

use std::cmp::Ordering;

use crate::{Id64Array, Id64Error, Id64String};

/// The invalid id.
pub const INVALID_ID: &str = "0";

/// Check whether `id` is a well-formed normalized id string.
///
/// Well-formed means `"0"` or `0x` followed by one to sixteen lowercase hex
/// digits, the first of which is non-zero.
///
/// # Example
///
/// ```
/// use saved_views_id64::is_id64;
///
/// assert!(is_id64("0"));
/// assert!(is_id64("0x1"));
/// assert!(is_id64("0xffffffffffffffff"));
/// assert!(!is_id64("0x01"));
/// assert!(!is_id64("0X1"));
/// assert!(!is_id64("1"));
/// ```
pub fn is_id64(id: &str) -> bool {
    let bytes = id.as_bytes();
    if bytes == b"0" {
        return true;
    }
    if bytes.len() < 3 || bytes.len() > 18 || bytes[0] != b'0' || bytes[1] != b'x' {
        return false;
    }
    let digits = &bytes[2..];
    if digits[0] == b'0' {
        return false;
    }
    digits.iter().all(|&b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Check whether `id` is well-formed and not the invalid id.
pub fn is_valid_id64(id: &str) -> bool {
    id != INVALID_ID && is_id64(id)
}

/// Parse a well-formed id string into its numeric value.
///
/// The invalid id parses to zero.
pub fn id64_to_u64(id: &str) -> Result<u64, Id64Error> {
    if !is_id64(id) {
        return Err(Id64Error::MalformedId(id.to_string()));
    }
    if id == INVALID_ID {
        return Ok(0);
    }
    u64::from_str_radix(&id[2..], 16).map_err(|_| Id64Error::MalformedId(id.to_string()))
}

/// Render a numeric value as a normalized id string.
///
/// # Example
///
/// ```
/// use saved_views_id64::id64_from_u64;
///
/// assert_eq!(id64_from_u64(0), "0");
/// assert_eq!(id64_from_u64(255), "0xff");
/// ```
pub fn id64_from_u64(value: u64) -> Id64String {
    if value == 0 {
        return INVALID_ID.to_string();
    }
    format!("{value:#x}")
}

/// Compare two normalized id strings in numeric order.
///
/// Normalized ids carry no leading zeros, so a shorter string is numerically
/// smaller and equal-length strings order lexicographically. No parsing
/// needed.
pub fn cmp_id64(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Sort an id array into numeric order.
pub fn sort_id64_array(ids: &mut Id64Array) {
    ids.sort_by(|a, b| cmp_id64(a, b));
}
