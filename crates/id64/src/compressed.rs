//! Run-length codec for ascending id sequences.
//!
//! A compressed set is a sequence of `+delta` tokens, each optionally
//! followed by `*count`, with delta and count written as one to sixteen hex
//! digits. Decoding keeps a running id starting at zero and adds `delta` to
//! it `count` times, emitting the id after every addition. The empty string
//! is the empty set.

use crate::id::{id64_from_u64, id64_to_u64, is_valid_id64, sort_id64_array};
use crate::{CompressedId64Set, Id64Array, Id64Error, Id64String};

/// Decode a compressed id set into its ascending id sequence.
///
/// Digits are accepted in either case; emitted ids are normalized lowercase.
///
/// # Example
///
/// ```
/// use saved_views_id64::decompress_array;
///
/// assert_eq!(decompress_array("")?, Vec::<String>::new());
/// assert_eq!(decompress_array("+1+4+1*2")?, vec!["0x1", "0x5", "0x6", "0x7"]);
/// # Ok::<(), saved_views_id64::Id64Error>(())
/// ```
pub fn decompress_array(set: &str) -> Result<Id64Array, Id64Error> {
    let bytes = set.as_bytes();
    let mut ids = Id64Array::new();
    let mut current: u64 = 0;
    let mut pos = 0;
    while pos < bytes.len() {
        if bytes[pos] != b'+' {
            return Err(Id64Error::MalformedSet {
                offset: pos,
                reason: "expected '+'",
            });
        }
        let token_start = pos;
        pos += 1;
        let (delta, next) = read_hex(bytes, pos)?;
        pos = next;
        if delta == 0 {
            return Err(Id64Error::MalformedSet {
                offset: token_start,
                reason: "zero delta",
            });
        }
        let mut count: u64 = 1;
        if pos < bytes.len() && bytes[pos] == b'*' {
            pos += 1;
            let (parsed, next) = read_hex(bytes, pos)?;
            pos = next;
            if parsed == 0 {
                return Err(Id64Error::MalformedSet {
                    offset: token_start,
                    reason: "zero count",
                });
            }
            count = parsed;
        }
        // The whole run must fit in the id range before any ids materialize.
        if delta
            .checked_mul(count)
            .and_then(|span| current.checked_add(span))
            .is_none()
        {
            return Err(Id64Error::MalformedSet {
                offset: token_start,
                reason: "id overflow",
            });
        }
        for _ in 0..count {
            current += delta;
            ids.push(id64_from_u64(current));
        }
    }
    Ok(ids)
}

/// Encode an ascending duplicate-free sequence of valid ids.
///
/// Consecutive equal deltas merge into a single `*count` token. Fails with
/// [`Id64Error::MalformedId`] when an id is malformed or the invalid id, and
/// with [`Id64Error::UnorderedIds`] when the sequence is not strictly
/// ascending.
///
/// # Example
///
/// ```
/// use saved_views_id64::compress_ids;
///
/// let ids = vec!["0x1".to_string(), "0x5".to_string(), "0x6".to_string(), "0x7".to_string()];
/// assert_eq!(compress_ids(&ids)?, "+1+4+1*2");
/// # Ok::<(), saved_views_id64::Id64Error>(())
/// ```
pub fn compress_ids(ids: &[Id64String]) -> Result<CompressedId64Set, Id64Error> {
    let mut out = CompressedId64Set::new();
    let mut previous: u64 = 0;
    let mut run_delta: u64 = 0;
    let mut run_length: u64 = 0;
    for id in ids {
        if !is_valid_id64(id) {
            return Err(Id64Error::MalformedId(id.clone()));
        }
        let value = id64_to_u64(id)?;
        if value <= previous {
            return Err(Id64Error::UnorderedIds);
        }
        let delta = value - previous;
        previous = value;
        if delta == run_delta {
            run_length += 1;
        } else {
            flush_run(&mut out, run_delta, run_length);
            run_delta = delta;
            run_length = 1;
        }
    }
    flush_run(&mut out, run_delta, run_length);
    Ok(out)
}

/// Sort and deduplicate a copy of `ids` numerically, then encode it.
///
/// # Example
///
/// ```
/// use saved_views_id64::compress_array;
///
/// let ids = vec!["0x5".to_string(), "0x1".to_string(), "0x5".to_string()];
/// assert_eq!(compress_array(&ids)?, "+1+4");
/// # Ok::<(), saved_views_id64::Id64Error>(())
/// ```
pub fn compress_array(ids: &[Id64String]) -> Result<CompressedId64Set, Id64Error> {
    let mut sorted = ids.to_vec();
    sort_id64_array(&mut sorted);
    sorted.dedup();
    compress_ids(&sorted)
}

fn flush_run(out: &mut String, delta: u64, length: u64) {
    if length == 0 {
        return;
    }
    out.push('+');
    out.push_str(&format!("{delta:x}"));
    if length > 1 {
        out.push('*');
        out.push_str(&format!("{length:x}"));
    }
}

fn read_hex(bytes: &[u8], start: usize) -> Result<(u64, usize), Id64Error> {
    let mut pos = start;
    let mut value: u64 = 0;
    while pos < bytes.len() {
        let digit = match hex_digit(bytes[pos]) {
            Some(digit) => digit,
            None => break,
        };
        if pos - start == 16 {
            return Err(Id64Error::MalformedSet {
                offset: start,
                reason: "hex run too long",
            });
        }
        value = (value << 4) | u64::from(digit);
        pos += 1;
    }
    if pos == start {
        return Err(Id64Error::MalformedSet {
            offset: start,
            reason: "expected hex digits",
        });
    }
    Ok((value, pos))
}

fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
