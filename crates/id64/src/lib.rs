//! Normalized 64-bit id strings and the compressed id-set codec.
//!
//! An id string is `"0"` (the invalid id) or `0x` followed by one to sixteen
//! lowercase hex digits with no leading zero. Ascending duplicate-free id
//! sequences compress into a run-length string of hex deltas.
//!
//! # Example
//!
//! ```
//! use saved_views_id64::{compress_array, decompress_array};
//!
//! let ids = vec!["0x5".to_string(), "0x1".to_string(), "0x6".to_string(), "0x7".to_string()];
//! let compressed = compress_array(&ids)?;
//! assert_eq!(compressed, "+1+4+1*2");
//! assert_eq!(decompress_array(&compressed)?, vec!["0x1", "0x5", "0x6", "0x7"]);
//! # Ok::<(), saved_views_id64::Id64Error>(())
//! ```

use thiserror::Error;

pub mod compressed;
pub mod id;

pub use compressed::{compress_array, compress_ids, decompress_array};
pub use id::{cmp_id64, id64_from_u64, id64_to_u64, is_id64, is_valid_id64, sort_id64_array};

/// A 64-bit id in its normalized string form.
pub type Id64String = String;

/// An ordered sequence of id strings.
pub type Id64Array = Vec<Id64String>;

/// Compact string encoding of an ascending duplicate-free id set.
pub type CompressedId64Set = String;

/// Errors produced by id parsing and the compressed-set codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Id64Error {
    /// The input is not a well-formed id usable in a compressed set.
    #[error("malformed id: {0:?}")]
    MalformedId(String),
    /// Ids handed to the compressor were not strictly ascending.
    #[error("ids must be strictly ascending without duplicates")]
    UnorderedIds,
    /// A compressed id-set string failed to decode.
    #[error("malformed compressed id set at byte {offset}: {reason}")]
    MalformedSet {
        /// Byte offset where decoding stopped.
        offset: usize,
        /// What the decoder expected at that point.
        reason: &'static str,
    },
}
