//! Identifier collections as view records store them.

use serde::{Deserialize, Serialize};

use saved_views_id64::{decompress_array, CompressedId64Set, Id64Array};

use crate::error::ParseError;

/// An id collection stored either compressed or as an explicit list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdSetSource {
    /// Run-length compressed form.
    Compressed(CompressedId64Set),
    /// Explicit list form.
    List(Id64Array),
}

/// Resolve an optional id collection into an id list.
///
/// An absent collection resolves to the empty list, a compressed collection
/// is decoded, and an explicit list passes through in its stored order.
pub fn id_list(source: Option<&IdSetSource>) -> Result<Id64Array, ParseError> {
    match source {
        None => Ok(Id64Array::new()),
        Some(IdSetSource::Compressed(set)) => Ok(decompress_array(set)?),
        Some(IdSetSource::List(ids)) => Ok(ids.clone()),
    }
}

/// Resolve an optional id collection, preserving absence.
pub fn optional_id_list(source: Option<&IdSetSource>) -> Result<Option<Id64Array>, ParseError> {
    match source {
        None => Ok(None),
        Some(_) => id_list(source).map(Some),
    }
}
