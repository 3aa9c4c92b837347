//! Error types for saved-view normalization.

use saved_views_id64::Id64Error;
use thiserror::Error;

/// Errors produced while normalizing a saved view.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A compressed id collection in the view record failed to decode.
    #[error("compressed id set failed to decode: {0}")]
    CompressedIds(#[from] Id64Error),
    /// A present extension payload did not decode to its registered shape.
    #[error("extension {name:?} payload failed to parse: {source}")]
    ExtensionData {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
