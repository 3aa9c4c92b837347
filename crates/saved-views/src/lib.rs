//! Saved-view normalization into view-filter transform parameters.
//!
//! Saved views come in two shapes: the current extension-based format and a
//! legacy format built from selector and property-bag blocks. Both normalize
//! into one canonical [`TransformParameters`] record that the downstream
//! view-filtering stage consumes: category and model id lists, draw
//! overrides, sub-category overrides, clip volumes, per-model category
//! visibility, and the view mode.
//!
//! # Example
//!
//! ```
//! use saved_views::{parse_saved_view, to_json_string, SavedView, ViewMode};
//!
//! let record = serde_json::json!({
//!     "savedViewData": {
//!         "itwin3dView": {
//!             "categories": { "enabled": "+1+4+1*2" },
//!             "models": { "enabled": ["0x20000000002"] }
//!         }
//!     }
//! });
//! let saved_view: SavedView = serde_json::from_value(record)?;
//! let params = parse_saved_view(&saved_view, ViewMode::FilterContent)?;
//! assert_eq!(params.categories, vec!["0x1", "0x5", "0x6", "0x7"]);
//! assert_eq!(params.models, vec!["0x20000000002"]);
//!
//! let json = to_json_string(&params, false)?;
//! assert!(json.ends_with("\"viewMode\":\"FilterContent\"}"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod clip;
pub mod codec;
pub mod error;
pub mod extensions;
pub mod id_list;
pub mod legacy_view;
pub mod parse;
pub mod saved_view;
pub mod types;

pub use codec::to_json_string;
pub use error::ParseError;
pub use extensions::{get_extension_value, ExtensionPayload, KnownExtension};
pub use id_list::{id_list, optional_id_list, IdSetSource};
pub use legacy_view::LegacyView;
pub use parse::{parse_legacy_saved_view, parse_saved_view};
pub use saved_view::{Extension, SavedView};
pub use types::{
    ClipData, Id64Array, Id64String, PerModelCategoryData, SubCategoryOverrideData,
    TransformParameters, ViewMode,
};
