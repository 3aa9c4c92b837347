//! Input model for the current extension-based saved-view format.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::id_list::IdSetSource;
use crate::types::SubCategoryOverrideData;

/// A saved view in the current format.
///
/// Only the fields the normalizer reads are modeled; unknown keys in stored
/// records are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedView {
    pub saved_view_data: SavedViewData,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<Extension>,
}

/// Body of a current-format saved view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedViewData {
    pub itwin3d_view: ITwin3dView,
}

/// The 3d view body: visibility lists, display style, clip vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ITwin3dView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<VisibilityList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub models: Option<VisibilityList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_style: Option<DisplayStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_vectors: Option<Vec<SavedViewClipPrimitive>>,
}

/// Enabled and disabled halves of a visibility selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VisibilityList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<IdSetSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<IdSetSource>,
}

/// Display-style slice read by the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DisplayStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category_overrides: Option<Vec<SubCategoryOverrideData>>,
}

/// Named side-channel payload attached to a saved view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    pub extension_name: String,
    /// JSON-encoded payload; empty means no payload.
    #[serde(default)]
    pub data: String,
}

/// A clip primitive in the current schema, discriminated by which defining
/// field is present. Payloads stay raw until the current clip layout
/// settles upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SavedViewClipPrimitive {
    Planes { planes: Value },
    Shape { shape: Value },
    Unrecognized(Value),
}
