//! Typed lookup into a saved view's extension store.
//!
//! Extensions ride alongside the view data as `{extensionName, data}`
//! records, the payload JSON-encoded inside the `data` string. The registry
//! below names the extensions this crate understands and ties each one to
//! the shape its payload decodes to, so callers never juggle raw names or
//! untyped values.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use saved_views_id64::Id64Array;

use crate::error::ParseError;
use crate::saved_view::Extension;
use crate::types::PerModelCategoryData;

// ── Registry ──────────────────────────────────────────────────────────────

/// Extensions the view parser understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownExtension {
    /// Emphasis overrides captured by the viewer.
    EmphasizeElements,
    /// Per-model category visibility overrides.
    PerModelCategoryVisibility,
}

impl KnownExtension {
    /// The `extensionName` value this extension is stored under.
    pub fn extension_name(self) -> &'static str {
        match self {
            KnownExtension::EmphasizeElements => "EmphasizeElements",
            KnownExtension::PerModelCategoryVisibility => "perModelCategoryVisibilityProps",
        }
    }
}

/// Payload shape of a known extension.
pub trait ExtensionPayload: DeserializeOwned {
    /// Registry entry whose `data` decodes to this shape.
    const EXTENSION: KnownExtension;
}

// ── Payload shapes ────────────────────────────────────────────────────────

/// Payload stored under [`KnownExtension::EmphasizeElements`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmphasizeElements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasize_elements_props: Option<EmphasizeElementsProps>,
}

/// Emphasis overrides: never/always drawn element sets and exclusivity.
///
/// Legacy views embed this same shape directly on the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmphasizeElementsProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub never_drawn: Option<Id64Array>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_drawn: Option<Id64Array>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_always_drawn_exclusive: Option<bool>,
}

impl ExtensionPayload for EmphasizeElements {
    const EXTENSION: KnownExtension = KnownExtension::EmphasizeElements;
}

impl ExtensionPayload for Vec<PerModelCategoryData> {
    const EXTENSION: KnownExtension = KnownExtension::PerModelCategoryVisibility;
}

// ── Lookup ────────────────────────────────────────────────────────────────

/// Decode the payload of extension `P` from `extensions`.
///
/// Returns `Ok(None)` when no record carries the extension's name or when
/// the matching record has no payload. A present payload that fails to
/// decode is an error; lookup never guesses.
pub fn get_extension_value<P: ExtensionPayload>(
    extensions: &[Extension],
) -> Result<Option<P>, ParseError> {
    let name = P::EXTENSION.extension_name();
    let Some(extension) = extensions.iter().find(|ext| ext.extension_name == name) else {
        return Ok(None);
    };
    if extension.data.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&extension.data)
        .map(Some)
        .map_err(|source| ParseError::ExtensionData { name, source })
}

/// Elements forced hidden by the emphasis extension, if recorded.
pub fn never_drawn(extensions: &[Extension]) -> Result<Option<Id64Array>, ParseError> {
    let payload = get_extension_value::<EmphasizeElements>(extensions)?;
    Ok(payload
        .and_then(|ext| ext.emphasize_elements_props)
        .and_then(|props| props.never_drawn))
}

/// Elements forced visible by the emphasis extension, if recorded.
pub fn always_drawn(extensions: &[Extension]) -> Result<Option<Id64Array>, ParseError> {
    let payload = get_extension_value::<EmphasizeElements>(extensions)?;
    Ok(payload
        .and_then(|ext| ext.emphasize_elements_props)
        .and_then(|props| props.always_drawn))
}

/// Whether everything outside the always-drawn set is hidden, if recorded.
pub fn is_always_drawn_exclusive(extensions: &[Extension]) -> Result<Option<bool>, ParseError> {
    let payload = get_extension_value::<EmphasizeElements>(extensions)?;
    Ok(payload
        .and_then(|ext| ext.emphasize_elements_props)
        .and_then(|props| props.is_always_drawn_exclusive))
}

/// Per-model category visibility overrides, if recorded.
pub fn per_model_category_visibility(
    extensions: &[Extension],
) -> Result<Option<Vec<PerModelCategoryData>>, ParseError> {
    get_extension_value(extensions)
}
