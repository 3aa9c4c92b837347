//! Rendering filter parameters as JSON for transformation requests.

use crate::types::TransformParameters;

/// Render `params` as a single-line JSON string in its natural field order.
///
/// With `include_escape_characters` set, every double quote in the rendered
/// string gains a preceding backslash so the result can sit inside another
/// JSON string field. Nothing else changes between the two forms.
pub fn to_json_string(
    params: &TransformParameters,
    include_escape_characters: bool,
) -> serde_json::Result<String> {
    let json = serde_json::to_string(params)?;
    if include_escape_characters {
        Ok(json.replace('"', "\\\""))
    } else {
        Ok(json)
    }
}
