//! The two normalization entry points.
//!
//! Both functions are pure: the same record and mode always produce the same
//! parameters, and nothing in the inputs is mutated.

use tracing::debug;

use crate::clip;
use crate::error::ParseError;
use crate::extensions;
use crate::id_list::{id_list, optional_id_list};
use crate::legacy_view::LegacyView;
use crate::saved_view::SavedView;
use crate::types::{TransformParameters, ViewMode};

/// Normalize a current-format saved view into filter parameters.
pub fn parse_saved_view(
    saved_view: &SavedView,
    view_mode: ViewMode,
) -> Result<TransformParameters, ParseError> {
    let view = &saved_view.saved_view_data.itwin3d_view;
    let categories = view.categories.as_ref();
    let models = view.models.as_ref();
    let params = TransformParameters {
        categories: id_list(categories.and_then(|list| list.enabled.as_ref()))?,
        models: id_list(models.and_then(|list| list.enabled.as_ref()))?,
        never_drawn: extensions::never_drawn(&saved_view.extensions)?,
        always_drawn: extensions::always_drawn(&saved_view.extensions)?,
        is_always_drawn_exclusive: extensions::is_always_drawn_exclusive(&saved_view.extensions)?,
        sub_category_ovr: view
            .display_style
            .as_ref()
            .and_then(|style| style.sub_category_overrides.clone()),
        clip: clip::clip_data_from_saved_view(view.clip_vectors.as_deref()),
        per_model_category_visibility: Some(
            extensions::per_model_category_visibility(&saved_view.extensions)?.unwrap_or_default(),
        ),
        hidden_categories: optional_id_list(categories.and_then(|list| list.disabled.as_ref()))?,
        hidden_models: optional_id_list(models.and_then(|list| list.disabled.as_ref()))?,
        view_mode,
    };
    debug!(
        "normalized saved view: {} categories, {} models",
        params.categories.len(),
        params.models.len()
    );
    Ok(params)
}

/// Normalize a legacy-format saved view into filter parameters.
pub fn parse_legacy_saved_view(
    view: &LegacyView,
    view_mode: ViewMode,
) -> Result<TransformParameters, ParseError> {
    let emphasize = view.emphasize_elements_props.as_ref();
    let params = TransformParameters {
        categories: id_list(view.category_selector_props.categories.as_ref())?,
        models: id_list(
            view.model_selector_props
                .as_ref()
                .and_then(|selector| selector.models.as_ref()),
        )?,
        never_drawn: emphasize.and_then(|props| props.never_drawn.clone()),
        always_drawn: emphasize.and_then(|props| props.always_drawn.clone()),
        is_always_drawn_exclusive: emphasize.and_then(|props| props.is_always_drawn_exclusive),
        sub_category_ovr: view
            .display_style_props
            .json_properties
            .as_ref()
            .and_then(|properties| properties.styles.as_ref())
            .and_then(|styles| styles.sub_category_ovr.clone()),
        clip: clip::clip_data_from_legacy_view(
            view.view_definition_props
                .json_properties
                .as_ref()
                .and_then(|properties| properties.view_details.as_ref())
                .and_then(|details| details.clip.as_deref()),
        ),
        per_model_category_visibility: view.per_model_category_visibility.clone(),
        hidden_categories: optional_id_list(view.hidden_categories.as_ref())?,
        hidden_models: optional_id_list(view.hidden_models.as_ref())?,
        view_mode,
    };
    debug!(
        "normalized legacy view: {} categories, {} models",
        params.categories.len(),
        params.models.len()
    );
    Ok(params)
}
