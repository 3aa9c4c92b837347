//! Input model for the legacy saved-view format.
//!
//! Legacy views carry selector blocks at the top level and bury overrides
//! and clip volumes inside `jsonProperties` bags. Emphasis data sits
//! directly on the record instead of riding in an extension.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::extensions::EmphasizeElementsProps;
use crate::id_list::IdSetSource;
use crate::types::{PerModelCategoryData, PlaneSetProps, ShapeProps, SubCategoryOverrideData};

/// A saved view in the legacy format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyView {
    pub category_selector_props: CategorySelectorProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_selector_props: Option<ModelSelectorProps>,
    pub display_style_props: DisplayStyleProps,
    pub view_definition_props: ViewDefinitionProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasize_elements_props: Option<EmphasizeElementsProps>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_model_category_visibility: Option<Vec<PerModelCategoryData>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_categories: Option<IdSetSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_models: Option<IdSetSource>,
}

/// Category selection block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CategorySelectorProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<IdSetSource>,
}

/// Model selection block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ModelSelectorProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub models: Option<IdSetSource>,
}

/// Display-style block; overrides live in a nested property bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DisplayStyleProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_properties: Option<DisplayStyleJsonProperties>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DisplayStyleJsonProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<DisplayStyleSettings>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DisplayStyleSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category_ovr: Option<Vec<SubCategoryOverrideData>>,
}

/// View-definition block; the clip volume lives in a nested property bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ViewDefinitionProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_properties: Option<ViewDefinitionJsonProperties>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ViewDefinitionJsonProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_details: Option<ViewDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ViewDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip: Option<Vec<LegacyClipPrimitive>>,
}

/// A clip primitive in the legacy schema, discriminated by which defining
/// field is present. A primitive matching neither form decodes as
/// `Unrecognized` and is dropped by the clip collector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LegacyClipPrimitive {
    Planes { planes: PlaneSetProps },
    Shape { shape: ShapeProps },
    Unrecognized(Value),
}
