//! Wire types shared by both saved-view formats and the canonical output.

use serde::{Deserialize, Serialize};

pub use saved_views_id64::{Id64Array, Id64String};

// ── View mode ─────────────────────────────────────────────────────────────

/// How the downstream filter treats content added after the view was saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    /// Newly added content stays visible alongside the saved selection.
    IncludeNewContent,
    /// Only content captured by the saved selection stays visible.
    FilterContent,
}

// ── Canonical output record ───────────────────────────────────────────────

/// Canonical filter parameters handed to the view-filtering stage.
///
/// Built fresh by each parse call; field order here is the serialization
/// order the downstream stage consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformParameters {
    /// Categories kept visible. Empty when the source recorded none.
    pub categories: Id64Array,
    /// Models kept visible. Empty when the source recorded none.
    pub models: Id64Array,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub never_drawn: Option<Id64Array>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_drawn: Option<Id64Array>,
    /// When set, elements outside `alwaysDrawn` are hidden entirely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_always_drawn_exclusive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category_ovr: Option<Vec<SubCategoryOverrideData>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip: Option<ClipData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_model_category_visibility: Option<Vec<PerModelCategoryData>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_categories: Option<Id64Array>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_models: Option<Id64Array>,
    pub view_mode: ViewMode,
}

// ── Overrides ─────────────────────────────────────────────────────────────

/// Appearance override for a single sub-category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryOverrideData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<Id64String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invisible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Id64String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<Id64String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transp_fill: Option<f64>,
}

/// Category visibility pinned for one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerModelCategoryData {
    pub model_id: Id64String,
    pub category_id: Id64String,
    pub visible: bool,
}

// ── Clip volumes ──────────────────────────────────────────────────────────

/// One convex plane set; each planes-variant clip primitive contributes its
/// whole list as a single entry.
pub type PlaneSetProps = Vec<ClipPlaneProps>;

/// Clip volume collected from a view's recognized clip primitives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shapes: Option<Vec<ShapeProps>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planes: Option<Vec<PlaneSetProps>>,
}

/// A single clipping plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ClipPlaneProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<[f64; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dist: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invisible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interior: Option<bool>,
}

/// An extruded polygon clip with optional transform and z extents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeProps {
    pub points: Vec<[f64; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trans: Option<[[f64; 4]; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zlow: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zhigh: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invisible: Option<bool>,
}
