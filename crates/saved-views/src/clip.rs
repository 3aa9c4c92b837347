//! Clip-volume extraction from saved views.

use tracing::debug;

use crate::legacy_view::LegacyClipPrimitive;
use crate::saved_view::SavedViewClipPrimitive;
use crate::types::{ClipData, PlaneSetProps, ShapeProps};

/// Collect the clip volume recorded in a legacy view.
///
/// Recognized primitives partition into shape and plane-set lists in their
/// stored order; unrecognized primitives are dropped. Returns `None` when
/// nothing recognizable remains.
pub fn clip_data_from_legacy_view(clip: Option<&[LegacyClipPrimitive]>) -> Option<ClipData> {
    let primitives = clip?;
    let mut shapes: Vec<ShapeProps> = Vec::new();
    let mut planes: Vec<PlaneSetProps> = Vec::new();
    let mut dropped = 0usize;
    for primitive in primitives {
        match primitive {
            LegacyClipPrimitive::Planes { planes: set } => planes.push(set.clone()),
            LegacyClipPrimitive::Shape { shape } => shapes.push(shape.clone()),
            LegacyClipPrimitive::Unrecognized(_) => dropped += 1,
        }
    }
    if dropped > 0 {
        debug!("dropped {dropped} unrecognized clip primitives");
    }
    if shapes.is_empty() && planes.is_empty() {
        return None;
    }
    Some(ClipData {
        shapes: if shapes.is_empty() { None } else { Some(shapes) },
        planes: if planes.is_empty() { None } else { Some(planes) },
    })
}

/// Clip volume for a current-format saved view.
///
/// The current clip-vector layout is still settling upstream, so no mapping
/// is attempted yet and every input yields `None`. This is the seam where
/// that mapping goes once the layout is stable.
pub fn clip_data_from_saved_view(clip: Option<&[SavedViewClipPrimitive]>) -> Option<ClipData> {
    if let Some(primitives) = clip {
        if !primitives.is_empty() {
            debug!(
                "ignoring {} clip vectors: no mapping for the current schema",
                primitives.len()
            );
        }
    }
    None
}
