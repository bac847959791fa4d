use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    DEFAULT_FALLBACK_BOTTOM_OFFSET_PX, DEFAULT_FALLBACK_HEIGHT_PX, DEFAULT_FALLBACK_WIDTH_FRACTION,
    DEFAULT_FALLBACK_X_FRACTION, DEFAULT_ROW_TOLERANCE_PX,
};
use crate::geometry::BoundingBox;
use crate::oracle::RecognizedItem;

use super::types::OverlayResult;

/// Where items without a detected region go: a band near the bottom of the frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FallbackLayout {
    #[serde(default = "default_x_fraction")]
    pub x_fraction: f64,
    #[serde(default = "default_width_fraction")]
    pub width_fraction: f64,
    /// Distance from the frame bottom to the band's top edge.
    #[serde(default = "default_bottom_offset")]
    pub bottom_offset: f64,
    #[serde(default = "default_height")]
    pub height: f64,
}

fn default_x_fraction() -> f64 {
    DEFAULT_FALLBACK_X_FRACTION
}
fn default_width_fraction() -> f64 {
    DEFAULT_FALLBACK_WIDTH_FRACTION
}
fn default_bottom_offset() -> f64 {
    DEFAULT_FALLBACK_BOTTOM_OFFSET_PX
}
fn default_height() -> f64 {
    DEFAULT_FALLBACK_HEIGHT_PX
}

impl Default for FallbackLayout {
    fn default() -> Self {
        Self {
            x_fraction: DEFAULT_FALLBACK_X_FRACTION,
            width_fraction: DEFAULT_FALLBACK_WIDTH_FRACTION,
            bottom_offset: DEFAULT_FALLBACK_BOTTOM_OFFSET_PX,
            height: DEFAULT_FALLBACK_HEIGHT_PX,
        }
    }
}

impl FallbackLayout {
    /// Fallback box for a `frame_width` x `frame_height` image.
    pub fn bbox(&self, frame_width: f64, frame_height: f64) -> BoundingBox {
        BoundingBox::new(
            frame_width * self.x_fraction,
            (frame_height - self.bottom_offset).max(0.0),
            frame_width * self.width_fraction,
            self.height,
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Boxes whose top edges are within this many pixels of a row's first box
    /// join that row.
    #[serde(default = "default_row_tolerance")]
    pub row_tolerance: f64,
    #[serde(default)]
    pub fallback: FallbackLayout,
}

fn default_row_tolerance() -> f64 {
    DEFAULT_ROW_TOLERANCE_PX
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            row_tolerance: DEFAULT_ROW_TOLERANCE_PX,
            fallback: FallbackLayout::default(),
        }
    }
}

/// Order boxes for reading: top-to-bottom rows, left-to-right within a row.
///
/// Rows are formed by a sweep over boxes sorted by top edge. A box starts a new
/// row when its top is more than `row_tolerance` below the row's first box.
/// The ordering is total, so the result does not depend on the input order of
/// boxes with distinct positions.
pub fn spatial_sort(boxes: &mut [BoundingBox], row_tolerance: f64) {
    boxes.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));

    let mut start = 0;
    while start < boxes.len() {
        let anchor = boxes[start].y;
        let mut end = start + 1;
        while end < boxes.len() && boxes[end].y - anchor <= row_tolerance {
            end += 1;
        }
        boxes[start..end].sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        start = end;
    }
}

/// Pair detected boxes with recognized items.
///
/// With both sides non-empty, boxes are spatially sorted and zipped with the
/// items by index; items past the last box become fallback entries. If either
/// side is empty every item is a fallback entry. A lone result is always
/// marked as fallback.
pub fn merge(
    mut boxes: Vec<BoundingBox>,
    items: Vec<RecognizedItem>,
    frame_width: f64,
    frame_height: f64,
    config: &MergeConfig,
) -> Vec<OverlayResult> {
    let fallback_box = config.fallback.bbox(frame_width, frame_height);

    let mut results: Vec<OverlayResult> = if boxes.is_empty() || items.is_empty() {
        items
            .into_iter()
            .map(|item| OverlayResult::fallback(item, fallback_box))
            .collect()
    } else {
        spatial_sort(&mut boxes, config.row_tolerance);
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match boxes.get(i) {
                Some(bbox) => OverlayResult::matched(item, *bbox),
                None => OverlayResult::fallback(item, fallback_box),
            })
            .collect()
    };

    if let [only] = results.as_mut_slice() {
        only.is_fallback = true;
    }

    debug!(
        boxes = boxes.len(),
        results = results.len(),
        fallbacks = results.iter().filter(|r| r.is_fallback).count(),
        "Merged detected regions with recognized items"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_band_never_goes_above_the_frame() {
        let layout = FallbackLayout::default();
        let bbox = layout.bbox(200.0, 60.0);
        assert_eq!(bbox, BoundingBox::new(20.0, 0.0, 160.0, 80.0));
    }

    #[test]
    fn sweep_groups_by_first_box_of_row() {
        let mut boxes = vec![
            BoundingBox::new(300.0, 40.0, 10.0, 10.0),
            BoundingBox::new(10.0, 95.0, 10.0, 10.0),
            BoundingBox::new(100.0, 0.0, 10.0, 10.0),
        ];
        spatial_sort(&mut boxes, 50.0);
        let xs: Vec<f64> = boxes.iter().map(|b| b.x).collect();
        // y=0 anchors the row; y=40 joins it, y=95 starts a new one.
        assert_eq!(xs, vec![100.0, 300.0, 10.0]);
    }
}
