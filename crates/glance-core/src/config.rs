use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_AUTO_JPEG_QUALITY, DEFAULT_MANUAL_GAP_PX, DEFAULT_MANUAL_JPEG_QUALITY,
    DEFAULT_MANUAL_RESULT_HEIGHT_PX, DEFAULT_TARGET_LANGUAGE,
};
use crate::detect::DetectorConfig;
use crate::geometry::BoundingBox;
use crate::overlay::MergeConfig;

/// Where a manual selection's result box goes relative to the selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ManualPlacement {
    /// Directly under the selection, `gap` pixels down.
    #[default]
    Below,
    /// Covering the selection.
    Over,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ManualConfig {
    #[serde(default)]
    pub placement: ManualPlacement,
    #[serde(default = "default_gap")]
    pub gap: f64,
    #[serde(default = "default_result_height")]
    pub result_height: f64,
    #[serde(default = "default_manual_jpeg_quality")]
    pub jpeg_quality: u8,
}

fn default_gap() -> f64 {
    DEFAULT_MANUAL_GAP_PX
}
fn default_result_height() -> f64 {
    DEFAULT_MANUAL_RESULT_HEIGHT_PX
}
fn default_manual_jpeg_quality() -> u8 {
    DEFAULT_MANUAL_JPEG_QUALITY
}

impl Default for ManualConfig {
    fn default() -> Self {
        Self {
            placement: ManualPlacement::default(),
            gap: DEFAULT_MANUAL_GAP_PX,
            result_height: DEFAULT_MANUAL_RESULT_HEIGHT_PX,
            jpeg_quality: DEFAULT_MANUAL_JPEG_QUALITY,
        }
    }
}

impl ManualConfig {
    /// Image-space box of the result for an image-space selection.
    pub fn result_bbox(&self, selection: &BoundingBox) -> BoundingBox {
        match self.placement {
            ManualPlacement::Below => BoundingBox::new(
                selection.x,
                selection.bottom() + self.gap,
                selection.width,
                self.result_height,
            ),
            ManualPlacement::Over => *selection,
        }
    }
}

/// Everything the overlay resolver can be tuned with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    #[serde(default = "default_target_language")]
    pub target_language: String,
    #[serde(default = "default_auto_jpeg_quality")]
    pub auto_jpeg_quality: u8,
    #[serde(default)]
    pub manual: ManualConfig,
    #[serde(default)]
    pub detector: DetectorConfig,
    #[serde(default)]
    pub merge: MergeConfig,
}

fn default_target_language() -> String {
    DEFAULT_TARGET_LANGUAGE.to_string()
}
fn default_auto_jpeg_quality() -> u8 {
    DEFAULT_AUTO_JPEG_QUALITY
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
            auto_jpeg_quality: DEFAULT_AUTO_JPEG_QUALITY,
            manual: ManualConfig::default(),
            detector: DetectorConfig::default(),
            merge: MergeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_placement_leaves_a_gap() {
        let manual = ManualConfig::default();
        let sel = BoundingBox::new(10.0, 20.0, 100.0, 30.0);
        assert_eq!(
            manual.result_bbox(&sel),
            BoundingBox::new(10.0, 55.0, 100.0, 60.0)
        );
    }

    #[test]
    fn over_placement_reuses_selection() {
        let manual = ManualConfig {
            placement: ManualPlacement::Over,
            ..ManualConfig::default()
        };
        let sel = BoundingBox::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(manual.result_bbox(&sel), sel);
    }
}
