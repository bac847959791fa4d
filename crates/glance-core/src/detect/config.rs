use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_DETECTOR_BUSY_RATIO, DEFAULT_DETECTOR_EDGE_THRESHOLD, DEFAULT_DETECTOR_MIN_TILE_HEIGHT,
    DEFAULT_DETECTOR_MIN_TILE_WIDTH, DEFAULT_DETECTOR_PROCESS_SCALE, DEFAULT_DETECTOR_TILE_SIZE,
};

/// How a pixel's RGB samples collapse to one luminance value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LumaMode {
    /// (R + G + B) / 3.
    #[default]
    Average,
    /// ITU-R BT.601 weighted luma.
    Bt601,
}

/// Tuning knobs for the visual-density region detector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Fraction of source resolution to scan at, in (0.0, 1.0].
    #[serde(default = "default_process_scale")]
    pub process_scale: f32,
    /// Tile side length in downscaled pixels.
    #[serde(default = "default_tile_size")]
    pub tile_size: usize,
    /// Neighbour luminance difference that counts as an edge.
    #[serde(default = "default_edge_threshold")]
    pub edge_threshold: f32,
    /// Edge fraction of sampled pairs above which a tile is busy.
    #[serde(default = "default_busy_ratio")]
    pub busy_ratio: f32,
    /// Components at most this many tiles wide are dropped.
    #[serde(default = "default_min_tile_width")]
    pub min_tile_width: usize,
    /// Components at most this many tiles tall are dropped.
    #[serde(default = "default_min_tile_height")]
    pub min_tile_height: usize,
    #[serde(default)]
    pub luma: LumaMode,
}

fn default_process_scale() -> f32 {
    DEFAULT_DETECTOR_PROCESS_SCALE
}
fn default_tile_size() -> usize {
    DEFAULT_DETECTOR_TILE_SIZE
}
fn default_edge_threshold() -> f32 {
    DEFAULT_DETECTOR_EDGE_THRESHOLD
}
fn default_busy_ratio() -> f32 {
    DEFAULT_DETECTOR_BUSY_RATIO
}
fn default_min_tile_width() -> usize {
    DEFAULT_DETECTOR_MIN_TILE_WIDTH
}
fn default_min_tile_height() -> usize {
    DEFAULT_DETECTOR_MIN_TILE_HEIGHT
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            process_scale: DEFAULT_DETECTOR_PROCESS_SCALE,
            tile_size: DEFAULT_DETECTOR_TILE_SIZE,
            edge_threshold: DEFAULT_DETECTOR_EDGE_THRESHOLD,
            busy_ratio: DEFAULT_DETECTOR_BUSY_RATIO,
            min_tile_width: DEFAULT_DETECTOR_MIN_TILE_WIDTH,
            min_tile_height: DEFAULT_DETECTOR_MIN_TILE_HEIGHT,
            luma: LumaMode::default(),
        }
    }
}

impl DetectorConfig {
    /// Scale actually used for processing; out-of-range values fall back to 1.0.
    pub fn effective_scale(&self) -> f32 {
        if self.process_scale.is_finite() && self.process_scale > 0.0 && self.process_scale <= 1.0
        {
            self.process_scale
        } else {
            1.0
        }
    }
}
