use image::imageops::{self, FilterType};
use tracing::{debug, warn};

use crate::error::Result;
use crate::geometry::BoundingBox;
use crate::raster::RgbaRaster;

use super::components::flood_fill_components;
use super::config::DetectorConfig;
use super::tiles::{close_gaps, scan_busy_tiles};

/// Image-space hypothesis of where text sits. Carries no text.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectedRegion {
    /// Bounding box in full-resolution source pixels.
    pub bbox: BoundingBox,
    /// Size of the underlying component in tiles.
    pub tile_width: usize,
    pub tile_height: usize,
}

/// Visual-density text region detector.
///
/// Finds "busy" areas (high neighbour contrast) rather than reading text, so
/// it also catches handwriting and stylized glyphs.
#[derive(Clone, Debug, Default)]
pub struct RegionDetector {
    config: DetectorConfig,
}

impl RegionDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Run the detector. Only fails if the raster cannot be viewed as an image.
    ///
    /// Pipeline: downscale -> busy-tile scan -> single-pass closing ->
    /// flood-fill clustering -> size filter -> rescale to source pixels.
    pub fn detect(&self, raster: &RgbaRaster) -> Result<Vec<DetectedRegion>> {
        let config = &self.config;
        if raster.is_empty() {
            return Ok(Vec::new());
        }

        let scale = config.effective_scale();
        let w = (raster.width() as f32 * scale).floor() as u32;
        let h = (raster.height() as f32 * scale).floor() as u32;
        if w == 0 || h == 0 {
            return Ok(Vec::new());
        }

        let source = raster.to_image()?;
        let scaled = if w == raster.width() && h == raster.height() {
            source
        } else {
            imageops::resize(&source, w, h, FilterType::Triangle)
        };

        let busy = scan_busy_tiles(scaled.as_raw(), w as usize, h as usize, config);
        let closed = close_gaps(&busy);
        let components = flood_fill_components(&closed);
        debug!(
            busy_tiles = busy.iter().filter(|&&b| b).count(),
            closed_tiles = closed.iter().filter(|&&b| b).count(),
            components = components.len(),
            "Tile scan complete"
        );

        let tile = config.tile_size.max(1) as f64;
        let to_source = tile / scale as f64;
        let max_x = raster.width() as f64;
        let max_y = raster.height() as f64;

        let regions: Vec<DetectedRegion> = components
            .into_iter()
            .filter(|c| {
                c.tile_width() > config.min_tile_width && c.tile_height() > config.min_tile_height
            })
            .map(|c| {
                let x0 = (c.min_col as f64 * to_source).floor().min(max_x);
                let y0 = (c.min_row as f64 * to_source).floor().min(max_y);
                let x1 = ((c.max_col + 1) as f64 * to_source).floor().min(max_x);
                let y1 = ((c.max_row + 1) as f64 * to_source).floor().min(max_y);
                DetectedRegion {
                    bbox: BoundingBox::new(x0, y0, x1 - x0, y1 - y0),
                    tile_width: c.tile_width(),
                    tile_height: c.tile_height(),
                }
            })
            .collect();

        debug!(regions = regions.len(), "Region detection complete");
        Ok(regions)
    }
}

/// Detect text-like regions, degrading to an empty set on any failure.
pub fn detect_regions(raster: &RgbaRaster, config: &DetectorConfig) -> Vec<DetectedRegion> {
    RegionDetector::new(config.clone())
        .detect(raster)
        .unwrap_or_else(|e| {
            warn!(error = %e, "Region detection failed; returning no regions");
            Vec::new()
        })
}
