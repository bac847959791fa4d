use crate::consts::{MAX_CROP_PIXELS, MAX_CROP_SIDE, RGBA_CHANNELS};
use crate::error::{GlanceError, Result};
use crate::geometry::BoundingBox;
use crate::raster::RgbaRaster;

/// Opaque white, the canvas color behind selections that leave the image.
pub const WHITE: [u8; 4] = [255, 255, 255, 255];

/// A rectangle in image coordinates for cropping. May extend past the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CropRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// Round an image-space box to whole pixels. Extents saturate at `u32::MAX`.
    pub fn from_bbox(bbox: &BoundingBox) -> Self {
        Self {
            x: bbox.x.round() as i64,
            y: bbox.y.round() as i64,
            width: bbox.width.round().max(0.0) as u32,
            height: bbox.height.round().max(0.0) as u32,
        }
    }

    /// Reject empty rectangles and canvases too large to allocate or encode.
    pub fn validated(&self) -> Result<CropRect> {
        if self.width == 0 || self.height == 0 {
            return Err(GlanceError::EmptySelection {
                width: self.width,
                height: self.height,
            });
        }
        if self.width > MAX_CROP_SIDE
            || self.height > MAX_CROP_SIDE
            || self.width as u64 * self.height as u64 > MAX_CROP_PIXELS
        {
            return Err(GlanceError::SelectionTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.clone())
    }

    /// Overlap with a `src_w` x `src_h` source as `(x, y, width, height)` in
    /// source pixels, or `None` if they do not overlap.
    pub fn overlap(&self, src_w: u32, src_h: u32) -> Option<(u32, u32, u32, u32)> {
        let x0 = self.x.max(0);
        let y0 = self.y.max(0);
        let x1 = self.x.saturating_add(self.width as i64).min(src_w as i64);
        let y1 = self.y.saturating_add(self.height as i64).min(src_h as i64);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some((x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32))
    }
}

/// Copy `crop` out of `raster` onto a canvas pre-filled with `fill`.
///
/// Parts of the rectangle outside the source keep the fill color.
pub fn crop_raster(raster: &RgbaRaster, crop: &CropRect, fill: [u8; 4]) -> Result<RgbaRaster> {
    let crop = crop.validated()?;
    let Some((sx, sy, w, h)) = crop.overlap(raster.width(), raster.height()) else {
        return Ok(RgbaRaster::filled(crop.width, crop.height, fill));
    };

    let src = raster.data();
    let src_stride = raster.width() as usize * RGBA_CHANNELS;
    let dst_stride = crop.width as usize * RGBA_CHANNELS;
    let row_bytes = w as usize * RGBA_CHANNELS;
    let dst_x = (sx as i64 - crop.x) as usize;
    let dst_y = (sy as i64 - crop.y) as usize;

    let mut out = fill.repeat(crop.width as usize * crop.height as usize);
    for row in 0..h as usize {
        let src_start = (sy as usize + row) * src_stride + sx as usize * RGBA_CHANNELS;
        let dst_start = (dst_y + row) * dst_stride + dst_x * RGBA_CHANNELS;
        out[dst_start..dst_start + row_bytes]
            .copy_from_slice(&src[src_start..src_start + row_bytes]);
    }
    RgbaRaster::new(crop.width, crop.height, out)
}
