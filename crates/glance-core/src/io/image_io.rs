use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};

use crate::error::Result;
use crate::raster::RgbaRaster;

/// Compressed image bytes ready to hand to an oracle.
#[derive(Clone, Debug)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub mime_type: &'static str,
}

/// Load any image format the `image` crate understands as an RGBA raster.
pub fn load_raster(path: &Path) -> Result<RgbaRaster> {
    let img = image::open(path)?;
    Ok(img.to_rgba8().into())
}

/// Composite onto white (JPEG has no alpha) and encode at `quality` (1-100).
pub fn encode_jpeg(raster: &RgbaRaster, quality: u8) -> Result<EncodedImage> {
    let mut rgb = RgbImage::new(raster.width(), raster.height());
    for (x, y, pixel) in rgb.enumerate_pixels_mut() {
        let [r, g, b, a] = raster.pixel(x, y);
        let alpha = a as f32 / 255.0;
        let over_white = |c: u8| (c as f32 * alpha + 255.0 * (1.0 - alpha)).round() as u8;
        *pixel = Rgb([over_white(r), over_white(g), over_white(b)]);
    }

    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100)).encode_image(&rgb)?;

    Ok(EncodedImage {
        bytes,
        width: raster.width(),
        height: raster.height(),
        mime_type: "image/jpeg",
    })
}
