mod common;

use glance_core::io::image_io::{encode_jpeg, load_raster};
use glance_core::raster::RgbaRaster;

use common::{BLACK, WHITE};

#[test]
fn test_encode_jpeg_produces_jpeg_bytes() {
    let raster = RgbaRaster::filled(16, 8, BLACK);
    let encoded = encode_jpeg(&raster, 95).unwrap();
    assert_eq!(encoded.mime_type, "image/jpeg");
    assert_eq!((encoded.width, encoded.height), (16, 8));
    assert_eq!(&encoded.bytes[..2], &[0xFF, 0xD8]);

    let decoded = image::load_from_memory(&encoded.bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (16, 8));
}

#[test]
fn test_transparent_pixels_encode_as_white() {
    let raster = RgbaRaster::filled(8, 8, [0, 0, 0, 0]);
    let encoded = encode_jpeg(&raster, 100).unwrap();
    let decoded = image::load_from_memory(&encoded.bytes).unwrap().to_rgb8();
    assert!(decoded.pixels().all(|p| p.0.iter().all(|&c| c > 245)));
}

#[test]
fn test_lower_quality_is_smaller() {
    let mut raster = RgbaRaster::filled(64, 64, WHITE);
    for y in 0..64 {
        for x in 0..64 {
            let v = ((x * 37 + y * 91) % 256) as u8;
            raster.put_pixel(x, y, [v, 255 - v, v / 2, 255]);
        }
    }
    let high = encode_jpeg(&raster, 95).unwrap();
    let low = encode_jpeg(&raster, 20).unwrap();
    assert!(low.bytes.len() < high.bytes.len());
}

#[test]
fn test_load_raster_from_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.png");
    let mut img = image::RgbaImage::from_pixel(5, 3, image::Rgba(WHITE));
    img.put_pixel(4, 2, image::Rgba([1, 2, 3, 255]));
    img.save(&path).unwrap();

    let raster = load_raster(&path).unwrap();
    assert_eq!((raster.width(), raster.height()), (5, 3));
    assert_eq!(raster.pixel(4, 2), [1, 2, 3, 255]);
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_raster(&dir.path().join("missing.png")).is_err());
}
