use thiserror::Error;

use crate::oracle::OracleError;

#[derive(Error, Debug)]
pub enum GlanceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid raster: {width}x{height} with {len} bytes (expected {expected})")]
    InvalidRaster {
        width: u32,
        height: u32,
        len: usize,
        expected: usize,
    },

    #[error("Invalid rotation: {0} degrees (must be a multiple of 90)")]
    InvalidRotation(i32),

    #[error("Empty selection: {width}x{height}")]
    EmptySelection { width: u32, height: u32 },

    #[error("Selection too large to crop: {width}x{height}")]
    SelectionTooLarge { width: u32, height: u32 },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),
}

pub type Result<T> = std::result::Result<T, GlanceError>;
