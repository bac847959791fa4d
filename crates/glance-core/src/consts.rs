/// Minimum pixel count (h*w) of the downscaled buffer to scan tile rows with Rayon.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Number of bytes per RGBA8 pixel.
pub const RGBA_CHANNELS: usize = 4;

/// Fraction of the source resolution the region detector works at.
pub const DEFAULT_DETECTOR_PROCESS_SCALE: f32 = 0.5;

/// Side length (in downscaled pixels) of a detector tile.
pub const DEFAULT_DETECTOR_TILE_SIZE: usize = 20;

/// Luminance difference between horizontal neighbours that counts as an edge.
pub const DEFAULT_DETECTOR_EDGE_THRESHOLD: f32 = 15.0;

/// Fraction of sampled pairs that must be edges for a tile to be busy.
pub const DEFAULT_DETECTOR_BUSY_RATIO: f32 = 0.05;

/// Components this many tiles wide or narrower are discarded as noise.
pub const DEFAULT_DETECTOR_MIN_TILE_WIDTH: usize = 2;

/// Components this many tiles tall or shorter are discarded as noise.
pub const DEFAULT_DETECTOR_MIN_TILE_HEIGHT: usize = 1;

/// Boxes whose top edges differ by at most this many pixels share a reading row.
pub const DEFAULT_ROW_TOLERANCE_PX: f64 = 50.0;

/// Left inset of the fallback band as a fraction of frame width.
pub const DEFAULT_FALLBACK_X_FRACTION: f64 = 0.1;

/// Width of the fallback band as a fraction of frame width.
pub const DEFAULT_FALLBACK_WIDTH_FRACTION: f64 = 0.8;

/// Distance from the bottom of the frame to the top of the fallback band.
pub const DEFAULT_FALLBACK_BOTTOM_OFFSET_PX: f64 = 100.0;

/// Height of the fallback band.
pub const DEFAULT_FALLBACK_HEIGHT_PX: f64 = 80.0;

/// Vertical gap between a manual selection and its result box.
pub const DEFAULT_MANUAL_GAP_PX: f64 = 5.0;

/// Height of a manual result box placed below its selection.
pub const DEFAULT_MANUAL_RESULT_HEIGHT_PX: f64 = 60.0;

/// Largest crop side, the baseline JPEG dimension limit.
pub const MAX_CROP_SIDE: u32 = 65_535;

/// Largest crop canvas in pixels.
pub const MAX_CROP_PIXELS: u64 = 50_000_000;

/// JPEG quality for manual selection crops.
pub const DEFAULT_MANUAL_JPEG_QUALITY: u8 = 95;

/// JPEG quality for full-frame auto scans.
pub const DEFAULT_AUTO_JPEG_QUALITY: u8 = 85;

/// Language translations are requested in when none is configured.
pub const DEFAULT_TARGET_LANGUAGE: &str = "English";

/// Placeholder text shown while a selection is being recognized.
pub const PLACEHOLDER_TEXT: &str = "Scanning...";

/// Placeholder translation shown while a selection is being recognized.
pub const PLACEHOLDER_TRANSLATION: &str = "Translating...";

/// Text of an item that carries an oracle or encoding failure.
pub const ERROR_TEXT: &str = "Error";
