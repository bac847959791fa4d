pub mod components;
pub mod config;
pub mod regions;
pub mod tiles;

pub use config::{DetectorConfig, LumaMode};
pub use regions::{detect_regions, DetectedRegion, RegionDetector};
