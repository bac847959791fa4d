use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use glance_core::detect::{DetectorConfig, RegionDetector};
use glance_core::io::image_io::load_raster;

use crate::args::load_overlay_config;
use crate::summary::print_regions;

#[derive(Args)]
pub struct DetectArgs {
    /// Input image file
    pub file: PathBuf,

    /// Overlay config file (TOML); only its [detector] table is used
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the processing scale (0.0-1.0]
    #[arg(long)]
    pub scale: Option<f32>,

    /// Override the tile size in processed pixels
    #[arg(long)]
    pub tile_size: Option<usize>,

    /// Print regions as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &DetectArgs) -> Result<()> {
    let mut config = match args.config {
        Some(ref path) => load_overlay_config(path)?.detector,
        None => DetectorConfig::default(),
    };
    if let Some(scale) = args.scale {
        config.process_scale = scale;
    }
    if let Some(tile_size) = args.tile_size {
        config.tile_size = tile_size;
    }

    let raster = load_raster(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let regions = RegionDetector::new(config).detect(&raster)?;

    if args.json {
        let boxes: Vec<_> = regions.iter().map(|r| r.bbox).collect();
        println!("{}", serde_json::to_string_pretty(&boxes)?);
    } else {
        print_regions(&args.file.display().to_string(), &regions);
    }
    Ok(())
}
