use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use glance_core::io::image_io::load_raster;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let raster = load_raster(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let opaque = raster.data().chunks_exact(4).filter(|p| p[3] == 255).count();
    let pixels = raster.width() as usize * raster.height() as usize;
    let size_mb = raster.data().len() as f64 / (1024.0 * 1024.0);

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", raster.width(), raster.height());
    println!("Pixels:      {}", pixels);
    if pixels > 0 {
        println!("Opaque:      {:.1}%", opaque as f64 / pixels as f64 * 100.0);
    }
    println!("RGBA size:   {:.1} MB", size_mb);

    Ok(())
}
