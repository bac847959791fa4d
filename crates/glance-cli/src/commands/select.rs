use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use glance_core::geometry::BoundingBox;
use glance_core::io::image_io::load_raster;
use glance_core::overlay::OverlaySession;

use crate::args::{parse_rect, OracleArgs, ViewArgs};
use crate::summary::print_results;

#[derive(Args)]
pub struct SelectArgs {
    /// Input image file
    pub file: PathBuf,

    /// Screen-space selection as X,Y,W,H (repeatable)
    #[arg(long = "rect", required = true, value_parser = parse_rect, allow_hyphen_values = true)]
    pub rects: Vec<[f64; 4]>,

    /// Print results as JSON instead of a summary
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub view: ViewArgs,

    #[command(flatten)]
    pub oracle: OracleArgs,
}

/// Recognize one or more screen selections over an image.
pub fn run(args: &SelectArgs) -> Result<()> {
    let raster = load_raster(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let state = args
        .view
        .view_state(Some((raster.width() as f64, raster.height() as f64)))?;
    let resolver = args.oracle.resolver()?;

    let source = args.file.display().to_string();
    let session = OverlaySession::for_source(source.clone());
    for &[x, y, w, h] in &args.rects {
        resolver.resolve_manual(&session, &raster, &BoundingBox::new(x, y, w, h), &state);
    }

    let results = session.manual_results();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results(&source, &results);
    }
    Ok(())
}
