use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use glance_core::io::image_io::load_raster;
use glance_core::overlay::{OverlayResult, OverlaySession};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use tracing::warn;

use crate::args::OracleArgs;
use crate::summary::print_results;

#[derive(Args)]
pub struct ScanArgs {
    /// Input image files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Print results as JSON Lines (one object per file)
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub oracle: OracleArgs,
}

#[derive(Serialize)]
struct FileResults<'a> {
    source: &'a str,
    results: &'a [OverlayResult],
}

/// Auto-scan every file: detect regions, recognize the whole frame, merge.
pub fn run(args: &ScanArgs) -> Result<()> {
    let resolver = args.oracle.resolver()?;

    let pb = ProgressBar::new(args.files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:20} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Scanning");

    let scanned: Vec<(String, Result<Vec<OverlayResult>>)> = args
        .files
        .par_iter()
        .map(|path| {
            let source = path.display().to_string();
            let outcome = load_raster(path)
                .with_context(|| format!("Failed to load {source}"))
                .map(|raster| {
                    let session = OverlaySession::for_source(source.clone());
                    resolver.resolve_auto(&session, &raster);
                    session.auto_results()
                });
            pb.inc(1);
            (source, outcome)
        })
        .collect();
    pb.finish_with_message("Done");

    let mut failures = 0usize;
    for (source, outcome) in &scanned {
        match outcome {
            Ok(results) if args.json => {
                let line = serde_json::to_string(&FileResults { source, results })?;
                println!("{line}");
            }
            Ok(results) => print_results(source, results),
            Err(e) => {
                failures += 1;
                warn!(error = %e, "Skipping file");
                eprintln!("{source}: {e:#}");
            }
        }
    }

    if failures == scanned.len() {
        anyhow::bail!("No file could be scanned");
    }
    Ok(())
}
