use anyhow::Result;
use clap::Args;
use glance_core::viewport::{edge_position, Edge};

use crate::args::{parse_size, ViewArgs};

#[derive(Args)]
pub struct EdgeArgs {
    /// Edge to jump to (top, bottom, left, right); all four when omitted
    pub edge: Option<Edge>,

    /// Media size as WIDTHxHEIGHT (required unless --view gives it)
    #[arg(long, value_parser = parse_size)]
    pub media: Option<(f64, f64)>,

    #[command(flatten)]
    pub view: ViewArgs,
}

/// Print the pan offset (at 1x zoom) that brings an edge into view.
pub fn run(args: &EdgeArgs) -> Result<()> {
    let state = args.view.view_state(args.media)?;
    let edges = match args.edge {
        Some(edge) => vec![edge],
        None => Edge::ALL.to_vec(),
    };
    for edge in edges {
        println!("{:<8}{:.2}", edge.to_string(), edge_position(edge, &state));
    }
    Ok(())
}
