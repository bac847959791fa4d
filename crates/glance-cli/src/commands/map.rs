use anyhow::Result;
use clap::{Args, Subcommand};
use glance_core::geometry::BoundingBox;
use glance_core::viewport::{
    draw_rect, image_rect_to_screen_bounds, screen_rect_to_image, screen_to_image,
    screen_to_image_precise,
};

use crate::args::{parse_rect, parse_size, ViewArgs};

#[derive(Args)]
pub struct MapArgs {
    #[command(subcommand)]
    pub direction: MapDirection,

    /// Media size as WIDTHxHEIGHT (required unless --view gives it)
    #[arg(long, global = true, value_parser = parse_size)]
    pub media: Option<(f64, f64)>,

    #[command(flatten)]
    pub view: ViewArgs,
}

#[derive(Subcommand)]
pub enum MapDirection {
    /// Window point to image pixel
    ToImage {
        #[arg(allow_hyphen_values = true)]
        x: f64,
        #[arg(allow_hyphen_values = true)]
        y: f64,
        /// Print the unrounded position
        #[arg(long)]
        precise: bool,
    },
    /// Image rectangle X,Y,W,H to its window bounds
    ToScreen {
        #[arg(value_parser = parse_rect, allow_hyphen_values = true)]
        rect: [f64; 4],
    },
    /// Window rectangle X,Y,W,H to the image rectangle under it
    Selection {
        #[arg(value_parser = parse_rect, allow_hyphen_values = true)]
        rect: [f64; 4],
    },
}

pub fn run(args: &MapArgs) -> Result<()> {
    let state = args.view.view_state(args.media)?;
    if draw_rect(&state).is_none() {
        eprintln!("warning: degenerate view geometry; every mapping is zero");
    }

    match args.direction {
        MapDirection::ToImage { x, y, precise } => {
            if precise {
                let (ix, iy) = screen_to_image_precise(x, y, &state);
                println!("{ix:.4} {iy:.4}");
            } else {
                let (ix, iy) = screen_to_image(x, y, &state);
                println!("{ix} {iy}");
            }
        }
        MapDirection::ToScreen { rect: [x, y, w, h] } => {
            let b = image_rect_to_screen_bounds(&BoundingBox::new(x, y, w, h), &state);
            println!("{:.2} {:.2} {:.2} {:.2}", b.x, b.y, b.width, b.height);
        }
        MapDirection::Selection { rect: [x, y, w, h] } => {
            let b = screen_rect_to_image(&BoundingBox::new(x, y, w, h), &state);
            println!("{} {} {} {}", b.x, b.y, b.width, b.height);
        }
    }
    Ok(())
}
