use ndarray::{Array2, Zip};

use crate::consts::{
    LUMINANCE_B, LUMINANCE_G, LUMINANCE_R, PARALLEL_PIXEL_THRESHOLD, RGBA_CHANNELS,
};

use super::config::{DetectorConfig, LumaMode};

/// Luminance of the RGBA pixel starting at byte `i`.
fn luminance(data: &[u8], i: usize, mode: LumaMode) -> f32 {
    let r = data[i] as f32;
    let g = data[i + 1] as f32;
    let b = data[i + 2] as f32;
    match mode {
        LumaMode::Average => (r + g + b) / 3.0,
        LumaMode::Bt601 => LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b,
    }
}

/// Decide whether one tile is busy.
///
/// Samples every other row and compares each pixel with its right-hand
/// neighbour inside the tile.
fn tile_is_busy(
    data: &[u8],
    width: usize,
    height: usize,
    tile_row: usize,
    tile_col: usize,
    config: &DetectorConfig,
) -> bool {
    let tile = config.tile_size;
    let x0 = tile_col * tile;
    let y0 = tile_row * tile;
    let x1 = (x0 + tile).min(width);
    let y1 = (y0 + tile).min(height);

    let mut edges = 0usize;
    let mut sampled = 0usize;
    for py in (y0..y1).step_by(2) {
        for px in x0..x1.saturating_sub(1) {
            let i = (py * width + px) * RGBA_CHANNELS;
            let a = luminance(data, i, config.luma);
            let b = luminance(data, i + RGBA_CHANNELS, config.luma);
            if (a - b).abs() > config.edge_threshold {
                edges += 1;
            }
            sampled += 1;
        }
    }

    sampled > 0 && edges as f32 > config.busy_ratio * sampled as f32
}

/// Scan an RGBA buffer into a grid of busy tiles, shape = (tile_rows, tile_cols).
pub fn scan_busy_tiles(
    data: &[u8],
    width: usize,
    height: usize,
    config: &DetectorConfig,
) -> Array2<bool> {
    let tile = config.tile_size.max(1);
    let config = &DetectorConfig {
        tile_size: tile,
        ..config.clone()
    };
    let rows = height.div_ceil(tile);
    let cols = width.div_ceil(tile);
    let mut grid = Array2::from_elem((rows, cols), false);
    if rows == 0 || cols == 0 || data.len() < width * height * RGBA_CHANNELS {
        return grid;
    }

    let parallel = width * height >= PARALLEL_PIXEL_THRESHOLD;
    fill_grid(&mut grid, data, width, height, config, parallel);
    grid
}

fn fill_grid(
    grid: &mut Array2<bool>,
    data: &[u8],
    width: usize,
    height: usize,
    config: &DetectorConfig,
    parallel: bool,
) {
    let zip = Zip::indexed(grid);
    if parallel {
        zip.par_for_each(|(r, c), busy| {
            *busy = tile_is_busy(data, width, height, r, c, config);
        });
    } else {
        zip.for_each(|(r, c), busy| {
            *busy = tile_is_busy(data, width, height, r, c, config);
        });
    }
}

/// Single-pass closing: a tile whose two horizontal or two vertical
/// neighbours are busy becomes busy. Reads only the input grid.
pub fn close_gaps(grid: &Array2<bool>) -> Array2<bool> {
    let (rows, cols) = grid.dim();
    let mut closed = grid.clone();

    for row in 0..rows {
        for col in 1..cols.saturating_sub(1) {
            if grid[[row, col - 1]] && grid[[row, col + 1]] {
                closed[[row, col]] = true;
            }
        }
    }

    for row in 1..rows.saturating_sub(1) {
        for col in 0..cols {
            if grid[[row - 1, col]] && grid[[row + 1, col]] {
                closed[[row, col]] = true;
            }
        }
    }

    closed
}
