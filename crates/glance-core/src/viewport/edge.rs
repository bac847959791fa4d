use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::state::ViewState;
use super::transform::base_extents;

/// Edge of the media to snap the view to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: &[Self] = &[Self::Top, Self::Bottom, Self::Left, Self::Right];
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Bottom => write!(f, "bottom"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

impl FromStr for Edge {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(format!("unknown edge '{other}'")),
        }
    }
}

/// Pan offset that brings `edge` of the media into view, at 1x logical scale.
///
/// Zoom is not applied; the caller re-applies it. Returns 0 when the media
/// already fits along that axis or the geometry is degenerate.
pub fn edge_position(edge: Edge, state: &ViewState) -> f64 {
    if state.is_degenerate() {
        return 0.0;
    }

    let (draw_w, draw_h) = base_extents(state);
    let (final_w, final_h) = if state.rotation.is_quarter_turn() {
        (draw_h, draw_w)
    } else {
        (draw_w, draw_h)
    };

    let overflow = |extent: f64, window: f64| {
        if extent.is_finite() && extent > window {
            (extent - window) / 2.0
        } else {
            0.0
        }
    };

    match edge {
        Edge::Top => overflow(final_h, state.window_height),
        Edge::Bottom => -overflow(final_h, state.window_height),
        Edge::Left => overflow(final_w, state.window_width),
        Edge::Right => -overflow(final_w, state.window_width),
    }
}
