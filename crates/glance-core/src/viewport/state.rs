use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GlanceError, Result};

/// Layout strategy controlling how media is scaled and positioned before
/// zoom, rotation and pan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// Natural size, centered.
    Original,
    /// Scale so the (rotated) width fills the window.
    #[default]
    #[serde(alias = "fit-h")]
    FitWidth,
    /// Scale so the (rotated) height fills the window.
    #[serde(alias = "fit-v")]
    FitHeight,
    /// Fit-width scale with a continuous vertical scroll offset.
    Reader,
    /// Fit-height scale with a continuous horizontal scroll offset.
    Landscape,
}

impl ViewMode {
    pub const ALL: &[Self] = &[
        Self::Original,
        Self::FitWidth,
        Self::FitHeight,
        Self::Reader,
        Self::Landscape,
    ];
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Original => write!(f, "Original"),
            Self::FitWidth => write!(f, "Fit Width"),
            Self::FitHeight => write!(f, "Fit Height"),
            Self::Reader => write!(f, "Reader"),
            Self::Landscape => write!(f, "Landscape"),
        }
    }
}

/// Clockwise rotation in quarter turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const ALL: &[Self] = &[Self::Deg0, Self::Deg90, Self::Deg180, Self::Deg270];

    /// Normalize any multiple of 90 (including negative and > 360) to a quarter turn.
    pub fn from_degrees(degrees: i32) -> Result<Self> {
        if degrees % 90 != 0 {
            return Err(GlanceError::InvalidRotation(degrees));
        }
        Ok(match degrees.rem_euclid(360) {
            0 => Self::Deg0,
            90 => Self::Deg90,
            180 => Self::Deg180,
            _ => Self::Deg270,
        })
    }

    pub fn degrees(self) -> i32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// True for 90 and 270, where the drawn extents swap width and height.
    pub fn is_quarter_turn(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }

    /// Exact (cos, sin) of the rotation angle.
    pub fn cos_sin(self) -> (f64, f64) {
        match self {
            Self::Deg0 => (1.0, 0.0),
            Self::Deg90 => (0.0, 1.0),
            Self::Deg180 => (-1.0, 0.0),
            Self::Deg270 => (0.0, -1.0),
        }
    }

    /// Rotate a point about the origin by this angle (`inverse` rotates back).
    pub fn apply(self, x: f64, y: f64, inverse: bool) -> (f64, f64) {
        let (cos, sin) = self.cos_sin();
        let sin = if inverse { -sin } else { sin };
        (x * cos - y * sin, x * sin + y * cos)
    }
}

impl TryFrom<i32> for Rotation {
    type Error = GlanceError;

    fn try_from(degrees: i32) -> Result<Self> {
        Self::from_degrees(degrees)
    }
}

impl From<Rotation> for i32 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Immutable snapshot of everything that determines where media is drawn.
///
/// Produced by the display layer per frame and passed into every transform
/// call; the core never retains it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Source-intrinsic media width in pixels (pre-rotation).
    pub media_width: f64,
    /// Source-intrinsic media height in pixels (pre-rotation).
    pub media_height: f64,
    pub window_width: f64,
    pub window_height: f64,
    #[serde(default)]
    pub view_mode: ViewMode,
    /// 1.0 is natural size. Not validated here; callers keep it positive.
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    #[serde(default)]
    pub pan_x: f64,
    #[serde(default)]
    pub pan_y: f64,
    #[serde(default)]
    pub rotation: Rotation,
    /// Continuous scroll position, used by reader and landscape modes only.
    #[serde(default)]
    pub scroll_offset: f64,
}

fn default_zoom() -> f64 {
    1.0
}

impl ViewState {
    /// A state at natural zoom with no pan, rotation or scroll.
    pub fn new(
        media_width: f64,
        media_height: f64,
        window_width: f64,
        window_height: f64,
        view_mode: ViewMode,
    ) -> Self {
        Self {
            media_width,
            media_height,
            window_width,
            window_height,
            view_mode,
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            rotation: Rotation::Deg0,
            scroll_offset: 0.0,
        }
    }

    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_pan(mut self, pan_x: f64, pan_y: f64) -> Self {
        self.pan_x = pan_x;
        self.pan_y = pan_y;
        self
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scroll(mut self, scroll_offset: f64) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }

    /// True when media extents are missing and every mapping degenerates to zero.
    pub fn is_degenerate(&self) -> bool {
        !(self.media_width > 0.0 && self.media_height > 0.0)
    }
}
