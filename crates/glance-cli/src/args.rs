use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use glance_core::config::OverlayConfig;
use glance_core::oracle::OracleTransport;
use glance_core::overlay::{OcrResolver, TranslationSink};
use glance_core::viewport::{Rotation, ViewMode, ViewState};

use crate::sink::JsonLinesSink;
use crate::transport::{CommandTransport, FileTransport};

#[derive(Clone, Copy, ValueEnum)]
pub enum ViewModeArg {
    Original,
    FitWidth,
    FitHeight,
    Reader,
    Landscape,
}

impl From<ViewModeArg> for ViewMode {
    fn from(arg: ViewModeArg) -> Self {
        match arg {
            ViewModeArg::Original => ViewMode::Original,
            ViewModeArg::FitWidth => ViewMode::FitWidth,
            ViewModeArg::FitHeight => ViewMode::FitHeight,
            ViewModeArg::Reader => ViewMode::Reader,
            ViewModeArg::Landscape => ViewMode::Landscape,
        }
    }
}

/// Parse `WIDTHxHEIGHT`, e.g. `1920x1080`.
pub fn parse_size(s: &str) -> std::result::Result<(f64, f64), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: f64 = w.trim().parse().map_err(|_| format!("bad width '{w}'"))?;
    let h: f64 = h.trim().parse().map_err(|_| format!("bad height '{h}'"))?;
    Ok((w, h))
}

/// Parse `X,Y,W,H`.
pub fn parse_rect(s: &str) -> std::result::Result<[f64; 4], String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| format!("expected X,Y,W,H, got '{s}'"))?;
    match parts.as_slice() {
        &[x, y, w, h] => Ok([x, y, w, h]),
        _ => Err(format!("expected 4 values, got {}", parts.len())),
    }
}

const DEFAULT_WINDOW: (f64, f64) = (1280.0, 720.0);

/// How the media is shown on screen.
#[derive(Args)]
pub struct ViewArgs {
    /// View state file (TOML); flags below override its fields
    #[arg(long)]
    pub view: Option<PathBuf>,

    /// Window size as WIDTHxHEIGHT [default: 1280x720]
    #[arg(long, value_parser = parse_size)]
    pub window: Option<(f64, f64)>,

    /// Display mode
    #[arg(long, value_enum)]
    pub mode: Option<ViewModeArg>,

    /// Zoom factor (1.0 = natural)
    #[arg(long)]
    pub zoom: Option<f64>,

    /// Horizontal pan in window pixels
    #[arg(long, allow_hyphen_values = true)]
    pub pan_x: Option<f64>,

    /// Vertical pan in window pixels
    #[arg(long, allow_hyphen_values = true)]
    pub pan_y: Option<f64>,

    /// Clockwise rotation in degrees (multiple of 90)
    #[arg(long, allow_hyphen_values = true)]
    pub rotation: Option<i32>,

    /// Scroll offset (reader and landscape modes)
    #[arg(long, allow_hyphen_values = true)]
    pub scroll: Option<f64>,
}

impl ViewArgs {
    /// Build the view state. `media` overrides the file's media size.
    pub fn view_state(&self, media: Option<(f64, f64)>) -> Result<ViewState> {
        let mut state = match &self.view {
            Some(path) => {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read view state {}", path.display()))?;
                toml::from_str(&contents).context("Invalid view state")?
            }
            None => {
                let Some((media_width, media_height)) = media else {
                    bail!("Media size unknown; pass --media or --view");
                };
                let (window_width, window_height) = self.window.unwrap_or(DEFAULT_WINDOW);
                ViewState::new(
                    media_width,
                    media_height,
                    window_width,
                    window_height,
                    ViewMode::default(),
                )
            }
        };

        if let Some((media_width, media_height)) = media {
            state.media_width = media_width;
            state.media_height = media_height;
        }
        if let Some((window_width, window_height)) = self.window {
            state.window_width = window_width;
            state.window_height = window_height;
        }
        if let Some(mode) = self.mode {
            state.view_mode = mode.into();
        }
        if let Some(zoom) = self.zoom {
            if zoom <= 0.0 {
                bail!("Zoom must be positive, got {zoom}");
            }
            state.zoom = zoom;
        }
        if let Some(pan_x) = self.pan_x {
            state.pan_x = pan_x;
        }
        if let Some(pan_y) = self.pan_y {
            state.pan_y = pan_y;
        }
        if let Some(degrees) = self.rotation {
            state.rotation = Rotation::from_degrees(degrees)?;
        }
        if let Some(scroll) = self.scroll {
            state.scroll_offset = scroll;
        }
        Ok(state)
    }
}

/// Where recognition requests go and how the overlay is tuned.
#[derive(Args)]
pub struct OracleArgs {
    /// Overlay config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Command that answers recognition requests (image on stdin, response on stdout)
    #[arg(long, conflicts_with = "response")]
    pub oracle_cmd: Option<String>,

    /// Extra argument passed to the oracle command (repeatable)
    #[arg(long = "oracle-arg", requires = "oracle_cmd")]
    pub oracle_args: Vec<String>,

    /// Replay a saved oracle response instead of calling a command
    #[arg(long)]
    pub response: Option<PathBuf>,

    /// Target language for translations
    #[arg(long)]
    pub lang: Option<String>,

    /// Append completed translations to this JSON Lines file
    #[arg(long)]
    pub record: Option<PathBuf>,
}

impl OracleArgs {
    pub fn overlay_config(&self) -> Result<OverlayConfig> {
        let mut config = match &self.config {
            Some(path) => load_overlay_config(path)?,
            None => OverlayConfig::default(),
        };
        if let Some(ref lang) = self.lang {
            config.target_language = lang.clone();
        }
        Ok(config)
    }

    pub fn transport(&self) -> Result<Arc<dyn OracleTransport>> {
        if let Some(ref program) = self.oracle_cmd {
            return Ok(Arc::new(CommandTransport::new(program, &self.oracle_args)));
        }
        if let Some(ref path) = self.response {
            return Ok(Arc::new(FileTransport::new(path)));
        }
        bail!("No oracle configured; pass --oracle-cmd or --response")
    }

    pub fn resolver(&self) -> Result<OcrResolver> {
        let mut resolver = OcrResolver::new(self.transport()?, self.overlay_config()?);
        if let Some(ref path) = self.record {
            let sink: Arc<dyn TranslationSink> = Arc::new(JsonLinesSink::append(path)?);
            resolver = resolver.with_sink(sink);
        }
        Ok(resolver)
    }
}

pub fn load_overlay_config(path: &Path) -> Result<OverlayConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&contents).context("Invalid overlay config")
}
