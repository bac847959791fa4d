use serde::{Deserialize, Serialize};

use crate::consts::{ERROR_TEXT, PLACEHOLDER_TEXT, PLACEHOLDER_TRANSLATION};
use crate::geometry::{BoundingBox, CoordSpace};
use crate::oracle::RecognizedItem;
use crate::viewport::{image_rect_to_screen_bounds, ViewState};

/// One overlay entry: recognized text, its translation and where to draw it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverlayResult {
    pub text: String,
    pub translation: String,
    pub bbox: BoundingBox,
    #[serde(default)]
    pub space: CoordSpace,
    pub visible: bool,
    pub loading: bool,
    /// Placed by the fallback layout rather than a detected region.
    pub is_fallback: bool,
}

impl OverlayResult {
    /// A `loading` entry shown while recognition is in flight.
    pub fn placeholder(bbox: BoundingBox, space: CoordSpace) -> Self {
        Self {
            text: PLACEHOLDER_TEXT.to_string(),
            translation: PLACEHOLDER_TRANSLATION.to_string(),
            bbox,
            space,
            visible: true,
            loading: true,
            is_fallback: false,
        }
    }

    /// An item anchored to a detected region.
    pub fn matched(item: RecognizedItem, bbox: BoundingBox) -> Self {
        Self {
            text: item.original_text,
            translation: item.translated_text,
            bbox,
            space: CoordSpace::Image,
            visible: true,
            loading: false,
            is_fallback: false,
        }
    }

    /// An item with no region of its own, placed in the fallback band.
    pub fn fallback(item: RecognizedItem, bbox: BoundingBox) -> Self {
        Self {
            is_fallback: true,
            ..Self::matched(item, bbox)
        }
    }

    /// A visible, non-loading item carrying a failure message.
    pub fn error(message: impl std::fmt::Display, bbox: BoundingBox, space: CoordSpace) -> Self {
        Self {
            text: ERROR_TEXT.to_string(),
            translation: format!("{ERROR_TEXT}: {message}"),
            bbox,
            space,
            visible: true,
            loading: false,
            is_fallback: false,
        }
    }

    /// Fill a placeholder in place with recognized text.
    pub fn complete(&mut self, item: RecognizedItem) {
        self.text = item.original_text;
        self.translation = item.translated_text;
        self.loading = false;
    }

    /// Fill a placeholder in place with a failure message.
    pub fn fail(&mut self, message: impl std::fmt::Display) {
        self.text = ERROR_TEXT.to_string();
        self.translation = format!("{ERROR_TEXT}: {message}");
        self.loading = false;
    }

    /// The box in display coordinates for the given view.
    pub fn project(&self, view: &ViewState) -> BoundingBox {
        match self.space {
            CoordSpace::Display => self.bbox,
            CoordSpace::Image => image_rect_to_screen_bounds(&self.bbox, view),
        }
    }
}
