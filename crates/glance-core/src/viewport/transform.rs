use crate::geometry::BoundingBox;

use super::state::{ViewMode, ViewState};

/// Where the (rotated, zoomed) media lands inside the window.
///
/// `draw_width`/`draw_height` are the unrotated drawn extents; the rotated
/// on-screen extents are [`DrawRect::final_width`]/[`DrawRect::final_height`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawRect {
    pub draw_width: f64,
    pub draw_height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub rotated: bool,
}

impl DrawRect {
    pub fn final_width(&self) -> f64 {
        if self.rotated {
            self.draw_height
        } else {
            self.draw_width
        }
    }

    pub fn final_height(&self) -> f64 {
        if self.rotated {
            self.draw_width
        } else {
            self.draw_height
        }
    }

    /// Screen position of the drawn image's center.
    pub fn center(&self) -> (f64, f64) {
        (
            self.offset_x + self.final_width() / 2.0,
            self.offset_y + self.final_height() / 2.0,
        )
    }
}

/// Unzoomed drawn extents `(draw_w, draw_h)` for the state's view mode.
///
/// Shared with the edge locator, which works at 1x logical scale.
pub(crate) fn base_extents(state: &ViewState) -> (f64, f64) {
    let rotated = state.rotation.is_quarter_turn();
    let (effective_w, effective_h) = if rotated {
        (state.media_height, state.media_width)
    } else {
        (state.media_width, state.media_height)
    };

    let scale = match state.view_mode {
        ViewMode::Original => 1.0,
        ViewMode::FitWidth | ViewMode::Reader => state.window_width / effective_w,
        ViewMode::FitHeight | ViewMode::Landscape => state.window_height / effective_h,
    };

    (state.media_width * scale, state.media_height * scale)
}

/// Compute the draw rectangle shared by rendering and hit-testing.
///
/// Returns `None` when the geometry is degenerate (missing media extents, a
/// non-positive zoom or a zero-sized draw area), in which case every mapping
/// yields zeros.
pub fn draw_rect(state: &ViewState) -> Option<DrawRect> {
    if state.is_degenerate() || !(state.zoom > 0.0 && state.zoom.is_finite()) {
        return None;
    }

    let rotated = state.rotation.is_quarter_turn();
    let (draw_w, draw_h) = base_extents(state);
    if !(draw_w > 0.0 && draw_h > 0.0) || !draw_w.is_finite() || !draw_h.is_finite() {
        return None;
    }

    let (final_w, final_h) = if rotated {
        (draw_h, draw_w)
    } else {
        (draw_w, draw_h)
    };
    let centered_x = state.pan_x + (state.window_width - final_w) / 2.0;
    let centered_y = state.pan_y + (state.window_height - final_h) / 2.0;

    let (mut offset_x, mut offset_y) = match state.view_mode {
        ViewMode::Original | ViewMode::FitWidth | ViewMode::FitHeight => (centered_x, centered_y),
        ViewMode::Reader => (centered_x, state.pan_y - state.scroll_offset),
        ViewMode::Landscape => (state.pan_x - state.scroll_offset, centered_y),
    };

    let zoom = state.zoom;
    if zoom != 1.0 {
        // Zoom pivots about the window center.
        let center_x = state.window_width / 2.0;
        let center_y = state.window_height / 2.0;
        offset_x = center_x - (center_x - offset_x) * zoom;
        offset_y = center_y - (center_y - offset_y) * zoom;
    }

    Some(DrawRect {
        draw_width: draw_w * zoom,
        draw_height: draw_h * zoom,
        offset_x,
        offset_y,
        rotated,
    })
}

/// Map a window point to image pixel coordinates without rounding.
pub fn screen_to_image_precise(screen_x: f64, screen_y: f64, state: &ViewState) -> (f64, f64) {
    let Some(rect) = draw_rect(state) else {
        return (0.0, 0.0);
    };
    let (cx, cy) = rect.center();

    let (ux, uy) = state
        .rotation
        .apply(screen_x - cx, screen_y - cy, true);

    (
        ux / rect.draw_width * state.media_width + state.media_width / 2.0,
        uy / rect.draw_height * state.media_height + state.media_height / 2.0,
    )
}

/// Map a window point to the nearest image pixel.
pub fn screen_to_image(screen_x: f64, screen_y: f64, state: &ViewState) -> (i64, i64) {
    let (x, y) = screen_to_image_precise(screen_x, screen_y, state);
    (x.round() as i64, y.round() as i64)
}

/// Map an image-space point and extent to window coordinates.
///
/// The origin is rotated with the media; width and height are only scaled.
/// Use [`BoundingBox::rounded`] for integer pixels.
pub fn image_to_screen(
    img_x: f64,
    img_y: f64,
    img_w: f64,
    img_h: f64,
    state: &ViewState,
) -> BoundingBox {
    let Some(rect) = draw_rect(state) else {
        return BoundingBox::ZERO;
    };

    let rel_x = (img_x - state.media_width / 2.0) / state.media_width * rect.draw_width;
    let rel_y = (img_y - state.media_height / 2.0) / state.media_height * rect.draw_height;
    let rel_w = img_w / state.media_width * rect.draw_width;
    let rel_h = img_h / state.media_height * rect.draw_height;

    let (rx, ry) = state.rotation.apply(rel_x, rel_y, false);
    let (cx, cy) = rect.center();

    BoundingBox::new(rx + cx, ry + cy, rel_w, rel_h)
}

/// Axis-aligned display rectangle covering an image-space box under the
/// current rotation.
pub fn image_rect_to_screen_bounds(bbox: &BoundingBox, state: &ViewState) -> BoundingBox {
    if draw_rect(state).is_none() {
        return BoundingBox::ZERO;
    }
    let a = image_to_screen(bbox.x, bbox.y, 0.0, 0.0, state);
    let b = image_to_screen(bbox.right(), bbox.bottom(), 0.0, 0.0, state);
    BoundingBox::from_corners((a.x, a.y), (b.x, b.y))
}

/// Map a window rectangle to the image rectangle spanned by its corners.
pub fn screen_rect_to_image(selection: &BoundingBox, state: &ViewState) -> BoundingBox {
    let (x1, y1) = screen_to_image(selection.x, selection.y, state);
    let (x2, y2) = screen_to_image(selection.right(), selection.bottom(), state);
    BoundingBox::from_corners((x1 as f64, y1 as f64), (x2 as f64, y2 as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::state::Rotation;

    #[test]
    fn fit_width_fills_window_width() {
        let state = ViewState::new(400.0, 300.0, 800.0, 600.0, ViewMode::FitWidth);
        let rect = draw_rect(&state).unwrap();
        assert_eq!(rect.final_width(), 800.0);
        assert_eq!(rect.final_height(), 600.0);
        assert_eq!((rect.offset_x, rect.offset_y), (0.0, 0.0));
    }

    #[test]
    fn rotated_fit_height_swaps_extents() {
        let state = ViewState::new(400.0, 200.0, 800.0, 800.0, ViewMode::FitHeight)
            .with_rotation(Rotation::Deg90);
        let rect = draw_rect(&state).unwrap();
        // Rotated height is the media width, scaled to the window height.
        assert_eq!(rect.final_height(), 800.0);
        assert_eq!(rect.final_width(), 400.0);
        assert_eq!(rect.offset_x, 200.0);
    }

    #[test]
    fn reader_scroll_moves_content_up() {
        let state = ViewState::new(100.0, 1000.0, 100.0, 200.0, ViewMode::Reader).with_scroll(300.0);
        let rect = draw_rect(&state).unwrap();
        assert_eq!(rect.offset_y, -300.0);
        assert_eq!(screen_to_image(50.0, 0.0, &state), (50, 300));
    }

    #[test]
    fn zero_window_is_degenerate() {
        let state = ViewState::new(100.0, 100.0, 0.0, 0.0, ViewMode::FitWidth);
        assert!(draw_rect(&state).is_none());
        assert_eq!(screen_to_image(10.0, 10.0, &state), (0, 0));
    }
}
