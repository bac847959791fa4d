pub mod edge;
pub mod state;
pub mod transform;

pub use edge::{edge_position, Edge};
pub use state::{Rotation, ViewMode, ViewState};
pub use transform::{
    draw_rect, image_rect_to_screen_bounds, image_to_screen, screen_rect_to_image,
    screen_to_image, screen_to_image_precise, DrawRect,
};
