use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle. Whether it is in image or display pixels is
/// tracked by the owner (see [`CoordSpace`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from two opposite corners given in any order.
    pub fn from_corners(a: (f64, f64), b: (f64, f64)) -> Self {
        Self {
            x: a.0.min(b.0),
            y: a.1.min(b.1),
            width: (b.0 - a.0).abs(),
            height: (b.1 - a.1).abs(),
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Round every component to the nearest integer.
    pub fn rounded(&self) -> Self {
        Self {
            x: self.x.round(),
            y: self.y.round(),
            width: self.width.round(),
            height: self.height.round(),
        }
    }
}

/// Coordinate system a box is expressed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordSpace {
    /// Pixel coordinates of the source media, unaffected by rotation or zoom.
    #[default]
    Image,
    /// Pixel coordinates of the current window.
    Display,
}

impl std::fmt::Display for CoordSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Display => write!(f, "display"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_in_any_order_normalize() {
        let a = BoundingBox::from_corners((10.0, 40.0), (2.0, 5.0));
        assert_eq!(a, BoundingBox::new(2.0, 5.0, 8.0, 35.0));
        assert_eq!(a.right(), 10.0);
        assert_eq!(a.bottom(), 40.0);
    }

    #[test]
    fn zero_extent_is_empty() {
        assert!(BoundingBox::new(3.0, 3.0, 0.0, 4.0).is_empty());
        assert!(!BoundingBox::new(3.0, 3.0, 1.0, 4.0).is_empty());
    }
}
