//! 2D points

use serde::{Deserialize, Serialize};

use crate::foundation::math::{self, Point2};

/// A point in image space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate, growing downward
    pub y: f64,
}

impl Point {
    /// Creates a new point from (x, y) coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Self) -> f64 {
        math::distance(&Point2::from(*self), &Point2::from(*other))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for Point2 {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point2> for Point {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}
