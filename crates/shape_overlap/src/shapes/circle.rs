//! Circles

use serde::{Deserialize, Serialize};

use super::Point;

/// A circle given by center and radius
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center point
    pub center: Point,
    /// Radius, assumed non-negative
    pub radius: f64,
}

impl Circle {
    /// Creates a circle
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Whether `point` lies on or inside the circle
    pub fn contains_point(&self, point: &Point) -> bool {
        self.center.distance_to(point) <= self.radius
    }
}
