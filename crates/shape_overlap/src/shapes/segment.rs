//! Finite line segments

use serde::{Deserialize, Serialize};

use super::Point;

/// A segment between two endpoints
///
/// `a == b` is allowed and describes a zero-length segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    /// First endpoint
    pub a: Point,
    /// Second endpoint
    pub b: Point,
}

impl LineSegment {
    /// Creates a segment from its endpoints
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Distance between the endpoints
    pub fn length(&self) -> f64 {
        self.a.distance_to(&self.b)
    }

    /// The same segment with its endpoints swapped
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self::new(self.b, self.a)
    }
}
