//! Axis-aligned rectangles

use serde::{Deserialize, Serialize};

use super::{HasSides, LineSegment, Point};

/// An axis-aligned rectangle anchored at its top-left corner
///
/// The y axis grows downward, so the rectangle spans
/// `top..=top + height` vertically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Corner with the smallest x and y
    pub top_left: Point,
    /// Horizontal extent, assumed non-negative
    pub width: f64,
    /// Vertical extent, assumed non-negative
    pub height: f64,
}

impl Rectangle {
    /// Creates a rectangle from its top-left corner and size
    pub const fn new(top_left: Point, width: f64, height: f64) -> Self {
        Self { top_left, width, height }
    }

    /// Smallest x
    pub const fn left(&self) -> f64 {
        self.top_left.x
    }

    /// Smallest y
    pub const fn top(&self) -> f64 {
        self.top_left.y
    }

    /// Largest x
    pub fn right(&self) -> f64 {
        self.top_left.x + self.width
    }

    /// Largest y
    pub fn bottom(&self) -> f64 {
        self.top_left.y + self.height
    }

    /// Corners in order top-left, top-right, bottom-right, bottom-left
    pub fn corners(&self) -> [Point; 4] {
        [
            self.top_left,
            Point::new(self.right(), self.top()),
            Point::new(self.right(), self.bottom()),
            Point::new(self.left(), self.bottom()),
        ]
    }
}

impl HasSides for Rectangle {
    type Sides = [LineSegment; 4];

    /// Top, right, bottom and left edges, walking the corners clockwise on screen
    fn sides(&self) -> Self::Sides {
        let [tl, tr, br, bl] = self.corners();
        [
            LineSegment::new(tl, tr),
            LineSegment::new(tr, br),
            LineSegment::new(br, bl),
            LineSegment::new(bl, tl),
        ]
    }
}
