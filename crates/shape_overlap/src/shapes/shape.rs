//! Type-erased shapes
//!
//! Lets callers hold detected regions of mixed kinds in one collection and
//! test any two of them without matching on the kinds themselves.

use serde::{Deserialize, Serialize};

use super::{Circle, LineSegment, Rectangle, Triangle};
use crate::overlap::OverlapEngine;

/// Any shape the overlap engine understands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// A line segment
    Segment(LineSegment),
    /// A triangle
    Triangle(Triangle),
    /// An axis-aligned rectangle
    Rectangle(Rectangle),
    /// A circle
    Circle(Circle),
}

impl Shape {
    /// Short name of the shape kind, used in log records
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Segment(_) => "segment",
            Self::Triangle(_) => "triangle",
            Self::Rectangle(_) => "rectangle",
            Self::Circle(_) => "circle",
        }
    }

    /// Test if this shape overlaps another using the default policies
    pub fn overlaps(&self, other: &Self) -> bool {
        OverlapEngine::default().overlaps(self, other)
    }

    /// Test if this shape overlaps another using the given engine's policies
    pub fn overlaps_with(&self, other: &Self, engine: &OverlapEngine) -> bool {
        engine.overlaps(self, other)
    }
}

impl From<LineSegment> for Shape {
    fn from(segment: LineSegment) -> Self {
        Self::Segment(segment)
    }
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Self::Triangle(triangle)
    }
}

impl From<Rectangle> for Shape {
    fn from(rectangle: Rectangle) -> Self {
        Self::Rectangle(rectangle)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}
