//! Configured overlap engine
//!
//! Holds the numerical policies and answers every shape-pair question. The
//! engine is a plain `Copy` value with no interior state, so one instance can
//! be shared freely between threads.

use serde::{Deserialize, Serialize};

use super::circle::{self as algebra, RadicandPolicy};
use super::containment::{point_in_rectangle, point_in_triangle_using, TriangleContainment};
use super::orientation::segments_intersect;
use super::sides::{any_sides_intersect, segment_crosses_sides};
use crate::config::Config;
use crate::foundation::logging::trace;
use crate::shapes::{Circle, LineSegment, Point, Rectangle, Shape, Triangle};

/// Numerical policies of the overlap engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlapConfig {
    /// Handling of a negative radicand in the circle/segment test
    pub radicand: RadicandPolicy,
    /// Edge ordering of the point-in-triangle test
    pub triangle_containment: TriangleContainment,
}

impl Config for OverlapConfig {}

/// Overlap predicates for every pair of supported shapes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlapEngine {
    config: OverlapConfig,
}

impl OverlapEngine {
    /// Create an engine with the given policies
    pub const fn new(config: OverlapConfig) -> Self {
        Self { config }
    }

    /// The policies this engine applies
    pub const fn config(&self) -> &OverlapConfig {
        &self.config
    }

    /// Point-in-triangle test under the configured edge ordering
    pub fn point_in_triangle(&self, point: &Point, triangle: &Triangle) -> bool {
        point_in_triangle_using(point, triangle, self.config.triangle_containment)
    }

    /// Test if two segments cross or touch
    pub fn segment_with_segment(&self, first: &LineSegment, second: &LineSegment) -> bool {
        segments_intersect(first, second)
    }

    /// Test if a segment crosses or touches a triangle's boundary
    ///
    /// A segment lying entirely inside the triangle is not reported.
    pub fn segment_with_triangle(&self, segment: &LineSegment, triangle: &Triangle) -> bool {
        segment_crosses_sides(segment, triangle)
    }

    /// Test if a segment crosses or touches a rectangle's boundary
    ///
    /// A segment lying entirely inside the rectangle is not reported.
    pub fn segment_with_rectangle(&self, segment: &LineSegment, rectangle: &Rectangle) -> bool {
        segment_crosses_sides(segment, rectangle)
    }

    /// Test if two triangles overlap
    pub fn triangle_with_triangle(&self, first: &Triangle, second: &Triangle) -> bool {
        if any_sides_intersect(first, second) {
            trace!("Triangle sides cross");
            return true;
        }

        if self.point_in_triangle(&second.a, first) || self.point_in_triangle(&first.a, second) {
            trace!("Triangle nested inside triangle");
            return true;
        }

        false
    }

    /// Test if a triangle and a rectangle overlap
    pub fn triangle_with_rectangle(&self, triangle: &Triangle, rectangle: &Rectangle) -> bool {
        if any_sides_intersect(triangle, rectangle) {
            trace!("Triangle and rectangle sides cross");
            return true;
        }

        if point_in_rectangle(&triangle.a, rectangle) {
            trace!("Triangle nested inside rectangle");
            return true;
        }

        if self.point_in_triangle(&rectangle.top_left, triangle) {
            trace!("Rectangle nested inside triangle");
            return true;
        }

        false
    }

    /// Test if two rectangles overlap
    pub fn rectangle_with_rectangle(&self, first: &Rectangle, second: &Rectangle) -> bool {
        if any_sides_intersect(first, second) {
            trace!("Rectangle sides cross");
            return true;
        }

        if point_in_rectangle(&first.top_left, second) || point_in_rectangle(&second.top_left, first) {
            trace!("Rectangle nested inside rectangle");
            return true;
        }

        false
    }

    /// Test if a circle reaches any point of a segment
    pub fn circle_with_segment(&self, circle: &Circle, segment: &LineSegment) -> bool {
        algebra::circle_with_segment(circle, segment, self.config.radicand)
    }

    /// Test if a circle reaches any side of a triangle
    ///
    /// A circle inside the triangle that reaches no side is not reported.
    pub fn circle_with_triangle(&self, circle: &Circle, triangle: &Triangle) -> bool {
        algebra::circle_with_sides(circle, triangle, self.config.radicand)
    }

    /// Test if a circle reaches any side of a rectangle
    ///
    /// A circle inside the rectangle that reaches no side is not reported.
    pub fn circle_with_rectangle(&self, circle: &Circle, rectangle: &Rectangle) -> bool {
        algebra::circle_with_sides(circle, rectangle, self.config.radicand)
    }

    /// Test if two circles touch or overlap
    pub fn circle_with_circle(&self, first: &Circle, second: &Circle) -> bool {
        algebra::circle_with_circle(first, second)
    }

    /// Test if two shapes of any kind overlap
    pub fn overlaps(&self, first: &Shape, second: &Shape) -> bool {
        use crate::shapes::Shape::{Circle as C, Rectangle as R, Segment as S, Triangle as T};

        let result = match (first, second) {
            (S(a), S(b)) => self.segment_with_segment(a, b),
            (S(s), T(t)) | (T(t), S(s)) => self.segment_with_triangle(s, t),
            (S(s), R(r)) | (R(r), S(s)) => self.segment_with_rectangle(s, r),
            (S(s), C(c)) | (C(c), S(s)) => self.circle_with_segment(c, s),

            (T(a), T(b)) => self.triangle_with_triangle(a, b),
            (T(t), R(r)) | (R(r), T(t)) => self.triangle_with_rectangle(t, r),
            (T(t), C(c)) | (C(c), T(t)) => self.circle_with_triangle(c, t),

            (R(a), R(b)) => self.rectangle_with_rectangle(a, b),
            (R(r), C(c)) | (C(c), R(r)) => self.circle_with_rectangle(c, r),

            (C(a), C(b)) => self.circle_with_circle(a, b),
        };

        trace!("{} x {} overlap: {result}", first.kind(), second.kind());
        result
    }
}

impl From<OverlapConfig> for OverlapEngine {
    fn from(config: OverlapConfig) -> Self {
        Self::new(config)
    }
}
