//! Point containment tests
//!
//! The two tests deliberately disagree on boundary points: a point on a
//! rectangle's edge is outside the rectangle, a point on a triangle's edge is
//! inside the triangle.

use serde::{Deserialize, Serialize};

use crate::shapes::{Point, Rectangle, Triangle};

/// Edge orderings used by the triangle sign test
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriangleContainment {
    /// Signs against edges AB, BC and CA
    #[default]
    Canonical,
    /// Signs against (A, B), (A, C) and (C, A)
    ///
    /// The last two signs are always opposite, so a point only counts as
    /// contained when it lies exactly on the line through A and C. Kept for
    /// parity with detectors calibrated against that behavior.
    Legacy,
}

/// Whether `point` lies strictly inside `rectangle`
///
/// Points on the edges are not contained.
pub fn point_in_rectangle(point: &Point, rectangle: &Rectangle) -> bool {
    rectangle.left() < point.x
        && point.x < rectangle.right()
        && rectangle.top() < point.y
        && point.y < rectangle.bottom()
}

/// Whether `point` lies inside or on the boundary of `triangle`
pub fn point_in_triangle(point: &Point, triangle: &Triangle) -> bool {
    point_in_triangle_using(point, triangle, TriangleContainment::Canonical)
}

/// [`point_in_triangle`] with an explicit edge ordering
pub fn point_in_triangle_using(
    point: &Point,
    triangle: &Triangle,
    containment: TriangleContainment,
) -> bool {
    let Triangle { a, b, c } = triangle;
    let signs = match containment {
        TriangleContainment::Canonical => [sign(point, a, b), sign(point, b, c), sign(point, c, a)],
        TriangleContainment::Legacy => [sign(point, a, b), sign(point, a, c), sign(point, c, a)],
    };

    let has_negative = signs.iter().any(|&d| d < 0.0);
    let has_positive = signs.iter().any(|&d| d > 0.0);

    !(has_negative && has_positive)
}

/// Signed doubled area of the triangle (p1, p2, p3)
fn sign(p1: &Point, p2: &Point, p3: &Point) -> f64 {
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}
