//! Per-pair overlap predicates with the default policies
//!
//! Thin wrappers over [`OverlapEngine::default`]. Build an
//! [`OverlapEngine`] from an [`OverlapConfig`](super::OverlapConfig) to pick
//! other policies.

use super::OverlapEngine;
use crate::shapes::{Circle, LineSegment, Rectangle, Triangle};

const ENGINE: OverlapEngine = OverlapEngine::new(super::OverlapConfig {
    radicand: super::RadicandPolicy::Clamp,
    triangle_containment: super::TriangleContainment::Canonical,
});

/// Segment x segment, see [`OverlapEngine::segment_with_segment`]
pub fn segment_with_segment(first: &LineSegment, second: &LineSegment) -> bool {
    ENGINE.segment_with_segment(first, second)
}

/// Segment x triangle, see [`OverlapEngine::segment_with_triangle`]
pub fn segment_with_triangle(segment: &LineSegment, triangle: &Triangle) -> bool {
    ENGINE.segment_with_triangle(segment, triangle)
}

/// Segment x rectangle, see [`OverlapEngine::segment_with_rectangle`]
pub fn segment_with_rectangle(segment: &LineSegment, rectangle: &Rectangle) -> bool {
    ENGINE.segment_with_rectangle(segment, rectangle)
}

/// Triangle x triangle, see [`OverlapEngine::triangle_with_triangle`]
pub fn triangle_with_triangle(first: &Triangle, second: &Triangle) -> bool {
    ENGINE.triangle_with_triangle(first, second)
}

/// Triangle x rectangle, see [`OverlapEngine::triangle_with_rectangle`]
pub fn triangle_with_rectangle(triangle: &Triangle, rectangle: &Rectangle) -> bool {
    ENGINE.triangle_with_rectangle(triangle, rectangle)
}

/// Rectangle x rectangle, see [`OverlapEngine::rectangle_with_rectangle`]
pub fn rectangle_with_rectangle(first: &Rectangle, second: &Rectangle) -> bool {
    ENGINE.rectangle_with_rectangle(first, second)
}

/// Circle x segment, see [`OverlapEngine::circle_with_segment`]
pub fn circle_with_segment(circle: &Circle, segment: &LineSegment) -> bool {
    ENGINE.circle_with_segment(circle, segment)
}

/// Circle x triangle, see [`OverlapEngine::circle_with_triangle`]
pub fn circle_with_triangle(circle: &Circle, triangle: &Triangle) -> bool {
    ENGINE.circle_with_triangle(circle, triangle)
}

/// Circle x rectangle, see [`OverlapEngine::circle_with_rectangle`]
pub fn circle_with_rectangle(circle: &Circle, rectangle: &Rectangle) -> bool {
    ENGINE.circle_with_rectangle(circle, rectangle)
}

/// Circle x circle, see [`OverlapEngine::circle_with_circle`]
pub fn circle_with_circle(first: &Circle, second: &Circle) -> bool {
    ENGINE.circle_with_circle(first, second)
}
