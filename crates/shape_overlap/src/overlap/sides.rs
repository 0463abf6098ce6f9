//! Boundary decomposition
//!
//! Reduces overlap of polygon-like shapes to pairwise side intersection.

use super::orientation::segments_intersect;
use crate::shapes::{HasSides, LineSegment};

/// Whether any side of `first` intersects any side of `second`
///
/// Stops at the first intersecting pair.
pub fn any_sides_intersect<A, B>(first: &A, second: &B) -> bool
where
    A: HasSides + ?Sized,
    B: HasSides + ?Sized,
{
    sides_cross(first.sides(), second)
}

/// Whether `segment` intersects any side of `shape`
///
/// The segment acts as a shape with a single side.
pub fn segment_crosses_sides<S>(segment: &LineSegment, shape: &S) -> bool
where
    S: HasSides + ?Sized,
{
    sides_cross([*segment], shape)
}

fn sides_cross<I, S>(sides: I, other: &S) -> bool
where
    I: IntoIterator<Item = LineSegment>,
    S: HasSides + ?Sized,
{
    sides.into_iter().any(|side| {
        other
            .sides()
            .into_iter()
            .any(|other_side| segments_intersect(&side, &other_side))
    })
}
