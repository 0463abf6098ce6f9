//! Orientation and segment intersection
//!
//! Every polygon overlap test in this crate ends up here: two segments
//! intersect when each one's endpoints straddle the other's supporting line,
//! or when a collinear endpoint sits on the other segment.

use crate::shapes::{LineSegment, Point};

/// Turn class of three points
///
/// The two non-collinear classes only need to be told apart; nothing relies on
/// which of them means clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The three points lie on one line
    Collinear,
    /// Cross product is positive
    Positive,
    /// Cross product is negative
    Negative,
}

/// Classifies the turn from `a -> b` to `b -> c`
///
/// Only an exact zero cross product counts as collinear. A NaN cross product
/// (non-finite input) falls into [`Orientation::Negative`].
pub fn orientation(a: &Point, b: &Point, c: &Point) -> Orientation {
    let value = (b.y - a.y) * (c.x - b.x) - (b.x - a.x) * (c.y - b.y);

    if value == 0.0 {
        Orientation::Collinear
    } else if value > 0.0 {
        Orientation::Positive
    } else {
        Orientation::Negative
    }
}

/// Whether `p` lies in the axis-aligned box spanned by `a` and `c`, borders included
///
/// Only meaningful as an on-segment test when `p` is already known to be
/// collinear with `a` and `c`.
pub fn on_segment_bounds(a: &Point, p: &Point, c: &Point) -> bool {
    p.x <= a.x.max(c.x) && p.x >= a.x.min(c.x) && p.y <= a.y.max(c.y) && p.y >= a.y.min(c.y)
}

/// Whether two finite segments cross or touch
pub fn segments_intersect(s1: &LineSegment, s2: &LineSegment) -> bool {
    let d1 = orientation(&s1.a, &s1.b, &s2.a);
    let d2 = orientation(&s1.a, &s1.b, &s2.b);
    let d3 = orientation(&s2.a, &s2.b, &s1.a);
    let d4 = orientation(&s2.a, &s2.b, &s1.b);

    if d1 != d2 && d3 != d4 {
        return true;
    }

    // Collinear endpoint: touching, or overlapping along a shared line
    (d1 == Orientation::Collinear && on_segment_bounds(&s1.a, &s2.a, &s1.b))
        || (d2 == Orientation::Collinear && on_segment_bounds(&s1.a, &s2.b, &s1.b))
        || (d3 == Orientation::Collinear && on_segment_bounds(&s2.a, &s1.a, &s2.b))
        || (d4 == Orientation::Collinear && on_segment_bounds(&s2.a, &s1.b, &s2.b))
}
