//! Boundary side capability

use super::LineSegment;

/// A shape whose boundary is an ordered, finite sequence of segments
///
/// `sides` can be called any number of times and always yields the same
/// sides in the same order.
pub trait HasSides {
    /// Concrete side collection, usually a fixed-size array
    type Sides: IntoIterator<Item = LineSegment>;

    /// The boundary segments of this shape, in order
    fn sides(&self) -> Self::Sides;
}
