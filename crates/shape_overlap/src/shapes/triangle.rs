//! Triangles

use serde::{Deserialize, Serialize};

use super::{HasSides, LineSegment, Point};

/// A triangle given by its three vertices
///
/// Collinear vertices are accepted; the overlap predicates degrade to testing
/// the flattened boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// First vertex, also the triangle's reference point for containment
    pub a: Point,
    /// Second vertex
    pub b: Point,
    /// Third vertex
    pub c: Point,
}

impl Triangle {
    /// Creates a triangle from three vertices
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// Vertices in order A, B, C
    pub const fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }
}

impl HasSides for Triangle {
    type Sides = [LineSegment; 3];

    /// Sides AB, BC, CA
    fn sides(&self) -> Self::Sides {
        [
            LineSegment::new(self.a, self.b),
            LineSegment::new(self.b, self.c),
            LineSegment::new(self.c, self.a),
        ]
    }
}
