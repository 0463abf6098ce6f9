//! Overlap detection between pairs of 2D shapes
//!
//! Every predicate answers a single yes/no question for one pair of shapes
//! and keeps no state between calls.
//!
//! # Architecture
//!
//! - **Segment primitive**: polygon-like pairs reduce to segment intersection
//! - **Boundary decomposition**: shapes with [`HasSides`](crate::shapes::HasSides)
//!   are tested side against side
//! - **Containment branch**: a reference point test catches full nesting
//! - **Circle algebra**: circles use center/radius distances instead of sides
//!
//! # Module Organization
//!
//! - [`orientation`] - Turn classification and segment intersection
//! - [`containment`] - Point-in-rectangle and point-in-triangle
//! - [`sides`] - Side-against-side dispatch
//! - [`circle`] - Circle/segment and circle/circle distance tests
//! - [`engine`] - Policy-carrying engine and whole-shape dispatch
//! - [`predicates`] - Free functions using the default policies

pub mod circle;
pub mod containment;
pub mod engine;
pub mod orientation;
pub mod predicates;
pub mod sides;

pub use circle::RadicandPolicy;
pub use containment::{point_in_rectangle, point_in_triangle, TriangleContainment};
pub use engine::{OverlapConfig, OverlapEngine};
pub use orientation::{orientation, segments_intersect, Orientation};
pub use predicates::*;
pub use sides::any_sides_intersect;
