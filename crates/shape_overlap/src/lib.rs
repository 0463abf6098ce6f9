//! # Shape Overlap
//!
//! Stateless overlap predicates for 2D shapes detected by a foreground
//! shape-detection pipeline.
//!
//! ## Features
//!
//! - **Segment intersection**: orientation-based crossing and touching test
//! - **Boundary decomposition**: triangles and rectangles reduce to their sides
//! - **Containment branch**: catches one shape nested inside another
//! - **Circle algebra**: closed-form center/radius distance tests
//! - **Configurable numerics**: explicit policies for the delicate cases
//!
//! ## Quick Start
//!
//! ```rust
//! use shape_overlap::prelude::*;
//!
//! let a = Rectangle::new(Point::new(0.0, 0.0), 4.0, 4.0);
//! let b = Rectangle::new(Point::new(2.0, 2.0), 4.0, 4.0);
//! assert!(overlap::rectangle_with_rectangle(&a, &b));
//!
//! let far = Rectangle::new(Point::new(10.0, 10.0), 4.0, 4.0);
//! assert!(!Shape::from(a).overlaps(&Shape::from(far)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::float_cmp)]

pub mod config;
pub mod foundation;
pub mod overlap;
pub mod shapes;

#[cfg(test)]
mod tests;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        overlap::{
            self, OverlapConfig, OverlapEngine, RadicandPolicy, TriangleContainment,
        },
        shapes::{Circle, HasSides, LineSegment, Point, Rectangle, Shape, Triangle},
    };
}
