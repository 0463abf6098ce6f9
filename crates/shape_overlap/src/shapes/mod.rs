//! Shape value types
//!
//! Immutable 2D shapes as handed over by the detection pipeline. The overlap
//! engine only ever reads them.
//!
//! # Key Types
//!
//! - [`Point`], [`LineSegment`], [`Triangle`], [`Rectangle`], [`Circle`] - plain data holders
//! - [`HasSides`] - shapes whose boundary is an ordered sequence of segments
//! - [`Shape`] - any of the above, for type-erased overlap tests

pub mod circle;
pub mod point;
pub mod rectangle;
pub mod segment;
pub mod shape;
pub mod sides;
pub mod triangle;

pub use circle::Circle;
pub use point::Point;
pub use rectangle::Rectangle;
pub use segment::LineSegment;
pub use shape::Shape;
pub use sides::HasSides;
pub use triangle::Triangle;
