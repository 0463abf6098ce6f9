//! Math utilities and types
//!
//! Double precision 2D types backed by `nalgebra`. Shape coordinates come from
//! image space, so everything here is `f64`.

pub use nalgebra::distance;

/// 2D point type
pub type Point2 = nalgebra::Point2<f64>;

/// Math utility functions
pub mod utils {
    /// Square root that treats a negative radicand as zero
    ///
    /// NaN is passed through unchanged.
    pub fn clamped_sqrt(radicand: f64) -> f64 {
        if radicand < 0.0 {
            0.0
        } else {
            radicand.sqrt()
        }
    }
}
