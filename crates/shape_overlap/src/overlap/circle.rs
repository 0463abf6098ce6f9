//! Circle distance algebra
//!
//! Circles are never decomposed into sides. They are tested with closed-form
//! distances between the center and the other shape.

use serde::{Deserialize, Serialize};

use crate::foundation::logging::{debug, trace};
use crate::foundation::math::utils::clamped_sqrt;
use crate::shapes::{Circle, HasSides, LineSegment, Point};

/// What to do when the projection radicand comes out negative
///
/// The radicand `farthest² - perpendicular²` is never negative in exact
/// arithmetic, but rounding can push it just below zero.
///
/// The policy shapes [`projection_length`](Self::projection_length) only. It
/// never changes what [`circle_with_segment`] returns: the radicand is reached
/// only when both endpoints lie outside the circle, and a negative radicand
/// then means `perpendicular > farthest > radius`, which already fails the
/// perpendicular comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadicandPolicy {
    /// Treat the radicand as zero, giving a zero projection length
    #[default]
    Clamp,
    /// Take the square root anyway, yielding NaN
    Propagate,
}

impl RadicandPolicy {
    /// Projection length of the farthest endpoint onto the segment's line
    pub fn projection_length(self, farthest: f64, perpendicular: f64) -> f64 {
        let radicand = farthest * farthest - perpendicular * perpendicular;
        if radicand < 0.0 {
            debug!("Negative projection radicand {radicand:e}, policy {:?}", self);
        }

        match self {
            Self::Clamp => clamped_sqrt(radicand),
            Self::Propagate => radicand.sqrt(),
        }
    }
}

/// Distance from `point` to the infinite line through the segment's endpoints
///
/// NaN for a zero-length segment.
pub fn perpendicular_distance(point: &Point, segment: &LineSegment) -> f64 {
    let LineSegment { a: p, b: q } = segment;
    let a = p.y - q.y;
    let b = q.x - p.x;
    let c = p.x * q.y - q.x * p.y;

    (a * point.x + b * point.y + c).abs() / (a * a + b * b).sqrt()
}

/// Whether `circle` touches or covers any part of `segment`
pub fn circle_with_segment(circle: &Circle, segment: &LineSegment, policy: RadicandPolicy) -> bool {
    if circle.contains_point(&segment.a) || circle.contains_point(&segment.b) {
        trace!("Segment endpoint inside circle at {:?}", circle.center);
        return true;
    }

    let farthest = farthest_endpoint_distance(&circle.center, segment);
    let perpendicular = perpendicular_distance(&circle.center, segment);
    let projection = policy.projection_length(farthest, perpendicular);

    // Any NaN operand fails the comparison
    perpendicular <= circle.radius && projection <= segment.length()
}

fn farthest_endpoint_distance(point: &Point, segment: &LineSegment) -> f64 {
    segment.a.distance_to(point).max(segment.b.distance_to(point))
}

/// Whether `circle` touches any side of `shape`
///
/// A circle lying entirely inside the shape without reaching a side is not
/// reported.
pub fn circle_with_sides<S>(circle: &Circle, shape: &S, policy: RadicandPolicy) -> bool
where
    S: HasSides + ?Sized,
{
    shape
        .sides()
        .into_iter()
        .any(|side| circle_with_segment(circle, &side, policy))
}

/// Whether two circles touch or overlap
pub fn circle_with_circle(first: &Circle, second: &Circle) -> bool {
    first.center.distance_to(&second.center) <= first.radius + second.radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Rectangle, Triangle};
    use approx::assert_relative_eq;

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> LineSegment {
        LineSegment::new(Point::new(ax, ay), Point::new(bx, by))
    }

    fn unit_circle() -> Circle {
        Circle::new(Point::new(0.0, 0.0), 1.0)
    }

    #[test]
    fn test_perpendicular_distance() {
        assert_relative_eq!(perpendicular_distance(&Point::new(0.0, 0.0), &seg(-5.0, 2.0, 5.0, 2.0)), 2.0);
        assert_relative_eq!(perpendicular_distance(&Point::new(3.0, 0.0), &seg(0.0, 0.0, 0.0, 1.0)), 3.0);
        // Infinite line, not the segment
        assert_relative_eq!(perpendicular_distance(&Point::new(10.0, 1.0), &seg(0.0, 0.0, 1.0, 0.0)), 1.0);
        assert_relative_eq!(
            perpendicular_distance(&Point::new(0.0, 0.0), &seg(0.0, 2.0, 2.0, 0.0)),
            std::f64::consts::SQRT_2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_perpendicular_distance_degenerate_is_nan() {
        assert!(perpendicular_distance(&Point::new(0.0, 0.0), &seg(1.0, 1.0, 1.0, 1.0)).is_nan());
    }

    #[test]
    fn test_endpoint_inside() {
        assert!(circle_with_segment(&unit_circle(), &seg(0.5, 0.0, 10.0, 10.0), RadicandPolicy::Clamp));
        assert!(circle_with_segment(&unit_circle(), &seg(10.0, 10.0, 0.0, 0.5), RadicandPolicy::Clamp));
    }

    #[test]
    fn test_endpoint_on_circle() {
        assert!(circle_with_segment(&unit_circle(), &seg(1.0, 0.0, 5.0, 0.0), RadicandPolicy::Clamp));
    }

    #[test]
    fn test_segment_passing_through() {
        assert!(circle_with_segment(&unit_circle(), &seg(-3.0, 0.5, 3.0, 0.5), RadicandPolicy::Clamp));
        assert!(circle_with_segment(&unit_circle(), &seg(-3.0, -3.0, 3.0, 3.0), RadicandPolicy::Clamp));
    }

    #[test]
    fn test_tangent_segment() {
        assert!(circle_with_segment(&unit_circle(), &seg(-3.0, 1.0, 3.0, 1.0), RadicandPolicy::Clamp));
    }

    #[test]
    fn test_segment_missing_line() {
        assert!(!circle_with_segment(&unit_circle(), &seg(-3.0, 2.0, 3.0, 2.0), RadicandPolicy::Clamp));
    }

    #[test]
    fn test_line_near_but_segment_beside() {
        // Line y = 0.5 passes through the circle, the segment stays to the right
        assert!(!circle_with_segment(&unit_circle(), &seg(2.0, 0.5, 5.0, 0.5), RadicandPolicy::Clamp));
        assert!(!circle_with_segment(&unit_circle(), &seg(5.0, 0.5, 2.0, 0.5), RadicandPolicy::Clamp));
    }

    #[test]
    fn test_zero_length_segment() {
        let c = unit_circle();
        assert!(circle_with_segment(&c, &seg(0.5, 0.5, 0.5, 0.5), RadicandPolicy::Clamp));
        assert!(!circle_with_segment(&c, &seg(3.0, 3.0, 3.0, 3.0), RadicandPolicy::Clamp));
        assert!(!circle_with_segment(&c, &seg(3.0, 3.0, 3.0, 3.0), RadicandPolicy::Propagate));
    }

    #[test]
    fn test_zero_radius_circle() {
        let dot = Circle::new(Point::new(1.0, 0.0), 0.0);
        assert!(circle_with_segment(&dot, &seg(0.0, 0.0, 2.0, 0.0), RadicandPolicy::Clamp));
        assert!(!circle_with_segment(&dot, &seg(0.0, 1.0, 2.0, 1.0), RadicandPolicy::Clamp));
    }

    #[test]
    fn test_projection_length_regular() {
        assert_relative_eq!(RadicandPolicy::Clamp.projection_length(5.0, 3.0), 4.0);
        assert_relative_eq!(RadicandPolicy::Propagate.projection_length(5.0, 3.0), 4.0);
    }

    #[test]
    fn test_projection_length_negative_radicand() {
        assert_eq!(RadicandPolicy::Clamp.projection_length(1.0, 1.0 + 1e-9), 0.0);
        assert!(RadicandPolicy::Propagate.projection_length(1.0, 1.0 + 1e-9).is_nan());
    }

    /// Segments about 1e-12 long at the foot of the perpendicular from the
    /// center, where rounding in the line equation regularly makes the
    /// perpendicular distance exceed the farthest endpoint distance.
    fn foot_segments(count: usize) -> Vec<(Point, LineSegment)> {
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = move || {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
            ((state >> 11) % 1_000_000) as f64 / 100_000.0
        };

        (0..count)
            .map(|_| {
                let center = Point::new(next() / 2.0, next() / 2.0);
                let a = Point::new(10.0 + next(), 10.0 + next());
                let (dx, dy) = (a.x - center.x, a.y - center.y);
                let norm = dx.hypot(dy);
                let b = Point::new(a.x - dy / norm * 1e-12, a.y + dx / norm * 1e-12);
                (center, LineSegment::new(a, b))
            })
            .collect()
    }

    #[test]
    fn test_negative_radicand_never_changes_result() {
        let mut negatives = 0;

        for (center, segment) in foot_segments(2000) {
            let circle = Circle::new(center, 1.0);
            let farthest = farthest_endpoint_distance(&center, &segment);
            let perpendicular = perpendicular_distance(&center, &segment);
            if farthest * farthest - perpendicular * perpendicular < 0.0 {
                negatives += 1;
            }

            let clamped = circle_with_segment(&circle, &segment, RadicandPolicy::Clamp);
            let propagated = circle_with_segment(&circle, &segment, RadicandPolicy::Propagate);
            assert!(!clamped, "{segment:?}");
            assert_eq!(clamped, propagated, "{segment:?}");
        }

        assert!(negatives > 0);
    }

    #[test]
    fn test_negative_radicand_on_reachable_segment() {
        // Same setup with a radius that reaches the line: the endpoint check
        // decides before the radicand is ever formed
        for (center, segment) in foot_segments(200) {
            let circle = Circle::new(center, farthest_endpoint_distance(&center, &segment));
            assert!(circle_with_segment(&circle, &segment, RadicandPolicy::Clamp));
            assert!(circle_with_segment(&circle, &segment, RadicandPolicy::Propagate));
        }
    }

    #[test]
    fn test_circle_with_sides() {
        let square = Rectangle::new(Point::new(0.0, 0.0), 4.0, 4.0);
        let triangle = Triangle::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 4.0));

        let straddling = Circle::new(Point::new(4.0, 2.0), 1.0);
        let outside = Circle::new(Point::new(8.0, 2.0), 1.0);

        assert!(circle_with_sides(&straddling, &square, RadicandPolicy::Clamp));
        assert!(!circle_with_sides(&outside, &square, RadicandPolicy::Clamp));
        assert!(circle_with_sides(&Circle::new(Point::new(2.0, 2.0), 0.5), &triangle, RadicandPolicy::Clamp));
        assert!(!circle_with_sides(&outside, &triangle, RadicandPolicy::Clamp));
    }

    #[test]
    fn test_circle_inside_shape_not_reported() {
        let square = Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0);
        let small = Circle::new(Point::new(5.0, 5.0), 1.0);
        assert!(!circle_with_sides(&small, &square, RadicandPolicy::Clamp));
    }

    #[test]
    fn test_shape_inside_circle() {
        let square = Rectangle::new(Point::new(0.0, 0.0), 1.0, 1.0);
        let big = Circle::new(Point::new(0.5, 0.5), 10.0);
        assert!(circle_with_sides(&big, &square, RadicandPolicy::Clamp));
    }

    #[test]
    fn test_circle_with_circle() {
        let a = Circle::new(Point::new(0.0, 0.0), 2.0);
        let touching = Circle::new(Point::new(3.0, 4.0), 3.0);
        let apart = Circle::new(Point::new(3.0, 4.0), 2.9);
        let nested = Circle::new(Point::new(0.5, 0.0), 0.1);

        assert!(circle_with_circle(&a, &touching));
        assert!(circle_with_circle(&touching, &a));
        assert!(!circle_with_circle(&a, &apart));
        assert!(!circle_with_circle(&apart, &a));
        assert!(circle_with_circle(&a, &nested));
    }

    #[test]
    fn test_zero_radius_circles() {
        let p = Circle::new(Point::new(1.0, 1.0), 0.0);
        assert!(circle_with_circle(&p, &p));
        assert!(!circle_with_circle(&p, &Circle::new(Point::new(1.0, 2.0), 0.0)));
        assert!(circle_with_circle(&p, &Circle::new(Point::new(1.0, 2.0), 1.0)));
    }
}
