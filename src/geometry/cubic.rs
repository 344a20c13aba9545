use crate::math::{Point2, Vector2};

/// A cubic Bezier segment in the plane.
///
/// `P(t) = (1-t)^3 * p0 + 3(1-t)^2 t * p1 + 3(1-t) t^2 * p2 + t^3 * p3`
/// for `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Start point.
    pub p0: Point2,
    /// First control point.
    pub p1: Point2,
    /// Second control point.
    pub p2: Point2,
    /// End point.
    pub p3: Point2,
}

impl CubicBezier {
    /// Creates a new cubic Bezier from its four control points.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluates the curve at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        Point2::new(
            b0 * self.p0.x + b1 * self.p1.x + b2 * self.p2.x + b3 * self.p3.x,
            b0 * self.p0.y + b1 * self.p1.y + b2 * self.p2.y + b3 * self.p3.y,
        )
    }

    /// Computes the (non-normalized) derivative at parameter `t`.
    #[must_use]
    pub fn derivative_at(&self, t: f64) -> Vector2 {
        let u = 1.0 - t;
        (self.p1 - self.p0) * (3.0 * u * u)
            + (self.p2 - self.p1) * (6.0 * u * t)
            + (self.p3 - self.p2) * (3.0 * t * t)
    }

    /// Maximum distance from the control points to the chord `p0 -> p3`.
    ///
    /// Zero means the segment is a straight line; larger values mean more
    /// curvature and call for finer sampling.
    #[must_use]
    pub fn control_deviation(&self) -> f64 {
        point_to_chord_distance(self.p1, self.p0, self.p3)
            .max(point_to_chord_distance(self.p2, self.p0, self.p3))
    }
}

/// Minimum distance from `p` to the segment `a -> b`.
fn point_to_chord_distance(p: Point2, a: Point2, b: Point2) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate chord (zero length).
        return (p - a).norm();
    }

    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn quarter_turn() -> CubicBezier {
        // Quarter circle approximation from (1, 0) to (0, 1), kappa ≈ 0.5523.
        let k = 0.552_284_749_8;
        CubicBezier::new(
            Point2::new(1.0, 0.0),
            Point2::new(1.0, k),
            Point2::new(k, 1.0),
            Point2::new(0.0, 1.0),
        )
    }

    #[test]
    fn endpoints_match_control_points() {
        let c = quarter_turn();
        assert!((c.point_at(0.0) - c.p0).norm() < TOL);
        assert!((c.point_at(1.0) - c.p3).norm() < TOL);
    }

    #[test]
    fn quarter_turn_midpoint_on_circle() {
        let c = quarter_turn();
        let m = c.point_at(0.5);
        // Midpoint of the kappa approximation sits almost on the unit circle.
        let r = (m.x * m.x + m.y * m.y).sqrt();
        assert!((r - 1.0).abs() < 5e-4, "r={r}");
    }

    #[test]
    fn straight_cubic_stays_on_chord() {
        let c = CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(3.0, 3.0),
        );
        assert!(c.control_deviation() < TOL);
        let m = c.point_at(0.5);
        assert!((m.x - m.y).abs() < TOL);
    }

    #[test]
    fn curved_cubic_has_positive_deviation() {
        assert!(quarter_turn().control_deviation() > 0.1);
    }

    #[test]
    fn derivative_at_start_follows_first_leg() {
        let c = quarter_turn();
        let d = c.derivative_at(0.0);
        let expected = (c.p1 - c.p0) * 3.0;
        assert!((d - expected).norm() < TOL);
    }

    #[test]
    fn chord_distance_degenerate_chord() {
        let d = point_to_chord_distance(
            Point2::new(3.0, 4.0),
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.0),
        );
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }
}
