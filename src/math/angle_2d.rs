/// 2D angle and normalized-progress utilities.
///
/// Angle convention: degrees, measured clockwise from the middle top
/// (12 o'clock), in the y-down screen coordinate system used throughout
/// the crate. 0 is the top, 90 the middle right, 180 the bottom.
use std::f64::consts::{PI, TAU};

use super::Point2;

/// Wraps `value` into the unit interval `[0, 1)`.
///
/// Negative inputs wrap from the other end: `wrap_unit(-0.25) == 0.75`.
#[must_use]
pub fn wrap_unit(value: f64) -> f64 {
    value.rem_euclid(1.0)
}

/// Wraps an angle in degrees into `[0, 360)`.
#[must_use]
pub fn wrap_degrees(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Converts a clock-style polar position to cartesian coordinates.
///
/// `angle` is in degrees, 0 at the top of the circle around `(cx, cy)`,
/// increasing clockwise.
#[must_use]
pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle: f64) -> Point2 {
    let radians = (angle - 90.0) * PI / 180.0;
    Point2::new(cx + radius * radians.cos(), cy + radius * radians.sin())
}

/// Normalized progress of `(x, y)` around the center `(cx, cy)`.
///
/// Returns a value in `[0, 1)` where 0 is straight up from the center,
/// 0.25 to the right, 0.5 straight down and 0.75 to the left. This is a
/// purely angular measure: for outlines whose distance from the center
/// varies (such as the squircle), it approximates position along the
/// outline and is exact only for circles.
#[must_use]
pub fn progress_around(cx: f64, cy: f64, x: f64, y: f64) -> f64 {
    let theta = (y - cy).atan2(x - cx) + PI;
    wrap_unit((theta + 1.5 * PI) / TAU)
}
