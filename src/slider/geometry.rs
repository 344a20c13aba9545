use crate::error::{GeometryError, Result};
use crate::geometry::path::Path;
use crate::geometry::squircle::{squircle_path, REFERENCE_HEIGHT, REFERENCE_WIDTH};
use crate::math::angle_2d::{progress_around, wrap_unit};
use crate::math::{Point2, TOLERANCE};
use crate::sampling::{ArcLengthTable, SamplingParams};

/// Converts between positions on a fixed closed outline and the
/// percent/angle parameterization used by the slider.
///
/// The reference path is sampled into an [`ArcLengthTable`] once at
/// construction; every conversion afterwards is a pure lookup. Percent 0
/// is the top of the shape and 0.5 the bottom, which assumes the
/// reference path starts at the bottom of its box (the lookup shifts the
/// traversal origin by half the total length). Scaling to the requested
/// radius happens at query time with independent per-axis factors, so a
/// non-square reference box keeps its aspect distortion inside the
/// `2·radius × 2·radius` output box.
///
/// A geometry is immutable after construction; a different radius means
/// a new instance.
#[derive(Debug, Clone)]
pub struct PathGeometry {
    table: ArcLengthTable,
    radius: f64,
    scale_x: f64,
    scale_y: f64,
}

impl PathGeometry {
    /// Creates a geometry over an arbitrary closed reference path.
    ///
    /// `reference_size` is the `(width, height)` of the reference box the
    /// path is defined in.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` or either reference dimension is not
    /// a positive finite number, or if the path is not closed.
    pub fn new(
        path: &Path,
        reference_size: (f64, f64),
        radius: f64,
        params: &SamplingParams,
    ) -> Result<Self> {
        if !radius.is_finite() || radius < TOLERANCE {
            return Err(GeometryError::Degenerate("radius must be positive".into()).into());
        }
        let (width, height) = reference_size;
        if !width.is_finite() || !height.is_finite() || width < TOLERANCE || height < TOLERANCE {
            return Err(
                GeometryError::Degenerate("reference size must be positive".into()).into(),
            );
        }
        if !path.is_closed() {
            return Err(GeometryError::NotClosed.into());
        }

        Ok(Self {
            table: ArcLengthTable::from_path(path, params),
            radius,
            scale_x: (radius * 2.0) / width,
            scale_y: (radius * 2.0) / height,
        })
    }

    /// Creates the squircle slider geometry at the given radius.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is not a positive finite number.
    pub fn squircle(radius: f64) -> Result<Self> {
        Self::new(
            &squircle_path()?,
            (REFERENCE_WIDTH, REFERENCE_HEIGHT),
            radius,
            &SamplingParams::default(),
        )
    }

    /// Returns the radius the output is scaled to.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Total arc length of the reference path, in reference units.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.table.total_length()
    }

    /// Point on the scaled outline at `percent` of the way around.
    ///
    /// 0 is the top of the shape, 0.25 the right, 0.5 the bottom and
    /// 0.75 the left. Any finite input is accepted: values outside
    /// `[0, 1)` wrap, so `point_at_percent(p)` equals
    /// `point_at_percent(p + 1)`.
    #[must_use]
    pub fn point_at_percent(&self, percent: f64) -> Point2 {
        // The reference path starts at the bottom; shifting by half a turn
        // puts percent 0 at the top.
        let adjusted = wrap_unit(percent + 0.5);
        let p = self.table.point_at_length(self.total_length() * adjusted);
        Point2::new(p.x * self.scale_x, p.y * self.scale_y)
    }

    /// Point on the scaled outline at `angle` degrees, where 0 is the top
    /// and 180 the bottom. Equivalent to `point_at_percent(angle / 360)`.
    #[must_use]
    pub fn point_at_angle(&self, angle: f64) -> Point2 {
        self.point_at_percent(angle / 360.0)
    }

    /// Percent of the way around the outline for a point near it.
    ///
    /// Measures the angle of `(x, y)` around the shape's center
    /// `(radius, radius)`. This is an angular shortcut, exact when the
    /// outline is a circle; on the squircle it carries a small systematic
    /// bias near the four corners, which has been acceptable for
    /// touch-target use. Result is always in `[0, 1)`.
    #[must_use]
    pub fn percent_for_point(&self, x: f64, y: f64) -> f64 {
        progress_around(self.radius, self.radius, x, y)
    }

    /// Angle in degrees for a point near the outline, in `[0, 360)`.
    #[must_use]
    pub fn angle_for_point(&self, x: f64, y: f64) -> f64 {
        self.percent_for_point(x, y) * 360.0
    }
}
