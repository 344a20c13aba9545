use crate::error::{GeometryError, Result};
use crate::math::angle_2d::polar_to_cartesian;
use crate::math::{Point2, TOLERANCE};

use super::svg::{write_path_data, SvgCommand};

/// A pie-slice arc over a circle of the given radius.
///
/// The slice fills from the middle top clockwise up to `fill_angle`
/// degrees (90 is the middle right, 180 the bottom), inside a
/// `2·radius × 2·radius` box with the circle centered at
/// `(radius, radius)`. At 360 degrees the slice covers the whole disc
/// and the arc degenerates, so callers should draw a full circle
/// instead; [`PieSector::is_full`] flags that case.
#[derive(Debug, Clone, Copy)]
pub struct PieSector {
    radius: f64,
    fill_angle: f64,
}

impl PieSector {
    /// Creates a new pie sector.
    ///
    /// `fill_angle` is clamped into `[0, 360]`.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is not a positive finite number or
    /// `fill_angle` is not finite.
    pub fn new(radius: f64, fill_angle: f64) -> Result<Self> {
        if !radius.is_finite() || radius < TOLERANCE {
            return Err(GeometryError::Degenerate("pie radius must be positive".into()).into());
        }
        if !fill_angle.is_finite() {
            return Err(GeometryError::Degenerate("pie fill angle must be finite".into()).into());
        }
        Ok(Self {
            radius,
            fill_angle: fill_angle.clamp(0.0, 360.0),
        })
    }

    /// Returns the radius of the sector's circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the fill angle in degrees, in `[0, 360]`.
    #[must_use]
    pub fn fill_angle(&self) -> f64 {
        self.fill_angle
    }

    /// Returns whether the sector covers the whole disc.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.fill_angle >= 360.0
    }

    /// Point on the circle at the fill angle (the moving end of the arc).
    #[must_use]
    pub fn fill_point(&self) -> Point2 {
        polar_to_cartesian(self.radius, self.radius, self.radius, self.fill_angle)
    }

    /// Arc commands from the fill point counter-clockwise back to the top.
    ///
    /// Emits `M start A r r 0 large-arc 0 end`, choosing the large-arc
    /// flag so the drawn arc spans the filled portion.
    #[must_use]
    pub fn arc_commands(&self) -> Vec<SvgCommand> {
        let start = self.fill_point();
        let end = polar_to_cartesian(self.radius, self.radius, self.radius, 0.0);
        vec![
            SvgCommand::MoveTo(start),
            SvgCommand::Arc {
                rx: self.radius,
                ry: self.radius,
                rotation: 0.0,
                large_arc: self.fill_angle > 180.0,
                sweep: false,
                end,
            },
        ]
    }

    /// The arc as SVG path data.
    #[must_use]
    pub fn arc_path_data(&self) -> String {
        write_path_data(&self.arc_commands())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn quarter_sector_endpoints() {
        let pie = PieSector::new(100.0, 90.0).unwrap();
        let commands = pie.arc_commands();
        let SvgCommand::MoveTo(start) = commands[0] else {
            panic!("expected move-to, got {:?}", commands[0]);
        };
        // 90 degrees is the middle right.
        assert!((start.x - 200.0).abs() < 1e-9 && (start.y - 100.0).abs() < 1e-9);

        let SvgCommand::Arc { large_arc, end, .. } = commands[1] else {
            panic!("expected arc, got {:?}", commands[1]);
        };
        assert!(!large_arc);
        assert!((end.x - 100.0).abs() < 1e-9 && end.y.abs() < 1e-9);
    }

    #[test]
    fn large_arc_beyond_half_turn() {
        let pie = PieSector::new(100.0, 270.0).unwrap();
        let SvgCommand::Arc { large_arc, .. } = pie.arc_commands()[1] else {
            panic!("expected arc");
        };
        assert!(large_arc);
    }

    #[test]
    fn full_sector_flagged() {
        assert!(PieSector::new(1.0, 360.0).unwrap().is_full());
        assert!(!PieSector::new(1.0, 359.0).unwrap().is_full());
        // Clamped above 360.
        assert!(PieSector::new(1.0, 400.0).unwrap().is_full());
    }

    #[test]
    fn fill_angle_clamped_below_zero() {
        let pie = PieSector::new(1.0, -45.0).unwrap();
        assert!(pie.fill_angle().abs() < 1e-12);
    }

    #[test]
    fn path_data_shape() {
        let pie = PieSector::new(50.0, 180.0).unwrap();
        let data = pie.arc_path_data();
        assert!(data.starts_with("M "), "data={data}");
        assert!(data.contains("A 50 50 0 0 0"), "data={data}");
    }

    #[test]
    fn invalid_inputs_rejected() {
        assert!(PieSector::new(0.0, 90.0).is_err());
        assert!(PieSector::new(-1.0, 90.0).is_err());
        assert!(PieSector::new(1.0, f64::NAN).is_err());
    }
}
