use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

use super::cubic::CubicBezier;

/// A single segment of a path: a straight line or a cubic Bezier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Straight line between two points.
    Line {
        /// Start point.
        start: Point2,
        /// End point.
        end: Point2,
    },
    /// Cubic Bezier segment.
    Cubic(CubicBezier),
}

impl PathSegment {
    /// Returns the start point of the segment.
    #[must_use]
    pub fn start(&self) -> Point2 {
        match self {
            Self::Line { start, .. } => *start,
            Self::Cubic(c) => c.p0,
        }
    }

    /// Returns the end point of the segment.
    #[must_use]
    pub fn end(&self) -> Point2 {
        match self {
            Self::Line { end, .. } => *end,
            Self::Cubic(c) => c.p3,
        }
    }

    /// Evaluates the segment at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        match self {
            Self::Line { start, end } => Point2::new(
                start.x + (end.x - start.x) * t,
                start.y + (end.y - start.y) * t,
            ),
            Self::Cubic(c) => c.point_at(t),
        }
    }
}

/// An immutable sequence of connected path segments.
///
/// Construction enforces that the path has at least one segment and that
/// each segment starts where the previous one ends (within [`TOLERANCE`]).
/// Closure is not enforced here; callers that need a closed outline check
/// [`Path::is_closed`].
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Creates a path from connected segments.
    ///
    /// # Errors
    ///
    /// Returns an error if `segments` is empty or if two consecutive
    /// segments are not connected.
    pub fn new(segments: Vec<PathSegment>) -> Result<Self> {
        if segments.is_empty() {
            return Err(
                GeometryError::Degenerate("path must contain at least one segment".into()).into(),
            );
        }
        for (index, window) in segments.windows(2).enumerate() {
            let gap = (window[1].start() - window[0].end()).norm();
            if gap > TOLERANCE {
                return Err(GeometryError::Discontinuous {
                    index: index + 1,
                    gap,
                }
                .into());
            }
        }
        Ok(Self { segments })
    }

    /// Returns the ordered segments of the path.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns the start point of the path.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.segments[0].start()
    }

    /// Returns the end point of the path.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.segments[self.segments.len() - 1].end()
    }

    /// Returns whether the path's end meets its start.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        (self.end() - self.start()).norm() < TOLERANCE
    }

    /// Axis-aligned bounding box of the control points, as `(min, max)`.
    ///
    /// The control points of a cubic bound the curve, so this box contains
    /// the whole path; for curved segments it may overestimate.
    #[must_use]
    pub fn control_bounds(&self) -> (Point2, Point2) {
        let mut min = Point2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        let mut cover = |p: Point2| {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        };
        for segment in &self.segments {
            match segment {
                PathSegment::Line { start, end } => {
                    cover(*start);
                    cover(*end);
                }
                PathSegment::Cubic(c) => {
                    cover(c.p0);
                    cover(c.p1);
                    cover(c.p2);
                    cover(c.p3);
                }
            }
        }
        (min, max)
    }

    /// Returns a copy of the path scaled component-wise about the origin.
    #[must_use]
    pub fn scaled(&self, sx: f64, sy: f64) -> Self {
        let scale = |p: Point2| Point2::new(p.x * sx, p.y * sy);
        let segments = self
            .segments
            .iter()
            .map(|segment| match segment {
                PathSegment::Line { start, end } => PathSegment::Line {
                    start: scale(*start),
                    end: scale(*end),
                },
                PathSegment::Cubic(c) => PathSegment::Cubic(CubicBezier::new(
                    scale(c.p0),
                    scale(c.p1),
                    scale(c.p2),
                    scale(c.p3),
                )),
            })
            .collect();
        Self { segments }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn unit_square() -> Path {
        Path::new(vec![
            PathSegment::Line {
                start: Point2::new(0.0, 0.0),
                end: Point2::new(1.0, 0.0),
            },
            PathSegment::Line {
                start: Point2::new(1.0, 0.0),
                end: Point2::new(1.0, 1.0),
            },
            PathSegment::Line {
                start: Point2::new(1.0, 1.0),
                end: Point2::new(0.0, 1.0),
            },
            PathSegment::Line {
                start: Point2::new(0.0, 1.0),
                end: Point2::new(0.0, 0.0),
            },
        ])
        .unwrap()
    }

    #[test]
    fn empty_path_rejected() {
        assert!(Path::new(vec![]).is_err());
    }

    #[test]
    fn disconnected_segments_rejected() {
        let r = Path::new(vec![
            PathSegment::Line {
                start: Point2::new(0.0, 0.0),
                end: Point2::new(1.0, 0.0),
            },
            PathSegment::Line {
                start: Point2::new(2.0, 0.0),
                end: Point2::new(3.0, 0.0),
            },
        ]);
        assert!(r.is_err());
    }

    #[test]
    fn square_is_closed() {
        assert!(unit_square().is_closed());
    }

    #[test]
    fn open_path_is_not_closed() {
        let path = Path::new(vec![PathSegment::Line {
            start: Point2::new(0.0, 0.0),
            end: Point2::new(1.0, 0.0),
        }])
        .unwrap();
        assert!(!path.is_closed());
    }

    #[test]
    fn control_bounds_of_square() {
        let (min, max) = unit_square().control_bounds();
        assert!(min.x.abs() < 1e-10 && min.y.abs() < 1e-10);
        assert!((max.x - 1.0).abs() < 1e-10 && (max.y - 1.0).abs() < 1e-10);
    }

    #[test]
    fn scaled_square_bounds() {
        let (min, max) = unit_square().scaled(2.0, 3.0).control_bounds();
        assert!(min.x.abs() < 1e-10 && min.y.abs() < 1e-10);
        assert!((max.x - 2.0).abs() < 1e-10 && (max.y - 3.0).abs() < 1e-10);
    }

    #[test]
    fn segment_point_at_line_midpoint() {
        let segment = PathSegment::Line {
            start: Point2::new(0.0, 0.0),
            end: Point2::new(2.0, 4.0),
        };
        let m = segment.point_at(0.5);
        assert!((m.x - 1.0).abs() < 1e-10 && (m.y - 2.0).abs() < 1e-10);
    }
}
