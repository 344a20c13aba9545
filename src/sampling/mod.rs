use crate::geometry::path::{Path, PathSegment};
use crate::math::{Point2, TOLERANCE};

/// Parameters controlling arc-length sampling quality.
#[derive(Debug, Clone, Copy)]
pub struct SamplingParams {
    /// Maximum allowed deviation from the true curve.
    pub tolerance: f64,
    /// Minimum number of spans per curved segment.
    pub min_segments: usize,
    /// Maximum number of spans per curved segment.
    pub max_segments: usize,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            tolerance: 0.01,
            min_segments: 4,
            max_segments: 256,
        }
    }
}

/// A cached arc-length sampling of a path.
///
/// Stores the sampled points together with the cumulative distance
/// traveled to reach each of them. Cumulative lengths are non-decreasing
/// and the last entry is the total length. Built once per path; lookups
/// never mutate it.
#[derive(Debug, Clone)]
pub struct ArcLengthTable {
    lengths: Vec<f64>,
    points: Vec<Point2>,
}

impl ArcLengthTable {
    /// Samples `path` into an arc-length table.
    #[must_use]
    pub fn from_path(path: &Path, params: &SamplingParams) -> Self {
        let mut lengths = Vec::new();
        let mut points = Vec::new();

        let Some(first) = path.segments().first() else {
            return Self { lengths, points };
        };

        let mut prev = first.start();
        let mut total = 0.0;
        lengths.push(0.0);
        points.push(prev);

        for segment in path.segments() {
            let spans = span_count(segment, params);
            for j in 1..=spans {
                let t = f64::from(j) / f64::from(spans);
                let p = segment.point_at(t);
                total += (p - prev).norm();
                lengths.push(total);
                points.push(p);
                prev = p;
            }
        }

        Self { lengths, points }
    }

    /// Total sampled length of the path.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// Cumulative sample lengths, starting at 0.
    #[must_use]
    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    /// Point at the given distance along the path.
    ///
    /// `length` is clamped into `[0, total_length]`; intermediate
    /// distances interpolate linearly between the two nearest samples.
    #[must_use]
    pub fn point_at_length(&self, length: f64) -> Point2 {
        if self.points.is_empty() {
            return Point2::origin();
        }

        let s = length.clamp(0.0, self.total_length());
        let i = self.lengths.partition_point(|&len| len < s);
        if i == 0 {
            return self.points[0];
        }

        let span = self.lengths[i] - self.lengths[i - 1];
        if span < TOLERANCE {
            return self.points[i];
        }
        let t = (s - self.lengths[i - 1]) / span;
        let p0 = self.points[i - 1];
        let p1 = self.points[i];
        Point2::new(p0.x + (p1.x - p0.x) * t, p0.y + (p1.y - p0.y) * t)
    }
}

/// Number of spans used to sample one segment.
///
/// Uniformly subdividing a cubic into `n` spans keeps the chord error
/// under `3/4 * deviation / n²`, where `deviation` is the control-polygon
/// distance from the chord; solve that bound for `n` at the requested
/// tolerance. Straight lines need a single span.
fn span_count(segment: &PathSegment, params: &SamplingParams) -> u32 {
    let PathSegment::Cubic(cubic) = segment else {
        return 1;
    };

    let min = u32::try_from(params.min_segments.max(1)).unwrap_or(u32::MAX);
    let max = u32::try_from(params.max_segments.max(1)).unwrap_or(u32::MAX);
    let deviation = cubic.control_deviation();
    if deviation < TOLERANCE || params.tolerance <= 0.0 {
        return min;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (0.75 * deviation / params.tolerance).sqrt().ceil() as u32;
    n.clamp(min, max.max(min))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::cubic::CubicBezier;

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
    fn square_total_length() {
        let table = ArcLengthTable::from_path(&unit_square(), &SamplingParams::default());
        assert!((table.total_length() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn lengths_are_monotone_and_end_at_total() {
        let table = ArcLengthTable::from_path(&unit_square(), &SamplingParams::default());
        let lengths = table.lengths();
        for window in lengths.windows(2) {
            assert!(window[1] >= window[0]);
        }
        assert!((lengths[lengths.len() - 1] - table.total_length()).abs() < 1e-12);
        assert!(lengths[0].abs() < 1e-12);
    }

    #[test]
    fn point_lookup_walks_the_square() {
        let table = ArcLengthTable::from_path(&unit_square(), &SamplingParams::default());
        let p = table.point_at_length(0.5);
        assert!((p.x - 0.5).abs() < 1e-12 && p.y.abs() < 1e-12);

        let p = table.point_at_length(1.5);
        assert!((p.x - 1.0).abs() < 1e-12 && (p.y - 0.5).abs() < 1e-12);

        let p = table.point_at_length(3.5);
        assert!(p.x.abs() < 1e-12 && (p.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn lookup_clamps_out_of_range() {
        let table = ArcLengthTable::from_path(&unit_square(), &SamplingParams::default());
        let below = table.point_at_length(-1.0);
        assert!((below - table.point_at_length(0.0)).norm() < 1e-12);
        let above = table.point_at_length(10.0);
        assert!((above - table.point_at_length(4.0)).norm() < 1e-12);
    }

    #[test]
    fn cubic_sampling_approaches_true_length() {
        // Kappa quarter circle of radius 1: true length is pi/2.
        let k = 0.552_284_749_8;
        let quarter = Path::new(vec![PathSegment::Cubic(CubicBezier::new(
            Point2::new(1.0, 0.0),
            Point2::new(1.0, k),
            Point2::new(k, 1.0),
            Point2::new(0.0, 1.0),
        ))])
        .unwrap();

        let params = SamplingParams {
            tolerance: 1e-6,
            min_segments: 16,
            max_segments: 4096,
        };
        let table = ArcLengthTable::from_path(&quarter, &params);
        let expected = std::f64::consts::FRAC_PI_2;
        assert!(
            (table.total_length() - expected).abs() < 1e-3,
            "length={}",
            table.total_length()
        );
    }

    #[test]
    fn tighter_tolerance_uses_more_spans() {
        let k = 0.552_284_749_8;
        let cubic = PathSegment::Cubic(CubicBezier::new(
            Point2::new(1.0, 0.0),
            Point2::new(1.0, k),
            Point2::new(k, 1.0),
            Point2::new(0.0, 1.0),
        ));
        let coarse = span_count(&cubic, &SamplingParams::default());
        let fine = span_count(
            &cubic,
            &SamplingParams {
                tolerance: 1e-6,
                ..SamplingParams::default()
            },
        );
        assert!(fine > coarse);
    }

    #[test]
    fn straight_segments_use_one_span() {
        let line = PathSegment::Line {
            start: Point2::new(0.0, 0.0),
            end: Point2::new(5.0, 0.0),
        };
        assert_eq!(span_count(&line, &SamplingParams::default()), 1);
    }
}
