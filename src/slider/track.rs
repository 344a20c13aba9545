use crate::error::Result;
use crate::math::Point2;

use super::geometry::PathGeometry;
use super::range::SliderRange;

/// A slider track: outline geometry paired with the value range it
/// represents.
///
/// This is the piece the UI layer talks to. It owns no current value;
/// the host keeps the value and calls [`SliderTrack::handle_point`] to
/// place the drag handle, then [`SliderTrack::value_at`] with dragged
/// coordinates to recover the new value for its change notification.
#[derive(Debug, Clone)]
pub struct SliderTrack {
    geometry: PathGeometry,
    range: SliderRange,
}

impl SliderTrack {
    /// Pairs an outline geometry with a value range.
    #[must_use]
    pub fn new(geometry: PathGeometry, range: SliderRange) -> Self {
        Self { geometry, range }
    }

    /// Creates a squircle track at the given radius over `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive or the range is
    /// degenerate.
    pub fn squircle(radius: f64, min_value: f64, max_value: f64) -> Result<Self> {
        Ok(Self::new(
            PathGeometry::squircle(radius)?,
            SliderRange::new(min_value, max_value)?,
        ))
    }

    /// Returns the track's outline geometry.
    #[must_use]
    pub fn geometry(&self) -> &PathGeometry {
        &self.geometry
    }

    /// Returns the track's value range.
    #[must_use]
    pub fn range(&self) -> &SliderRange {
        &self.range
    }

    /// Handle position on the outline for a slider value.
    #[must_use]
    pub fn handle_point(&self, value: f64) -> Point2 {
        self.geometry
            .point_at_percent(self.range.percent_for_value(value))
    }

    /// Slider value for a dragged handle position.
    #[must_use]
    pub fn value_at(&self, x: f64, y: f64) -> f64 {
        self.range
            .value_for_percent(self.geometry.percent_for_point(x, y))
    }
}
