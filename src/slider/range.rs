use crate::error::{Result, SliderError};

/// Linear mapping between slider values in `[min, max]` and the
/// percent-of-path parameterization.
///
/// The range never stores a current value; it only converts. Out-of-range
/// inputs clamp rather than error, matching how a drag gesture behaves at
/// the ends of the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    min_value: f64,
    max_value: f64,
}

impl SliderRange {
    /// Creates a new range.
    ///
    /// # Errors
    ///
    /// Returns an error unless `min_value < max_value` and both are
    /// finite.
    pub fn new(min_value: f64, max_value: f64) -> Result<Self> {
        if !min_value.is_finite() || !max_value.is_finite() || min_value >= max_value {
            return Err(SliderError::InvalidRange {
                min: min_value,
                max: max_value,
            }
            .into());
        }
        Ok(Self {
            min_value,
            max_value,
        })
    }

    /// Returns the minimum value.
    #[must_use]
    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    /// Returns the maximum value.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Returns the width of the range.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max_value - self.min_value
    }

    /// Percent in `[0, 1]` for a value; out-of-range values clamp.
    #[must_use]
    pub fn percent_for_value(&self, value: f64) -> f64 {
        (value.clamp(self.min_value, self.max_value) - self.min_value) / self.span()
    }

    /// Value in `[min, max]` for a percent; out-of-range percents clamp.
    #[must_use]
    pub fn value_for_percent(&self, percent: f64) -> f64 {
        self.min_value + percent.clamp(0.0, 1.0) * self.span()
    }
}
