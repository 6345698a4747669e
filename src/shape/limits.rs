use crate::error::{DimensionError, Result};

use super::Dimensions;

/// Inclusive range every dimension value must fall in.
///
/// The defaults match the viewer's sliders: `[0.5, 20.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionLimits {
    min: f64,
    max: f64,
}

impl DimensionLimits {
    /// Default lower bound.
    pub const MIN_DIMENSION: f64 = 0.5;
    /// Default upper bound.
    pub const MAX_DIMENSION: f64 = 20.0;

    /// Creates custom limits.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < min <= max` and both are finite.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !(min.is_finite() && max.is_finite()) || min <= 0.0 || min > max {
            return Err(DimensionError::InvalidLimits { min, max }.into());
        }
        Ok(Self { min, max })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns `true` if `value` lies within the limits.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Checks that every value of `dimensions` is valid and within range.
    ///
    /// # Errors
    ///
    /// Returns an error for non-finite, non-positive or out-of-range values.
    pub fn check(&self, dimensions: &Dimensions) -> Result<()> {
        dimensions.validate()?;
        for (parameter, value) in dimensions.values() {
            if !self.contains(value) {
                return Err(DimensionError::OutOfRange {
                    parameter,
                    value,
                    min: self.min,
                    max: self.max,
                }
                .into());
            }
        }
        Ok(())
    }

    /// Clamps every value of `dimensions` into range.
    ///
    /// This is the input-boundary policy for sliders and number fields:
    /// finite values are pulled into range, anything else is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is NaN or infinite.
    pub fn clamp(&self, dimensions: &Dimensions) -> Result<Dimensions> {
        for (parameter, value) in dimensions.values() {
            if !value.is_finite() {
                return Err(DimensionError::NonFinite { parameter, value }.into());
            }
        }
        Ok(dimensions.map_values(|parameter, value| {
            let clamped = value.clamp(self.min, self.max);
            if clamped.to_bits() != value.to_bits() {
                tracing::warn!(parameter, value, clamped, "dimension clamped into range");
            }
            clamped
        }))
    }
}

impl Default for DimensionLimits {
    fn default() -> Self {
        Self {
            min: Self::MIN_DIMENSION,
            max: Self::MAX_DIMENSION,
        }
    }
}
