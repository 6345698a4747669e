use crate::error::{DimensionError, Result};
use crate::math::Vector3;

use super::ShapeKind;

/// The dimensions of a shape, tagged by its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimensions {
    /// A cube with edge length `side`.
    Cube { side: f64 },
    /// A rectangular prism. `length` runs along X, `height` along Y and
    /// `width` along Z (depth).
    RectangularPrism { length: f64, width: f64, height: f64 },
}

/// Full edge lengths along the three axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    /// Extent along X.
    pub length: f64,
    /// Extent along Z.
    pub width: f64,
    /// Extent along Y.
    pub height: f64,
}

impl Extents {
    /// Returns the half-extents as a vector in `(x, y, z)` axis order.
    #[must_use]
    pub fn half(&self) -> Vector3 {
        Vector3::new(self.length, self.height, self.width) * 0.5
    }
}

impl Dimensions {
    /// Cube shown when the viewer starts.
    pub const DEFAULT_CUBE: Dimensions = Dimensions::Cube { side: 3.0 };

    /// Prism shown when the viewer switches to a rectangular prism.
    pub const DEFAULT_PRISM: Dimensions = Dimensions::RectangularPrism {
        length: 4.0,
        width: 3.0,
        height: 2.0,
    };

    /// Creates cube dimensions.
    #[must_use]
    pub fn cube(side: f64) -> Self {
        Dimensions::Cube { side }
    }

    /// Creates rectangular prism dimensions.
    #[must_use]
    pub fn rectangular_prism(length: f64, width: f64, height: f64) -> Self {
        Dimensions::RectangularPrism {
            length,
            width,
            height,
        }
    }

    /// Builds dimensions for `kind` from raw input values.
    ///
    /// A cube takes `[side]`; a prism takes `[length, width, height]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of values does not match `kind`, or if
    /// any value is non-positive or non-finite.
    pub fn from_values(kind: ShapeKind, values: &[f64]) -> Result<Self> {
        let dimensions = match (kind, values) {
            (ShapeKind::Cube, &[side]) => Dimensions::cube(side),
            (ShapeKind::RectangularPrism, &[length, width, height]) => {
                Dimensions::rectangular_prism(length, width, height)
            }
            _ => {
                return Err(DimensionError::WrongValueCount {
                    kind: kind.tag(),
                    expected: kind.value_count(),
                    actual: values.len(),
                }
                .into())
            }
        };
        dimensions.validate()?;
        Ok(dimensions)
    }

    /// Returns the shape kind these dimensions describe.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Dimensions::Cube { .. } => ShapeKind::Cube,
            Dimensions::RectangularPrism { .. } => ShapeKind::RectangularPrism,
        }
    }

    /// Returns the edge lengths along each axis. A cube uses `side` for all three.
    #[must_use]
    pub fn extents(&self) -> Extents {
        match *self {
            Dimensions::Cube { side } => Extents {
                length: side,
                width: side,
                height: side,
            },
            Dimensions::RectangularPrism {
                length,
                width,
                height,
            } => Extents {
                length,
                width,
                height,
            },
        }
    }

    /// Returns each named input value.
    #[must_use]
    pub fn values(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Dimensions::Cube { side } => vec![("side", side)],
            Dimensions::RectangularPrism {
                length,
                width,
                height,
            } => vec![("length", length), ("width", width), ("height", height)],
        }
    }

    /// Returns a copy with every value replaced by `f(name, value)`.
    #[must_use]
    pub fn map_values(&self, mut f: impl FnMut(&'static str, f64) -> f64) -> Self {
        match *self {
            Dimensions::Cube { side } => Dimensions::cube(f("side", side)),
            Dimensions::RectangularPrism {
                length,
                width,
                height,
            } => Dimensions::rectangular_prism(
                f("length", length),
                f("width", width),
                f("height", height),
            ),
        }
    }

    /// Checks that every value is finite and strictly positive.
    ///
    /// Range limits are a separate concern; see
    /// [`DimensionLimits`](super::DimensionLimits).
    ///
    /// # Errors
    ///
    /// Returns the first offending value as a [`DimensionError`].
    pub fn validate(&self) -> std::result::Result<(), DimensionError> {
        for (parameter, value) in self.values() {
            if !value.is_finite() {
                return Err(DimensionError::NonFinite { parameter, value });
            }
            if value <= 0.0 {
                return Err(DimensionError::NonPositive { parameter, value });
            }
        }
        Ok(())
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions::DEFAULT_CUBE
    }
}
