use thiserror::Error;

use crate::topology::Category;

/// Top-level error type for the cuboid geometry model.
#[derive(Debug, Error)]
pub enum CuboidError {
    #[error(transparent)]
    Dimension(#[from] DimensionError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Display(#[from] DisplayError),
}

/// Errors related to dimension input.
#[derive(Debug, Error, PartialEq)]
pub enum DimensionError {
    #[error("{parameter} must be positive, got {value}")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("{parameter} must be finite, got {value}")]
    NonFinite { parameter: &'static str, value: f64 },

    #[error("{parameter} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{kind} takes {expected} dimension value(s), got {actual}")]
    WrongValueCount {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{quantity} overflows for the given dimensions")]
    Overflow { quantity: &'static str },

    #[error("invalid dimension limits [{min}, {max}]")]
    InvalidLimits { min: f64, max: f64 },
}

/// Errors related to shape selection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("unsupported shape kind: {0:?}")]
    UnsupportedKind(String),
}

/// Errors related to display state updates.
#[derive(Debug, Error, PartialEq)]
pub enum DisplayError {
    #[error("unknown toggle: {0:?}")]
    UnknownToggle(String),

    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    #[error("{0} color cannot be changed")]
    FixedColor(Category),

    #[error("invalid style: {0}")]
    InvalidStyle(String),

    #[error("opacity {value} is out of range [{min}, {max}]")]
    OpacityOutOfRange { value: f64, min: f64, max: f64 },
}

/// Convenience type alias for results using [`CuboidError`].
pub type Result<T> = std::result::Result<T, CuboidError>;
