mod format;
mod round;

pub use format::format_number;
pub use round::{round_display, round_to_places, DISPLAY_DECIMALS};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
