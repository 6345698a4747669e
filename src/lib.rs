pub mod display;
pub mod error;
pub mod geometry;
pub mod math;
pub mod measure;
pub mod scene;
pub mod shape;
pub mod topology;

pub use error::{CuboidError, Result};
pub use geometry::{compute_geometry, ComputeGeometry, Geometry};
pub use shape::{Dimensions, ShapeKind};
