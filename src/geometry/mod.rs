mod compute;
mod vertices;

pub use compute::{compute_geometry, ComputeGeometry};
pub use vertices::VertexSet;

use crate::measure::{MeasurementLine, Measurements};
use crate::shape::{Dimensions, ShapeInfo, ShapeKind};
use crate::topology::Topology;

/// Everything the viewer needs to draw and describe one shape.
#[derive(Debug, Clone, Copy)]
pub struct Geometry {
    dimensions: Dimensions,
    vertices: VertexSet,
    topology: &'static Topology,
    measurements: Measurements,
}

impl Geometry {
    /// Returns the shape kind.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.dimensions.kind()
    }

    /// Returns the input dimensions.
    #[must_use]
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Returns the labelled corner positions.
    #[must_use]
    pub fn vertices(&self) -> &VertexSet {
        &self.vertices
    }

    /// Returns the edge and diagonal tables.
    #[must_use]
    pub fn topology(&self) -> &'static Topology {
        self.topology
    }

    /// Returns the measurements rounded to two decimal places.
    #[must_use]
    pub fn measurements(&self) -> &Measurements {
        &self.measurements
    }

    /// Returns the static description of the shape kind.
    #[must_use]
    pub fn info(&self) -> &'static ShapeInfo {
        self.kind().info()
    }

    /// Returns one formula-panel row per measured quantity.
    #[must_use]
    pub fn report(&self) -> Vec<MeasurementLine> {
        MeasurementLine::all(self.kind(), &self.measurements)
    }
}
