use crate::error::Result;
use crate::measure::Measurements;
use crate::shape::{DimensionLimits, Dimensions};
use crate::topology::Topology;

use super::{Geometry, VertexSet};

/// Computes vertices, topology and measurements for a shape.
///
/// This is the single place that dispatches on the shape kind; callers
/// holding a kind and raw numbers go through
/// [`Dimensions::from_values`] first.
#[derive(Debug, Clone, Copy)]
pub struct ComputeGeometry {
    dimensions: Dimensions,
    limits: DimensionLimits,
}

impl ComputeGeometry {
    /// Creates a new `ComputeGeometry` operation with the default limits.
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            limits: DimensionLimits::default(),
        }
    }

    /// Sets custom dimension limits.
    #[must_use]
    pub fn with_limits(mut self, limits: DimensionLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Executes the computation.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is non-positive, non-finite or outside
    /// the configured limits. No partial result is produced.
    pub fn execute(&self) -> Result<Geometry> {
        if let Err(err) = self.limits.check(&self.dimensions) {
            tracing::debug!(dimensions = ?self.dimensions, %err, "rejected dimensions");
            return Err(err);
        }

        let vertices = VertexSet::new(&self.dimensions)?;
        let measurements = Measurements::exact(&self.dimensions)?.rounded();
        tracing::trace!(
            kind = %self.dimensions.kind(),
            volume = measurements.volume,
            "computed geometry"
        );

        Ok(Geometry {
            dimensions: self.dimensions,
            vertices,
            topology: Topology::standard(),
            measurements,
        })
    }
}

/// Computes the geometry of `dimensions` within the default limits.
///
/// # Errors
///
/// See [`ComputeGeometry::execute`].
pub fn compute_geometry(dimensions: &Dimensions) -> Result<Geometry> {
    ComputeGeometry::new(*dimensions).execute()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{CuboidError, DimensionError};
    use crate::measure::FaceDiagonals;
    use crate::shape::ShapeKind;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn dispatches_on_kind() {
        let cube = compute_geometry(&Dimensions::cube(3.0)).unwrap();
        assert_eq!(cube.kind(), ShapeKind::Cube);
        assert_eq!(cube.measurements().face_diagonals, FaceDiagonals::Uniform(4.24));

        let prism = compute_geometry(&Dimensions::DEFAULT_PRISM).unwrap();
        assert_eq!(prism.kind(), ShapeKind::RectangularPrism);
        assert_abs_diff_eq!(prism.measurements().volume, 24.0);
    }

    #[test]
    fn both_kinds_share_one_topology() {
        let cube = compute_geometry(&Dimensions::DEFAULT_CUBE).unwrap();
        let prism = compute_geometry(&Dimensions::DEFAULT_PRISM).unwrap();
        assert!(std::ptr::eq(cube.topology(), prism.topology()));
    }

    #[test]
    fn from_values_feeds_dispatch() {
        let kind: ShapeKind = "rectangular-prism".parse().unwrap();
        let dimensions = Dimensions::from_values(kind, &[4.0, 3.0, 2.0]).unwrap();
        let geometry = compute_geometry(&dimensions).unwrap();
        assert_abs_diff_eq!(geometry.measurements().space_diagonal, 5.39);
    }

    #[test]
    fn limits_are_inclusive() {
        assert!(compute_geometry(&Dimensions::cube(0.5)).is_ok());
        assert!(compute_geometry(&Dimensions::cube(20.0)).is_ok());
        assert!(compute_geometry(&Dimensions::rectangular_prism(0.5, 20.0, 0.5)).is_ok());
    }

    #[test]
    fn out_of_range_is_rejected() {
        for side in [0.4, 21.0] {
            let err = compute_geometry(&Dimensions::cube(side)).unwrap_err();
            assert!(matches!(
                err,
                CuboidError::Dimension(DimensionError::OutOfRange { .. })
            ));
        }
        assert!(compute_geometry(&Dimensions::rectangular_prism(4.0, 3.0, 20.5)).is_err());
    }

    #[test]
    fn custom_limits_widen_the_range() {
        let limits = DimensionLimits::new(0.1, 100.0).unwrap();
        let geometry = ComputeGeometry::new(Dimensions::cube(50.0))
            .with_limits(limits)
            .execute()
            .unwrap();
        assert_abs_diff_eq!(geometry.measurements().volume, 125_000.0);
    }

    #[test]
    fn measured_segments_match_formulas() {
        let geometry = compute_geometry(&Dimensions::rectangular_prism(4.0, 3.0, 2.0)).unwrap();
        let vertices = geometry.vertices();
        let topology = geometry.topology();

        for diagonal in topology.space_diagonals {
            assert_relative_eq!(vertices.segment_length(diagonal), 29f64.sqrt());
        }
        // front/back faces span length × height, bottom/top length × width,
        // right/left width × height.
        for (i, diagonal) in topology.face_diagonals.iter().enumerate() {
            let expected = match i {
                0..=3 => 20f64.sqrt(),
                4..=7 => 5.0,
                _ => 13f64.sqrt(),
            };
            assert_relative_eq!(vertices.segment_length(diagonal), expected, max_relative = 1e-12);
        }
        for (plane, area) in topology
            .diagonal_planes
            .iter()
            .zip([4.0 * 13f64.sqrt(), 4.0 * 13f64.sqrt(), 3.0 * 20f64.sqrt(), 3.0 * 20f64.sqrt()])
        {
            assert_relative_eq!(vertices.quad_area(plane), area, max_relative = 1e-12);
        }
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let dimensions = Dimensions::rectangular_prism(7.25, 0.75, 13.5);
        let a = compute_geometry(&dimensions).unwrap();
        let b = compute_geometry(&dimensions).unwrap();
        assert_eq!(a.vertices(), b.vertices());
        assert_eq!(a.measurements(), b.measurements());
        assert_eq!(a.report(), b.report());
    }
}
