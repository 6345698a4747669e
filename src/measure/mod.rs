mod report;

pub use report::{MeasurementLine, Quantity};

use crate::error::{DimensionError, Result};
use crate::math::round_display;
use crate::shape::Dimensions;

/// Face-diagonal lengths.
///
/// A cube has a single value; a rectangular prism has one per pair of axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FaceDiagonals {
    /// Every face diagonal of a cube: `s√2`.
    Uniform(f64),
    /// Prism face diagonals, keyed by the two edges each one spans.
    PerAxisPair {
        /// `√(l² + w²)`: top and bottom faces.
        length_width: f64,
        /// `√(l² + h²)`: front and back faces.
        length_height: f64,
        /// `√(w² + h²)`: left and right faces.
        width_height: f64,
    },
}

impl FaceDiagonals {
    /// Returns the distinct lengths in display order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        match *self {
            FaceDiagonals::Uniform(d) => vec![d],
            FaceDiagonals::PerAxisPair {
                length_width,
                length_height,
                width_height,
            } => vec![length_width, length_height, width_height],
        }
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        match *self {
            FaceDiagonals::Uniform(d) => FaceDiagonals::Uniform(f(d)),
            FaceDiagonals::PerAxisPair {
                length_width,
                length_height,
                width_height,
            } => FaceDiagonals::PerAxisPair {
                length_width: f(length_width),
                length_height: f(length_height),
                width_height: f(width_height),
            },
        }
    }
}

/// Closed-form measurements of a cube or rectangular prism.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub volume: f64,
    pub surface_area: f64,
    /// Total length of the 12 edges.
    pub perimeter: f64,
    pub space_diagonal: f64,
    pub face_diagonals: FaceDiagonals,
    /// Area of each diagonal plane, in
    /// [`DIAGONAL_PLANES`](crate::topology::DIAGONAL_PLANES) order.
    pub diagonal_plane_areas: [f64; 4],
}

impl Measurements {
    /// Computes every measurement at full floating-point precision.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is non-positive or non-finite, or if a
    /// result overflows to infinity.
    pub fn exact(dimensions: &Dimensions) -> Result<Self> {
        dimensions.validate()?;
        let measurements = match *dimensions {
            Dimensions::Cube { side } => cube(side),
            Dimensions::RectangularPrism {
                length,
                width,
                height,
            } => rectangular_prism(length, width, height),
        };
        measurements.ensure_finite()?;
        Ok(measurements)
    }

    /// Returns a copy with every value rounded to two decimal places.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            volume: round_display(self.volume),
            surface_area: round_display(self.surface_area),
            perimeter: round_display(self.perimeter),
            space_diagonal: round_display(self.space_diagonal),
            face_diagonals: self.face_diagonals.map(round_display),
            diagonal_plane_areas: self.diagonal_plane_areas.map(round_display),
        }
    }

    fn ensure_finite(&self) -> std::result::Result<(), DimensionError> {
        let scalars = [
            ("volume", self.volume),
            ("surface area", self.surface_area),
            ("perimeter", self.perimeter),
            ("space diagonal", self.space_diagonal),
        ];
        let diagonals = self
            .face_diagonals
            .values()
            .into_iter()
            .map(|d| ("face diagonal", d));
        let planes = self
            .diagonal_plane_areas
            .into_iter()
            .map(|a| ("diagonal plane area", a));

        match scalars.into_iter().chain(diagonals).chain(planes).find(|(_, v)| !v.is_finite()) {
            Some((quantity, _)) => Err(DimensionError::Overflow { quantity }),
            None => Ok(()),
        }
    }
}

fn cube(side: f64) -> Measurements {
    let plane_area = side * side * 2f64.sqrt();
    Measurements {
        volume: side.powi(3),
        surface_area: 6.0 * side.powi(2),
        perimeter: 12.0 * side,
        space_diagonal: side * 3f64.sqrt(),
        face_diagonals: FaceDiagonals::Uniform(side * 2f64.sqrt()),
        diagonal_plane_areas: [plane_area; 4],
    }
}

fn rectangular_prism(length: f64, width: f64, height: f64) -> Measurements {
    let length_width = length.hypot(width);
    let length_height = length.hypot(height);
    let width_height = width.hypot(height);

    // ABGH and DCFE span length × (width, height); DHFB and ACGE span width × (length, height).
    let along_length = length * width_height;
    let along_width = width * length_height;

    Measurements {
        volume: length * width * height,
        surface_area: 2.0 * (length * width + length * height + width * height),
        perimeter: 4.0 * (length + width + height),
        space_diagonal: (length.powi(2) + width.powi(2) + height.powi(2)).sqrt(),
        face_diagonals: FaceDiagonals::PerAxisPair {
            length_width,
            length_height,
            width_height,
        },
        diagonal_plane_areas: [along_length, along_length, along_width, along_width],
    }
}

/// Computes the rounded measurements of a cube with edge `side`.
///
/// # Errors
///
/// Returns an error if `side` is non-positive or non-finite.
pub fn calculate_cube(side: f64) -> Result<Measurements> {
    Ok(Measurements::exact(&Dimensions::cube(side))?.rounded())
}

/// Computes the rounded measurements of a rectangular prism.
///
/// # Errors
///
/// Returns an error if any dimension is non-positive or non-finite.
pub fn calculate_rectangular_prism(length: f64, width: f64, height: f64) -> Result<Measurements> {
    Ok(Measurements::exact(&Dimensions::rectangular_prism(length, width, height))?.rounded())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CuboidError;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn cube_of_side_three() {
        let m = calculate_cube(3.0).unwrap();
        assert_abs_diff_eq!(m.volume, 27.00);
        assert_abs_diff_eq!(m.surface_area, 54.00);
        assert_abs_diff_eq!(m.perimeter, 36.00);
        assert_abs_diff_eq!(m.space_diagonal, 5.20);
        assert_eq!(m.face_diagonals, FaceDiagonals::Uniform(4.24));
        assert_abs_diff_eq!(m.diagonal_plane_areas[0], 12.73);
    }

    #[test]
    fn prism_four_three_two() {
        let m = calculate_rectangular_prism(4.0, 3.0, 2.0).unwrap();
        assert_abs_diff_eq!(m.volume, 24.00);
        assert_abs_diff_eq!(m.surface_area, 52.00);
        assert_abs_diff_eq!(m.perimeter, 36.00);
        assert_abs_diff_eq!(m.space_diagonal, 5.39);
        assert_eq!(
            m.face_diagonals,
            FaceDiagonals::PerAxisPair {
                length_width: 5.0,
                length_height: 4.47,
                width_height: 3.61,
            }
        );
        // 4 × √13 and 3 × √20
        assert_eq!(m.diagonal_plane_areas, [14.42, 14.42, 13.42, 13.42]);
    }

    #[test]
    fn cube_formulas_hold_for_many_sides() {
        for i in 1..=40 {
            let side = f64::from(i) * 0.5;
            let exact = Measurements::exact(&Dimensions::cube(side)).unwrap();
            assert_relative_eq!(exact.volume, side * side * side);
            assert_relative_eq!(exact.surface_area, 6.0 * side * side);

            let rounded = calculate_cube(side).unwrap();
            assert_abs_diff_eq!(rounded.volume, exact.volume, epsilon = 0.005);
            assert_abs_diff_eq!(rounded.surface_area, exact.surface_area, epsilon = 0.005);
        }
    }

    #[test]
    fn prism_with_equal_edges_matches_cube() {
        for side in [0.5, 1.0, 2.5, 7.3, 20.0] {
            let cube = Measurements::exact(&Dimensions::cube(side)).unwrap();
            let prism = Measurements::exact(&Dimensions::rectangular_prism(side, side, side)).unwrap();
            assert_relative_eq!(prism.space_diagonal, cube.space_diagonal, max_relative = 1e-12);
            assert_relative_eq!(prism.volume, cube.volume, max_relative = 1e-12);
            assert_relative_eq!(prism.surface_area, cube.surface_area, max_relative = 1e-12);
            for (p, c) in prism.diagonal_plane_areas.iter().zip(cube.diagonal_plane_areas) {
                assert_relative_eq!(*p, c, max_relative = 1e-12);
            }
            for d in prism.face_diagonals.values() {
                assert_relative_eq!(d, side * 2f64.sqrt(), max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn space_diagonal_is_pythagorean() {
        let exact = Measurements::exact(&Dimensions::rectangular_prism(1.5, 7.0, 12.25)).unwrap();
        assert_relative_eq!(
            exact.space_diagonal,
            (1.5f64 * 1.5 + 49.0 + 12.25 * 12.25).sqrt()
        );
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let a = calculate_rectangular_prism(3.7, 11.2, 0.9).unwrap();
        let b = calculate_rectangular_prism(3.7, 11.2, 0.9).unwrap();
        assert_eq!(a.volume.to_bits(), b.volume.to_bits());
        assert_eq!(a.space_diagonal.to_bits(), b.space_diagonal.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_input_is_rejected() {
        for side in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            assert!(calculate_cube(side).is_err(), "side = {side}");
        }
        assert!(calculate_rectangular_prism(4.0, -3.0, 2.0).is_err());
        assert!(calculate_rectangular_prism(4.0, 3.0, f64::NAN).is_err());
    }

    #[test]
    fn huge_finite_results_survive_rounding() {
        let exact = Measurements::exact(&Dimensions::cube(5.5e102)).unwrap();
        assert!(exact.volume.is_finite());

        let m = calculate_cube(5.5e102).unwrap();
        assert!(m.volume.is_finite());
        assert_relative_eq!(m.volume, exact.volume);
        assert_relative_eq!(m.surface_area, exact.surface_area, max_relative = 1e-12);

        let m = calculate_rectangular_prism(1e103, 1e103, 1.7e102).unwrap();
        assert!(m.volume.is_finite());
        assert_relative_eq!(m.volume, 1.7e308, max_relative = 1e-12);
        assert!(m.diagonal_plane_areas.iter().all(|a| a.is_finite()));
    }

    #[test]
    fn overflow_is_reported() {
        let err = calculate_cube(1e200).unwrap_err();
        assert!(matches!(
            err,
            CuboidError::Dimension(DimensionError::Overflow { quantity: "volume" })
        ));
    }
}
