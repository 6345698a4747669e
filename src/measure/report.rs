use std::fmt;

use crate::math::format_number;
use crate::shape::{ShapeInfo, ShapeKind};

use super::Measurements;

/// The quantities shown in the formula panel, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    SurfaceArea,
    Volume,
    Perimeter,
    FaceDiagonal,
    SpaceDiagonal,
    DiagonalPlaneArea,
}

impl Quantity {
    /// All quantities in display order.
    pub const ALL: [Quantity; 6] = [
        Quantity::SurfaceArea,
        Quantity::Volume,
        Quantity::Perimeter,
        Quantity::FaceDiagonal,
        Quantity::SpaceDiagonal,
        Quantity::DiagonalPlaneArea,
    ];

    /// Human-readable title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Quantity::SurfaceArea => "Surface area",
            Quantity::Volume => "Volume",
            Quantity::Perimeter => "Total edge length",
            Quantity::FaceDiagonal => "Face diagonal",
            Quantity::SpaceDiagonal => "Space diagonal",
            Quantity::DiagonalPlaneArea => "Diagonal plane area",
        }
    }

    /// Returns the formula string for this quantity from `info`.
    #[must_use]
    pub fn formula(self, info: &ShapeInfo) -> &'static str {
        match self {
            Quantity::SurfaceArea => info.surface_area_formula,
            Quantity::Volume => info.volume_formula,
            Quantity::Perimeter => info.perimeter_formula,
            Quantity::FaceDiagonal => info.face_diagonal_formula,
            Quantity::SpaceDiagonal => info.space_diagonal_formula,
            Quantity::DiagonalPlaneArea => info.diagonal_plane_area_formula,
        }
    }
}

/// One row of the formula panel: a quantity, its formula and its rounded
/// value(s).
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementLine {
    pub quantity: Quantity,
    pub formula: &'static str,
    pub values: Vec<f64>,
}

impl MeasurementLine {
    /// Builds every row for `kind` from `measurements`, rounding each value.
    #[must_use]
    pub fn all(kind: ShapeKind, measurements: &Measurements) -> Vec<MeasurementLine> {
        let rounded = measurements.rounded();
        let info = kind.info();
        Quantity::ALL
            .into_iter()
            .map(|quantity| MeasurementLine {
                quantity,
                formula: quantity.formula(info),
                values: values_of(kind, quantity, &rounded),
            })
            .collect()
    }
}

fn values_of(kind: ShapeKind, quantity: Quantity, m: &Measurements) -> Vec<f64> {
    match quantity {
        Quantity::SurfaceArea => vec![m.surface_area],
        Quantity::Volume => vec![m.volume],
        Quantity::Perimeter => vec![m.perimeter],
        Quantity::FaceDiagonal => m.face_diagonals.values(),
        Quantity::SpaceDiagonal => vec![m.space_diagonal],
        Quantity::DiagonalPlaneArea => match kind {
            ShapeKind::Cube => vec![m.diagonal_plane_areas[0]],
            ShapeKind::RectangularPrism => {
                vec![m.diagonal_plane_areas[0], m.diagonal_plane_areas[2]]
            }
        },
    }
}

impl fmt::Display for MeasurementLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.values.iter().map(|v| format_number(*v)).collect();
        write!(f, "{}: {} ({})", self.quantity.title(), self.formula, values.join("; "))
    }
}
