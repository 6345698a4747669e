use super::ShapeKind;

/// Static description of a shape kind: names, element counts and the
/// formula strings shown next to each measurement.
///
/// Formulas use the Indonesian letters the lesson material uses:
/// `p` (panjang, length), `l` (lebar, width), `t` (tinggi, height).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeInfo {
    pub kind: ShapeKind,
    pub name: &'static str,
    pub name_indonesian: &'static str,
    pub faces: usize,
    pub edges: usize,
    pub vertices: usize,
    pub volume_formula: &'static str,
    pub surface_area_formula: &'static str,
    pub perimeter_formula: &'static str,
    pub face_diagonal_formula: &'static str,
    pub space_diagonal_formula: &'static str,
    pub diagonal_plane_area_formula: &'static str,
}

const CUBE: ShapeInfo = ShapeInfo {
    kind: ShapeKind::Cube,
    name: "Cube",
    name_indonesian: "Kubus",
    faces: 6,
    edges: 12,
    vertices: 8,
    volume_formula: "V = s³",
    surface_area_formula: "L = 6s²",
    perimeter_formula: "K = 12 × s",
    face_diagonal_formula: "d = s√2",
    space_diagonal_formula: "D = s√3",
    diagonal_plane_area_formula: "L = s²√2",
};

const RECTANGULAR_PRISM: ShapeInfo = ShapeInfo {
    kind: ShapeKind::RectangularPrism,
    name: "Rectangular Prism",
    name_indonesian: "Balok",
    faces: 6,
    edges: 12,
    vertices: 8,
    volume_formula: "V = p × l × t",
    surface_area_formula: "L = 2(pl + pt + lt)",
    perimeter_formula: "K = 4(p + l + t)",
    face_diagonal_formula: "d₁ = √(p² + l²), d₂ = √(p² + t²), d₃ = √(l² + t²)",
    space_diagonal_formula: "D = √(p² + l² + t²)",
    diagonal_plane_area_formula: "L₁ = p × √(l² + t²), L₂ = l × √(p² + t²)",
};

impl ShapeInfo {
    /// Returns the description of `kind`.
    #[must_use]
    pub fn of(kind: ShapeKind) -> &'static ShapeInfo {
        match kind {
            ShapeKind::Cube => &CUBE,
            ShapeKind::RectangularPrism => &RECTANGULAR_PRISM,
        }
    }
}
