use super::vertex::VertexLabel::{self, A, B, C, D, E, F, G, H};

/// A rectangle through two opposite edges of the box.
///
/// Vertices are stored in winding order, so consecutive corners (and the last
/// back to the first) are the sides of the rectangle and never cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagonalPlane {
    /// Stable identifier, also used as the toggle key.
    pub id: &'static str,
    /// Display name: the four corner letters in winding order.
    pub name: &'static str,
    /// Corners in winding order.
    pub vertices: [VertexLabel; 4],
}

/// The 4 diagonal planes. The first two contain the edges running along
/// X (length), the last two contain the edges running along Z (width).
pub const DIAGONAL_PLANES: [DiagonalPlane; 4] = [
    DiagonalPlane {
        id: "diagonalPlaneABGH",
        name: "ABGH",
        vertices: [A, B, G, H],
    },
    DiagonalPlane {
        id: "diagonalPlaneDCFE",
        name: "DCFE",
        vertices: [D, C, F, E],
    },
    DiagonalPlane {
        id: "diagonalPlaneDHFB",
        name: "DHFB",
        vertices: [D, H, F, B],
    },
    DiagonalPlane {
        id: "diagonalPlaneACGE",
        name: "ACGE",
        vertices: [A, C, G, E],
    },
];

impl DiagonalPlane {
    /// Returns the four sides as consecutive corner pairs, closing the loop.
    #[must_use]
    pub fn boundary(&self) -> [[VertexLabel; 2]; 4] {
        let v = self.vertices;
        [[v[0], v[1]], [v[1], v[2]], [v[2], v[3]], [v[3], v[0]]]
    }
}
