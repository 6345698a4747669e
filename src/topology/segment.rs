use super::vertex::VertexLabel::{self, A, B, C, D, E, F, G, H};
use super::Category;

/// A straight element between two labelled corners: an edge, a face
/// diagonal or a space diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Stable identifier, also used as the toggle key.
    pub id: &'static str,
    /// Display name: the two endpoint letters.
    pub name: &'static str,
    /// Which table this segment belongs to.
    pub category: Category,
    /// Endpoints.
    pub vertices: [VertexLabel; 2],
}

const fn edge(id: &'static str, name: &'static str, a: VertexLabel, b: VertexLabel) -> Segment {
    Segment {
        id,
        name,
        category: Category::Edge,
        vertices: [a, b],
    }
}

const fn face(id: &'static str, name: &'static str, a: VertexLabel, b: VertexLabel) -> Segment {
    Segment {
        id,
        name,
        category: Category::FaceDiagonal,
        vertices: [a, b],
    }
}

const fn space(id: &'static str, name: &'static str, a: VertexLabel, b: VertexLabel) -> Segment {
    Segment {
        id,
        name,
        category: Category::SpaceDiagonal,
        vertices: [a, b],
    }
}

/// The 12 edges: bottom loop, top loop, then the four verticals.
pub const EDGES: [Segment; 12] = [
    edge("edgeAB", "AB", A, B),
    edge("edgeBF", "BF", B, F),
    edge("edgeFE", "FE", F, E),
    edge("edgeEA", "EA", E, A),
    edge("edgeDC", "DC", D, C),
    edge("edgeCG", "CG", C, G),
    edge("edgeGH", "GH", G, H),
    edge("edgeHD", "HD", H, D),
    edge("edgeAD", "AD", A, D),
    edge("edgeBC", "BC", B, C),
    edge("edgeFG", "FG", F, G),
    edge("edgeEH", "EH", E, H),
];

/// The 12 face diagonals, two per face.
pub const FACE_DIAGONALS: [Segment; 12] = [
    // front
    face("faceDiagonalAC", "AC", A, C),
    face("faceDiagonalBD", "BD", B, D),
    // back
    face("faceDiagonalEG", "EG", E, G),
    face("faceDiagonalFH", "FH", F, H),
    // bottom
    face("faceDiagonalAF", "AF", A, F),
    face("faceDiagonalBE", "BE", B, E),
    // top
    face("faceDiagonalDG", "DG", D, G),
    face("faceDiagonalCH", "CH", C, H),
    // right
    face("faceDiagonalBG", "BG", B, G),
    face("faceDiagonalCF", "CF", C, F),
    // left
    face("faceDiagonalAH", "AH", A, H),
    face("faceDiagonalDE", "DE", D, E),
];

/// The 4 space diagonals through the centre.
pub const SPACE_DIAGONALS: [Segment; 4] = [
    space("spaceDiagonalAG", "AG", A, G),
    space("spaceDiagonalBH", "BH", B, H),
    space("spaceDiagonalCE", "CE", C, E),
    space("spaceDiagonalDF", "DF", D, F),
];

impl Segment {
    /// Returns the endpoint indices into a vertex array.
    #[must_use]
    pub fn indices(&self) -> [usize; 2] {
        [self.vertices[0].index(), self.vertices[1].index()]
    }

    /// Returns `true` if `label` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, label: VertexLabel) -> bool {
        self.vertices.contains(&label)
    }
}
