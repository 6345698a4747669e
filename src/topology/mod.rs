mod plane;
mod segment;
mod vertex;

pub use plane::{DiagonalPlane, DIAGONAL_PLANES};
pub use segment::{Segment, EDGES, FACE_DIAGONALS, SPACE_DIAGONALS};
pub use vertex::VertexLabel;

use std::fmt;

/// The kinds of element in the topology tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// An edge of the box.
    Edge,
    /// A diagonal lying on one face.
    FaceDiagonal,
    /// A diagonal through the interior.
    SpaceDiagonal,
    /// A rectangle slicing through the interior.
    DiagonalPlane,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Edge => "edge",
            Category::FaceDiagonal => "face diagonal",
            Category::SpaceDiagonal => "space diagonal",
            Category::DiagonalPlane => "diagonal plane",
        })
    }
}

/// A reference to one entry of the topology tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// An edge, face diagonal or space diagonal.
    Segment(&'static Segment),
    /// A diagonal plane.
    Plane(&'static DiagonalPlane),
}

impl Element {
    /// Returns the stable identifier of the element.
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Element::Segment(segment) => segment.id,
            Element::Plane(plane) => plane.id,
        }
    }

    /// Returns the category of the element.
    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            Element::Segment(segment) => segment.category,
            Element::Plane(_) => Category::DiagonalPlane,
        }
    }
}

/// The fixed connectivity of the box, shared by both shape kinds.
///
/// Every table is expressed in [`VertexLabel`]s only, so it holds for any
/// dimensions.
#[derive(Debug)]
pub struct Topology {
    pub edges: &'static [Segment; 12],
    pub face_diagonals: &'static [Segment; 12],
    pub space_diagonals: &'static [Segment; 4],
    pub diagonal_planes: &'static [DiagonalPlane; 4],
}

static STANDARD: Topology = Topology {
    edges: &EDGES,
    face_diagonals: &FACE_DIAGONALS,
    space_diagonals: &SPACE_DIAGONALS,
    diagonal_planes: &DIAGONAL_PLANES,
};

impl Topology {
    /// Returns the topology of the labelled box.
    #[must_use]
    pub fn standard() -> &'static Topology {
        &STANDARD
    }

    /// Iterates over every segment: edges, then face and space diagonals.
    pub fn segments(&self) -> impl Iterator<Item = &'static Segment> {
        self.edges
            .iter()
            .chain(self.face_diagonals.iter())
            .chain(self.space_diagonals.iter())
    }

    /// Iterates over every element of every table.
    pub fn elements(&self) -> impl Iterator<Item = Element> {
        self.segments()
            .map(Element::Segment)
            .chain(self.diagonal_planes.iter().map(Element::Plane))
    }

    /// Looks up an element by its stable identifier.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<Element> {
        self.elements().find(|element| element.id() == id)
    }

    /// Returns the segments of `category` (empty for diagonal planes).
    #[must_use]
    pub fn segments_of(&self, category: Category) -> &'static [Segment] {
        match category {
            Category::Edge => self.edges,
            Category::FaceDiagonal => self.face_diagonals,
            Category::SpaceDiagonal => self.space_diagonals,
            Category::DiagonalPlane => &[],
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_sizes() {
        let topology = Topology::standard();
        assert_eq!(topology.edges.len(), 12);
        assert_eq!(topology.face_diagonals.len(), 12);
        assert_eq!(topology.space_diagonals.len(), 4);
        assert_eq!(topology.diagonal_planes.len(), 4);
        assert_eq!(topology.elements().count(), 32);
    }

    #[test]
    fn every_vertex_has_three_edges_three_face_diagonals_one_space_diagonal() {
        let topology = Topology::standard();
        for label in VertexLabel::ALL {
            let count = |table: &[Segment]| table.iter().filter(|s| s.touches(label)).count();
            assert_eq!(count(topology.edges), 3, "edges at {label}");
            assert_eq!(count(topology.face_diagonals), 3, "face diagonals at {label}");
            assert_eq!(count(topology.space_diagonals), 1, "space diagonals at {label}");
        }
    }

    #[test]
    fn no_segment_appears_twice() {
        let mut pairs = HashSet::new();
        for segment in Topology::standard().segments() {
            let mut pair = segment.vertices;
            pair.sort();
            assert!(pairs.insert(pair), "duplicate segment {}", segment.name);
        }
        // 8 choose 2: every corner pair is exactly one of the three kinds.
        assert_eq!(pairs.len(), 28);
    }

    #[test]
    fn names_and_ids_are_unique_across_categories() {
        let topology = Topology::standard();
        let mut names = HashSet::new();
        let mut ids = HashSet::new();
        for segment in topology.segments() {
            assert!(names.insert(segment.name), "{}", segment.name);
            assert!(ids.insert(segment.id), "{}", segment.id);
        }
        for plane in topology.diagonal_planes {
            assert!(names.insert(plane.name), "{}", plane.name);
            assert!(ids.insert(plane.id), "{}", plane.id);
        }
    }

    #[test]
    fn segments_by_category() {
        let topology = Topology::standard();
        for category in [Category::Edge, Category::FaceDiagonal, Category::SpaceDiagonal] {
            let table = topology.segments_of(category);
            assert!(!table.is_empty());
            assert!(table.iter().all(|s| s.category == category), "{category}");
        }
        assert_eq!(topology.segments_of(Category::Edge).len(), 12);
        assert_eq!(topology.segments_of(Category::FaceDiagonal).len(), 12);
        assert_eq!(topology.segments_of(Category::SpaceDiagonal).len(), 4);
        assert!(topology.segments_of(Category::DiagonalPlane).is_empty());
    }

    #[test]
    fn find_by_id() {
        let topology = Topology::standard();
        let element = topology.find("faceDiagonalAC").unwrap();
        assert_eq!(element.category(), Category::FaceDiagonal);

        let element = topology.find("diagonalPlaneABGH").unwrap();
        assert_eq!(element.category(), Category::DiagonalPlane);

        assert!(topology.find("faceDiagonalAG").is_none());
    }
}
