use std::fmt;

/// Canonical corner labels of the box.
///
/// A, B, C, D go around the front face (+Z); E, F, G, H go around the back
/// face (−Z) with E behind A, F behind B, G behind C and H behind D. The
/// discriminant is the vertex index used by every table in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VertexLabel {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

use VertexLabel::{A, B, C, D, E, F, G, H};

impl VertexLabel {
    /// All labels in index order.
    pub const ALL: [VertexLabel; 8] = [A, B, C, D, E, F, G, H];

    /// Returns the vertex index of this label.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the label at `index`, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the label letter.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            A => 'A',
            B => 'B',
            C => 'C',
            D => 'D',
            E => 'E',
            F => 'F',
            G => 'G',
            H => 'H',
        }
    }

    /// Parses a label letter (case-insensitive).
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_char() == ch.to_ascii_uppercase())
    }

    /// Returns the sign of this corner along X, Y and Z.
    ///
    /// Multiplying component-wise by the half-extents gives the corner position.
    #[must_use]
    pub const fn signs(self) -> [f64; 3] {
        match self {
            A => [-1.0, -1.0, 1.0],
            B => [1.0, -1.0, 1.0],
            C => [1.0, 1.0, 1.0],
            D => [-1.0, 1.0, 1.0],
            E => [-1.0, -1.0, -1.0],
            F => [1.0, -1.0, -1.0],
            G => [1.0, 1.0, -1.0],
            H => [-1.0, 1.0, -1.0],
        }
    }

    /// Returns the corner diagonally opposite through the centre.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            A => G,
            B => H,
            C => E,
            D => F,
            E => C,
            F => D,
            G => A,
            H => B,
        }
    }

    /// Number of axes along which `self` and `other` lie on opposite sides.
    ///
    /// 1 means they share an edge, 2 a face diagonal, 3 a space diagonal.
    #[must_use]
    pub fn axis_distance(self, other: Self) -> usize {
        self.signs()
            .iter()
            .zip(other.signs())
            .filter(|(a, b)| (**a - b).abs() > 0.0)
            .count()
    }
}

impl fmt::Display for VertexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
