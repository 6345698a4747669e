mod dimensions;
mod info;
mod limits;

pub use dimensions::{Dimensions, Extents};
pub use info::ShapeInfo;
pub use limits::DimensionLimits;

use std::fmt;
use std::str::FromStr;

use crate::error::ShapeError;

/// The two solids the viewer can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// A cube: all edges share one length.
    Cube,
    /// A rectangular prism (cuboid) with independent length, width and height.
    RectangularPrism,
}

impl ShapeKind {
    /// Every supported shape kind, in selector order.
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Cube, ShapeKind::RectangularPrism];

    /// Returns the tag used at the input boundary (`"cube"`, `"rectangular-prism"`).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            ShapeKind::Cube => "cube",
            ShapeKind::RectangularPrism => "rectangular-prism",
        }
    }

    /// Returns the static description of this shape kind.
    #[must_use]
    pub fn info(self) -> &'static ShapeInfo {
        ShapeInfo::of(self)
    }

    /// Returns the default dimensions shown when this kind is first selected.
    #[must_use]
    pub fn default_dimensions(self) -> Dimensions {
        match self {
            ShapeKind::Cube => Dimensions::DEFAULT_CUBE,
            ShapeKind::RectangularPrism => Dimensions::DEFAULT_PRISM,
        }
    }

    /// Number of dimension values this kind takes.
    #[must_use]
    pub fn value_count(self) -> usize {
        match self {
            ShapeKind::Cube => 1,
            ShapeKind::RectangularPrism => 3,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| ShapeError::UnsupportedKind(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tags() {
        assert_eq!("cube".parse::<ShapeKind>().unwrap(), ShapeKind::Cube);
        assert_eq!(
            "rectangular-prism".parse::<ShapeKind>().unwrap(),
            ShapeKind::RectangularPrism
        );
    }

    #[test]
    fn rejects_unknown_tag() {
        let err = "pyramid".parse::<ShapeKind>().unwrap_err();
        assert_eq!(err, ShapeError::UnsupportedKind("pyramid".into()));
    }

    #[test]
    fn tag_round_trips_through_display() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.to_string().parse::<ShapeKind>().unwrap(), kind);
        }
    }

    #[test]
    fn default_dimensions_match_kind() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.default_dimensions().kind(), kind);
        }
    }
}
