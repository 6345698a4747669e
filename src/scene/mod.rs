mod build;
mod hatch;
mod style;

pub use build::BuildScene;
pub use hatch::{HatchParams, HatchPlane};
pub use style::{LineStyle, SceneStyle};

use crate::display::Color;
use crate::math::{Point3, Vector3};
use crate::topology::{Category, VertexLabel};

/// A styled line segment belonging to one topology element.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLine {
    /// Identifier of the element this line draws.
    pub element: &'static str,
    pub category: Category,
    pub start: Point3,
    pub end: Point3,
    pub style: LineStyle,
}

/// A visible diagonal plane: its outline plus interior hatching.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePlane {
    pub element: &'static str,
    pub outline: Vec<SceneLine>,
    pub hatching: Vec<[Point3; 2]>,
    pub color: Color,
}

/// A corner label anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLabel {
    pub label: VertexLabel,
    pub position: Point3,
    pub color: Color,
}

/// The solid box itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneBody {
    /// Full size along X, Y and Z.
    pub size: Vector3,
    pub color: Color,
    /// `1.0` unless transparency is on.
    pub opacity: f64,
    pub transparent: bool,
}

/// Draw list for one frame: what to draw and with which style.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub body: SceneBody,
    /// Edges first, then visible space and face diagonals.
    pub lines: Vec<SceneLine>,
    pub planes: Vec<ScenePlane>,
    pub labels: Vec<SceneLabel>,
}

impl Scene {
    /// Returns the lines of `category`.
    pub fn lines_of(&self, category: Category) -> impl Iterator<Item = &SceneLine> {
        self.lines.iter().filter(move |line| line.category == category)
    }
}
