use crate::display::DisplaySettings;
use crate::error::Result;
use crate::geometry::Geometry;
use crate::topology::{Category, Segment};

use super::{HatchPlane, LineStyle, Scene, SceneBody, SceneLabel, SceneLine, ScenePlane, SceneStyle};

/// Turns a computed geometry and the current display settings into a
/// [`Scene`].
///
/// Edges and labels are always present; diagonals and planes appear only when
/// their toggle is on, drawn in the color chosen in the settings.
pub struct BuildScene<'a> {
    geometry: &'a Geometry,
    settings: &'a DisplaySettings,
    style: SceneStyle,
}

impl<'a> BuildScene<'a> {
    /// Creates a new `BuildScene` operation with the default style.
    #[must_use]
    pub fn new(geometry: &'a Geometry, settings: &'a DisplaySettings) -> Self {
        Self {
            geometry,
            settings,
            style: SceneStyle::default(),
        }
    }

    /// Sets a custom style.
    #[must_use]
    pub fn with_style(mut self, style: SceneStyle) -> Self {
        self.style = style;
        self
    }

    /// Executes the build.
    ///
    /// # Errors
    ///
    /// Returns an error if the hatch parameters are invalid.
    pub fn execute(&self) -> Result<Scene> {
        let topology = self.geometry.topology();
        let colors = self.settings.colors();

        let edges = topology.edges.iter().map(|s| self.line(s, self.style.edge));
        let space = self
            .visible(topology.segments_of(Category::SpaceDiagonal))
            .map(|s| self.diagonal_line(s, self.style.space_diagonal));
        let face = self
            .visible(topology.segments_of(Category::FaceDiagonal))
            .map(|s| self.diagonal_line(s, self.style.face_diagonal));
        let lines: Vec<SceneLine> = edges.chain(space).chain(face).collect();

        let outline_style = self.style.plane_outline.with_color(colors.diagonal_plane);
        let vertices = self.geometry.vertices();
        let mut planes = Vec::new();
        for plane in topology
            .diagonal_planes
            .iter()
            .filter(|p| self.settings.plane_visible(p))
        {
            let outline = plane
                .boundary()
                .into_iter()
                .map(|[a, b]| SceneLine {
                    element: plane.id,
                    category: Category::DiagonalPlane,
                    start: vertices[a],
                    end: vertices[b],
                    style: outline_style,
                })
                .collect();
            let hatching = HatchPlane::new(vertices.quad(plane))
                .with_params(self.style.hatch)
                .execute()?;
            planes.push(ScenePlane {
                element: plane.id,
                outline,
                hatching,
                color: colors.diagonal_plane,
            });
        }

        let labels = vertices
            .iter()
            .map(|(label, point)| SceneLabel {
                label,
                position: *point * self.style.label_offset,
                color: self.style.label_color,
            })
            .collect();

        let extents = self.geometry.dimensions().extents();
        let body = SceneBody {
            size: extents.half() * 2.0,
            color: self.style.body_color,
            opacity: self.settings.body_opacity(),
            transparent: self.settings.transparency(),
        };

        tracing::debug!(
            lines = lines.len(),
            planes = planes.len(),
            "built scene"
        );

        Ok(Scene {
            body,
            lines,
            planes,
            labels,
        })
    }

    fn visible(&self, table: &'static [Segment]) -> impl Iterator<Item = &'static Segment> + '_ {
        table.iter().filter(|s| self.settings.segment_visible(s))
    }

    fn diagonal_line(&self, segment: &'static Segment, style: LineStyle) -> SceneLine {
        let style = match self.settings.colors().get(segment.category) {
            Some(color) => style.with_color(color),
            None => style,
        };
        self.line(segment, style)
    }

    fn line(&self, segment: &'static Segment, style: LineStyle) -> SceneLine {
        let [start, end] = self.geometry.vertices().segment(segment);
        SceneLine {
            element: segment.id,
            category: segment.category,
            start,
            end,
            style,
        }
    }
}
