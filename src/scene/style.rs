use crate::display::{palette, Color};
use crate::error::{DisplayError, Result};

use super::HatchParams;

/// Color and thickness of a drawn line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    color: Color,
    thickness: f64,
}

impl LineStyle {
    /// Creates a new line style.
    ///
    /// # Errors
    ///
    /// Returns an error if `thickness` is not positive.
    pub fn new(color: Color, thickness: f64) -> Result<Self> {
        if thickness.is_nan() || thickness <= 0.0 {
            return Err(
                DisplayError::InvalidStyle("line thickness must be positive".to_owned()).into(),
            );
        }
        Ok(Self { color, thickness })
    }

    /// Returns the line color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the line thickness in scene units.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Returns a copy drawn in `color`.
    #[must_use]
    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }
}

/// Fixed styling of the scene. Diagonal colors come from
/// [`DisplaySettings`](crate::display::DisplaySettings) and override the
/// colors here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneStyle {
    pub edge: LineStyle,
    pub space_diagonal: LineStyle,
    pub face_diagonal: LineStyle,
    pub plane_outline: LineStyle,
    pub hatch: HatchParams,
    /// Labels sit at each corner position scaled by this factor.
    pub label_offset: f64,
    pub label_color: Color,
    pub body_color: Color,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            edge: LineStyle {
                color: palette::EDGE,
                thickness: 0.04,
            },
            space_diagonal: LineStyle {
                color: palette::SPACE_DIAGONAL,
                thickness: 0.03,
            },
            face_diagonal: LineStyle {
                color: palette::FACE_DIAGONAL,
                thickness: 0.02,
            },
            plane_outline: LineStyle {
                color: palette::DIAGONAL_PLANE,
                thickness: 0.03,
            },
            hatch: HatchParams::default(),
            label_offset: 1.4,
            label_color: palette::LABEL,
            body_color: palette::BODY,
        }
    }
}
