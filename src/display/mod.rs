mod color;

pub use color::{palette, Color};

use crate::error::{DisplayError, Result};
use crate::topology::{Category, DiagonalPlane, Segment, Topology};

/// Toggle identifier for the translucent body.
pub const TRANSPARENCY: &str = "transparency";

/// One color per diagonal category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagonalColors {
    pub space_diagonal: Color,
    pub face_diagonal: Color,
    pub diagonal_plane: Color,
}

impl DiagonalColors {
    /// Returns the color used for `category`, or `None` for edges, whose
    /// color is fixed.
    #[must_use]
    pub fn get(&self, category: Category) -> Option<Color> {
        match category {
            Category::Edge => None,
            Category::FaceDiagonal => Some(self.face_diagonal),
            Category::SpaceDiagonal => Some(self.space_diagonal),
            Category::DiagonalPlane => Some(self.diagonal_plane),
        }
    }

    /// Returns the picker presets for `category`.
    #[must_use]
    pub fn presets(category: Category) -> &'static [Color] {
        match category {
            Category::Edge => &[],
            Category::FaceDiagonal => &palette::FACE_DIAGONAL_PRESETS,
            Category::SpaceDiagonal => &palette::SPACE_DIAGONAL_PRESETS,
            Category::DiagonalPlane => &palette::DIAGONAL_PLANE_PRESETS,
        }
    }
}

impl Default for DiagonalColors {
    fn default() -> Self {
        Self {
            space_diagonal: palette::SPACE_DIAGONAL,
            face_diagonal: palette::FACE_DIAGONAL,
            diagonal_plane: palette::DIAGONAL_PLANE,
        }
    }
}

/// What the viewer shows and how: visibility toggles, body opacity and
/// diagonal colors.
///
/// Values are immutable; every update returns a new `DisplaySettings`, so an
/// earlier state can be kept around for undo or compared against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySettings {
    transparency: bool,
    opacity: f64,
    face_diagonals: [bool; 12],
    space_diagonals: [bool; 4],
    diagonal_planes: [bool; 4],
    colors: DiagonalColors,
}

impl DisplaySettings {
    /// Body opacity used when transparency is first enabled.
    pub const DEFAULT_OPACITY: f64 = 0.12;
    /// Lowest accepted opacity.
    pub const MIN_OPACITY: f64 = 0.05;
    /// Highest accepted opacity.
    pub const MAX_OPACITY: f64 = 0.5;

    /// Returns `true` if the body is drawn translucent.
    #[must_use]
    pub fn transparency(&self) -> bool {
        self.transparency
    }

    /// Returns the configured opacity, whether or not transparency is on.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Returns the opacity the body should be drawn with.
    #[must_use]
    pub fn body_opacity(&self) -> f64 {
        if self.transparency {
            self.opacity
        } else {
            1.0
        }
    }

    /// Returns the diagonal colors.
    #[must_use]
    pub fn colors(&self) -> &DiagonalColors {
        &self.colors
    }

    /// Returns the current value of the toggle `id`.
    ///
    /// `id` is [`TRANSPARENCY`] or the identifier of a face diagonal, space
    /// diagonal or diagonal plane. Unknown identifiers (including edges, which
    /// are always drawn) read as `false`.
    #[must_use]
    pub fn is_on(&self, id: &str) -> bool {
        if id == TRANSPARENCY {
            return self.transparency;
        }
        find_slot(id).is_some_and(|slot| self.get(slot))
    }

    /// Returns `true` if `segment` should be drawn.
    #[must_use]
    pub fn segment_visible(&self, segment: &Segment) -> bool {
        segment.category == Category::Edge || self.is_on(segment.id)
    }

    /// Returns `true` if `plane` should be drawn.
    #[must_use]
    pub fn plane_visible(&self, plane: &DiagonalPlane) -> bool {
        self.is_on(plane.id)
    }

    /// Returns the identifiers of every toggle that is on.
    #[must_use]
    pub fn enabled(&self) -> Vec<&'static str> {
        let topology = Topology::standard();
        let elements = topology
            .segments_of(Category::FaceDiagonal)
            .iter()
            .chain(topology.segments_of(Category::SpaceDiagonal))
            .map(|s| s.id)
            .chain(topology.diagonal_planes.iter().map(|p| p.id))
            .filter(|id| self.is_on(id));
        self.transparency
            .then_some(TRANSPARENCY)
            .into_iter()
            .chain(elements)
            .collect()
    }

    /// Returns `true` if every toggle is off.
    #[must_use]
    pub fn all_hidden(&self) -> bool {
        self.enabled().is_empty()
    }

    /// Returns a copy with the toggle `id` flipped.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not name a toggle.
    pub fn toggled(&self, id: &str) -> Result<Self> {
        self.with_toggle(id, !self.is_on(id))
    }

    /// Returns a copy with the toggle `id` set to `on`.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not name a toggle.
    pub fn with_toggle(&self, id: &str, on: bool) -> Result<Self> {
        let mut next = *self;
        if id == TRANSPARENCY {
            next.transparency = on;
        } else {
            let slot = find_slot(id).ok_or_else(|| DisplayError::UnknownToggle(id.to_owned()))?;
            *next.get_mut(slot) = on;
        }
        tracing::trace!(id, on, "toggle changed");
        Ok(next)
    }

    /// Returns a copy with every toggle of `category` set to `on`.
    #[must_use]
    pub fn with_category(&self, category: Category, on: bool) -> Self {
        let mut next = *self;
        match category {
            Category::Edge => {}
            Category::FaceDiagonal => next.face_diagonals = [on; 12],
            Category::SpaceDiagonal => next.space_diagonals = [on; 4],
            Category::DiagonalPlane => next.diagonal_planes = [on; 4],
        }
        next
    }

    /// Returns a copy with a new body opacity.
    ///
    /// # Errors
    ///
    /// Returns an error if `opacity` is outside
    /// [`MIN_OPACITY`](Self::MIN_OPACITY)..=[`MAX_OPACITY`](Self::MAX_OPACITY).
    pub fn with_opacity(&self, opacity: f64) -> Result<Self> {
        if !(Self::MIN_OPACITY..=Self::MAX_OPACITY).contains(&opacity) {
            return Err(DisplayError::OpacityOutOfRange {
                value: opacity,
                min: Self::MIN_OPACITY,
                max: Self::MAX_OPACITY,
            }
            .into());
        }
        Ok(Self { opacity, ..*self })
    }

    /// Returns a copy with the color of `category` replaced.
    ///
    /// # Errors
    ///
    /// Returns an error for [`Category::Edge`], whose color is fixed.
    pub fn with_color(&self, category: Category, color: Color) -> Result<Self> {
        let mut colors = self.colors;
        match category {
            Category::Edge => return Err(DisplayError::FixedColor(category).into()),
            Category::FaceDiagonal => colors.face_diagonal = color,
            Category::SpaceDiagonal => colors.space_diagonal = color,
            Category::DiagonalPlane => colors.diagonal_plane = color,
        }
        Ok(Self { colors, ..*self })
    }

    /// Returns the initial state: everything hidden, default opacity and colors.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::default()
    }

    /// Returns the state to use after switching shape kind: every toggle off,
    /// opacity and colors kept.
    #[must_use]
    pub fn for_shape_change(&self) -> Self {
        Self {
            opacity: self.opacity,
            colors: self.colors,
            ..Self::default()
        }
    }

    fn get(&self, slot: Slot) -> bool {
        match slot {
            Slot::Face(i) => self.face_diagonals[i],
            Slot::Space(i) => self.space_diagonals[i],
            Slot::Plane(i) => self.diagonal_planes[i],
        }
    }

    fn get_mut(&mut self, slot: Slot) -> &mut bool {
        match slot {
            Slot::Face(i) => &mut self.face_diagonals[i],
            Slot::Space(i) => &mut self.space_diagonals[i],
            Slot::Plane(i) => &mut self.diagonal_planes[i],
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            transparency: false,
            opacity: Self::DEFAULT_OPACITY,
            face_diagonals: [false; 12],
            space_diagonals: [false; 4],
            diagonal_planes: [false; 4],
            colors: DiagonalColors::default(),
        }
    }
}

/// Position of a toggle in its table.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Face(usize),
    Space(usize),
    Plane(usize),
}

fn find_slot(id: &str) -> Option<Slot> {
    let topology = Topology::standard();
    let position = |category| topology.segments_of(category).iter().position(|s| s.id == id);
    if let Some(i) = position(Category::FaceDiagonal) {
        return Some(Slot::Face(i));
    }
    if let Some(i) = position(Category::SpaceDiagonal) {
        return Some(Slot::Space(i));
    }
    topology
        .diagonal_planes
        .iter()
        .position(|p| p.id == id)
        .map(Slot::Plane)
}
