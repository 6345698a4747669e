use std::fmt;
use std::str::FromStr;

use crate::error::DisplayError;

/// An sRGB color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the channels scaled to `[0, 1]`.
    #[must_use]
    pub fn to_unit(self) -> [f32; 3] {
        [self.r, self.g, self.b].map(|c| f32::from(c) / 255.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = DisplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DisplayError::InvalidColor(s.to_owned());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Palette shared by the scene and the color pickers.
pub mod palette {
    use super::Color;

    /// Default space-diagonal color (`#ef4444`).
    pub const SPACE_DIAGONAL: Color = Color::rgb(0xef, 0x44, 0x44);
    /// Default face-diagonal color (`#f59e0b`).
    pub const FACE_DIAGONAL: Color = Color::rgb(0xf5, 0x9e, 0x0b);
    /// Default diagonal-plane color (`#10b981`).
    pub const DIAGONAL_PLANE: Color = Color::rgb(0x10, 0xb9, 0x81);
    /// Edge color (`#065f46`).
    pub const EDGE: Color = Color::rgb(0x06, 0x5f, 0x46);
    /// Solid body color (`#10b981`).
    pub const BODY: Color = Color::rgb(0x10, 0xb9, 0x81);
    /// Vertex label color (`#1e293b`).
    pub const LABEL: Color = Color::rgb(0x1e, 0x29, 0x3b);

    /// Picker presets for space diagonals.
    pub const SPACE_DIAGONAL_PRESETS: [Color; 4] = [
        SPACE_DIAGONAL,
        Color::rgb(0xdc, 0x26, 0x26),
        Color::rgb(0xb9, 0x1c, 0x1c),
        Color::rgb(0x99, 0x1b, 0x1b),
    ];
    /// Picker presets for face diagonals.
    pub const FACE_DIAGONAL_PRESETS: [Color; 4] = [
        FACE_DIAGONAL,
        Color::rgb(0xd9, 0x77, 0x06),
        Color::rgb(0xb4, 0x53, 0x09),
        Color::rgb(0x92, 0x40, 0x0e),
    ];
    /// Picker presets for diagonal planes.
    pub const DIAGONAL_PLANE_PRESETS: [Color; 4] = [
        DIAGONAL_PLANE,
        Color::rgb(0x05, 0x96, 0x69),
        Color::rgb(0x04, 0x78, 0x57),
        Color::rgb(0x06, 0x5f, 0x46),
    ];
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_prints_hex() {
        let color: Color = "#EF4444".parse().unwrap();
        assert_eq!(color, palette::SPACE_DIAGONAL);
        assert_eq!(color.to_string(), "#ef4444");
    }

    #[test]
    fn defaults_print_as_documented() {
        assert_eq!(palette::SPACE_DIAGONAL.to_string(), "#ef4444");
        assert_eq!(palette::FACE_DIAGONAL.to_string(), "#f59e0b");
        assert_eq!(palette::DIAGONAL_PLANE.to_string(), "#10b981");
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["ef4444", "#ef444", "#ef44444", "#gg4444", "#ef44é"] {
            assert_eq!(
                input.parse::<Color>(),
                Err(DisplayError::InvalidColor(input.to_owned())),
                "{input}"
            );
        }
    }

    #[test]
    fn unit_channels() {
        let [r, g, b] = Color::rgb(255, 0, 51).to_unit();
        assert!((r - 1.0).abs() < f32::EPSILON);
        assert!(g.abs() < f32::EPSILON);
        assert!((b - 0.2).abs() < 1e-6);
    }
}
