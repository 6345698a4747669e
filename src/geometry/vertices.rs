use std::ops::Index;

use crate::error::Result;
use crate::math::{Point3, TOLERANCE};
use crate::shape::Dimensions;
use crate::topology::{DiagonalPlane, Segment, VertexLabel};

/// The eight labelled corners of a box centred at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexSet {
    points: [Point3; 8],
}

impl VertexSet {
    /// Places the corners using half of each dimension along X (length),
    /// Y (height) and Z (width).
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension is non-positive or non-finite.
    pub fn new(dimensions: &Dimensions) -> Result<Self> {
        dimensions.validate()?;
        let half = dimensions.extents().half();
        let points = VertexLabel::ALL.map(|label| {
            let [sx, sy, sz] = label.signs();
            Point3::new(sx * half.x, sy * half.y, sz * half.z)
        });
        Ok(Self { points })
    }

    /// Returns the corners in label order.
    #[must_use]
    pub fn points(&self) -> &[Point3; 8] {
        &self.points
    }

    /// Iterates over `(label, position)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (VertexLabel, &Point3)> {
        VertexLabel::ALL.into_iter().zip(self.points.iter())
    }

    /// Returns the endpoints of `segment`.
    #[must_use]
    pub fn segment(&self, segment: &Segment) -> [Point3; 2] {
        segment.vertices.map(|label| self[label])
    }

    /// Returns the length of `segment`.
    #[must_use]
    pub fn segment_length(&self, segment: &Segment) -> f64 {
        let [a, b] = self.segment(segment);
        (b - a).norm()
    }

    /// Returns the corners of `plane` in winding order.
    #[must_use]
    pub fn quad(&self, plane: &DiagonalPlane) -> [Point3; 4] {
        plane.vertices.map(|label| self[label])
    }

    /// Returns the area of `plane`, from its two diagonals.
    #[must_use]
    pub fn quad_area(&self, plane: &DiagonalPlane) -> f64 {
        let [v0, v1, v2, v3] = self.quad(plane);
        (v2 - v0).cross(&(v3 - v1)).norm() * 0.5
    }

    /// Returns the label of the corner at `point`, if any.
    #[must_use]
    pub fn label_at(&self, point: &Point3) -> Option<VertexLabel> {
        self.iter()
            .find(|(_, p)| (*p - point).norm() < TOLERANCE)
            .map(|(label, _)| label)
    }
}

impl Index<VertexLabel> for VertexSet {
    type Output = Point3;

    fn index(&self, label: VertexLabel) -> &Point3 {
        &self.points[label.index()]
    }
}
