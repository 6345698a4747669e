use crate::error::{DisplayError, Result};
use crate::math::Point3;

/// Parameters controlling diagonal-plane hatching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HatchParams {
    /// Number of intervals; `steps + 1` lines are produced.
    pub steps: usize,
}

impl Default for HatchParams {
    fn default() -> Self {
        Self { steps: 300 }
    }
}

/// Fills a quadrilateral with evenly spaced lines.
///
/// Line `i` runs from `v0 + t·(v3 − v0)` to `v1 + t·(v2 − v1)` with
/// `t = i / steps`, so the first line is side `v0v1` and the last is `v3v2`.
#[derive(Debug)]
pub struct HatchPlane {
    corners: [Point3; 4],
    params: HatchParams,
}

impl HatchPlane {
    /// Creates a new hatching operation for corners in winding order.
    #[must_use]
    pub fn new(corners: [Point3; 4]) -> Self {
        Self {
            corners,
            params: HatchParams::default(),
        }
    }

    /// Sets custom hatch parameters.
    #[must_use]
    pub fn with_params(mut self, params: HatchParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the hatching, returning line segments.
    ///
    /// # Errors
    ///
    /// Returns an error if `steps` is zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Vec<[Point3; 2]>> {
        let steps = self.params.steps;
        if steps == 0 {
            return Err(
                DisplayError::InvalidStyle("hatching needs at least one step".to_owned()).into(),
            );
        }

        let [v0, v1, v2, v3] = self.corners;
        let side_start = v3 - v0;
        let side_end = v2 - v1;

        Ok((0..=steps)
            .map(|i| {
                let t = i as f64 / steps as f64;
                [v0 + side_start * t, v1 + side_end * t]
            })
            .collect())
    }
}
