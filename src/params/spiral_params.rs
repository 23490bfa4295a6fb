use serde::{Deserialize, Serialize};

use crate::error::{ParameterError, Result};
use crate::math::{half, Point};

use super::Layer;

const MM: i64 = 1_000_000;

/// Geometry of one winding, in a single integer length unit.
///
/// All lengths are conventionally nanometres. Conversion from display units
/// is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralParameters {
    /// Geometric anchor, the center of the nominal rectangle.
    pub center: Point,
    /// Nominal rectangle width.
    pub outer_width: i64,
    /// Nominal rectangle height.
    pub outer_height: i64,
    /// Nominal corner radius, clamped to half the width/height at use.
    pub corner_radius: i64,
    /// Gap between the nominal rectangle and the first turn's centerline.
    pub clearance: i64,
    /// Copper trace width.
    pub track_width: i64,
    /// Gap kept between adjacent turns.
    pub track_spacing: i64,
    /// Number of turns. Values below 1 are treated as 1.
    pub turns: i32,
    /// Pass-through layer token.
    pub layer: Layer,
}

impl Default for SpiralParameters {
    fn default() -> Self {
        Self {
            center: Point::origin(),
            outer_width: 20 * MM,
            outer_height: 16 * MM,
            corner_radius: 2 * MM,
            clearance: 300_000,
            track_width: 250_000,
            track_spacing: 250_000,
            turns: 6,
            layer: Layer::default(),
        }
    }
}

impl SpiralParameters {
    #[must_use]
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    #[must_use]
    pub fn with_size(mut self, outer_width: i64, outer_height: i64) -> Self {
        self.outer_width = outer_width;
        self.outer_height = outer_height;
        self
    }

    #[must_use]
    pub fn with_corner_radius(mut self, corner_radius: i64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    #[must_use]
    pub fn with_clearance(mut self, clearance: i64) -> Self {
        self.clearance = clearance;
        self
    }

    #[must_use]
    pub fn with_track(mut self, track_width: i64, track_spacing: i64) -> Self {
        self.track_width = track_width;
        self.track_spacing = track_spacing;
        self
    }

    #[must_use]
    pub fn with_turns(mut self, turns: i32) -> Self {
        self.turns = turns;
        self
    }

    #[must_use]
    pub fn with_layer(mut self, layer: impl Into<Layer>) -> Self {
        self.layer = layer.into();
        self
    }

    /// Number of turns actually drawn; at least one winding is always drawn.
    #[must_use]
    pub fn effective_turns(&self) -> i32 {
        self.turns.max(1)
    }

    /// Corner radius after clamping to half the rectangle's width and height.
    #[must_use]
    pub fn effective_radius(&self) -> i64 {
        self.corner_radius
            .min(half(self.outer_width))
            .min(half(self.outer_height))
    }

    /// Upper bound on how far any coordinate or radius of the winding gets
    /// from `center`, or `None` if that bound overflows.
    fn reach(&self) -> Option<i64> {
        let pitch = self.track_width.checked_add(self.track_spacing)?;
        let growth = pitch.checked_mul(i64::from(self.effective_turns()) + 1)?;
        self.outer_width
            .max(self.outer_height)
            .checked_add(self.clearance)?
            .checked_add(self.track_width)?
            .checked_add(growth)
    }

    /// Checks the structural preconditions for generation.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NotPositive`] if the rectangle size or the
    /// track width is zero or negative, [`ParameterError::Negative`] if
    /// the corner radius, clearance or track spacing is negative, and
    /// [`ParameterError::ExtentOverflow`] if the winding around `center`
    /// would leave the `i64` coordinate range.
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            ("outer_width", self.outer_width),
            ("outer_height", self.outer_height),
            ("track_width", self.track_width),
        ] {
            if value <= 0 {
                return Err(ParameterError::NotPositive { parameter, value }.into());
            }
        }
        for (parameter, value) in [
            ("corner_radius", self.corner_radius),
            ("clearance", self.clearance),
            ("track_spacing", self.track_spacing),
        ] {
            if value < 0 {
                return Err(ParameterError::Negative { parameter, value }.into());
            }
        }
        // Every intermediate pen position stays within twice the reach.
        let fits = self
            .reach()
            .and_then(|reach| reach.checked_mul(2))
            .is_some_and(|span| {
                [self.center.x, self.center.y]
                    .into_iter()
                    .all(|c| c.checked_abs().and_then(|c| c.checked_add(span)).is_some())
            });
        if !fits {
            return Err(ParameterError::ExtentOverflow.into());
        }
        Ok(())
    }
}
