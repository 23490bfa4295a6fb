use crate::math::{half, Point};
use crate::params::SpiralParameters;

/// Dimensions shared by every turn of one generator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Layout {
    pub center: Point,
    pub outer_width: i64,
    pub outer_height: i64,
    pub clearance: i64,
    pub track_width: i64,
    pub track_spacing: i64,
    /// Corner radius after clamping.
    pub radius: i64,
    /// Straight run between the corner arcs, horizontally.
    pub f_length: i64,
    /// Straight run between the corner arcs, vertically.
    pub f_height: i64,
}

impl Layout {
    pub fn new(params: &SpiralParameters) -> Self {
        let radius = params.effective_radius();
        Self {
            center: params.center,
            outer_width: params.outer_width,
            outer_height: params.outer_height,
            clearance: params.clearance,
            track_width: params.track_width,
            track_spacing: params.track_spacing,
            radius,
            f_length: params.outer_width - 2 * radius,
            f_height: params.outer_height - 2 * radius,
        }
    }

    /// Arc radius of the first (innermost) turn's centerline.
    pub fn start_radius(&self) -> i64 {
        self.radius + self.clearance + half(self.track_width)
    }

    /// Radial growth from one turn to the next.
    pub fn step(&self) -> i64 {
        self.track_spacing + self.track_width
    }

    /// X of the first turn's left vertical run.
    pub fn left_x(&self) -> i64 {
        self.center.x - half(self.outer_width) - self.clearance - half(self.track_width)
    }
}
