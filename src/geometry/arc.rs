use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::angle::polar_point;
use crate::math::Point;

use super::MIN_WIDTH;

/// A circular trace arc.
///
/// Defined by center, radius and a start/end angle pair in degrees
/// (counter-clockwise from +x). Hosts that store arcs as three points use
/// [`Arc::points`], which samples start, mid and end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    center: Point,
    radius: i64,
    start_deg: f64,
    end_deg: f64,
    width: i64,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// `width` is raised to [`MIN_WIDTH`] if smaller.
    #[must_use]
    pub fn new(center: Point, radius: i64, start_deg: f64, end_deg: f64, width: i64) -> Self {
        Self {
            center,
            radius,
            start_deg,
            end_deg,
            width: width.max(MIN_WIDTH),
        }
    }

    /// Returns the center of the arc circle.
    #[must_use]
    pub fn center(&self) -> &Point {
        &self.center
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> i64 {
        self.radius
    }

    /// Returns the start angle in degrees.
    #[must_use]
    pub fn start_deg(&self) -> f64 {
        self.start_deg
    }

    /// Returns the end angle in degrees.
    #[must_use]
    pub fn end_deg(&self) -> f64 {
        self.end_deg
    }

    /// Returns the angle halfway between start and end.
    #[must_use]
    pub fn mid_deg(&self) -> f64 {
        (self.start_deg + self.end_deg) / 2.0
    }

    /// Returns the signed sweep, `end - start`.
    #[must_use]
    pub fn sweep_deg(&self) -> f64 {
        self.end_deg - self.start_deg
    }

    /// Returns the trace width.
    #[must_use]
    pub fn width(&self) -> i64 {
        self.width
    }

    /// Point on the circle at the start angle.
    #[must_use]
    pub fn start_point(&self) -> Point {
        polar_point(&self.center, self.radius, self.start_deg)
    }

    /// Point on the circle at the mid angle.
    #[must_use]
    pub fn mid_point(&self) -> Point {
        polar_point(&self.center, self.radius, self.mid_deg())
    }

    /// Point on the circle at the end angle.
    #[must_use]
    pub fn end_point(&self) -> Point {
        polar_point(&self.center, self.radius, self.end_deg)
    }

    /// Start, mid and end sample points.
    ///
    /// Points at multiples of 90° are exact, not the truncated result of a
    /// naive float evaluation. See [`unit_vector`](crate::math::angle::unit_vector).
    #[must_use]
    pub fn points(&self) -> [Point; 3] {
        [self.start_point(), self.mid_point(), self.end_point()]
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arc c=({}, {}) r={} {}..{} deg w={}",
            self.center.x, self.center.y, self.radius, self.start_deg, self.end_deg, self.width
        )
    }
}
