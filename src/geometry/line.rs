use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::Point;

use super::MIN_WIDTH;

/// A straight trace segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    start: Point,
    end: Point,
    width: i64,
}

impl Line {
    /// Creates a new line segment.
    ///
    /// `width` is raised to [`MIN_WIDTH`] if smaller.
    #[must_use]
    pub fn new(start: Point, end: Point, width: i64) -> Self {
        Self {
            start,
            end,
            width: width.max(MIN_WIDTH),
        }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point {
        &self.end
    }

    /// Returns the trace width.
    #[must_use]
    pub fn width(&self) -> i64 {
        self.width
    }

    /// Euclidean length of the segment.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn length(&self) -> f64 {
        let d = self.end - self.start;
        (d.x as f64).hypot(d.y as f64)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line ({}, {}) -> ({}, {}) w={}",
            self.start.x, self.start.y, self.end.x, self.end.y, self.width
        )
    }
}
