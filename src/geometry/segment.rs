use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::Point;

use super::{Arc, Line};

/// A single emitted trace primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Line(Line),
    Arc(Arc),
}

impl Segment {
    /// First endpoint. For arcs this is the point at the start angle.
    #[must_use]
    pub fn start_point(&self) -> Point {
        match self {
            Self::Line(line) => *line.start(),
            Self::Arc(arc) => arc.start_point(),
        }
    }

    /// Second endpoint. For arcs this is the point at the end angle.
    #[must_use]
    pub fn end_point(&self) -> Point {
        match self {
            Self::Line(line) => *line.end(),
            Self::Arc(arc) => arc.end_point(),
        }
    }

    /// Trace width.
    #[must_use]
    pub fn width(&self) -> i64 {
        match self {
            Self::Line(line) => line.width(),
            Self::Arc(arc) => arc.width(),
        }
    }

    #[must_use]
    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Self::Line(line) => Some(line),
            Self::Arc(_) => None,
        }
    }

    #[must_use]
    pub fn as_arc(&self) -> Option<&Arc> {
        match self {
            Self::Arc(arc) => Some(arc),
            Self::Line(_) => None,
        }
    }

    /// Whether this segment shares an endpoint with `other`, within `tolerance`
    /// on each axis.
    ///
    /// Arcs are stored with increasing angles regardless of drawing direction,
    /// so orientation is ignored.
    #[must_use]
    pub fn touches(&self, other: &Segment, tolerance: i64) -> bool {
        let near = |a: &Point, b: &Point| {
            (a.x - b.x).abs() <= tolerance && (a.y - b.y).abs() <= tolerance
        };
        let ours = [self.start_point(), self.end_point()];
        let theirs = [other.start_point(), other.end_point()];
        ours.iter().any(|a| theirs.iter().any(|b| near(a, b)))
    }
}

impl From<Line> for Segment {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Arc> for Segment {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(line) => line.fmt(f),
            Self::Arc(arc) => arc.fmt(f),
        }
    }
}
