use crate::error::Result;
use crate::geometry::{Arc, Line};
use crate::math::Point;
use crate::params::Layer;
use crate::sink::SegmentSink;

/// Pen position and working radius, threaded through the turn loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Walk {
    pub x: i64,
    pub y: i64,
    pub radius: i64,
}

impl Walk {
    pub fn new(x: i64, y: i64, radius: i64) -> Self {
        Self { x, y, radius }
    }

    pub fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Emits primitives of one width on one layer and counts them.
pub(super) struct Emitter<'a, S: SegmentSink + ?Sized> {
    sink: &'a mut S,
    layer: &'a Layer,
    width: i64,
    emitted: usize,
}

impl<'a, S: SegmentSink + ?Sized> Emitter<'a, S> {
    pub fn new(sink: &'a mut S, layer: &'a Layer, width: i64) -> Self {
        Self {
            sink,
            layer,
            width,
            emitted: 0,
        }
    }

    pub fn line(&mut self, start: Point, end: Point) -> Result<()> {
        let line = Line::new(start, end, self.width);
        tracing::trace!(%line, "emit");
        self.sink.emit_line(&line, self.layer)?;
        self.emitted += 1;
        Ok(())
    }

    pub fn arc(&mut self, center: Point, radius: i64, start_deg: i32, end_deg: i32) -> Result<()> {
        let arc = Arc::new(
            center,
            radius,
            f64::from(start_deg),
            f64::from(end_deg),
            self.width,
        );
        tracing::trace!(%arc, "emit");
        self.sink.emit_arc(&arc, self.layer)?;
        self.emitted += 1;
        Ok(())
    }

    pub fn emitted(&self) -> usize {
        self.emitted
    }
}
