mod segment_list;

pub use segment_list::{EmittedSegment, SegmentList};

use crate::error::Result;
use crate::geometry::{Arc, Line};
use crate::params::Layer;

/// Receiver for generated trace primitives.
///
/// The host implements this over its board model. Generators call it in
/// drawing order and stop at the first error; nothing already emitted is
/// rolled back.
pub trait SegmentSink {
    /// Stores a straight trace segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses the primitive.
    fn emit_line(&mut self, line: &Line, layer: &Layer) -> Result<()>;

    /// Stores a circular trace arc.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses the primitive.
    fn emit_arc(&mut self, arc: &Arc, layer: &Layer) -> Result<()>;
}

impl<S: SegmentSink + ?Sized> SegmentSink for &mut S {
    fn emit_line(&mut self, line: &Line, layer: &Layer) -> Result<()> {
        (**self).emit_line(line, layer)
    }

    fn emit_arc(&mut self, arc: &Arc, layer: &Layer) -> Result<()> {
        (**self).emit_arc(arc, layer)
    }
}
