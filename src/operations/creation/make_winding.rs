use tracing::info;

use crate::error::Result;
use crate::params::{SpiralParameters, StartPosition};
use crate::sink::SegmentSink;

use super::{MakeLeftBottomSpiral, MakeLeftCenterSpiral, MakeLeftTopSpiral};

/// Draws a winding with the generator matching its start position.
pub struct MakeWinding<'a> {
    position: StartPosition,
    params: &'a SpiralParameters,
}

impl<'a> MakeWinding<'a> {
    /// Creates a new `MakeWinding` operation.
    #[must_use]
    pub fn new(position: StartPosition, params: &'a SpiralParameters) -> Self {
        Self { position, params }
    }

    /// Executes the operation, emitting every primitive into `sink`.
    ///
    /// Returns the number of primitives emitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail validation (nothing is
    /// emitted) or the sink rejects a primitive.
    pub fn execute<S: SegmentSink + ?Sized>(&self, sink: &mut S) -> Result<usize> {
        let emitted = match self.position {
            StartPosition::LeftTop => MakeLeftTopSpiral::new(self.params).execute(sink)?,
            StartPosition::LeftCenter => MakeLeftCenterSpiral::new(self.params).execute(sink)?,
            StartPosition::LeftBottom => MakeLeftBottomSpiral::new(self.params).execute(sink)?,
        };
        info!(
            position = %self.position,
            turns = self.params.effective_turns(),
            layer = %self.params.layer,
            emitted,
            "winding generated"
        );
        Ok(emitted)
    }
}

/// Generates a winding into `sink`. Shorthand for [`MakeWinding`].
///
/// # Errors
///
/// Returns an error if the parameters fail validation (nothing is emitted)
/// or the sink rejects a primitive.
pub fn generate<S: SegmentSink + ?Sized>(
    position: StartPosition,
    params: &SpiralParameters,
    sink: &mut S,
) -> Result<usize> {
    MakeWinding::new(position, params).execute(sink)
}
