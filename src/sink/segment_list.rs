use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::{Arc, Line, Segment};
use crate::params::Layer;

use super::SegmentSink;

/// A primitive together with the layer it was emitted on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmittedSegment {
    pub layer: Layer,
    pub segment: Segment,
}

/// In-memory sink that records primitives in emission order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentList {
    entries: Vec<EmittedSegment>,
}

impl SegmentList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[EmittedSegment] {
        &self.entries
    }

    /// Recorded primitives without their layers.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.entries.iter().map(|e| &e.segment)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.segments().filter(|s| s.as_line().is_some()).count()
    }

    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.segments().filter(|s| s.as_arc().is_some()).count()
    }

    /// Consumes the list, returning the recorded primitives.
    #[must_use]
    pub fn into_segments(self) -> Vec<Segment> {
        self.entries.into_iter().map(|e| e.segment).collect()
    }
}

impl SegmentSink for SegmentList {
    fn emit_line(&mut self, line: &Line, layer: &Layer) -> Result<()> {
        self.entries.push(EmittedSegment {
            layer: layer.clone(),
            segment: Segment::Line(*line),
        });
        Ok(())
    }

    fn emit_arc(&mut self, arc: &Arc, layer: &Layer) -> Result<()> {
        self.entries.push(EmittedSegment {
            layer: layer.clone(),
            segment: Segment::Arc(*arc),
        });
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point;

    #[test]
    fn records_in_order_with_layer() {
        let mut list = SegmentList::new();
        let layer = Layer::new("B.Cu");
        list.emit_line(&Line::new(Point::new(0, 0), Point::new(0, 10), 5), &layer)
            .unwrap();
        list.emit_arc(&Arc::new(Point::new(5, 10), 5, 90.0, 180.0, 5), &layer)
            .unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.line_count(), 1);
        assert_eq!(list.arc_count(), 1);
        assert!(list.entries().iter().all(|e| e.layer == layer));
        let segments = list.into_segments();
        assert!(segments[0].as_line().is_some());
        assert!(segments[1].as_arc().is_some());
    }

    #[test]
    fn forwards_through_mut_ref() {
        fn emit(mut sink: impl SegmentSink) {
            sink.emit_line(
                &Line::new(Point::new(0, 0), Point::new(1, 0), 1),
                &Layer::default(),
            )
            .unwrap();
        }
        let mut list = SegmentList::new();
        emit(&mut list);
        assert_eq!(list.len(), 1);
    }
}
