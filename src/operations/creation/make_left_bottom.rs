use tracing::{debug, trace};

use crate::error::Result;
use crate::math::{half, Point};
use crate::params::SpiralParameters;
use crate::sink::SegmentSink;

use super::layout::Layout;
use super::pen::{Emitter, Walk};
use super::MakeLeftCenterSpiral;

/// Draws a spiral that starts on the top edge, at the left end of its
/// straight run.
///
/// Each turn goes around the rectangle and lengthens the left vertical run
/// by one track pitch so the next turn starts further out. A single turn is
/// drawn by [`MakeLeftCenterSpiral`].
pub struct MakeLeftBottomSpiral<'a> {
    params: &'a SpiralParameters,
}

impl<'a> MakeLeftBottomSpiral<'a> {
    /// Creates a new `MakeLeftBottomSpiral` operation.
    #[must_use]
    pub fn new(params: &'a SpiralParameters) -> Self {
        Self { params }
    }

    /// Executes the operation, emitting every primitive into `sink`.
    ///
    /// Returns the number of primitives emitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail validation or the sink
    /// rejects a primitive.
    pub fn execute<S: SegmentSink + ?Sized>(&self, sink: &mut S) -> Result<usize> {
        self.params.validate()?;
        let turns = self.params.effective_turns();
        if turns == 1 {
            return MakeLeftCenterSpiral::new(self.params).execute(sink);
        }

        let layout = Layout::new(self.params);
        let (fl, fh) = (layout.f_length, layout.f_height);
        let step = layout.step();
        debug!(
            turns,
            radius = layout.radius,
            f_length = fl,
            f_height = fh,
            start_radius = layout.start_radius(),
            step,
            "left-bottom spiral"
        );

        let mut pen = Emitter::new(sink, &self.params.layer, self.params.track_width);
        let mut w = Walk::new(
            layout.center.x - half(fl),
            layout.center.y
                + half(layout.outer_height)
                + layout.clearance
                + half(layout.track_width),
            layout.start_radius(),
        );

        for turn in 0..turns {
            pen.line(w.pos(), Point::new(w.x + fl, w.y))?;
            w.x += fl;

            pen.arc(Point::new(w.x, w.y - w.radius), w.radius, 0, 90)?;
            w.x += w.radius;
            w.y -= w.radius;

            pen.line(w.pos(), Point::new(w.x, w.y - fh))?;
            w.y -= fh;

            pen.arc(Point::new(w.x - w.radius, w.y), w.radius, 270, 360)?;
            w.x -= w.radius;
            w.y -= w.radius;

            pen.line(w.pos(), Point::new(w.x - fl, w.y))?;
            w.x -= fl;

            pen.arc(Point::new(w.x, w.y + w.radius), w.radius, 180, 270)?;
            w.x -= w.radius;
            w.y += w.radius;

            // left run steps out by one pitch
            pen.line(w.pos(), Point::new(w.x, w.y + fh + step))?;
            w.y += fh + step;

            pen.arc(Point::new(w.x + w.radius, w.y), w.radius, 90, 180)?;
            w.x += w.radius;
            w.y += w.radius;

            w.radius += step;
            trace!(turn, radius = w.radius, "turn closed");
        }

        Ok(pen.emitted())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::geometry::Segment;
    use crate::sink::SegmentList;

    use super::super::test_support::assert_drawn_in_order;

    fn reference(turns: i32) -> SpiralParameters {
        SpiralParameters::default()
            .with_size(20_000, 16_000)
            .with_corner_radius(2_000)
            .with_clearance(300)
            .with_track(250, 250)
            .with_turns(turns)
    }

    fn run(params: &SpiralParameters) -> Vec<Segment> {
        let mut list = SegmentList::new();
        MakeLeftBottomSpiral::new(params).execute(&mut list).unwrap();
        list.into_segments()
    }

    #[test]
    fn eight_primitives_per_turn() {
        let segments = run(&reference(3));
        assert_eq!(segments.len(), 24);
        assert_eq!(segments.iter().filter(|s| s.as_arc().is_some()).count(), 12);
    }

    #[test]
    fn starts_on_top_run() {
        let segments = run(&reference(2));
        let first = segments[0].as_line().unwrap();
        assert_eq!(*first.start(), Point::new(-8_000, 8_425));
        assert_eq!(*first.end(), Point::new(8_000, 8_425));
    }

    #[test]
    fn left_run_carries_the_step() {
        let segments = run(&reference(2));
        let left = segments[6].as_line().unwrap();
        assert_eq!(*left.start(), Point::new(-10_425, -6_000));
        assert_eq!(*left.end(), Point::new(-10_425, 6_500));
        assert_relative_eq!(left.length(), 12_500.0);
        // the next turn's top run sits one pitch higher
        let next_top = segments[8].as_line().unwrap();
        assert_eq!(next_top.start().y, 8_925);
    }

    #[test]
    fn is_contiguous() {
        let segments = run(&reference(5));
        assert_drawn_in_order(&segments);
    }

    #[test]
    fn radius_is_non_decreasing() {
        let segments = run(&reference(6));
        let radii: Vec<i64> = segments
            .iter()
            .filter_map(Segment::as_arc)
            .map(|a| a.radius())
            .collect();
        assert!(radii.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(radii.last().copied(), Some(2_425 + 5 * 500));
    }

    #[test]
    fn single_turn_matches_left_center() {
        let params = reference(0);
        let mut center = SegmentList::new();
        MakeLeftCenterSpiral::new(&params).execute(&mut center).unwrap();
        assert_eq!(run(&params), center.into_segments());
    }
}
