use tracing::{debug, trace};

use crate::error::Result;
use crate::math::{half, Point};
use crate::params::SpiralParameters;
use crate::sink::SegmentSink;

use super::layout::Layout;
use super::pen::{Emitter, Walk};
use super::MakeLeftCenterSpiral;

/// Draws a spiral that starts at the top of the left edge's straight run.
///
/// Each turn climbs the left side, goes around the rectangle, and lengthens
/// the bottom run by one track pitch so the next turn starts further out.
/// A single turn is drawn by [`MakeLeftCenterSpiral`].
pub struct MakeLeftTopSpiral<'a> {
    params: &'a SpiralParameters,
}

impl<'a> MakeLeftTopSpiral<'a> {
    /// Creates a new `MakeLeftTopSpiral` operation.
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
            "left-top spiral"
        );

        let mut pen = Emitter::new(sink, &self.params.layer, self.params.track_width);
        let mut w = Walk::new(
            layout.left_x(),
            layout.center.y - half(fh),
            layout.start_radius(),
        );

        for turn in 0..turns {
            pen.line(w.pos(), Point::new(w.x, w.y + fh))?;
            w.y += fh;

            pen.arc(Point::new(w.x + w.radius, w.y), w.radius, 90, 180)?;
            w.x += w.radius;
            w.y += w.radius;

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

            // bottom run steps out by one pitch
            pen.line(w.pos(), Point::new(w.x - fl - step, w.y))?;
            w.x -= fl + step;

            pen.arc(Point::new(w.x, w.y + w.radius), w.radius, 180, 270)?;
            w.x -= w.radius;
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
        MakeLeftTopSpiral::new(params).execute(&mut list).unwrap();
        list.into_segments()
    }

    #[test]
    fn eight_primitives_per_turn() {
        let segments = run(&reference(4));
        assert_eq!(segments.len(), 32);
        for (i, s) in segments.iter().enumerate() {
            assert_eq!(s.as_line().is_some(), i % 2 == 0, "{i}: {s}");
        }
    }

    #[test]
    fn starts_at_bottom_of_left_run() {
        let segments = run(&reference(2));
        let first = segments[0].as_line().unwrap();
        assert_eq!(*first.start(), Point::new(-10_425, -6_000));
        assert_eq!(*first.end(), Point::new(-10_425, 6_000));
    }

    #[test]
    fn bottom_run_carries_the_step() {
        let segments = run(&reference(2));
        let bottom = segments[6].as_line().unwrap();
        assert_eq!(*bottom.start(), Point::new(8_000, -8_425));
        assert_eq!(*bottom.end(), Point::new(-8_500, -8_425));
        assert_relative_eq!(bottom.length(), 16_500.0);
    }

    #[test]
    fn is_contiguous() {
        let segments = run(&reference(5));
        assert_drawn_in_order(&segments);
    }

    #[test]
    fn radius_grows_by_full_step_per_turn() {
        let segments = run(&reference(3));
        let radii: Vec<i64> = segments
            .iter()
            .filter_map(Segment::as_arc)
            .map(|a| a.radius())
            .collect();
        assert_eq!(
            radii,
            [
                2_425, 2_425, 2_425, 2_425, //
                2_925, 2_925, 2_925, 2_925, //
                3_425, 3_425, 3_425, 3_425,
            ]
        );
    }

    #[test]
    fn single_turn_matches_left_center() {
        let params = reference(1);
        let mut center = SegmentList::new();
        MakeLeftCenterSpiral::new(&params).execute(&mut center).unwrap();
        assert_eq!(run(&params), center.into_segments());
    }

    #[test]
    fn invalid_parameters_emit_nothing() {
        let mut list = SegmentList::new();
        let params = reference(3).with_track(0, 250);
        assert!(MakeLeftTopSpiral::new(&params).execute(&mut list).is_err());
        assert!(list.is_empty());
    }
}
