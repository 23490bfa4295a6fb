use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::math::angle::clipped_sweep_deg;
use crate::math::{half, Point};
use crate::params::SpiralParameters;
use crate::sink::SegmentSink;

use super::layout::Layout;
use super::pen::{Emitter, Walk};

/// Per-run constants of the left-center spiral, fixed before the first turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CenterPlan {
    /// Sweep of the two left end-cap arcs, in degrees.
    sweep: i32,
    /// Radius growth applied before the bottom-left arc.
    rad_inc1: i64,
    /// Radius growth applied after the turn closes; also extends the bottom run.
    rad_inc2: i64,
    /// Vertical offset of the single-turn leads from the center line.
    lead: i64,
    /// Shortening of the single-turn opening stub.
    trim: i64,
}

impl CenterPlan {
    fn new(layout: &Layout, turns: i32) -> Self {
        let start_radius = layout.start_radius();
        let step = layout.step();

        // Split the step so the bottom-left arc never grows past the
        // vertical half-span.
        let limit = half(layout.outer_height) + layout.clearance + half(layout.track_width);
        let rad_inc1 = if start_radius + step > limit {
            limit - start_radius
        } else {
            step
        };
        let rad_inc2 = step - rad_inc1;

        if turns > 1 {
            return Self {
                sweep: 90,
                rad_inc1,
                rad_inc2,
                lead: 0,
                trim: 0,
            };
        }

        let half_track = half(layout.track_width);
        let half_spacing = half(layout.track_spacing);
        let clip_limit = half(layout.outer_height) + layout.clearance - half_spacing;
        let sweep = if start_radius > clip_limit {
            let sweep = clipped_sweep_deg(clip_limit, start_radius);
            warn!(
                radius = start_radius,
                limit = clip_limit,
                sweep,
                "single-turn end caps clipped"
            );
            sweep
        } else {
            90
        };

        Self {
            sweep,
            rad_inc1: 0,
            rad_inc2: 0,
            lead: half_track + half_spacing,
            trim: half_track - half_spacing,
        }
    }

    fn has_stubs(&self) -> bool {
        self.sweep == 90
    }
}

/// Draws a spiral that starts on the left edge at mid-height.
///
/// `center` is the geometric center of the rectangle. Each turn opens with a
/// stub up the left side, goes around clockwise on screen (counter-clockwise
/// in board coordinates with y up), and closes with a stub back down to the
/// center line, one step further out.
pub struct MakeLeftCenterSpiral<'a> {
    params: &'a SpiralParameters,
}

impl<'a> MakeLeftCenterSpiral<'a> {
    /// Creates a new `MakeLeftCenterSpiral` operation.
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
    /// Returns an error if the parameters fail validation (nothing is
    /// emitted) or if the sink rejects a primitive (generation stops there).
    pub fn execute<S: SegmentSink + ?Sized>(&self, sink: &mut S) -> Result<usize> {
        self.params.validate()?;
        let turns = self.params.effective_turns();
        let layout = Layout::new(self.params);
        let plan = CenterPlan::new(&layout, turns);
        debug!(
            turns,
            radius = layout.radius,
            f_length = layout.f_length,
            f_height = layout.f_height,
            start_radius = layout.start_radius(),
            sweep = plan.sweep,
            rad_inc1 = plan.rad_inc1,
            rad_inc2 = plan.rad_inc2,
            "left-center spiral"
        );

        let anchor_y = layout.center.y;
        let (fl, fh) = (layout.f_length, layout.f_height);
        let sweep = plan.sweep;
        let mut pen = Emitter::new(sink, &self.params.layer, self.params.track_width);
        let mut w = Walk::new(layout.left_x(), anchor_y + plan.lead, layout.start_radius());

        for turn in 0..turns {
            if plan.has_stubs() {
                pen.line(w.pos(), Point::new(w.x, w.y + half(fh) - plan.trim))?;
            }
            w.y += half(fh) - plan.lead;

            // top-left corner
            pen.arc(Point::new(w.x + w.radius, w.y), w.radius, 90, 90 + sweep)?;
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

            // bottom run carries the inward step
            pen.line(w.pos(), Point::new(w.x - fl - plan.rad_inc2, w.y))?;
            w.x -= fl + plan.rad_inc2;

            w.radius += plan.rad_inc1;

            // bottom-left corner, at the grown radius
            pen.arc(Point::new(w.x, w.y + w.radius), w.radius, 270 - sweep, 270)?;
            w.x -= w.radius;
            w.y += w.radius;

            if plan.has_stubs() {
                pen.line(w.pos(), Point::new(w.x, anchor_y - plan.lead))?;
            }

            w.y = anchor_y;
            w.radius += plan.rad_inc2;
            trace!(turn, radius = w.radius, "turn closed");
        }

        Ok(pen.emitted())
    }
}
