use crate::geometry::Segment;
use crate::math::Point;

/// Endpoints in drawing order.
///
/// Arcs are stored with increasing angles, but every generator walks them
/// clockwise, from the end angle back to the start angle.
pub fn drawn(segment: &Segment) -> (Point, Point) {
    match segment {
        Segment::Line(line) => (*line.start(), *line.end()),
        Segment::Arc(arc) => (arc.end_point(), arc.start_point()),
    }
}

/// Asserts that each primitive starts exactly where the previous one ends.
pub fn assert_drawn_in_order(segments: &[Segment]) {
    for (k, pair) in segments.windows(2).enumerate() {
        assert_eq!(
            drawn(&pair[0]).1,
            drawn(&pair[1]).0,
            "break after primitive {k}: {} / {}",
            pair[0],
            pair[1]
        );
    }
}
