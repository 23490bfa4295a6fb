mod arc;
mod line;
mod segment;

pub use arc::Arc;
pub use line::Line;
pub use segment::Segment;

/// Narrowest trace a primitive will carry.
pub const MIN_WIDTH: i64 = 1;
