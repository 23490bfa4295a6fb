pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod params;
pub mod sink;

pub use error::{ParameterError, Result, SinkError, WindingError};
pub use geometry::{Arc, Line, Segment};
pub use math::Point;
pub use operations::creation::{
    generate, MakeLeftBottomSpiral, MakeLeftCenterSpiral, MakeLeftTopSpiral, MakeWinding,
};
pub use params::{Layer, SpiralParameters, StartPosition};
pub use sink::{SegmentList, SegmentSink};
