mod layer;
mod spiral_params;
mod start_position;

pub use layer::Layer;
pub use spiral_params::SpiralParameters;
pub use start_position::StartPosition;
