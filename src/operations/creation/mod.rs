mod layout;
mod make_left_bottom;
mod make_left_center;
mod make_left_top;
mod make_winding;
mod pen;
#[cfg(test)]
mod test_support;

pub use make_left_bottom::MakeLeftBottomSpiral;
pub use make_left_center::MakeLeftCenterSpiral;
pub use make_left_top::MakeLeftTopSpiral;
pub use make_winding::{generate, MakeWinding};
