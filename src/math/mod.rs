pub mod angle;

/// Integer point in the board length unit.
pub type Point = nalgebra::Point2<i64>;

/// Floating-point 2D vector, used for sampling arcs.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Floor-halves an integer length.
///
/// Every `/ 2` in the winding layout rounds toward negative infinity, so
/// odd and negative lengths split the same way for all three generators.
#[must_use]
pub fn half(value: i64) -> i64 {
    value.div_euclid(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_floors_odd_values() {
        assert_eq!(half(250), 125);
        assert_eq!(half(251), 125);
        assert_eq!(half(1), 0);
    }

    #[test]
    fn half_floors_toward_negative_infinity() {
        assert_eq!(half(-1), -1);
        assert_eq!(half(-251), -126);
    }
}
