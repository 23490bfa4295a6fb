//! Angle and trig helpers for arc construction.
//!
//! Angles are in degrees, counter-clockwise from +x.

use std::f64::consts::PI;

use super::{Point, Vector2};

/// Unit direction for an angle in degrees.
///
/// Multiples of 90° return exact axis vectors so quarter-arc endpoints
/// stay on integer coordinates. This intentionally differs from a naive
/// `cos`/`sin` evaluation, whose residue (`cos 270° ≈ -1.8e-16`) truncates
/// one unit short at a non-zero center. Other angles convert as
/// `deg * π / 180`, in that order.
#[must_use]
#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
pub fn unit_vector(deg: f64) -> Vector2 {
    let quarters = deg / 90.0;
    if quarters.fract() == 0.0 && quarters.is_finite() {
        return match (quarters as i64).rem_euclid(4) {
            0 => Vector2::new(1.0, 0.0),
            1 => Vector2::new(0.0, 1.0),
            2 => Vector2::new(-1.0, 0.0),
            _ => Vector2::new(0.0, -1.0),
        };
    }
    let rad = deg * PI / 180.0;
    Vector2::new(rad.cos(), rad.sin())
}

/// Point at `radius` from `center` in direction `deg`.
///
/// Each coordinate is computed in floating point and truncated toward zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn polar_point(center: &Point, radius: i64, deg: f64) -> Point {
    let dir = unit_vector(deg);
    let r = radius as f64;
    Point::new(
        (center.x as f64 + r * dir.x) as i64,
        (center.y as f64 + r * dir.y) as i64,
    )
}

/// Sweep angle, in whole degrees, that keeps an end-cap arc of `radius`
/// inside a vertical half-span of `limit`.
///
/// `acos(1 - limit / radius)`, with the ratio clamped to `[-1, 1]` and the
/// result rounded half-to-even.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn clipped_sweep_deg(limit: i64, radius: i64) -> i32 {
    let ratio = (1.0 - limit as f64 / radius as f64).clamp(-1.0, 1.0);
    (180.0 * ratio.acos() / PI).round_ties_even() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn quadrant_vectors_are_exact() {
        assert_eq!(unit_vector(0.0), Vector2::new(1.0, 0.0));
        assert_eq!(unit_vector(90.0), Vector2::new(0.0, 1.0));
        assert_eq!(unit_vector(180.0), Vector2::new(-1.0, 0.0));
        assert_eq!(unit_vector(270.0), Vector2::new(0.0, -1.0));
        assert_eq!(unit_vector(360.0), Vector2::new(1.0, 0.0));
        assert_eq!(unit_vector(-90.0), Vector2::new(0.0, -1.0));
    }

    #[test]
    fn diagonal_vector() {
        let v = unit_vector(135.0);
        assert_relative_eq!(v.x, -std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(v.y, std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn polar_point_on_axis() {
        let c = Point::new(1000, -500);
        assert_eq!(polar_point(&c, 2425, 270.0), Point::new(1000, -2925));
        assert_eq!(polar_point(&c, 2425, 180.0), Point::new(-1425, -500));
    }

    #[test]
    fn quarter_points_ignore_float_residue() {
        // cos(270°) evaluated naively is slightly negative: 1000 - 1.8e-13
        // would truncate to 999
        let c = Point::new(1_000, 0);
        assert_eq!(polar_point(&c, 2_425, 270.0), Point::new(1_000, -2_425));
        assert_eq!(polar_point(&c, 2_425, 90.0), Point::new(1_000, 2_425));
    }

    #[test]
    fn polar_point_truncates_toward_zero() {
        // 1000 * cos(45°) = 707.1...
        let p = polar_point(&Point::origin(), 1000, 45.0);
        assert_eq!(p, Point::new(707, 707));
        let q = polar_point(&Point::origin(), 1000, 225.0);
        assert_eq!(q, Point::new(-707, -707));
    }

    #[test]
    fn clipped_sweep_values() {
        assert_eq!(clipped_sweep_deg(100, 200), 60);
        assert_eq!(clipped_sweep_deg(8175, 9000), 85);
        assert_eq!(clipped_sweep_deg(0, 200), 0);
    }

    #[test]
    fn clipped_sweep_clamps_ratio() {
        // limit beyond twice the radius would give ratio < -1
        assert_eq!(clipped_sweep_deg(1000, 200), 180);
    }
}
