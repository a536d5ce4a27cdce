pub mod intersect_3d;
pub mod polygon_3d;

use nalgebra::{Rotation3, Unit};

/// 2D point type, used for texture coordinates.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Distance within which a point counts as lying on a plane.
pub const PLANE_EPSILON: f64 = 1e-4;

/// Denominator threshold below which plane intersections are treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-5;

/// Rounds a value to `decimals` places, ties to even.
///
/// Precision beyond what an `f64` can represent leaves the value untouched.
#[must_use]
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    if decimals > f64::DIGITS {
        return value;
    }
    let factor = 10f64.powi(i32::try_from(decimals).unwrap_or(0));
    (value * factor).round_ties_even() / factor
}

/// Rounds every coordinate of a point to `decimals` places.
#[must_use]
pub fn round_point(point: &Point3, decimals: u32) -> Point3 {
    Point3::new(
        round_to_decimals(point.x, decimals),
        round_to_decimals(point.y, decimals),
        round_to_decimals(point.z, decimals),
    )
}

/// Rotates `vector` by `angle` radians around `axis` (right-handed).
///
/// A zero-length axis leaves the vector unchanged.
#[must_use]
pub fn rotate_about_axis(vector: &Vector3, axis: &Vector3, angle: f64) -> Vector3 {
    match Unit::try_new(*axis, TOLERANCE) {
        Some(axis) => Rotation3::from_axis_angle(&axis, angle) * vector,
        None => *vector,
    }
}

/// Normalizes a vector, returning `None` when it is (numerically) zero-length.
#[must_use]
pub fn try_normalize(vector: &Vector3) -> Option<Vector3> {
    vector.try_normalize(TOLERANCE)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn rounds_to_integer() {
        assert_abs_diff_eq!(round_to_decimals(1.4, 0), 1.0);
        assert_abs_diff_eq!(round_to_decimals(-1.6, 0), -2.0);
    }

    #[test]
    fn ties_round_to_even() {
        assert_abs_diff_eq!(round_to_decimals(2.5, 0), 2.0);
        assert_abs_diff_eq!(round_to_decimals(3.5, 0), 4.0);
    }

    #[test]
    fn rounds_to_decimals() {
        assert_abs_diff_eq!(round_to_decimals(1.23456, 2), 1.23, epsilon = 1e-12);
    }

    #[test]
    fn excessive_precision_is_identity() {
        let value = 0.1 + 0.2;
        assert_eq!(round_to_decimals(value, 40).to_bits(), value.to_bits());
    }

    #[test]
    fn rotate_x_around_z() {
        let rotated = rotate_about_axis(&Vector3::x(), &Vector3::z(), FRAC_PI_2);
        assert_abs_diff_eq!(rotated, Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn rotate_around_zero_axis_is_identity() {
        let rotated = rotate_about_axis(&Vector3::x(), &Vector3::zeros(), 1.0);
        assert_eq!(rotated, Vector3::x());
    }
}
