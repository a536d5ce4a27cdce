use std::f64::consts::TAU;

use super::{Point3, Vector3};

/// Tolerance on the angle sum, in radians.
pub const ANGLE_SUM_TOLERANCE: f64 = 0.001;

/// Below this product of edge-vector magnitudes the point is taken to sit on
/// a vertex.
pub const VERTEX_COINCIDENCE: f64 = 0.001;

/// Point-in-polygon test for a point coplanar with the polygon.
///
/// Sums the angles subtended at `point` by each polygon edge; the sum is a
/// full turn when the point is inside. A point coinciding with a vertex is
/// inside. The tolerance is absolute, so very large or very small polygons
/// can misclassify points close to their boundary.
#[must_use]
pub fn angle_sum_contains(point: &Point3, polygon: &[Point3]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let n = polygon.len();
    let mut sum = 0.0;
    for i in 0..n {
        let v1 = polygon[i] - point;
        let v2 = polygon[(i + 1) % n] - point;

        let magnitudes = v1.norm() * v2.norm();
        if magnitudes < VERTEX_COINCIDENCE {
            return true;
        }
        sum += (v1.dot(&v2) / magnitudes).clamp(-1.0, 1.0).acos();
    }

    (sum - TAU).abs() < ANGLE_SUM_TOLERANCE
}

/// Compute the area of a 3D polygon (coplanar points).
///
/// Uses the cross-product summation method projected along the polygon normal.
#[must_use]
pub fn polygon_area_3d(points: &[Point3], normal: &Vector3) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let n = points.len();
    let mut cross_sum = Vector3::new(0.0, 0.0, 0.0);
    let o = &points[0];
    for i in 1..n {
        let a = points[i] - o;
        let b = points[(i + 1) % n] - o;
        cross_sum += a.cross(&b);
    }
    0.5 * cross_sum.dot(normal).abs()
}

/// Arithmetic mean of a set of points, or `None` for an empty set.
#[must_use]
pub fn centroid(points: &[Point3]) -> Option<Point3> {
    if points.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let inv_n = 1.0 / points.len() as f64;
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Some(Point3::from(sum * inv_n))
}
