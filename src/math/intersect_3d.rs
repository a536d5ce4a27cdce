use crate::geometry::Plane;

use super::{Point3, Vector3, PARALLEL_EPSILON, PLANE_EPSILON};

/// Relationship of a line with a plane.
#[derive(Debug)]
pub enum LinePlaneRelation {
    /// Line crosses the plane at a single point.
    Point { point: Point3, t: f64 },
    /// Line is parallel to the plane (does not intersect).
    Parallel,
    /// Line lies entirely on the plane.
    OnPlane,
}

/// Computes the intersection of a line `origin + t * dir` with a plane.
#[must_use]
pub fn line_plane_intersect(origin: &Point3, dir: &Vector3, plane: &Plane) -> LinePlaneRelation {
    let denom = plane.normal().dot(dir);
    let numer = -plane.evaluate(origin);

    if denom.abs() < PARALLEL_EPSILON {
        if numer.abs() < PLANE_EPSILON {
            LinePlaneRelation::OnPlane
        } else {
            LinePlaneRelation::Parallel
        }
    } else {
        let t = numer / denom;
        LinePlaneRelation::Point {
            point: origin + dir * t,
            t,
        }
    }
}

/// Tests whether the segment `start..end` touches the box `min..max`.
///
/// Slab test: the segment parameter range is clipped against each axis pair
/// of box planes in turn.
#[must_use]
pub fn segment_aabb_intersect(start: &Point3, end: &Point3, min: &Point3, max: &Point3) -> bool {
    let dir = end - start;
    let mut t_min = 0.0_f64;
    let mut t_max = 1.0_f64;

    for axis in 0..3 {
        let (s, d) = (start[axis], dir[axis]);
        let (lo, hi) = (min[axis], max[axis]);
        if d.abs() < PARALLEL_EPSILON {
            if s < lo || s > hi {
                return false;
            }
            continue;
        }
        let t1 = (lo - s) / d;
        let t2 = (hi - s) / d;
        let (near, far) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        t_min = t_min.max(near);
        t_max = t_max.min(far);
        if t_min > t_max {
            return false;
        }
    }
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    fn floor() -> Plane {
        Plane::new(v(0.0, 0.0, 1.0), 0.0).unwrap()
    }

    // ── line_plane_intersect ──

    #[test]
    fn line_hits_plane() {
        match line_plane_intersect(&p(1.0, 2.0, 4.0), &v(0.0, 0.0, -2.0), &floor()) {
            LinePlaneRelation::Point { point, t } => {
                assert_abs_diff_eq!(point, p(1.0, 2.0, 0.0));
                assert_abs_diff_eq!(t, 2.0);
            }
            other => panic!("expected a point, got {other:?}"),
        }
    }

    #[test]
    fn line_parallel_to_plane() {
        let relation = line_plane_intersect(&p(0.0, 0.0, 1.0), &v(1.0, 0.0, 0.0), &floor());
        assert!(matches!(relation, LinePlaneRelation::Parallel));
    }

    #[test]
    fn line_in_plane() {
        let relation = line_plane_intersect(&p(0.0, 0.0, 0.0), &v(1.0, 1.0, 0.0), &floor());
        assert!(matches!(relation, LinePlaneRelation::OnPlane));
    }

    // ── segment_aabb_intersect ──

    #[test]
    fn segment_through_box() {
        assert!(segment_aabb_intersect(
            &p(-5.0, 0.5, 0.5),
            &p(5.0, 0.5, 0.5),
            &p(0.0, 0.0, 0.0),
            &p(1.0, 1.0, 1.0),
        ));
    }

    #[test]
    fn segment_inside_box() {
        assert!(segment_aabb_intersect(
            &p(0.2, 0.2, 0.2),
            &p(0.8, 0.8, 0.8),
            &p(0.0, 0.0, 0.0),
            &p(1.0, 1.0, 1.0),
        ));
    }

    #[test]
    fn segment_stops_short_of_box() {
        assert!(!segment_aabb_intersect(
            &p(-5.0, 0.5, 0.5),
            &p(-1.0, 0.5, 0.5),
            &p(0.0, 0.0, 0.0),
            &p(1.0, 1.0, 1.0),
        ));
    }

    #[test]
    fn axis_parallel_segment_beside_box() {
        assert!(!segment_aabb_intersect(
            &p(-5.0, 2.0, 0.5),
            &p(5.0, 2.0, 0.5),
            &p(0.0, 0.0, 0.0),
            &p(1.0, 1.0, 1.0),
        ));
    }

    #[test]
    fn diagonal_segment_passing_corner() {
        // Passes the (1, 1) corner on the outside.
        assert!(!segment_aabb_intersect(
            &p(0.0, 3.0, 0.5),
            &p(3.0, 0.0, 0.5),
            &p(0.0, 0.0, 0.0),
            &p(1.0, 1.0, 1.0),
        ));
    }
}
