use crate::error::{GeometryError, Result};
use crate::math::intersect_3d::{line_plane_intersect, LinePlaneRelation};
use crate::math::{try_normalize, Point3, Vector3, PARALLEL_EPSILON, PLANE_EPSILON, TOLERANCE};

use super::Line;

/// One of the three world coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Returns the positive unit vector along this axis.
    #[must_use]
    pub fn unit(self) -> Vector3 {
        match self {
            Self::X => Vector3::x(),
            Self::Y => Vector3::y(),
            Self::Z => Vector3::z(),
        }
    }
}

/// Classification of a point relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointPlaneClassification {
    /// Point is on the positive side (in the direction of the normal).
    Front,
    /// Point is on the negative side (opposite the normal).
    Back,
    /// Point lies on the plane (within [`PLANE_EPSILON`]).
    On,
}

/// An infinite plane in 3D space.
///
/// Stored as a unit normal and the signed distance of the plane from the
/// origin along that normal: a point `p` lies on the plane when
/// `normal · p == distance`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    normal: Vector3,
    distance: f64,
}

impl Plane {
    /// Creates a plane from a normal and a distance from the origin.
    ///
    /// The normal is normalized; the distance is taken as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is zero-length.
    pub fn new(normal: Vector3, distance: f64) -> Result<Self> {
        let normal = try_normalize(&normal).ok_or(GeometryError::ZeroVector)?;
        Ok(Self { normal, distance })
    }

    /// Creates the plane through three points.
    ///
    /// The points wind clockwise when viewed from the front, so the normal is
    /// `(p3 - p1) × (p2 - p1)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the points are coincident or collinear.
    pub fn from_points(p1: &Point3, p2: &Point3, p3: &Point3) -> Result<Self> {
        let ab = p2 - p1;
        let ac = p3 - p1;
        let normal = try_normalize(&ac.cross(&ab)).ok_or_else(|| {
            GeometryError::Degenerate("plane points are collinear".into())
        })?;
        Ok(Self {
            distance: normal.dot(&p1.coords),
            normal,
        })
    }

    /// Returns the unit normal.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the signed distance of the plane from the origin.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// The point on the plane closest to the origin.
    #[must_use]
    pub fn point_on_plane(&self) -> Point3 {
        Point3::from(self.normal * self.distance)
    }

    /// Signed distance from `point` to the plane; positive in front.
    #[must_use]
    pub fn evaluate(&self, point: &Point3) -> f64 {
        self.normal.dot(&point.coords) - self.distance
    }

    /// Classifies a point against the plane.
    #[must_use]
    pub fn classify_point(&self, point: &Point3) -> PointPlaneClassification {
        let dist = self.evaluate(point);
        if dist.abs() < PLANE_EPSILON {
            PointPlaneClassification::On
        } else if dist < 0.0 {
            PointPlaneClassification::Back
        } else {
            PointPlaneClassification::Front
        }
    }

    /// The world axis most parallel to the normal.
    ///
    /// Ties prefer X over Y over Z.
    #[must_use]
    pub fn closest_axis(&self) -> Axis {
        let n = self.normal.abs();
        if n.x >= n.y && n.x >= n.z {
            Axis::X
        } else if n.y >= n.z {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    /// Removes the normal component of a direction vector.
    #[must_use]
    pub fn project_vector(&self, vector: &Vector3) -> Vector3 {
        vector - self.normal * self.normal.dot(vector)
    }

    /// Projects a point onto the plane.
    #[must_use]
    pub fn project_point(&self, point: &Point3) -> Point3 {
        point - self.normal * self.evaluate(point)
    }

    /// Returns `true` if the two planes have (anti-)parallel normals.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        self.normal.cross(&other.normal).norm() < TOLERANCE
    }

    /// Intersects a line segment with the plane.
    ///
    /// The segment may cross in either direction. Returns `None` when the
    /// segment is parallel to the plane or the crossing lies beyond either
    /// endpoint.
    #[must_use]
    pub fn intersect_segment(&self, line: &Line) -> Option<Point3> {
        match line_plane_intersect(line.start(), &line.direction(), self) {
            LinePlaneRelation::Point { point, t } if (0.0..=1.0).contains(&t) => Some(point),
            _ => None,
        }
    }

    /// The single point shared by three planes, if there is one.
    #[must_use]
    pub fn intersect_three(a: &Self, b: &Self, c: &Self) -> Option<Point3> {
        let bc = b.normal.cross(&c.normal);
        let ca = c.normal.cross(&a.normal);
        let ab = a.normal.cross(&b.normal);
        let denom = a.normal.dot(&bc);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        Some(Point3::from(
            (bc * a.distance + ca * b.distance + ab * c.distance) / denom,
        ))
    }
}
