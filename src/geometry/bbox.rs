use crate::error::{OperationError, Result};
use crate::math::intersect_3d::segment_aabb_intersect;
use crate::math::{Point3, Vector3};

use super::Line;

/// An axis-aligned bounding box.
///
/// Width runs along X, length along Y and height along Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl BoundingBox {
    /// Creates a box from two opposite corners in any order.
    #[must_use]
    pub fn new(a: Point3, b: Point3) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    /// The smallest box containing every point.
    ///
    /// # Errors
    ///
    /// Returns an error if `points` is empty.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3>) -> Result<Self> {
        let mut iter = points.into_iter();
        let first = iter.next().ok_or_else(|| {
            OperationError::InvalidInput("bounding box of an empty point set".into())
        })?;
        Ok(iter.fold(Self::new(*first, *first), |bbox, p| Self {
            min: bbox.min.inf(p),
            max: bbox.max.sup(p),
        }))
    }

    /// Centre of the box.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Size along each axis.
    #[must_use]
    pub fn extents(&self) -> Vector3 {
        self.max - self.min
    }

    /// Size along X.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Size along Y.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Size along Z.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.z - self.min.z
    }

    /// Returns `true` if both corners have finite coordinates.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.min.iter().chain(self.max.iter()).all(|c| c.is_finite())
    }

    /// Returns `true` if the point lies inside or on the box.
    #[must_use]
    pub fn contains_point(&self, point: &Point3) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }

    /// Returns `true` if any part of the segment touches the box.
    #[must_use]
    pub fn intersects_line(&self, line: &Line) -> bool {
        segment_aabb_intersect(line.start(), line.end(), &self.min, &self.max)
    }

    /// The smallest box containing both boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }
}
