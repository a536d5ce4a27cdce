use std::collections::HashSet;

use crate::math::polygon_3d::{centroid, polygon_area_3d};
use crate::math::{Point3, PLANE_EPSILON, TOLERANCE};
use crate::topology::{FaceId, Solid};

/// A problem found by [`ValidateSolid`].
#[derive(Debug, Clone, PartialEq)]
pub enum SolidIssue {
    /// The face has fewer than 3 vertices.
    TooFewVertices { face: FaceId },
    /// A vertex of the face has a NaN or infinite coordinate.
    NonFinite { face: FaceId },
    /// The face encloses no area.
    ZeroArea { face: FaceId },
    /// A vertex of the face lies off the face plane.
    NonPlanar { face: FaceId },
    /// No other face runs along this edge in the opposite direction.
    OpenEdge {
        face: FaceId,
        start: Point3,
        end: Point3,
    },
    /// A vertex of the solid lies in front of this face.
    NonConvex { face: FaceId },
    /// The face normal points into the solid.
    InwardFacing { face: FaceId },
}

/// Checks that a solid is a closed, convex polyhedron with planar,
/// outward-facing faces.
#[derive(Debug, Default)]
pub struct ValidateSolid;

/// Exact bit pattern of a point, for matching shared vertices.
fn point_key(point: &Point3) -> [u64; 3] {
    [point.x.to_bits(), point.y.to_bits(), point.z.to_bits()]
}

impl ValidateSolid {
    /// Creates a new `ValidateSolid` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the validation, returning every issue found.
    #[must_use]
    pub fn execute(&self, solid: &Solid) -> Vec<SolidIssue> {
        let mut issues = Vec::new();
        let all_points: Vec<Point3> = solid.points().copied().collect();
        let Some(solid_centroid) = centroid(&all_points) else {
            return issues;
        };

        let mut directed_edges: HashSet<([u64; 3], [u64; 3])> = HashSet::new();
        for face in solid.faces() {
            for edge in face.edges() {
                directed_edges.insert((point_key(edge.start()), point_key(edge.end())));
            }
        }

        for face in solid.faces() {
            let id = face.id();
            let points: Vec<Point3> = face.points().copied().collect();
            if points.len() < 3 {
                issues.push(SolidIssue::TooFewVertices { face: id });
                continue;
            }
            if !points.iter().all(|p| p.iter().all(|c| c.is_finite())) {
                issues.push(SolidIssue::NonFinite { face: id });
                continue;
            }

            let plane = face.plane();
            if polygon_area_3d(&points, plane.normal()) < TOLERANCE {
                issues.push(SolidIssue::ZeroArea { face: id });
            }
            if points.iter().any(|p| plane.evaluate(p).abs() > PLANE_EPSILON) {
                issues.push(SolidIssue::NonPlanar { face: id });
            }
            for edge in face.edges() {
                let reverse = (point_key(edge.end()), point_key(edge.start()));
                if !directed_edges.contains(&reverse) {
                    issues.push(SolidIssue::OpenEdge {
                        face: id,
                        start: *edge.start(),
                        end: *edge.end(),
                    });
                }
            }
            if all_points.iter().any(|p| plane.evaluate(p) > PLANE_EPSILON) {
                issues.push(SolidIssue::NonConvex { face: id });
            }
            if plane.evaluate(&solid_centroid) > PLANE_EPSILON {
                issues.push(SolidIssue::InwardFacing { face: id });
            }
        }

        issues
    }

    /// Returns `true` if [`execute`](Self::execute) finds no issues.
    #[must_use]
    pub fn is_valid(&self, solid: &Solid) -> bool {
        self.execute(solid).is_empty()
    }
}
