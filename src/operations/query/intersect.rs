use crate::geometry::Line;
use crate::math::Point3;
use crate::topology::{FaceId, Solid};

/// Finds where a line first enters a solid.
pub struct LineIntersect {
    line: Line,
}

impl LineIntersect {
    /// Creates a new `LineIntersect` query.
    #[must_use]
    pub fn new(line: Line) -> Self {
        Self { line }
    }

    /// Executes the query, returning the face hit closest to the line start
    /// and the hit point.
    #[must_use]
    pub fn execute(&self, solid: &Solid) -> Option<(FaceId, Point3)> {
        let start = self.line.start();
        solid
            .faces()
            .iter()
            .filter_map(|face| {
                face.intersection_point(&self.line)
                    .map(|hit| (face.id(), hit))
            })
            .min_by(|(_, a), (_, b)| {
                (a - start)
                    .norm_squared()
                    .total_cmp(&(b - start).norm_squared())
            })
    }
}
