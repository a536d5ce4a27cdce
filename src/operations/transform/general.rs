use crate::error::Result;
use crate::math::Matrix4;
use crate::topology::Solid;

/// Applies an arbitrary 4x4 transformation matrix to a solid.
pub struct GeneralTransform {
    matrix: Matrix4,
}

impl GeneralTransform {
    /// Creates a new `GeneralTransform` operation.
    #[must_use]
    pub fn new(matrix: Matrix4) -> Self {
        Self { matrix }
    }

    /// Returns the matrix applied by this operation.
    #[must_use]
    pub fn matrix(&self) -> &Matrix4 {
        &self.matrix
    }

    /// Executes the transformation, modifying the solid in-place.
    ///
    /// Vertex positions move; texture axes stay fixed in world space. Each
    /// face rebuilds its plane, tints, texture coordinates and bounding box
    /// from the moved vertices.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the solid untouched, if any face would
    /// collapse (e.g. a zero scale factor).
    pub fn execute(&self, solid: &mut Solid) -> Result<()> {
        solid.transform(&self.matrix)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};
    use crate::operations::test_support::unit_cube;

    #[test]
    fn identity_transform_preserves_vertices() {
        let mut solid = unit_cube();
        let before: Vec<Point3> = solid.points().copied().collect();
        GeneralTransform::new(Matrix4::identity())
            .execute(&mut solid)
            .unwrap();
        let after: Vec<Point3> = solid.points().copied().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn translation_shifts_all_vertices() {
        let mut solid = unit_cube();
        let mut matrix = Matrix4::identity();
        matrix[(0, 3)] = 5.0;
        matrix[(1, 3)] = 3.0;
        matrix[(2, 3)] = 2.0;
        GeneralTransform::new(matrix).execute(&mut solid).unwrap();

        for pt in solid.points() {
            assert!(pt.x >= 5.0 - 1e-10 && pt.x <= 6.0 + 1e-10);
            assert!(pt.y >= 3.0 - 1e-10 && pt.y <= 4.0 + 1e-10);
            assert!(pt.z >= 2.0 - 1e-10 && pt.z <= 3.0 + 1e-10);
        }
    }

    #[test]
    fn uniform_scale_doubles_size() {
        let mut solid = unit_cube();
        GeneralTransform::new(Matrix4::new_scaling(2.0))
            .execute(&mut solid)
            .unwrap();
        let bbox = solid.bounding_box();
        assert_eq!(bbox.max, Point3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn collapse_is_rejected() {
        let mut solid = unit_cube();
        let flatten = Matrix4::new_nonuniform_scaling(&Vector3::new(0.0, 1.0, 1.0));
        let result = GeneralTransform::new(flatten).execute(&mut solid);
        assert!(matches!(
            result,
            Err(crate::BrushError::Geometry(crate::error::GeometryError::Degenerate(_)))
        ));
        assert_eq!(solid.bounding_box().max, Point3::new(1.0, 1.0, 1.0));
    }
}
