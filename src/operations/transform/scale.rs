use crate::error::Result;
use crate::math::{Matrix4, Point3, Vector3};
use crate::topology::Solid;

use super::GeneralTransform;

/// Scales a solid per axis about a center point.
pub struct Scale {
    center: Point3,
    factors: Vector3,
}

impl Scale {
    /// Creates a new `Scale` operation.
    ///
    /// Negative factors mirror the solid.
    #[must_use]
    pub fn new(center: Point3, factors: Vector3) -> Self {
        Self { center, factors }
    }

    /// Creates a uniform `Scale` operation.
    #[must_use]
    pub fn uniform(center: Point3, factor: f64) -> Self {
        Self::new(center, Vector3::repeat(factor))
    }

    /// Executes the scaling, modifying the solid in-place.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the solid untouched, if a zero factor
    /// would flatten a face.
    pub fn execute(&self, solid: &mut Solid) -> Result<()> {
        let t_neg = Matrix4::new_translation(&(-self.center.coords));
        let scale = Matrix4::new_nonuniform_scaling(&self.factors);
        let t_pos = Matrix4::new_translation(&self.center.coords);
        GeneralTransform::new(t_pos * scale * t_neg).execute(solid)
    }
}
