use crate::error::Result;
use crate::math::{Matrix4, Vector3};
use crate::topology::Solid;

use super::GeneralTransform;

/// Translates a solid by a displacement vector.
pub struct Translate {
    displacement: Vector3,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(displacement: Vector3) -> Self {
        Self { displacement }
    }

    /// Executes the translation, modifying the solid in-place.
    ///
    /// # Errors
    ///
    /// Never fails for a finite displacement; see [`GeneralTransform::execute`].
    pub fn execute(&self, solid: &mut Solid) -> Result<()> {
        GeneralTransform::new(Matrix4::new_translation(&self.displacement)).execute(solid)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::Point3;
    use crate::operations::test_support::unit_cube;

    #[test]
    fn moves_box_and_planes() {
        let mut solid = unit_cube();
        Translate::new(Vector3::new(0.0, 0.0, 10.0))
            .execute(&mut solid)
            .unwrap();
        let bbox = solid.bounding_box();
        assert_eq!(bbox.min, Point3::new(0.0, 0.0, 10.0));
        let top = solid
            .faces()
            .iter()
            .find(|f| f.plane().normal().z > 0.5)
            .unwrap();
        assert_abs_diff_eq!(top.plane().distance(), 11.0, epsilon = 1e-12);
    }

    #[test]
    fn texture_stays_in_world() {
        let mut solid = unit_cube();
        let before: Vec<_> = solid.faces().iter().map(|f| f.texture().clone()).collect();
        Translate::new(Vector3::new(3.0, -2.0, 1.0))
            .execute(&mut solid)
            .unwrap();
        for (face, tex) in solid.faces().iter().zip(before) {
            assert_eq!(face.texture(), &tex);
        }
    }
}
