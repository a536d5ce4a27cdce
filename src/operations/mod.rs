pub mod query;
pub mod transform;

#[cfg(test)]
pub(crate) mod test_support {
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use crate::brushes::{Block, BrushGenerator};
    use crate::geometry::BoundingBox;
    use crate::math::Point3;
    use crate::topology::{SequentialIds, Solid};

    /// A world-aligned cube from the origin to (1, 1, 1).
    pub(crate) fn unit_cube() -> Solid {
        let bbox = BoundingBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
        let mut solids = Block.create(
            &mut SequentialIds::new(),
            &bbox,
            "tex",
            6,
            &mut Pcg64::seed_from_u64(1),
        );
        solids.remove(0)
    }
}
