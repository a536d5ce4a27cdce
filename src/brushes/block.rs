use rand::RngCore;
use tracing::trace;

use crate::geometry::BoundingBox;
use crate::math::{round_point, round_to_decimals, Point3};
use crate::topology::{IdAllocator, Solid};

use super::{make_solid, prism_faces, BrushGenerator};

/// A single box filling the bounds.
#[derive(Debug, Default, Clone, Copy)]
pub struct Block;

impl BrushGenerator for Block {
    fn name(&self) -> &'static str {
        "Block"
    }

    fn create(
        &self,
        ids: &mut dyn IdAllocator,
        bbox: &BoundingBox,
        texture: &str,
        round_decimals: u32,
        rng: &mut dyn RngCore,
    ) -> Vec<Solid> {
        let (min, max) = (bbox.min, bbox.max);
        let base: Vec<Point3> = [
            Point3::new(min.x, min.y, min.z),
            Point3::new(max.x, min.y, min.z),
            Point3::new(max.x, max.y, min.z),
            Point3::new(min.x, max.y, min.z),
        ]
        .iter()
        .map(|p| round_point(p, round_decimals))
        .collect();
        let top_z = round_to_decimals(max.z, round_decimals);

        let solids: Vec<Solid> =
            make_solid(ids, prism_faces(&base, top_z), texture, rng).into_iter().collect();
        trace!(brush = self.name(), solids = solids.len(), "brush created");
        solids
    }
}
