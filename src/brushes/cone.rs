use rand::RngCore;
use tracing::{debug, trace};

use crate::geometry::BoundingBox;
use crate::math::{round_point, round_to_decimals, Point3};
use crate::topology::{IdAllocator, Solid};

use super::{ellipse_points, make_solid, BrushGenerator};

/// Parameters of [`Cone`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeParams {
    /// Number of sloped faces; at least 3.
    pub sides: u32,
}

impl Default for ConeParams {
    fn default() -> Self {
        Self { sides: 8 }
    }
}

impl ConeParams {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.sides >= 3
    }
}

/// An elliptical base on the floor of the bounds with its apex at the
/// centre of the ceiling.
#[derive(Debug, Default, Clone, Copy)]
pub struct Cone {
    params: ConeParams,
}

impl Cone {
    #[must_use]
    pub fn new(params: ConeParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> &ConeParams {
        &self.params
    }
}

impl BrushGenerator for Cone {
    fn name(&self) -> &'static str {
        "Cone"
    }

    fn create(
        &self,
        ids: &mut dyn IdAllocator,
        bbox: &BoundingBox,
        texture: &str,
        round_decimals: u32,
        rng: &mut dyn RngCore,
    ) -> Vec<Solid> {
        if !self.params.is_valid() {
            debug!(brush = self.name(), sides = self.params.sides, "parameters rejected");
            return Vec::new();
        }

        let center = bbox.center();
        let base = ellipse_points(
            &center,
            bbox.width() / 2.0,
            bbox.length() / 2.0,
            self.params.sides,
            round_to_decimals(bbox.min.z, round_decimals),
            round_decimals,
        );
        let apex = round_point(&Point3::new(center.x, center.y, bbox.max.z), round_decimals);

        let n = base.len();
        let mut loops = Vec::with_capacity(n + 1);
        loops.push(base.clone());
        for i in 0..n {
            loops.push(vec![base[i], apex, base[(i + 1) % n]]);
        }

        let solids: Vec<Solid> = make_solid(ids, loops, texture, rng).into_iter().collect();
        trace!(brush = self.name(), solids = solids.len(), "brush created");
        solids
    }
}
