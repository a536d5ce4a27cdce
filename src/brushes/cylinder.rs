use rand::RngCore;
use tracing::{debug, trace};

use crate::geometry::BoundingBox;
use crate::math::round_to_decimals;
use crate::topology::{IdAllocator, Solid};

use super::{ellipse_points, make_solid, prism_faces, BrushGenerator};

/// Parameters of [`Cylinder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderParams {
    /// Number of side faces; at least 3.
    pub sides: u32,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self { sides: 8 }
    }
}

impl CylinderParams {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.sides >= 3
    }
}

/// An upright elliptical prism inscribed in the bounds.
#[derive(Debug, Default, Clone, Copy)]
pub struct Cylinder {
    params: CylinderParams,
}

impl Cylinder {
    #[must_use]
    pub fn new(params: CylinderParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> &CylinderParams {
        &self.params
    }
}

impl BrushGenerator for Cylinder {
    fn name(&self) -> &'static str {
        "Cylinder"
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

        let base = ellipse_points(
            &bbox.center(),
            bbox.width() / 2.0,
            bbox.length() / 2.0,
            self.params.sides,
            round_to_decimals(bbox.min.z, round_decimals),
            round_decimals,
        );
        let top_z = round_to_decimals(bbox.max.z, round_decimals);

        let solids: Vec<Solid> =
            make_solid(ids, prism_faces(&base, top_z), texture, rng).into_iter().collect();
        trace!(brush = self.name(), solids = solids.len(), "brush created");
        solids
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::brushes::test_support::build;
    use crate::math::Point3;
    use crate::operations::query::ValidateSolid;

    #[test]
    fn octagonal_prism() {
        let solids = build(&Cylinder::default(), (256.0, 128.0, 64.0), 6);
        assert_eq!(solids.len(), 1);
        assert_eq!(solids[0].faces().len(), 10);
        assert!(ValidateSolid::new().is_valid(&solids[0]));
    }

    #[test]
    fn inscribed_in_box() {
        let solids = build(&Cylinder::new(CylinderParams { sides: 4 }), (64.0, 32.0, 16.0), 0);
        let bbox = solids[0].bounding_box();
        assert_eq!(bbox.min, Point3::origin());
        assert_eq!(bbox.max, Point3::new(64.0, 32.0, 16.0));
    }

    #[test]
    fn too_few_sides() {
        let cylinder = Cylinder::new(CylinderParams { sides: 2 });
        assert!(build(&cylinder, (64.0, 64.0, 64.0), 0).is_empty());
    }
}
