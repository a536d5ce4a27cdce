use rand::RngCore;
use tracing::{debug, trace};

use crate::geometry::BoundingBox;
use crate::math::round_to_decimals;
use crate::topology::{IdAllocator, Solid};

use super::{ellipse_points, make_solid, prism_faces, BrushGenerator};

/// Parameters of [`Pipe`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeParams {
    /// Number of wall segments; at least 3.
    pub sides: u32,
    /// Wall thickness; at least 1 and less than half the box footprint.
    pub wall_width: f64,
}

impl Default for PipeParams {
    fn default() -> Self {
        Self {
            sides: 8,
            wall_width: 32.0,
        }
    }
}

impl PipeParams {
    /// Checks the parameters against the box the pipe must fill.
    #[must_use]
    pub fn is_valid(&self, bbox: &BoundingBox) -> bool {
        self.rejection(bbox).is_none()
    }

    fn rejection(&self, bbox: &BoundingBox) -> Option<&'static str> {
        if !self.wall_width.is_finite() {
            Some("non-finite wall width")
        } else if !bbox.is_finite() {
            Some("non-finite box")
        } else if self.sides < 3 {
            Some("fewer than 3 sides")
        } else if self.wall_width < 1.0 {
            Some("wall thinner than 1 unit")
        } else if self.wall_width * 2.0 >= bbox.width().min(bbox.length()) {
            Some("wall fills the whole footprint")
        } else {
            None
        }
    }
}

/// An upright hollow elliptical tube, one solid per wall segment.
#[derive(Debug, Default, Clone, Copy)]
pub struct Pipe {
    params: PipeParams,
}

impl Pipe {
    #[must_use]
    pub fn new(params: PipeParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> &PipeParams {
        &self.params
    }
}

impl BrushGenerator for Pipe {
    fn name(&self) -> &'static str {
        "Pipe"
    }

    fn create(
        &self,
        ids: &mut dyn IdAllocator,
        bbox: &BoundingBox,
        texture: &str,
        round_decimals: u32,
        rng: &mut dyn RngCore,
    ) -> Vec<Solid> {
        if let Some(reason) = self.params.rejection(bbox) {
            debug!(brush = self.name(), reason, "parameters rejected");
            return Vec::new();
        }

        let center = bbox.center();
        let (x_radius, y_radius) = (bbox.width() / 2.0, bbox.length() / 2.0);
        let wall = self.params.wall_width;
        let bottom_z = round_to_decimals(bbox.min.z, round_decimals);
        let top_z = round_to_decimals(bbox.max.z, round_decimals);
        let sides = self.params.sides;
        let outer = ellipse_points(&center, x_radius, y_radius, sides, bottom_z, round_decimals);
        let inner = ellipse_points(
            &center,
            x_radius - wall,
            y_radius - wall,
            sides,
            bottom_z,
            round_decimals,
        );

        let n = outer.len();
        let solids: Vec<Solid> = (0..n)
            .filter_map(|i| {
                let j = (i + 1) % n;
                let segment = [outer[i], outer[j], inner[j], inner[i]];
                make_solid(ids, prism_faces(&segment, top_z), texture, rng)
            })
            .collect();
        trace!(brush = self.name(), solids = solids.len(), "brush created");
        solids
    }
}
