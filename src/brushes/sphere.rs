use std::f64::consts::{PI, TAU};

use rand::RngCore;
use tracing::{debug, trace};

use crate::geometry::BoundingBox;
use crate::math::{round_point, Point3};
use crate::topology::{IdAllocator, Solid};

use super::{make_solid, BrushGenerator};

/// Parameters of [`Sphere`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereParams {
    /// Number of steps around and from pole to pole; at least 3.
    pub sides: u32,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self { sides: 8 }
    }
}

impl SphereParams {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.sides >= 3
    }
}

/// A latitude/longitude ellipsoid inscribed in the bounds.
///
/// The bands touching the poles are triangles.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sphere {
    params: SphereParams,
}

impl Sphere {
    #[must_use]
    pub fn new(params: SphereParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> &SphereParams {
        &self.params
    }
}

impl BrushGenerator for Sphere {
    fn name(&self) -> &'static str {
        "Sphere"
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

        let sides = self.params.sides;
        let center = bbox.center();
        let radii = bbox.extents() / 2.0;
        let top = round_point(&Point3::new(center.x, center.y, bbox.max.z), round_decimals);
        let bottom = round_point(&Point3::new(center.x, center.y, bbox.min.z), round_decimals);

        // grid[i][j]: latitude i from the top pole, longitude j.
        let grid: Vec<Vec<Point3>> = (0..=sides)
            .map(|i| {
                let polar = PI * f64::from(i) / f64::from(sides);
                (0..sides)
                    .map(|j| {
                        if i == 0 {
                            return top;
                        }
                        if i == sides {
                            return bottom;
                        }
                        let azimuth = TAU * f64::from(j) / f64::from(sides);
                        let point = Point3::new(
                            center.x + radii.x * polar.sin() * azimuth.cos(),
                            center.y + radii.y * polar.sin() * azimuth.sin(),
                            center.z + radii.z * polar.cos(),
                        );
                        round_point(&point, round_decimals)
                    })
                    .collect()
            })
            .collect();

        let n = grid[0].len();
        let mut loops = Vec::with_capacity(n * n);
        for band in grid.windows(2) {
            let (upper, lower) = (&band[0], &band[1]);
            for j in 0..n {
                let k = (j + 1) % n;
                loops.push(vec![upper[j], upper[k], lower[k], lower[j]]);
            }
        }

        let solids: Vec<Solid> = make_solid(ids, loops, texture, rng).into_iter().collect();
        trace!(brush = self.name(), solids = solids.len(), "brush created");
        solids
    }
}
