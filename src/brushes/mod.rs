//! Procedural brush generators.
//!
//! A generator turns a bounding box and a small set of shape parameters into
//! closed solids. Parameters outside their domain produce no solids rather
//! than an error, so a live editor can call generators while the user is
//! still typing.

mod block;
mod cone;
mod cylinder;
mod pipe;
mod sphere;
mod torus;

use std::f64::consts::TAU;

use rand::RngCore;
use tracing::debug;

pub use block::Block;
pub use cone::{Cone, ConeParams};
pub use cylinder::{Cylinder, CylinderParams};
pub use pipe::{Pipe, PipeParams};
pub use sphere::{Sphere, SphereParams};
pub use torus::{Torus, TorusParams};

use crate::geometry::BoundingBox;
use crate::math::{round_point, Point3};
use crate::topology::{Color, Face, FaceId, IdAllocator, IdKind, Solid, SolidId};

/// A procedural shape that fills a bounding box with solids.
pub trait BrushGenerator {
    /// Display name of the shape.
    fn name(&self) -> &'static str;

    /// Whether the generator honours `round_decimals`.
    fn can_round(&self) -> bool {
        true
    }

    /// Builds the shape inside `bbox`.
    ///
    /// Every vertex is rounded to `round_decimals` places before faces are
    /// built. Each solid draws its own colour from `rng`. Invalid parameters
    /// yield an empty vector.
    fn create(
        &self,
        ids: &mut dyn IdAllocator,
        bbox: &BoundingBox,
        texture: &str,
        round_decimals: u32,
        rng: &mut dyn RngCore,
    ) -> Vec<Solid>;
}

/// Every generator with its default parameters, in menu order.
#[must_use]
pub fn all_brushes() -> Vec<Box<dyn BrushGenerator>> {
    vec![
        Box::new(Block),
        Box::new(Cylinder::default()),
        Box::new(Cone::default()),
        Box::new(Pipe::default()),
        Box::new(Sphere::default()),
        Box::new(Torus::default()),
    ]
}

/// Builds one solid from vertex loops, each clockwise seen from outside.
///
/// Repeated consecutive points are merged first. Returns `None` if a loop
/// still cannot form a face.
pub(crate) fn make_solid(
    ids: &mut dyn IdAllocator,
    loops: Vec<Vec<Point3>>,
    texture: &str,
    rng: &mut dyn RngCore,
) -> Option<Solid> {
    let solid_id = SolidId(ids.next(IdKind::MapObject));
    let mut faces = Vec::with_capacity(loops.len());
    for points in loops {
        if !points.iter().all(|p| p.iter().all(|c| c.is_finite())) {
            debug!(solid = solid_id.0, "non-finite vertex, solid skipped");
            return None;
        }
        let face_id = FaceId(ids.next(IdKind::Face));
        match Face::new(face_id, dedup_loop(points), texture) {
            Ok(face) => faces.push(face),
            Err(err) => {
                debug!(solid = solid_id.0, %err, "degenerate face, solid skipped");
                return None;
            }
        }
    }
    match Solid::new(solid_id, Color::random_brush(rng), faces) {
        Ok(solid) => Some(solid),
        Err(err) => {
            debug!(solid = solid_id.0, %err, "solid skipped");
            None
        }
    }
}

/// Removes consecutive duplicates, including between the last and first
/// point.
fn dedup_loop(mut points: Vec<Point3>) -> Vec<Point3> {
    points.dedup();
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}

/// Faces of a vertical prism over `bottom`, which winds counter-clockwise
/// seen from above.
pub(crate) fn prism_faces(bottom: &[Point3], top_z: f64) -> Vec<Vec<Point3>> {
    let top: Vec<Point3> = bottom
        .iter()
        .map(|p| Point3::new(p.x, p.y, top_z))
        .collect();
    let n = bottom.len();

    let mut faces = Vec::with_capacity(n + 2);
    faces.push(bottom.to_vec());
    faces.push(top.iter().rev().copied().collect());
    for i in 0..n {
        let j = (i + 1) % n;
        faces.push(vec![bottom[i], top[i], top[j], bottom[j]]);
    }
    faces
}

/// `sides` rounded points on the ellipse inscribed in the box footprint at
/// height `z`, counter-clockwise from +X.
pub(crate) fn ellipse_points(
    center: &Point3,
    x_radius: f64,
    y_radius: f64,
    sides: u32,
    z: f64,
    decimals: u32,
) -> Vec<Point3> {
    let step = TAU / f64::from(sides);
    (0..sides)
        .map(|i| {
            let angle = step * f64::from(i);
            let point = Point3::new(
                center.x + x_radius * angle.cos(),
                center.y + y_radius * angle.sin(),
                z,
            );
            round_point(&point, decimals)
        })
        .collect()
}


#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::query::ValidateSolid;
    use crate::topology::SequentialIds;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn menu_order() {
        let names: Vec<_> = all_brushes().iter().map(|b| b.name()).collect();
        assert_eq!(names, ["Block", "Cylinder", "Cone", "Pipe", "Sphere", "Torus"]);
    }

    #[test]
    fn dedup_closes_loop() {
        let points = vec![p(0.0, 0.0, 0.0), p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 0.0, 0.0)];
        assert_eq!(dedup_loop(points), vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)]);
    }

    #[test]
    fn prism_over_triangle_is_closed() {
        use rand::SeedableRng;
        let base = [p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0), p(0.0, 4.0, 0.0)];
        let loops = prism_faces(&base, 2.0);
        assert_eq!(loops.len(), 5);
        let solid = make_solid(
            &mut SequentialIds::new(),
            loops,
            "tex",
            &mut rand_pcg::Pcg64::seed_from_u64(0),
        )
        .unwrap();
        assert!(ValidateSolid::new().is_valid(&solid));
    }

    #[test]
    fn collapsed_loop_skips_solid() {
        use rand::SeedableRng;
        let base = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)];
        let solid = make_solid(
            &mut SequentialIds::new(),
            prism_faces(&base, 1.0),
            "tex",
            &mut rand_pcg::Pcg64::seed_from_u64(0),
        );
        assert!(solid.is_none());
    }

    #[test]
    fn non_finite_loop_skips_solid() {
        use rand::SeedableRng;
        let base = [p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0), p(0.0, f64::NAN, 0.0)];
        let solid = make_solid(
            &mut SequentialIds::new(),
            prism_faces(&base, 2.0),
            "tex",
            &mut rand_pcg::Pcg64::seed_from_u64(0),
        );
        assert!(solid.is_none());
    }

    #[test]
    fn infinite_box_builds_nothing() {
        use rand::SeedableRng;
        let bbox = BoundingBox::new(Point3::origin(), Point3::new(256.0, 256.0, f64::INFINITY));
        for generator in all_brushes() {
            let solids = generator.create(
                &mut SequentialIds::new(),
                &bbox,
                "tex",
                6,
                &mut rand_pcg::Pcg64::seed_from_u64(0),
            );
            assert!(solids.is_empty(), "{}", generator.name());
        }
    }

    #[test]
    fn ellipse_is_rounded() {
        let points = ellipse_points(&p(0.0, 0.0, 0.0), 10.0, 5.0, 3, 0.0, 0);
        assert_eq!(points[0], p(10.0, 0.0, 0.0));
        assert_eq!(points[1], p(-5.0, 4.0, 0.0));
    }
}
