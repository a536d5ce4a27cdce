use rand::RngCore;
use tracing::{debug, trace};

use crate::geometry::BoundingBox;
use crate::math::{round_point, Point3, Vector3, TOLERANCE};
use crate::topology::{IdAllocator, Solid};

use super::{make_solid, BrushGenerator};

/// Parameters of [`Torus`]. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusParams {
    /// Steps around the cross section; at least 3.
    pub cross_sides: u32,
    /// Horizontal radius of the cross section; the cross width is twice this.
    pub cross_radius: f64,
    /// Where the cross section starts, in `[0, 359]`.
    pub cross_start: f64,
    /// Build a tube with walls instead of a solid ring.
    pub hollow: bool,
    /// Sweep of the cross section in `[1, 360]`. Only used when hollow.
    pub cross_arc: f64,
    /// Tube wall thickness. Only used when hollow, but always at least 1.
    pub wall_width: f64,
    /// Steps around the ring; at least 3.
    pub ring_sides: u32,
    /// Sweep of the ring in `[1, 1080]`.
    pub ring_arc: f64,
    /// Where the ring starts, in `[0, 359]`.
    pub ring_start: f64,
    /// Total rise over the ring, spread evenly over the ring steps.
    pub rotation_height: f64,
}

impl Default for TorusParams {
    fn default() -> Self {
        Self {
            cross_sides: 8,
            cross_radius: 32.0,
            cross_start: 0.0,
            hollow: false,
            cross_arc: 360.0,
            wall_width: 16.0,
            ring_sides: 8,
            ring_arc: 360.0,
            ring_start: 0.0,
            rotation_height: 0.0,
        }
    }
}

impl TorusParams {
    /// Checks the parameters against the box the torus must fill.
    #[must_use]
    pub fn is_valid(&self, bbox: &BoundingBox) -> bool {
        self.rejection(bbox).is_none()
    }

    /// The cross section sweep actually used: a solid ring is always closed.
    #[must_use]
    pub fn effective_cross_arc(&self) -> f64 {
        if self.hollow {
            self.cross_arc
        } else {
            360.0
        }
    }

    fn rejection(&self, bbox: &BoundingBox) -> Option<&'static str> {
        let cross_width = self.cross_radius * 2.0;
        let cross_arc = self.effective_cross_arc();

        let reals = [
            self.cross_radius,
            self.cross_start,
            cross_arc,
            self.wall_width,
            self.ring_arc,
            self.ring_start,
            self.rotation_height,
        ];
        if !reals.iter().all(|x| x.is_finite()) {
            Some("non-finite parameter")
        } else if !bbox.is_finite() {
            Some("non-finite box")
        } else if self.cross_sides < 3 {
            Some("fewer than 3 cross section sides")
        } else if cross_width < 1.0 {
            Some("cross section narrower than 1 unit")
        } else if !(1.0..=360.0).contains(&cross_arc) {
            Some("cross section arc outside [1, 360]")
        } else if !(0.0..=359.0).contains(&self.cross_start) {
            Some("cross section start outside [0, 359]")
        } else if self.wall_width < 1.0 {
            Some("wall thinner than 1 unit")
        } else if self.ring_sides < 3 {
            Some("fewer than 3 ring sides")
        } else if !(1.0..=1080.0).contains(&self.ring_arc) {
            Some("ring arc outside [1, 1080]")
        } else if !(0.0..=359.0).contains(&self.ring_start) {
            Some("ring start outside [0, 359]")
        } else if bbox.width() <= cross_width || bbox.length() <= cross_width {
            Some("cross section leaves no ring radius")
        } else if bbox.height() <= 0.0 {
            Some("box has no height")
        } else if self.hollow && (self.wall_width >= cross_width || self.wall_width >= bbox.height()) {
            Some("wall fills the whole cross section")
        } else {
            None
        }
    }
}

/// A ring with an elliptical cross section, swept around the box centre.
///
/// Each ring step becomes its own solid; in hollow mode each cross section
/// step of each ring step does.
#[derive(Debug, Default, Clone, Copy)]
pub struct Torus {
    params: TorusParams,
}

impl Torus {
    #[must_use]
    pub fn new(params: TorusParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> &TorusParams {
        &self.params
    }

    /// The rounded cross section loops, `ring_sides + 1` of them with
    /// `cross_sides + 1` points each, for the given cross radii.
    ///
    /// Sweeps of whole turns reuse the first loop or point so the closing
    /// seam is exact.
    fn sections(&self, bbox: &BoundingBox, radii: (f64, f64), decimals: u32) -> Vec<Vec<Point3>> {
        let p = &self.params;
        let center = bbox.center();
        let cross_width = p.cross_radius * 2.0;
        let ring_x = (bbox.width() - cross_width) / 2.0;
        let ring_y = (bbox.length() - cross_width) / 2.0;

        let ring_start = p.ring_start.to_radians();
        let ring_step = p.ring_arc.to_radians() / f64::from(p.ring_sides);
        let cross_start = p.cross_start.to_radians();
        let cross_step = p.effective_cross_arc().to_radians() / f64::from(p.cross_sides);
        let ring_closes = is_whole_turns(p.ring_arc);
        let cross_closes = is_whole_turns(p.effective_cross_arc());

        let mut sections: Vec<Vec<Point3>> = Vec::with_capacity(p.ring_sides as usize + 1);
        for i in 0..=p.ring_sides {
            if i == p.ring_sides && ring_closes {
                sections.push(sections[0].clone());
                continue;
            }
            let ring = ring_start + f64::from(i) * ring_step;
            let ring_center = Vector3::new(
                center.x + ring_x * ring.cos(),
                center.y + ring_y * ring.sin(),
                center.z,
            );

            let mut section: Vec<Point3> = Vec::with_capacity(p.cross_sides as usize + 1);
            for j in 0..=p.cross_sides {
                if j == p.cross_sides && cross_closes {
                    section.push(section[0]);
                    continue;
                }
                let cross = cross_start + f64::from(j) * cross_step;
                let point = Point3::new(
                    radii.0 * cross.cos() * ring.cos(),
                    radii.0 * cross.cos() * ring.sin(),
                    radii.1 * cross.sin(),
                ) + ring_center;
                section.push(round_point(&point, decimals));
            }
            sections.push(section);
        }
        sections
    }
}

fn lift_loop(points: &[Point3], lift: &Vector3, decimals: u32) -> Vec<Point3> {
    points
        .iter()
        .map(|pt| round_point(&(pt + lift), decimals))
        .collect()
}

fn is_whole_turns(degrees: f64) -> bool {
    (degrees % 360.0).abs() < TOLERANCE
}

impl BrushGenerator for Torus {
    fn name(&self) -> &'static str {
        "Torus"
    }

    fn create(
        &self,
        ids: &mut dyn IdAllocator,
        bbox: &BoundingBox,
        texture: &str,
        round_decimals: u32,
        rng: &mut dyn RngCore,
    ) -> Vec<Solid> {
        let p = &self.params;
        if let Some(reason) = p.rejection(bbox) {
            debug!(brush = self.name(), reason, "parameters rejected");
            return Vec::new();
        }

        let cross_width = p.cross_radius * 2.0;
        let outer = self.sections(bbox, (cross_width / 2.0, bbox.height() / 2.0), round_decimals);
        let inner = if p.hollow {
            self.sections(
                bbox,
                ((cross_width - p.wall_width) / 2.0, (bbox.height() - p.wall_width) / 2.0),
                round_decimals,
            )
        } else {
            Vec::new()
        };
        let rise = p.rotation_height / f64::from(p.ring_sides);
        let sides = p.cross_sides as usize;

        let mut solids = Vec::new();
        for step in 0..p.ring_sides {
            let i = step as usize;
            let lift = Vector3::z() * rise * f64::from(step);
            let lifted = |quad: [Point3; 4]| lift_loop(&quad, &lift, round_decimals);

            if p.hollow {
                let (o, no) = (&outer[i], &outer[i + 1]);
                let (n, nn) = (&inner[i], &inner[i + 1]);
                for j in 0..sides {
                    let k = j + 1;
                    let loops = vec![
                        lifted([o[j], o[k], no[k], no[j]]),
                        lifted([nn[j], nn[k], n[k], n[j]]),
                        lifted([n[k], nn[k], no[k], o[k]]),
                        lifted([o[j], no[j], nn[j], n[j]]),
                        lifted([n[j], n[k], o[k], o[j]]),
                        lifted([no[j], no[k], nn[k], nn[j]]),
                    ];
                    solids.extend(make_solid(ids, loops, texture, rng));
                }
            } else {
                let (current, next) = (&outer[i], &outer[i + 1]);
                let mut loops: Vec<Vec<Point3>> = (0..sides)
                    .map(|j| {
                        let k = (j + 1) % sides;
                        lifted([current[j], current[k], next[k], next[j]])
                    })
                    .collect();
                let mut start_cap = lift_loop(&current[..sides], &lift, round_decimals);
                start_cap.reverse();
                loops.push(start_cap);
                loops.push(lift_loop(&next[..sides], &lift, round_decimals));
                solids.extend(make_solid(ids, loops, texture, rng));
            }
        }

        trace!(brush = self.name(), solids = solids.len(), "brush created");
        solids
    }
}
