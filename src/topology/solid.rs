use crate::error::{Result, TopologyError};
use crate::geometry::BoundingBox;
use crate::math::{Matrix4, Point3};
use crate::texture::{Cloud, PointCloud};

use super::{Color, Face, FaceId, SolidId};

/// A closed polyhedron made of planar faces; one brush.
///
/// Every face belongs to exactly one solid and carries its id as parent.
#[derive(Debug, Clone)]
pub struct Solid {
    id: SolidId,
    color: Color,
    faces: Vec<Face>,
}

impl Solid {
    /// Assembles a solid, taking ownership of its faces.
    ///
    /// Each face is given `color` and this solid as its parent.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 4 faces are given.
    pub fn new(id: SolidId, color: Color, mut faces: Vec<Face>) -> Result<Self> {
        if faces.len() < 4 {
            return Err(TopologyError::TooFewFaces { count: faces.len() }.into());
        }
        for face in &mut faces {
            face.set_parent(id);
            face.set_colour(color);
        }
        Ok(Self { id, color, faces })
    }

    /// Returns the solid identifier.
    #[must_use]
    pub fn id(&self) -> SolidId {
        self.id
    }

    /// Returns the aggregate colour.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the aggregate colour and pushes it to every face.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        for face in &mut self.faces {
            face.set_colour(color);
        }
    }

    /// Returns the faces.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the faces mutably, for texture edits.
    pub fn faces_mut(&mut self) -> &mut [Face] {
        &mut self.faces
    }

    /// Looks up a face by id.
    pub fn face_mut(&mut self, id: FaceId) -> Option<&mut Face> {
        self.faces.iter_mut().find(|f| f.id() == id)
    }

    /// Iterates over every vertex position of every face.
    pub fn points(&self) -> impl Iterator<Item = &Point3> + '_ {
        self.faces.iter().flat_map(Face::points)
    }

    /// Union of the face bounding boxes.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        self.faces
            .iter()
            .map(|f| *f.bounding_box())
            .reduce(|acc, b| acc.union(&b))
            .unwrap_or_else(|| BoundingBox::new(Point3::origin(), Point3::origin()))
    }

    /// The extreme points of the solid, for texture fitting.
    #[must_use]
    pub fn point_cloud(&self) -> Cloud {
        Cloud::new(self.points().copied())
    }

    /// Transforms every face.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the solid untouched, if any face would
    /// collapse.
    pub fn transform(&mut self, matrix: &Matrix4) -> Result<()> {
        let mut faces = self.faces.clone();
        for face in &mut faces {
            face.transform(matrix)?;
        }
        self.faces = faces;
        Ok(())
    }
}

impl PointCloud for Solid {
    fn extreme_points(&self) -> Vec<Point3> {
        self.point_cloud().extreme_points()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    /// Tetrahedron with outward, clockwise-from-outside faces.
    fn tetra() -> Solid {
        let a = p(0.0, 0.0, 0.0);
        let b = p(4.0, 0.0, 0.0);
        let c = p(0.0, 4.0, 0.0);
        let d = p(0.0, 0.0, 4.0);
        let loops = [vec![a, b, c], vec![a, d, b], vec![a, c, d], vec![b, d, c]];
        let faces = loops
            .into_iter()
            .enumerate()
            .map(|(i, pts)| Face::new(FaceId(i as u64 + 1), pts, "tex").unwrap())
            .collect();
        Solid::new(SolidId(7), Color::rgb(100, 150, 200), faces).unwrap()
    }

    #[test]
    fn faces_get_parent_and_colour() {
        let solid = tetra();
        for face in solid.faces() {
            assert_eq!(face.parent(), Some(SolidId(7)));
            assert_eq!(face.colour(), Color::rgb(100, 150, 200));
        }
    }

    #[test]
    fn three_faces_is_not_a_solid() {
        let mut faces: Vec<Face> = tetra().faces().to_vec();
        faces.pop();
        let result = Solid::new(SolidId(1), Color::WHITE, faces);
        assert!(matches!(
            result,
            Err(crate::BrushError::Topology(TopologyError::TooFewFaces { count: 3 }))
        ));
    }

    #[test]
    fn bounding_box_is_union() {
        let bbox = tetra().bounding_box();
        assert_eq!(bbox.min, p(0.0, 0.0, 0.0));
        assert_eq!(bbox.max, p(4.0, 4.0, 4.0));
    }

    #[test]
    fn set_color_reaches_faces() {
        let mut solid = tetra();
        solid.set_color(Color::rgb(1, 2, 3));
        assert!(solid.faces().iter().all(|f| f.colour() == Color::rgb(1, 2, 3)));
    }

    #[test]
    fn face_lookup_by_id() {
        let mut solid = tetra();
        assert!(solid.face_mut(FaceId(3)).is_some());
        assert!(solid.face_mut(FaceId(99)).is_none());
    }

    #[test]
    fn transform_moves_all_faces() {
        let mut solid = tetra();
        solid
            .transform(&Matrix4::new_translation(&v(10.0, 0.0, 0.0)))
            .unwrap();
        let bbox = solid.bounding_box();
        assert_eq!(bbox.min, p(10.0, 0.0, 0.0));
        assert_eq!(bbox.max, p(14.0, 4.0, 4.0));
    }

    #[test]
    fn failed_transform_is_atomic() {
        let mut solid = tetra();
        let before: Vec<Point3> = solid.points().copied().collect();
        let flatten = Matrix4::new_nonuniform_scaling(&v(1.0, 1.0, 0.0));
        assert!(solid.transform(&flatten).is_err());
        let after: Vec<Point3> = solid.points().copied().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn extreme_points_hit_box_faces() {
        let solid = tetra();
        let points = solid.extreme_points();
        assert_eq!(points.len(), 6);
        assert!(points.contains(&p(4.0, 0.0, 0.0)));
        assert!(points.contains(&p(0.0, 0.0, 4.0)));
    }
}
