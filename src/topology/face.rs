use crate::error::{Result, TopologyError};
use crate::geometry::{BoundingBox, Line, Plane, PointPlaneClassification};
use crate::math::polygon_3d::{angle_sum_contains, centroid};
use crate::math::{Matrix4, Point3, Vector3};
use crate::texture::TextureReference;

use super::{Color, FaceId, SolidId, Vertex};

/// Result of classifying a whole face against a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacePlaneClassification {
    /// Every vertex is in front of or on the plane.
    Front,
    /// Every vertex is behind or on the plane.
    Back,
    /// Every vertex lies on the plane.
    OnPlane,
    /// Vertices lie on both sides of the plane.
    Spanning,
}

/// A planar polygon of a brush, with its texture projection.
///
/// Vertices wind clockwise when seen from the front, matching
/// [`Plane::from_points`]. The bounding box and tint colours are refreshed by
/// every mutating method, so they always agree with the current vertices,
/// plane and colour.
#[derive(Debug, Clone)]
pub struct Face {
    pub(crate) id: FaceId,
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) plane: Plane,
    pub(crate) texture: TextureReference,
    pub(crate) bounding_box: BoundingBox,
    pub(crate) colour: Color,
    pub(crate) tint_colour: Color,
    pub(crate) tinted_white: Color,
    pub(crate) parent: Option<SolidId>,
}

impl Face {
    /// Creates a face from an ordered vertex loop, deriving the plane from
    /// the first three points.
    ///
    /// The texture starts world-aligned with unit scale and no shift.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 points are given or the first three
    /// are collinear.
    pub fn new(id: FaceId, points: Vec<Point3>, texture_name: impl Into<String>) -> Result<Self> {
        if points.len() < 3 {
            return Err(TopologyError::TooFewVertices {
                count: points.len(),
            }
            .into());
        }
        let plane = Plane::from_points(&points[0], &points[1], &points[2])?;
        Self::with_plane(id, points, texture_name, plane)
    }

    /// Creates a face from an ordered vertex loop and an explicit plane.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 points are given.
    pub fn with_plane(
        id: FaceId,
        points: Vec<Point3>,
        texture_name: impl Into<String>,
        plane: Plane,
    ) -> Result<Self> {
        if points.len() < 3 {
            return Err(TopologyError::TooFewVertices {
                count: points.len(),
            }
            .into());
        }
        let bounding_box = BoundingBox::from_points(&points)?;
        let mut face = Self {
            id,
            vertices: points.into_iter().map(Vertex::new).collect(),
            plane,
            texture: TextureReference::new(texture_name),
            bounding_box,
            colour: Color::WHITE,
            tint_colour: Color::WHITE,
            tinted_white: Color::WHITE,
            parent: None,
        };
        face.refresh_tints();
        face.align_texture_to_world();
        Ok(face)
    }

    /// Returns the face identifier.
    #[must_use]
    pub fn id(&self) -> FaceId {
        self.id
    }

    /// Returns the vertices in winding order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Iterates over the vertex positions in winding order.
    pub fn points(&self) -> impl Iterator<Item = &Point3> + '_ {
        self.vertices.iter().map(|v| &v.position)
    }

    /// Returns the plane of the face.
    #[must_use]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Replaces the plane and refreshes the tints.
    pub fn set_plane(&mut self, plane: Plane) {
        self.plane = plane;
        self.refresh_tints();
    }

    /// Returns the texture projection.
    #[must_use]
    pub fn texture(&self) -> &TextureReference {
        &self.texture
    }

    /// Returns the cached bounding box of the vertices.
    #[must_use]
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    /// Returns the face colour.
    #[must_use]
    pub fn colour(&self) -> Color {
        self.colour
    }

    /// Sets the face colour and refreshes the tints.
    pub fn set_colour(&mut self, colour: Color) {
        self.colour = colour;
        self.refresh_tints();
    }

    /// The colour darkened according to the facing of the plane.
    #[must_use]
    pub fn tint_colour(&self) -> Color {
        self.tint_colour
    }

    /// White darkened according to the facing of the plane.
    #[must_use]
    pub fn tinted_white(&self) -> Color {
        self.tinted_white
    }

    /// Returns the owning solid, if any.
    #[must_use]
    pub fn parent(&self) -> Option<SolidId> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: SolidId) {
        self.parent = Some(parent);
    }

    /// Average of the vertex positions.
    #[must_use]
    pub fn centroid(&self) -> Point3 {
        let points: Vec<Point3> = self.points().copied().collect();
        centroid(&points).unwrap_or_else(|| self.plane.point_on_plane())
    }

    /// Iterates over the edges, including the closing edge back to the
    /// first vertex.
    pub fn edges(&self) -> impl Iterator<Item = Line> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| {
            Line::new(
                self.vertices[i].position,
                self.vertices[(i + 1) % n].position,
            )
        })
    }

    /// Fan triangulation from the first vertex.
    pub fn triangles(&self) -> impl Iterator<Item = [&Vertex; 3]> + '_ {
        (1..self.vertices.len() - 1).map(move |i| {
            [
                &self.vertices[0],
                &self.vertices[i],
                &self.vertices[i + 1],
            ]
        })
    }

    /// Determines whether the face is in front of, behind, on, or spanning
    /// a plane.
    ///
    /// A vertex on the plane counts as both in front and behind, so a face
    /// touching the plane with some vertices is never spanning on their
    /// account.
    #[must_use]
    pub fn classify_against_plane(&self, plane: &Plane) -> FacePlaneClassification {
        let count = self.vertices.len();
        let (mut front, mut back, mut on) = (0, 0, 0);

        for point in self.points() {
            match plane.classify_point(point) {
                PointPlaneClassification::Front => front += 1,
                PointPlaneClassification::Back => back += 1,
                PointPlaneClassification::On => {
                    front += 1;
                    back += 1;
                    on += 1;
                }
            }
        }

        if on == count {
            FacePlaneClassification::OnPlane
        } else if front == count {
            FacePlaneClassification::Front
        } else if back == count {
            FacePlaneClassification::Back
        } else {
            FacePlaneClassification::Spanning
        }
    }

    /// The point where a segment passes through this face.
    ///
    /// Returns `None` when the segment misses the face plane, or crosses it
    /// outside the polygon.
    #[must_use]
    pub fn intersection_point(&self, line: &Line) -> Option<Point3> {
        let points: Vec<Point3> = self.points().copied().collect();
        let plane = Plane::from_points(&points[0], &points[1], &points[2]).ok()?;
        let hit = plane.intersect_segment(line)?;
        angle_sum_contains(&hit, &points).then_some(hit)
    }

    /// Returns `true` if any edge of the face touches the box.
    #[must_use]
    pub fn intersects_box(&self, bbox: &BoundingBox) -> bool {
        self.edges().any(|edge| bbox.intersects_line(&edge))
    }

    /// Applies a transformation matrix to every vertex.
    ///
    /// The texture axes are left alone, so the texture stays fixed in world
    /// space while the geometry moves under it.
    ///
    /// A mirroring matrix reverses the vertex order so the face keeps
    /// pointing out of its solid.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the face untouched, if the transformed
    /// vertices no longer define a plane.
    pub fn transform(&mut self, matrix: &Matrix4) -> Result<()> {
        let mut moved: Vec<Point3> = self
            .points()
            .map(|p| matrix.transform_point(p))
            .collect();
        let mirrored = matrix.fixed_view::<3, 3>(0, 0).determinant() < 0.0;
        if mirrored {
            moved.reverse();
        }
        let plane = Plane::from_points(&moved[0], &moved[1], &moved[2])?;

        if mirrored {
            self.vertices.reverse();
        }
        for (vertex, position) in self.vertices.iter_mut().zip(moved) {
            vertex.position = position;
        }
        self.set_plane(plane);
        self.calculate_texture_coordinates();
        self.update_bounding_box();
        Ok(())
    }

    fn update_bounding_box(&mut self) {
        if let Ok(bbox) = BoundingBox::from_points(self.points()) {
            self.bounding_box = bbox;
        }
    }

    fn refresh_tints(&mut self) {
        let diff = tint_difference(self.plane.normal());
        self.tint_colour = self.colour.darkened(diff);
        let shade = u8::MAX - diff;
        self.tinted_white = Color::rgb(shade, shade, shade);
    }
}

/// How much to darken a face facing along `normal`, in `0..=128`.
fn tint_difference(normal: &Vector3) -> u8 {
    let tint_vector = Vector3::new(1.0, 2.0, 3.0).normalize();
    let facing = tint_vector.dot(normal);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let diff = (64.0 * (facing + 1.0)).clamp(0.0, 128.0) as u8;
    diff
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::Vector3;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    /// 2x2 square at height `z`, facing up.
    fn floor_face(z: f64) -> Face {
        Face::new(
            FaceId(1),
            vec![p(0.0, 2.0, z), p(2.0, 2.0, z), p(2.0, 0.0, z), p(0.0, 0.0, z)],
            "floor",
        )
        .unwrap()
    }

    #[test]
    fn too_few_vertices_fails() {
        let result = Face::new(FaceId(1), vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)], "x");
        assert!(matches!(
            result,
            Err(crate::BrushError::Topology(TopologyError::TooFewVertices { count: 2 }))
        ));
    }

    #[test]
    fn collinear_start_fails() {
        let result = Face::new(
            FaceId(1),
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(0.0, 1.0, 0.0)],
            "x",
        );
        assert!(result.is_err());
    }

    #[test]
    fn plane_and_box_derived() {
        let face = floor_face(3.0);
        assert_abs_diff_eq!(*face.plane().normal(), v(0.0, 0.0, 1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(face.plane().distance(), 3.0, epsilon = 1e-12);
        assert_eq!(face.bounding_box().min, p(0.0, 0.0, 3.0));
        assert_eq!(face.bounding_box().max, p(2.0, 2.0, 3.0));
    }

    #[test]
    fn explicit_plane_is_kept() {
        let plane = Plane::new(v(0.0, 0.0, -1.0), -3.0).unwrap();
        let face = Face::with_plane(
            FaceId(1),
            vec![p(0.0, 2.0, 3.0), p(2.0, 2.0, 3.0), p(2.0, 0.0, 3.0)],
            "x",
            plane.clone(),
        )
        .unwrap();
        assert_eq!(face.plane(), &plane);
    }

    #[test]
    fn edges_wrap_around() {
        let face = floor_face(0.0);
        let edges: Vec<Line> = face.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].start(), &p(0.0, 0.0, 0.0));
        assert_eq!(edges[3].end(), &p(0.0, 2.0, 0.0));
    }

    #[test]
    fn fan_triangles() {
        let face = floor_face(0.0);
        let tris: Vec<_> = face.triangles().collect();
        assert_eq!(tris.len(), 2);
        assert_eq!(tris[1][0].position, p(0.0, 2.0, 0.0));
        assert_eq!(tris[1][2].position, p(0.0, 0.0, 0.0));
    }

    #[test]
    fn tints_follow_colour_and_plane() {
        let mut face = floor_face(0.0);
        face.set_colour(Color::rgb(200, 200, 200));
        let diff = tint_difference(&v(0.0, 0.0, 1.0));
        assert_eq!(face.tint_colour(), Color::rgb(200 - diff, 200 - diff, 200 - diff));
        assert_eq!(face.tinted_white(), Color::rgb(255 - diff, 255 - diff, 255 - diff));

        face.set_plane(Plane::new(v(0.0, 0.0, -1.0), 0.0).unwrap());
        let diff = tint_difference(&v(0.0, 0.0, -1.0));
        assert_eq!(face.tint_colour(), Color::rgb(200 - diff, 200 - diff, 200 - diff));
    }

    #[test]
    fn tint_difference_range() {
        let toward = Vector3::new(1.0, 2.0, 3.0).normalize();
        assert_eq!(tint_difference(&toward), 128);
        assert_eq!(tint_difference(&-toward), 0);
    }

    // ── classify_against_plane ──

    #[test]
    fn classify_front_back_on() {
        let test_plane = Plane::new(v(0.0, 0.0, 1.0), 0.0).unwrap();
        assert_eq!(
            floor_face(5.0).classify_against_plane(&test_plane),
            FacePlaneClassification::Front
        );
        assert_eq!(
            floor_face(-5.0).classify_against_plane(&test_plane),
            FacePlaneClassification::Back
        );
        assert_eq!(
            floor_face(0.0).classify_against_plane(&test_plane),
            FacePlaneClassification::OnPlane
        );
    }

    #[test]
    fn classify_spanning() {
        let test_plane = Plane::new(v(1.0, 0.0, 0.0), 1.0).unwrap();
        assert_eq!(
            floor_face(0.0).classify_against_plane(&test_plane),
            FacePlaneClassification::Spanning
        );
    }

    #[test]
    fn touching_vertices_do_not_span() {
        // Two vertices on x = 2, the rest behind.
        let test_plane = Plane::new(v(1.0, 0.0, 0.0), 2.0).unwrap();
        assert_eq!(
            floor_face(0.0).classify_against_plane(&test_plane),
            FacePlaneClassification::Back
        );
    }

    // ── intersection_point ──

    #[test]
    fn perpendicular_line_through_centre_hits() {
        let face = floor_face(0.0);
        let line = Line::new(p(1.0, 1.0, 10.0), p(1.0, 1.0, -10.0));
        let hit = face.intersection_point(&line).unwrap();
        assert_abs_diff_eq!(hit, p(1.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn line_outside_footprint_misses() {
        let face = floor_face(0.0);
        let line = Line::new(p(5.0, 1.0, 10.0), p(5.0, 1.0, -10.0));
        assert!(face.intersection_point(&line).is_none());
    }

    #[test]
    fn line_through_vertex_hits() {
        let face = floor_face(0.0);
        let line = Line::new(p(2.0, 2.0, 10.0), p(2.0, 2.0, -10.0));
        assert!(face.intersection_point(&line).is_some());
    }

    #[test]
    fn segment_ending_above_face_misses() {
        let face = floor_face(0.0);
        let line = Line::new(p(1.0, 1.0, 10.0), p(1.0, 1.0, 1.0));
        assert!(face.intersection_point(&line).is_none());
    }

    // ── intersects_box ──

    #[test]
    fn box_touching_edge() {
        let face = floor_face(0.0);
        let hit = BoundingBox::new(p(1.5, -1.0, -1.0), p(3.0, 1.0, 1.0));
        let miss = BoundingBox::new(p(5.0, 5.0, -1.0), p(6.0, 6.0, 1.0));
        assert!(face.intersects_box(&hit));
        assert!(!face.intersects_box(&miss));
    }

    // ── transform ──

    #[test]
    fn translation_moves_plane_and_box() {
        let mut face = floor_face(0.0);
        face.transform(&Matrix4::new_translation(&v(1.0, 0.0, 4.0)))
            .unwrap();
        assert_abs_diff_eq!(face.plane().distance(), 4.0, epsilon = 1e-12);
        assert_eq!(face.bounding_box().min, p(1.0, 0.0, 4.0));
        assert_eq!(face.bounding_box().max, p(3.0, 2.0, 4.0));
    }

    #[test]
    fn transform_keeps_texture_axes() {
        let mut face = floor_face(0.0);
        let before = face.texture().clone();
        let rotation = Matrix4::from_euler_angles(0.0, 0.0, 0.3);
        face.transform(&rotation).unwrap();
        assert_eq!(face.texture().u_axis(), before.u_axis());
        assert_eq!(face.texture().v_axis(), before.v_axis());
    }

    #[test]
    fn mirror_keeps_face_outward() {
        let mut face = floor_face(1.0);
        face.transform(&Matrix4::new_nonuniform_scaling(&v(1.0, 1.0, -1.0)))
            .unwrap();
        // The up-facing floor at z = 1 becomes a down-facing ceiling at z = -1.
        assert_abs_diff_eq!(*face.plane().normal(), v(0.0, 0.0, -1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(face.plane().distance(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn collapsing_transform_is_rejected() {
        let mut face = floor_face(0.0);
        let flatten = Matrix4::new_nonuniform_scaling(&v(1.0, 0.0, 1.0));
        assert!(face.transform(&flatten).is_err());
        assert_eq!(face.bounding_box().max, p(2.0, 2.0, 0.0));
    }
}
