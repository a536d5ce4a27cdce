use crate::math::{Point2, Point3};

/// A face corner: position plus derived texture coordinates.
///
/// Vertices are owned by their [`Face`](super::Face), which rewrites the
/// texture coordinates whenever its geometry or texture changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// The 3D position of the vertex.
    pub position: Point3,
    /// Texture U coordinate.
    pub u: f64,
    /// Texture V coordinate.
    pub v: f64,
}

impl Vertex {
    /// Creates a new vertex at the given point with zero texture coordinates.
    #[must_use]
    pub fn new(position: Point3) -> Self {
        Self {
            position,
            u: 0.0,
            v: 0.0,
        }
    }

    /// Texture coordinates as a point.
    #[must_use]
    pub fn uv(&self) -> Point2 {
        Point2::new(self.u, self.v)
    }
}
