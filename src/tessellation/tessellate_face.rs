use crate::topology::Face;

use super::TriangleMesh;

/// Tessellates a face into a triangle fan.
///
/// Faces are convex, so the fan from the first vertex covers them exactly.
/// Triangles keep the face winding and every vertex carries the plane normal
/// and the face's texture coordinates.
#[derive(Debug, Default, Clone, Copy)]
pub struct TessellateFace;

impl TessellateFace {
    /// Creates a new `TessellateFace` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the tessellation, returning a triangle mesh.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self, face: &Face) -> TriangleMesh {
        let vertices = face.vertices();
        let normal = *face.plane().normal();
        let count = vertices.len() as u32;

        TriangleMesh {
            vertices: vertices.iter().map(|v| v.position).collect(),
            normals: vec![normal; vertices.len()],
            uvs: vertices.iter().map(crate::topology::Vertex::uv).collect(),
            indices: (1..count.saturating_sub(1)).map(|i| [0, i, i + 1]).collect(),
        }
    }
}
