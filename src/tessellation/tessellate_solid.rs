use crate::topology::Solid;

use super::{TessellateFace, TriangleMesh};

/// Tessellates all faces of a solid into a combined triangle mesh.
#[derive(Debug, Default, Clone, Copy)]
pub struct TessellateSolid;

impl TessellateSolid {
    /// Creates a new `TessellateSolid` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the tessellation, returning a combined triangle mesh.
    #[must_use]
    pub fn execute(&self, solid: &Solid) -> TriangleMesh {
        let mut combined = TriangleMesh::default();
        for face in solid.faces() {
            combined.merge(&TessellateFace::new().execute(face));
        }
        combined
    }
}
