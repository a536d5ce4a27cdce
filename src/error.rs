use thiserror::Error;

/// Top-level error type for brush geometry and generation.
#[derive(Debug, Error)]
pub enum BrushError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Structural violations of faces and solids.
///
/// These indicate a bug in the caller, never a user-triggerable state.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("a face needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("a solid needs at least 4 faces, got {count}")]
    TooFewFaces { count: usize },
}

/// Errors related to editing operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`BrushError`].
pub type Result<T> = std::result::Result<T, BrushError>;
