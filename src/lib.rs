pub mod brushes;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;
pub mod texture;
pub mod topology;

pub use error::{BrushError, Result};
