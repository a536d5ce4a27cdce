mod intersect;
mod validate;

pub use intersect::LineIntersect;
pub use validate::{SolidIssue, ValidateSolid};
