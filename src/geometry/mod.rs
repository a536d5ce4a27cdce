mod bbox;
mod line;
mod plane;

pub use bbox::BoundingBox;
pub use line::Line;
pub use plane::{Axis, Plane, PointPlaneClassification};
