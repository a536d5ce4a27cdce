mod color;
mod face;
mod ids;
mod solid;
mod vertex;

pub use color::Color;
pub use face::{Face, FacePlaneClassification};
pub use ids::{FaceId, IdAllocator, IdKind, SequentialIds, SolidId};
pub use solid::Solid;
pub use vertex::Vertex;
