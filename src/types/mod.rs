pub mod bounds;
pub mod house;
pub mod light;

pub use bounds::{BoundingBox, Vector3};
pub use house::{House, Level, Room, RoomCategory};
pub use light::{AmbientLight, LightKind, LightParams, LightPlacement, LightingPlan};
