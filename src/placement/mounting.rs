use crate::config::{MountingPolicy, PlannerConfig};
use crate::types::{BoundingBox, RoomCategory};

/// Rooms taller than this (annotation units) count as high-ceiling.
const HIGH_CEILING: f64 = 4.0;
/// Mount height caps above the floor, in annotation units (metres).
const SMALL_ROOM_CAP: f64 = 2.2;
const STANDARD_CAP: f64 = 2.7;

/// Height above the floor for a category-specific mount, in annotation units.
pub fn category_mount_height(category: RoomCategory, room_height: f64) -> f64 {
    match category {
        RoomCategory::Stairs => room_height * 0.4,
        RoomCategory::Closet | RoomCategory::Toilet => (room_height * 0.8).min(SMALL_ROOM_CAP),
        _ if room_height > HIGH_CEILING => room_height * 0.6,
        _ => (room_height * 0.8).min(STANDARD_CAP),
    }
}

/// Scene-space vertical coordinate of a room's light.
///
/// `center` is the scene-space vertical coordinate of the room center,
/// `room` the room box in scene space and `scale` the annotation → scene
/// factor (category caps are stated in annotation units).
pub fn mount_vertical(
    config: &PlannerConfig,
    category: RoomCategory,
    room: &BoundingBox,
    up: usize,
    center: f64,
    scale: f64,
) -> f64 {
    match config.mounting {
        MountingPolicy::Uniform => center + config.ceiling_offset * (room.max[up] - center),
        MountingPolicy::ByCategory => {
            let height = (room.max[up] - room.min[up]) / scale;
            room.min[up] + category_mount_height(category, height) * scale
        }
    }
}
