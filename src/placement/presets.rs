use glam::DVec3;

use crate::config::PlannerConfig;
use crate::types::light::{COOL_WHITE, NEUTRAL_WHITE, WARM_WHITE};
use crate::types::{AmbientLight, LightKind, LightParams, RoomCategory};

/// Intensity for categories missing from the table.
const FALLBACK_INTENSITY: f64 = 1_000.0;

/// Preset intensity for a room category.
pub fn category_intensity(category: RoomCategory) -> f64 {
    use RoomCategory::*;
    match category {
        Kitchen | Office | DiningRoom => 15_000.0,
        LivingRoom | FamilyRoom | Recreation => 12_000.0,
        Bathroom | Garage | LaundryRoom | UtilityRoom | Library | MeetingRoom | Lounge
        | Entryway | Other => 10_000.0,
        Bedroom | Stairs | Bar | Unlabeled => 8_000.0,
        Hallway | Closet | Spa => 6_000.0,
        _ => FALLBACK_INTENSITY,
    }
}

/// Preset color temperature for a room category.
pub fn category_color(category: RoomCategory) -> [f32; 3] {
    match category {
        RoomCategory::Kitchen | RoomCategory::Bathroom | RoomCategory::Office => COOL_WHITE,
        RoomCategory::Bedroom | RoomCategory::LivingRoom | RoomCategory::FamilyRoom => WARM_WHITE,
        _ => NEUTRAL_WHITE,
    }
}

/// Parameters for a room light, from the configured defaults or the
/// category table.
pub fn light_params(config: &PlannerConfig, category: RoomCategory) -> LightParams {
    if config.category_presets {
        LightParams {
            intensity: category_intensity(category),
            color: category_color(category),
            ..config.light
        }
    } else {
        config.light
    }
}

/// Dome fill plus an angled distant key light.
pub fn ambient_rig() -> Vec<AmbientLight> {
    vec![
        AmbientLight {
            name: "AmbientDome".into(),
            rotation: DVec3::ZERO,
            params: LightParams {
                kind: LightKind::Dome,
                intensity: 300.0,
                radius: 0.0,
                color: [0.9, 0.95, 1.0],
            },
        },
        AmbientLight {
            name: "KeyLight".into(),
            rotation: DVec3::new(-30.0, 45.0, 0.0),
            params: LightParams {
                kind: LightKind::Distant,
                intensity: 1_000.0,
                radius: 0.0,
                color: COOL_WHITE,
            },
        },
    ]
}
