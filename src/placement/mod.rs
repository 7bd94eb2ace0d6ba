pub mod mounting;
pub mod presets;
pub mod subdivision;

use glam::DVec3;
use tracing::debug;

use crate::config::PlannerConfig;
use crate::transform::{AxisConvention, ScaleFactor};
use crate::types::{BoundingBox, House, LightParams, LightPlacement, Room};

pub use presets::ambient_rig;

/// Plan the lights for every room of a house, in room order.
///
/// Positions are in destination-scene coordinates: each room center goes
/// through `convention` once, is multiplied by `scale` and offset by
/// `config.translation`, then raised toward the scaled ceiling. Every room
/// gets at least one light, degenerate rooms included.
pub fn plan(
    house: &House,
    convention: &dyn AxisConvention,
    scale: ScaleFactor,
    config: &PlannerConfig,
) -> Vec<LightPlacement> {
    let lights: Vec<LightPlacement> = house
        .rooms
        .iter()
        .flat_map(|room| place_room(house, room, convention, scale.value(), config))
        .collect();

    debug!(
        house = %house.name,
        rooms = house.room_count(),
        lights = lights.len(),
        "Planned room lights"
    );
    lights
}

/// Annotation-space box to scene space: mapped, scaled, translated.
fn scene_box(
    bb: &BoundingBox,
    convention: &dyn AxisConvention,
    scale: f64,
    translation: DVec3,
) -> BoundingBox {
    let mapped = convention.box_to_scene(bb);
    BoundingBox::new(mapped.min * scale + translation, mapped.max * scale + translation)
}

fn place_room(
    house: &House,
    room: &Room,
    convention: &dyn AxisConvention,
    scale: f64,
    config: &PlannerConfig,
) -> Vec<LightPlacement> {
    let category = room.category();
    let up = convention.up_axis();
    let bounds = scene_box(&room.bounds, convention, scale, config.translation);
    if room.bounds.is_degenerate() {
        debug!(house = %house.name, room = room.id, size = %room.bounds.size(), "Degenerate room");
    }

    let mut anchor = convention.to_scene(room.bounds.center()) * scale + config.translation;
    anchor[up] = mounting::mount_vertical(config, category, &bounds, up, anchor[up], scale);

    let positions = match config.subdivision {
        Some(sub) => subdivision::cell_positions(
            &bounds,
            anchor,
            convention.horizontal_axes(),
            sub.max_cell_extent,
        ),
        None => vec![anchor],
    };

    let mut params = presets::light_params(config, category);
    if positions.len() > 1 {
        params = LightParams {
            intensity: params.intensity / positions.len() as f64,
            ..params
        };
    }

    let base = format!("{category}_{:03}", room.id);
    let level_name = house.level_name(room.level);
    positions
        .into_iter()
        .enumerate()
        .map(|(k, position)| LightPlacement {
            room_id: room.id,
            level: room.level,
            level_name: level_name.clone(),
            name: if k == 0 { base.clone() } else { format!("{base}_{k}") },
            position,
            params,
        })
        .collect()
}
