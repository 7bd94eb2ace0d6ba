use glam::DVec3;
use serde::Serialize;

use super::bounds::Vector3;

/// Kind of light object the scene-composition side should instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LightKind {
    /// Small spherical emitter mounted in a room.
    Sphere,
    /// Environment dome for ambient fill.
    Dome,
    /// Infinitely distant key light.
    Distant,
}

impl std::fmt::Display for LightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LightKind::Sphere => write!(f, "sphere"),
            LightKind::Dome => write!(f, "dome"),
            LightKind::Distant => write!(f, "distant"),
        }
    }
}

/// Fixed lighting parameters attached to a placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LightParams {
    pub kind: LightKind,
    pub intensity: f64,
    pub radius: f64,
    pub color: [f32; 3],
}

pub const NEUTRAL_WHITE: [f32; 3] = [1.0, 0.98, 0.9];
pub const WARM_WHITE: [f32; 3] = [1.0, 0.95, 0.85];
pub const COOL_WHITE: [f32; 3] = [1.0, 1.0, 0.95];

impl Default for LightParams {
    fn default() -> Self {
        Self {
            kind: LightKind::Sphere,
            intensity: 10_000.0,
            radius: 0.1,
            color: NEUTRAL_WHITE,
        }
    }
}

/// One light to instantiate, already in destination-scene coordinates and units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightPlacement {
    pub room_id: u32,
    pub level: u32,
    /// Level label from the house file, or `Level_<level>`; lets the scene
    /// side group lights per floor.
    pub level_name: String,
    /// Scene-object name, unique within one plan.
    pub name: String,
    pub position: Vector3,
    #[serde(flatten)]
    pub params: LightParams,
}

/// House-wide light with no room of its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmbientLight {
    pub name: String,
    /// Euler rotation in degrees (XYZ order).
    pub rotation: DVec3,
    #[serde(flatten)]
    pub params: LightParams,
}

/// Everything handed to the scene-composition collaborator for one house.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightingPlan {
    pub house: String,
    pub scale: f64,
    pub lights: Vec<LightPlacement>,
    pub ambient: Vec<AmbientLight>,
}

impl LightingPlan {
    pub fn total_lights(&self) -> usize {
        self.lights.len() + self.ambient.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params() {
        let p = LightParams::default();
        assert_eq!(p.kind, LightKind::Sphere);
        assert!((p.intensity - 10_000.0).abs() < f64::EPSILON);
        assert!((p.radius - 0.1).abs() < f64::EPSILON);
        assert_eq!(p.color, NEUTRAL_WHITE);
    }

    #[test]
    fn light_kind_display() {
        assert_eq!(LightKind::Sphere.to_string(), "sphere");
        assert_eq!(LightKind::Dome.to_string(), "dome");
        assert_eq!(LightKind::Distant.to_string(), "distant");
    }

    #[test]
    fn placement_serializes_flat() {
        let placement = LightPlacement {
            room_id: 3,
            level: 1,
            level_name: "Level_1".into(),
            name: "kitchen_003".into(),
            position: DVec3::new(1.0, 2.0, -3.0),
            params: LightParams::default(),
        };
        let value = serde_json::to_value(&placement).unwrap();
        assert_eq!(value["room_id"], 3);
        assert_eq!(value["name"], "kitchen_003");
        assert_eq!(value["level_name"], "Level_1");
        assert_eq!(value["kind"], "sphere");
        assert_eq!(value["position"], serde_json::json!([1.0, 2.0, -3.0]));
    }

    #[test]
    fn plan_counts_all_lights() {
        let plan = LightingPlan {
            house: "h".into(),
            scale: 1.0,
            lights: vec![],
            ambient: vec![AmbientLight {
                name: "AmbientDome".into(),
                rotation: DVec3::ZERO,
                params: LightParams {
                    kind: LightKind::Dome,
                    ..Default::default()
                },
            }],
        };
        assert_eq!(plan.total_lights(), 1);
    }
}
