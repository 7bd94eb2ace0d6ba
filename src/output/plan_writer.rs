use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::error::{HouseLightsError, Result};
use crate::types::LightingPlan;

use super::LightSink;

/// Writes each plan as `<out_dir>/<house>.lights.json`.
#[derive(Debug, Clone)]
pub struct JsonPlanWriter {
    out_dir: PathBuf,
}

impl JsonPlanWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn plan_path(&self, house: &str) -> PathBuf {
        self.out_dir.join(format!("{house}.lights.json"))
    }
}

impl LightSink for JsonPlanWriter {
    fn compose(&self, plan: &LightingPlan) -> Result<()> {
        fs::create_dir_all(&self.out_dir).map_err(|e| {
            HouseLightsError::Output(format!(
                "Failed to create output directory {}: {e}",
                self.out_dir.display()
            ))
        })?;

        let path = self.plan_path(&plan.house);
        let json = serde_json::to_string_pretty(plan).map_err(|e| {
            HouseLightsError::Output(format!("Failed to serialize plan for {}: {e}", plan.house))
        })?;

        fs::write(&path, json).map_err(|e| {
            HouseLightsError::Output(format!("Failed to write {}: {e}", path.display()))
        })?;

        info!(
            house = %plan.house,
            lights = plan.total_lights(),
            path = %path.display(),
            "Wrote lighting plan"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LightParams, LightPlacement};
    use glam::DVec3;

    fn sample_plan() -> LightingPlan {
        LightingPlan {
            house: "17DRP5sb8fy".into(),
            scale: 0.5,
            lights: vec![LightPlacement {
                room_id: 0,
                level: 0,
                level_name: "Level_0".into(),
                name: "bedroom_000".into(),
                position: DVec3::new(0.5, 0.8, 0.0),
                params: LightParams::default(),
            }],
            ambient: vec![],
        }
    }

    #[test]
    fn writes_pretty_json_named_after_house() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = JsonPlanWriter::new(tmp.path().join("plans"));
        writer.compose(&sample_plan()).unwrap();

        let path = tmp.path().join("plans/17DRP5sb8fy.lights.json");
        assert_eq!(writer.plan_path("17DRP5sb8fy"), path);
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["house"], "17DRP5sb8fy");
        assert_eq!(value["scale"], 0.5);
        assert_eq!(value["lights"][0]["name"], "bedroom_000");
        assert_eq!(value["lights"][0]["intensity"], 10_000.0);
        assert_eq!(value["ambient"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn unwritable_directory_is_output_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("file");
        fs::write(&blocker, b"x").unwrap();

        let writer = JsonPlanWriter::new(blocker.join("sub"));
        let err = writer.compose(&sample_plan()).unwrap_err();
        assert!(matches!(err, HouseLightsError::Output(_)));
    }
}
