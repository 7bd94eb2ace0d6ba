use std::path::Path;

use glam::DVec3;
use tracing::debug;

use crate::error::{HouseLightsError, Result};

/// Load every vertex position of an OBJ file. Materials are not read.
pub fn load_obj_positions(path: &Path) -> Result<Vec<DVec3>> {
    let (models, _materials) = tobj::load_obj(path, &tobj::GPU_LOAD_OPTIONS)
        .map_err(|e| HouseLightsError::Input(format!("Failed to load OBJ: {e}")))?;

    debug!(model_count = models.len(), "Loaded OBJ models");

    Ok(models
        .iter()
        .flat_map(|model| positions_of(&model.mesh))
        .collect())
}

/// Convert a `tobj::Mesh` position buffer into `f64` points.
fn positions_of(mesh: &tobj::Mesh) -> impl Iterator<Item = DVec3> + '_ {
    mesh.positions
        .chunks_exact(3)
        .map(|p| DVec3::new(p[0] as f64, p[1] as f64, p[2] as f64))
}
