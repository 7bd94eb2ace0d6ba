use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{HouseLightsError, Result};
use crate::types::BoundingBox;

use super::{MeshFormat, gltf_loader, obj_loader, ply_loader};

/// Measures the converted destination scene.
///
/// Returned boxes are in destination-scene axes and units; callers never
/// apply the annotation axis convention to them.
pub trait MeshBoundsQuery: Send + Sync {
    fn mesh_bounds(&self) -> Result<BoundingBox>;
}

/// Bounds that were measured elsewhere (e.g. by the scene runtime).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnownBounds(pub BoundingBox);

impl MeshBoundsQuery for KnownBounds {
    fn mesh_bounds(&self) -> Result<BoundingBox> {
        Ok(self.0)
    }
}

/// An exported copy of the destination scene on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshFile {
    pub path: PathBuf,
}

impl MeshFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MeshBoundsQuery for MeshFile {
    fn mesh_bounds(&self) -> Result<BoundingBox> {
        measure_mesh_file(&self.path)
    }
}

/// Load every vertex position of a mesh file and return their bounds.
pub fn measure_mesh_file(path: &Path) -> Result<BoundingBox> {
    if !path.exists() {
        return Err(HouseLightsError::Input(format!(
            "Mesh file not found: {}",
            path.display()
        )));
    }

    let format = MeshFormat::from_path(path)?;
    debug!(format = %format, path = %path.display(), "Measuring mesh bounds");

    let positions = match format {
        MeshFormat::Obj => obj_loader::load_obj_positions(path)?,
        MeshFormat::Gltf | MeshFormat::Glb => gltf_loader::load_gltf_positions(path)?,
        MeshFormat::Ply => ply_loader::load_ply_positions(path)?,
    };

    let vertex_count = positions.len();
    let bounds = BoundingBox::from_points(positions).ok_or_else(|| {
        HouseLightsError::Input(format!("Mesh has no vertices: {}", path.display()))
    })?;

    info!(
        path = %path.display(),
        vertices = vertex_count,
        min = %bounds.min,
        max = %bounds.max,
        "Measured mesh bounds"
    );
    Ok(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn known_bounds_passthrough() {
        let bb = BoundingBox::new(DVec3::ZERO, DVec3::new(5.0, 3.0, 0.0));
        assert_eq!(KnownBounds(bb).mesh_bounds().unwrap(), bb);
    }

    #[test]
    fn mesh_file_obj_bounds() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scene.obj");
        fs::write(
            &path,
            "v -1 0 2\nv 3 2.5 -4\nv 0 1 0\nf 1 2 3\n",
        )
        .unwrap();

        let bb = MeshFile::new(&path).mesh_bounds().unwrap();
        assert_eq!(bb.min, DVec3::new(-1.0, 0.0, -4.0));
        assert_eq!(bb.max, DVec3::new(3.0, 2.5, 2.0));
    }

    #[test]
    fn mesh_file_missing() {
        let err = MeshFile::new("/nonexistent/scene.obj").mesh_bounds().unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn mesh_file_unsupported_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scene.usd");
        fs::write(&path, "#usda 1.0").unwrap();

        let err = measure_mesh_file(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported mesh format"));
    }
}
