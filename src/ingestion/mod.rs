pub mod gltf_loader;
pub mod house_parser;
pub mod mesh_bounds;
pub mod obj_loader;
pub mod ply_loader;

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{HouseLightsError, Result};
use crate::types::House;

pub use house_parser::parse_house;
pub use mesh_bounds::{KnownBounds, MeshBoundsQuery, MeshFile};

/// Mesh formats the destination scene can be measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshFormat {
    Obj,
    Gltf,
    Glb,
    Ply,
}

impl MeshFormat {
    /// Detect format from file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "obj" => Ok(MeshFormat::Obj),
            "gltf" => Ok(MeshFormat::Gltf),
            "glb" => Ok(MeshFormat::Glb),
            "ply" => Ok(MeshFormat::Ply),
            _ => Err(HouseLightsError::Input(format!(
                "Unsupported mesh format: .{ext}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MeshFormat::Obj => "OBJ",
            MeshFormat::Gltf => "glTF",
            MeshFormat::Glb => "GLB",
            MeshFormat::Ply => "PLY",
        }
    }
}

impl std::fmt::Display for MeshFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// House identifier derived from a file path (the file stem).
pub fn house_id(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("<unnamed>")
        .to_string()
}

/// Read and parse one `.house` file.
pub fn load_house(path: &Path) -> Result<House> {
    let id = house_id(path);
    let content = fs::read_to_string(path).map_err(|e| {
        HouseLightsError::Input(format!(
            "Failed to read house file {}: {e}",
            path.display()
        ))
    })?;

    let house = parse_house(&id, &content)?;
    info!(
        house = %id,
        rooms = house.rooms.len(),
        path = %path.display(),
        "Loaded house file"
    );
    Ok(house)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn format_detection() {
        assert_eq!(MeshFormat::from_path(Path::new("house.obj")).unwrap(), MeshFormat::Obj);
        assert_eq!(MeshFormat::from_path(Path::new("scene.gltf")).unwrap(), MeshFormat::Gltf);
        assert_eq!(MeshFormat::from_path(Path::new("scene.glb")).unwrap(), MeshFormat::Glb);
        assert_eq!(MeshFormat::from_path(Path::new("cloud.ply")).unwrap(), MeshFormat::Ply);
    }

    #[test]
    fn format_detection_case_insensitive() {
        assert_eq!(MeshFormat::from_path(Path::new("House.OBJ")).unwrap(), MeshFormat::Obj);
        assert_eq!(MeshFormat::from_path(Path::new("Scene.GLB")).unwrap(), MeshFormat::Glb);
    }

    #[test]
    fn format_detection_unsupported() {
        let err = MeshFormat::from_path(Path::new("house.usd")).unwrap_err();
        assert!(err.to_string().contains(".usd"));
    }

    #[test]
    fn house_id_is_file_stem() {
        assert_eq!(house_id(Path::new("/scans/1LXtFkjw3qL.house")), "1LXtFkjw3qL");
    }

    #[test]
    fn load_house_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("abc.house");
        fs::write(
            &path,
            "ASCII 1.1\nH abc house 0 0 0 0 0 0 0 1 0 1 0 0 0 0 0 0 0 0 4 4 3 0 0 0 0 0\n\
             R 0 0 0 0 k 2 2 1.5 0 0 0 4 4 3 3 0 0 0 0\n",
        )
        .unwrap();

        let house = load_house(&path).unwrap();
        assert_eq!(house.name, "abc");
        assert_eq!(house.rooms.len(), 1);
    }

    #[test]
    fn load_house_missing_file() {
        let err = load_house(Path::new("/nonexistent/x.house")).unwrap_err();
        assert!(matches!(err, HouseLightsError::Input(_)));
        assert!(err.to_string().contains("Failed to read house file"));
    }

    #[test]
    fn load_house_reports_file_stem_on_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.house");
        fs::write(&path, "R 0 0 0 0 k 2 2 1.5 0 0 0 4 4 3 3\n").unwrap();

        let err = load_house(&path).unwrap_err();
        match err {
            HouseLightsError::MalformedHouseFile { house, line, .. } => {
                assert_eq!(house, "broken");
                assert_eq!(line, Some(1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
