use std::path::Path;

use glam::{DMat4, DVec3, Mat4};
use tracing::{debug, warn};

use crate::error::{HouseLightsError, Result};

/// Load every vertex position of a glTF or GLB file in world space.
///
/// Node transforms of the default scene (or the first scene) are applied so
/// the result matches what a scene runtime would report. Documents without
/// scenes fall back to raw mesh positions.
pub fn load_gltf_positions(path: &Path) -> Result<Vec<DVec3>> {
    let gltf = gltf::Gltf::open(path)
        .map_err(|e| HouseLightsError::Input(format!("Failed to load glTF: {e}")))?;
    let buffers = gltf::import_buffers(&gltf.document, path.parent(), gltf.blob.clone())
        .map_err(|e| HouseLightsError::Input(format!("Failed to load glTF buffers: {e}")))?;
    let document = &gltf.document;

    debug!(
        meshes = document.meshes().len(),
        nodes = document.nodes().len(),
        "Loaded glTF document"
    );

    let mut positions = Vec::new();
    let scene = document.default_scene().or_else(|| document.scenes().next());

    match scene {
        Some(scene) => {
            for node in scene.nodes() {
                collect_node(&node, DMat4::IDENTITY, &buffers, &mut positions);
            }
        }
        None => {
            for mesh in document.meshes() {
                collect_mesh(&mesh, DMat4::IDENTITY, &buffers, &mut positions);
            }
        }
    }

    Ok(positions)
}

fn collect_node(
    node: &gltf::Node<'_>,
    parent: DMat4,
    buffers: &[gltf::buffer::Data],
    out: &mut Vec<DVec3>,
) {
    let local = Mat4::from_cols_array_2d(&node.transform().matrix()).as_dmat4();
    let world = parent * local;

    if let Some(mesh) = node.mesh() {
        collect_mesh(&mesh, world, buffers, out);
    }
    for child in node.children() {
        collect_node(&child, world, buffers, out);
    }
}

fn collect_mesh(
    mesh: &gltf::Mesh<'_>,
    world: DMat4,
    buffers: &[gltf::buffer::Data],
    out: &mut Vec<DVec3>,
) {
    for primitive in mesh.primitives() {
        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));
        match reader.read_positions() {
            Some(iter) => out.extend(iter.map(|p| {
                world.transform_point3(DVec3::new(p[0] as f64, p[1] as f64, p[2] as f64))
            })),
            None => warn!(mesh = ?mesh.name(), "Skipping primitive without positions"),
        }
    }
}
