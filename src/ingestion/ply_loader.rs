use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use glam::DVec3;
use ply_rs::parser::Parser;
use ply_rs::ply::{DefaultElement, Property};
use tracing::debug;

use crate::error::{HouseLightsError, Result};

/// Load every vertex position of a PLY file. Faces are not read.
pub fn load_ply_positions(path: &Path) -> Result<Vec<DVec3>> {
    let file = File::open(path)
        .map_err(|e| HouseLightsError::Input(format!("Failed to open PLY: {e}")))?;
    let mut reader = BufReader::new(file);

    let parser = Parser::<DefaultElement>::new();
    let ply = parser
        .read_ply(&mut reader)
        .map_err(|e| HouseLightsError::Input(format!("Failed to parse PLY: {e}")))?;

    let vertices = ply
        .payload
        .get("vertex")
        .ok_or_else(|| HouseLightsError::Input("PLY file missing 'vertex' element".into()))?;

    debug!(vertex_count = vertices.len(), "Parsing PLY vertices");

    vertices
        .iter()
        .map(|vertex| {
            Ok(DVec3::new(
                get_float_property(vertex, "x")?,
                get_float_property(vertex, "y")?,
                get_float_property(vertex, "z")?,
            ))
        })
        .collect()
}

/// Extract a scalar property as `f64`, handling every numeric PLY type.
fn get_float_property(element: &DefaultElement, key: &str) -> Result<f64> {
    let prop = element.get(key).ok_or_else(|| {
        HouseLightsError::Input(format!("PLY vertex missing property '{key}'"))
    })?;

    match prop {
        Property::Float(v) => Ok(*v as f64),
        Property::Double(v) => Ok(*v),
        Property::Int(v) => Ok(*v as f64),
        Property::Short(v) => Ok(*v as f64),
        Property::UInt(v) => Ok(*v as f64),
        Property::UShort(v) => Ok(*v as f64),
        Property::Char(v) => Ok(*v as f64),
        Property::UChar(v) => Ok(*v as f64),
        _ => Err(HouseLightsError::Input(format!(
            "PLY property '{key}' has unsupported type"
        ))),
    }
}
