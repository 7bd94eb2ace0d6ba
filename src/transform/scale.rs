use glam::DVec3;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ScaleConfig;
use crate::error::{HouseLightsError, Result};
use crate::types::BoundingBox;

use super::AxisConvention;

/// Uniform annotation → scene scale. Always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Per-axis `mesh / house` ratios in scene axes; `None` where the house has
/// no extent. Diagnostics only: the resolver uses a single axis.
pub fn axis_ratios(house_scene_size: DVec3, mesh_size: DVec3) -> [Option<f64>; 3] {
    std::array::from_fn(|i| {
        (house_scene_size[i] > 0.0).then(|| mesh_size[i] / house_scene_size[i])
    })
}

/// Whether the defined per-axis ratios spread by more than `tolerance`
/// (relative). A zero ratio means the mesh is flat where the house is not,
/// which always counts as disagreement.
pub fn ratios_disagree(ratios: &[Option<f64>; 3], tolerance: f64) -> bool {
    let defined: Vec<f64> = ratios.iter().flatten().copied().collect();
    let lo = defined.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = defined.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    match defined.len() {
        0 | 1 => false,
        _ if lo <= 0.0 => true,
        _ => hi / lo - 1.0 > tolerance,
    }
}

/// Compute the uniform scale that maps annotation lengths onto the measured
/// destination mesh.
///
/// The house box is mapped into scene axes first, then compared with the
/// mesh along `config.axis`. The remaining axes are only checked for
/// agreement; a uniform scale is an approximation when they differ.
pub fn resolve_scale(
    house: &str,
    house_bbox: &BoundingBox,
    mesh_bbox: &BoundingBox,
    convention: &dyn AxisConvention,
    config: &ScaleConfig,
) -> Result<ScaleFactor> {
    let house_size = convention.size_to_scene(house_bbox.size());
    let mesh_size = mesh_bbox.size();
    let axis = config.axis;
    let i = axis.index();

    if house_size[i] <= 0.0 {
        return Err(HouseLightsError::degenerate(
            house,
            format!("house extent along scene {axis} is zero (scene size {house_size})"),
        ));
    }
    if mesh_size[i] <= 0.0 {
        return Err(HouseLightsError::degenerate(
            house,
            format!("mesh extent along scene {axis} is zero (mesh size {mesh_size})"),
        ));
    }

    let factor = mesh_size[i] / house_size[i];
    let scale = ScaleFactor::new(factor).ok_or_else(|| {
        HouseLightsError::degenerate(house, format!("scale factor {factor} is not finite and positive"))
    })?;

    let ratios = axis_ratios(house_size, mesh_size);
    if ratios_disagree(&ratios, config.agreement_tolerance) {
        warn!(
            house,
            scale = factor,
            ratios = ?ratios,
            "Per-axis scale ratios disagree; using uniform scale"
        );
    }

    debug!(house, axis = %axis, scale = factor, "Resolved scale");
    Ok(scale)
}

/// Translation that puts the scaled, mapped house center on the mesh center.
pub fn resolve_alignment(
    house_bbox: &BoundingBox,
    mesh_bbox: &BoundingBox,
    convention: &dyn AxisConvention,
    scale: ScaleFactor,
) -> DVec3 {
    mesh_bbox.center() - convention.to_scene(house_bbox.center()) * scale.value()
}
