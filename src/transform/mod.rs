pub mod scale;

use glam::DVec3;

use crate::config::AxisMapping;
use crate::types::BoundingBox;

pub use scale::{ScaleFactor, axis_ratios, ratios_disagree, resolve_alignment, resolve_scale};

/// Maps annotation-space points into destination-scene space.
///
/// Implementations must be signed axis permutations (rotations by multiples
/// of 90° about the principal axes), so boxes map to boxes and sizes map to
/// sizes. The mapping is a basis change: apply it exactly once per point.
pub trait AxisConvention: Send + Sync {
    /// Map one annotation-space point into scene space.
    fn to_scene(&self, p: DVec3) -> DVec3;

    /// Index of the destination-scene vertical axis.
    fn up_axis(&self) -> usize;

    /// Map an extent (edge lengths) into scene space. Always non-negative.
    fn size_to_scene(&self, size: DVec3) -> DVec3 {
        self.to_scene(size).abs()
    }

    /// Map an annotation-space box into scene space.
    fn box_to_scene(&self, bb: &BoundingBox) -> BoundingBox {
        BoundingBox::from_corners(self.to_scene(bb.min), self.to_scene(bb.max))
    }

    /// The two destination-scene axes orthogonal to `up_axis`, ascending.
    fn horizontal_axes(&self) -> [usize; 2] {
        match self.up_axis() {
            0 => [1, 2],
            1 => [0, 2],
            _ => [0, 1],
        }
    }
}

/// −90° rotation about X: `(x, y, z)` → `(x, z, −y)`.
///
/// Annotation space is Z-up; after the mesh conversion step the scene is
/// Y-up, so annotation heights land on scene Y.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuarterTurnX;

impl AxisConvention for QuarterTurnX {
    fn to_scene(&self, p: DVec3) -> DVec3 {
        DVec3::new(p.x, p.z, -p.y)
    }

    fn up_axis(&self) -> usize {
        1
    }
}

/// No axis change; for conversion pipelines that keep annotation axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl AxisConvention for Identity {
    fn to_scene(&self, p: DVec3) -> DVec3 {
        p
    }

    fn up_axis(&self) -> usize {
        2
    }
}

impl AxisMapping {
    pub fn convention(self) -> &'static dyn AxisConvention {
        match self {
            AxisMapping::QuarterTurnX => &QuarterTurnX,
            AxisMapping::Identity => &Identity,
        }
    }
}
