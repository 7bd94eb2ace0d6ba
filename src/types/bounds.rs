use glam::DVec3;
use serde::Serialize;

/// A position or extent in 3-D (`f64` throughout to keep scaled scene
/// coordinates stable across large houses).
pub type Vector3 = DVec3;

/// Axis-aligned bounding box in 3-D.
///
/// The space the corners live in (annotation or destination scene) is a
/// property of where the box came from, not of the type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min: Vector3,
    pub max: Vector3,
}

impl BoundingBox {
    pub fn new(min: Vector3, max: Vector3) -> Self {
        Self { min, max }
    }

    /// Build a box from two corners in any order.
    pub fn from_corners(a: Vector3, b: Vector3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Smallest box containing every point, or `None` for an empty iterator.
    pub fn from_points<I: IntoIterator<Item = Vector3>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let bb = iter.fold(Self::new(first, first), |bb, p| Self {
            min: bb.min.min(p),
            max: bb.max.max(p),
        });
        Some(bb)
    }

    /// Centre point of the box.
    pub fn center(&self) -> Vector3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths along each axis.
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    /// Whether `min <= max` holds on every axis.
    pub fn is_ordered(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    /// Whether the box has zero extent along at least one axis.
    pub fn is_degenerate(&self) -> bool {
        self.size().min_element() <= 0.0
    }

    /// Whether a point lies inside (or on the boundary of) the box.
    pub fn contains_point(&self, p: Vector3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}
