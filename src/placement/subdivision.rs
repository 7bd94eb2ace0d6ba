use glam::DVec3;

use crate::types::BoundingBox;

/// Upper bound on grid cells along one horizontal axis.
pub const MAX_CELLS_PER_AXIS: usize = 32;

/// Number of cells needed to cover `extent` with cells no wider than
/// `max_cell_extent`, between one and `MAX_CELLS_PER_AXIS`.
///
/// Past the cap cells grow wider than `max_cell_extent`.
pub fn cell_count(extent: f64, max_cell_extent: f64) -> usize {
    let n = (extent / max_cell_extent).ceil();
    if n.is_nan() || n <= 1.0 {
        1
    } else {
        n.min(MAX_CELLS_PER_AXIS as f64) as usize
    }
}

/// Split the room footprint into a regular grid on the two horizontal axes
/// and return one position per cell center.
///
/// `anchor` supplies the vertical coordinate (and any axis not in
/// `horizontal`). Cells are ordered with the first horizontal axis varying
/// fastest.
pub fn cell_positions(
    room: &BoundingBox,
    anchor: DVec3,
    horizontal: [usize; 2],
    max_cell_extent: f64,
) -> Vec<DVec3> {
    let [a, b] = horizontal;
    let size = room.size();
    let na = cell_count(size[a], max_cell_extent);
    let nb = cell_count(size[b], max_cell_extent);
    let step_a = size[a] / na as f64;
    let step_b = size[b] / nb as f64;

    let mut positions = Vec::with_capacity(na * nb);
    for j in 0..nb {
        for i in 0..na {
            let mut p = anchor;
            p[a] = room.min[a] + step_a * (i as f64 + 0.5);
            p[b] = room.min[b] + step_b * (j as f64 + 0.5);
            positions.push(p);
        }
    }
    positions
}
