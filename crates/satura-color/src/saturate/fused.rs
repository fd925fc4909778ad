//! Per-pixel fused saturate + flip

use super::saturate_pixel;
use satura_core::{DisplayOrder, PixelGrid};

/// Walk the upper half of the grid, saturating each pixel and its mirror
/// and writing each into the other's position.
pub(super) fn saturate_flip_scalar(grid: &mut PixelGrid<'_, DisplayOrder>, factor: f32) {
    let height = grid.height();
    for y in 0..height / 2 {
        let (top, bottom) = grid.mirrored_rows_mut(y);
        for (t, b) in top.iter_mut().zip(bottom.iter_mut()) {
            let new_top = saturate_pixel(*b, factor);
            let new_bottom = saturate_pixel(*t, factor);
            *t = new_top;
            *b = new_bottom;
        }
    }
    saturate_middle_row(grid, factor);
}

/// Saturate the middle row of an odd-height grid in place.
///
/// The middle row is its own mirror, so it is never moved.
pub(super) fn saturate_middle_row(grid: &mut PixelGrid<'_, DisplayOrder>, factor: f32) {
    let height = grid.height();
    if height % 2 == 0 {
        return;
    }
    for px in grid.row_mut(height / 2) {
        *px = saturate_pixel(*px, factor);
    }
}
