//! Vertical flip
//!
//! Exchanges row `y` with row `height - 1 - y` for every `y` in the upper
//! half. The middle row of an odd-height image stays where it is. Pixel
//! values are not inspected, so the flip is valid under either lane order.

use super::{Pix, PixelGrid};
use crate::order::LaneOrder;

impl<O: LaneOrder> PixelGrid<'_, O> {
    /// Flip the grid top-to-bottom in place.
    pub fn flip_tb(&mut self) {
        tracing::debug!(width = self.width, height = self.height, "flip_tb");
        for y in 0..self.height / 2 {
            let (top, bottom) = self.mirrored_rows_mut(y);
            top.swap_with_slice(bottom);
        }
    }
}

impl<O: LaneOrder> Pix<O> {
    /// Flip the image top-to-bottom in place.
    pub fn flip_tb(&mut self) {
        self.grid().flip_tb();
    }
}
