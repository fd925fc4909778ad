//! Lane order swap
//!
//! Converts a buffer between [`DecoderOrder`](crate::DecoderOrder) and
//! [`DisplayOrder`](crate::DisplayOrder) by exchanging the red and blue
//! bytes of every pixel. The storage is reused; only the type tag changes
//! along with the bytes.

use super::{Pix, PixelGrid};
use crate::order::{LaneOrder, swap_red_blue};

fn swap_in_place(data: &mut [u32]) {
    for px in data.iter_mut() {
        *px = swap_red_blue(*px);
    }
}

impl<'a, O: LaneOrder> PixelGrid<'a, O> {
    /// Rewrite every pixel into the other lane order and return the grid
    /// tagged accordingly.
    pub fn swap_lane_order(mut self) -> PixelGrid<'a, O::Swapped> {
        tracing::debug!(
            width = self.width,
            height = self.height,
            from = O::NAME,
            to = <O::Swapped as LaneOrder>::NAME,
            "swap_lane_order"
        );
        swap_in_place(self.data_mut());
        self.retag()
    }
}

impl<O: LaneOrder> Pix<O> {
    /// Rewrite every pixel into the other lane order.
    pub fn swap_lane_order(mut self) -> Pix<O::Swapped> {
        let _ = self.grid().swap_lane_order();
        self.retag()
    }
}
