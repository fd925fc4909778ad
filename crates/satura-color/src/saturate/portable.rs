//! Lane-by-lane kernel for the chunked engine when `simd` is disabled
//!
//! Always built for tests so it is checked against the vector kernel.

use super::engine::exchange_halves;
use super::mask::{LANES, RowEndMask};
use super::saturate_pixel;

pub(super) struct Kernel {
    factor: f32,
}

impl Kernel {
    pub(super) fn new(factor: f32) -> Self {
        Self { factor }
    }

    /// Saturate all lanes, exchange the halves, then keep the input in
    /// every lane `select` leaves out.
    pub(super) fn saturate_exchange(
        &self,
        lanes: [u32; LANES],
        select: &RowEndMask,
    ) -> [u32; LANES] {
        let exchanged = exchange_halves(lanes.map(|p| saturate_pixel(p, self.factor)));
        let mut out = lanes;
        for ((px, selected), new) in out.iter_mut().zip(select.lanes()).zip(exchanged) {
            if selected {
                *px = new;
            }
        }
        out
    }
}
