//! Vector kernel for the chunked engine, backed by `wide`
//!
//! Every lane goes through the same float operations as
//! [`saturate_pixel`](super::saturate_pixel), in the same order and without
//! fused multiply-add, so results match the scalar path exactly.

use super::engine::exchange_halves;
use super::mask::{LANES, RowEndMask};
use crate::colorspace::{LUMA_B, LUMA_G, LUMA_R};
use satura_core::TAG_MASK;
use wide::{f32x8, i32x8};

pub(super) struct Kernel {
    factor: f32x8,
    luma_r: f32x8,
    luma_g: f32x8,
    luma_b: f32x8,
    zero: f32x8,
    max: f32x8,
}

impl Kernel {
    pub(super) fn new(factor: f32) -> Self {
        Self {
            factor: f32x8::splat(factor),
            luma_r: f32x8::splat(LUMA_R),
            luma_g: f32x8::splat(LUMA_G),
            luma_b: f32x8::splat(LUMA_B),
            zero: f32x8::splat(0.0),
            max: f32x8::splat(255.0),
        }
    }

    /// Saturate all lanes, exchange the halves, then keep the input in
    /// every lane `select` leaves out.
    pub(super) fn saturate_exchange(
        &self,
        lanes: [u32; LANES],
        select: &RowEndMask,
    ) -> [u32; LANES] {
        let input = i32x8::new(lanes.map(|p| p as i32));
        let saturated = self.saturate(input).to_array().map(|p| p as u32);
        let exchanged = i32x8::new(exchange_halves(saturated).map(|p| p as i32));

        let mask = i32x8::new(select.lanes().map(|s| if s { -1 } else { 0 }));
        mask.blend(exchanged, input).to_array().map(|p| p as u32)
    }

    #[inline]
    fn saturate(&self, px: i32x8) -> i32x8 {
        let byte = i32x8::splat(0xff);
        let r = ((px >> 16_i32) & byte).round_float();
        let g = ((px >> 8_i32) & byte).round_float();
        let b = (px & byte).round_float();

        let lum = r * self.luma_r + g * self.luma_g + b * self.luma_b;

        let r = self.channel(r, lum);
        let g = self.channel(g, lum);
        let b = self.channel(b, lum);

        (px & i32x8::splat(TAG_MASK as i32)) | (r << 16_i32) | (g << 8_i32) | b
    }

    #[inline]
    fn channel(&self, c: f32x8, lum: f32x8) -> i32x8 {
        let out = lum + (c - lum) * self.factor;
        out.min(self.max).max(self.zero).trunc_int()
    }
}

#[cfg(test)]
mod tests {
    use super::super::saturate_pixel;
    use super::*;

    #[test]
    fn test_lanes_match_scalar_transform() {
        let lanes = [
            0xff_ff_00_00,
            0x80_c0_40_20,
            0x00_ff_ff_ff,
            0x11_00_00_00,
            0x7f_12_34_56,
            0xff_ff_ff_00,
            0x01_80_80_80,
            0xfe_0a_c8_be,
        ];
        for factor in [0.0, 0.5, 1.0, 1.5, 3.0, 100.0] {
            let kernel = Kernel::new(factor);
            let input = i32x8::new(lanes.map(|p| p as i32));
            let out = kernel.saturate(input).to_array();
            for (i, &px) in lanes.iter().enumerate() {
                assert_eq!(
                    out[i] as u32,
                    saturate_pixel(px, factor),
                    "lane {i} factor {factor}"
                );
            }
        }
    }
}
