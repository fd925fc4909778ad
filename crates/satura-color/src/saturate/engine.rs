//! Chunked fused saturate + flip
//!
//! Each step loads up to [`CHUNK`] pixels from row `y` and the same columns
//! of row `height - 1 - y`, saturates all lanes at once, exchanges the two
//! halves and writes them back. Only the pixels that were loaded are
//! written, so the tail of a row never touches memory past the row end.

use super::fused::saturate_middle_row;
use super::mask::{CHUNK, LANES, RowEndMask};
#[cfg(not(feature = "simd"))]
pub(super) use super::portable::Kernel as ActiveKernel;
#[cfg(feature = "simd")]
pub(super) use super::simd::Kernel as ActiveKernel;
use satura_core::{DisplayOrder, PixelGrid};

pub(super) fn saturate_flip_chunked(grid: &mut PixelGrid<'_, DisplayOrder>, factor: f32) {
    let height = grid.height();
    let row_end = RowEndMask::for_width(grid.width());
    let kernel = ActiveKernel::new(factor);

    for y in 0..height / 2 {
        let (top, bottom) = grid.mirrored_rows_mut(y);
        for (t, b) in top.chunks_mut(CHUNK).zip(bottom.chunks_mut(CHUNK)) {
            let n = t.len();
            let select = if n < CHUNK { &row_end } else { &RowEndMask::FULL };

            let mut lanes = [0u32; LANES];
            lanes[..n].copy_from_slice(t);
            lanes[CHUNK..CHUNK + n].copy_from_slice(b);

            let out = kernel.saturate_exchange(lanes, select);

            t.copy_from_slice(&out[..n]);
            b.copy_from_slice(&out[CHUNK..CHUNK + n]);
        }
    }

    saturate_middle_row(grid, factor);
}

/// Swap the two halves of a step: lanes `0..CHUNK` trade places with
/// lanes `CHUNK..LANES`.
#[inline]
pub(super) fn exchange_halves(lanes: [u32; LANES]) -> [u32; LANES] {
    let mut out = [0u32; LANES];
    out[..CHUNK].copy_from_slice(&lanes[CHUNK..]);
    out[CHUNK..].copy_from_slice(&lanes[..CHUNK]);
    out
}

#[cfg(test)]
mod tests {
    use super::super::{fused::saturate_flip_scalar, saturate_pixel};
    use super::*;
    use satura_core::{Pix, codec};

    fn image(width: u32, height: u32) -> Pix<DisplayOrder> {
        Pix::from_fn(width, height, |x, y| {
            codec::compose::<DisplayOrder>(
                (x * 37 + y * 11) as u8,
                (x * 5 + y * 71) as u8,
                (x * 113 + y * 3) as u8,
                (x + y) as u8,
            )
        })
        .unwrap()
    }

    #[test]
    fn test_exchange_halves() {
        let out = exchange_halves([0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(out, [4, 5, 6, 7, 0, 1, 2, 3]);
    }

    #[test]
    fn test_kernel_masked_lanes_keep_input() {
        let kernel = ActiveKernel::new(0.0);
        let lanes = [
            0xff_ff_00_00,
            0xff_00_ff_00,
            0xff_00_00_ff,
            0xff_12_34_56,
            0x01_ff_00_00,
            0x02_00_ff_00,
            0x03_00_00_ff,
            0x04_12_34_56,
        ];
        let mask = RowEndMask::for_width(3);
        let out = kernel.saturate_exchange(lanes, &mask);
        for i in 0..LANES {
            let source = lanes[(i + CHUNK) % LANES];
            if mask.is_selected(i) {
                assert_eq!(out[i], saturate_pixel(source, 0.0), "lane {i}");
            } else {
                assert_eq!(out[i], lanes[i], "lane {i}");
            }
        }
    }

    #[test]
    fn test_matches_scalar_engine() {
        for width in [1, 3, 4, 6, 9] {
            for height in [1, 2, 5] {
                let mut chunked = image(width, height);
                let mut scalar = chunked.clone();
                saturate_flip_chunked(&mut chunked.grid(), 1.7);
                saturate_flip_scalar(&mut scalar.grid(), 1.7);
                assert_eq!(chunked, scalar, "{width}x{height}");
            }
        }
    }
}
