//! satura-test - Regression test framework for satura
//!
//! This crate provides a small regression test harness with two modes:
//!
//! - **Compare** (default): run the checks and record failures
//! - **Display**: additionally write pass outputs as PNG for visual
//!   inspection
//!
//! It also generates the deterministic synthetic images the regression
//! tests run on, so no image files need to be checked in.
//!
//! # Usage
//!
//! ```ignore
//! use satura_test::{RegParams, patterned_image};
//!
//! let mut rp = RegParams::new("flip");
//! rp.compare_values(4.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use satura_core::{LaneOrder, Pix, codec};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // satura-test is at crates/satura-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// A smooth image: red grows left to right, green top to bottom, blue is
/// their difference. The tag byte is 0xff.
///
/// The pixel values are laid out according to `O`, so the same call gives
/// the same picture in either lane order.
pub fn gradient_image<O: LaneOrder>(width: u32, height: u32) -> Pix<O> {
    let wdiv = width.max(2) - 1;
    let hdiv = height.max(2) - 1;
    Pix::from_fn(width, height, |x, y| {
        let r = (x * 255 / wdiv) as u8;
        let g = (y * 255 / hdiv) as u8;
        let b = r.abs_diff(g);
        codec::compose::<O>(r, g, b, 0xff)
    })
    .expect("gradient dimensions")
}

/// A busy image whose channels and tag byte all vary from pixel to pixel.
///
/// Different `seed` values give different images. Saturated primaries,
/// black, white and mid grays all appear in any image of 4x4 or larger.
pub fn patterned_image<O: LaneOrder>(width: u32, height: u32, seed: u32) -> Pix<O> {
    const ANCHORS: [(u8, u8, u8); 8] = [
        (255, 0, 0),
        (0, 255, 0),
        (0, 0, 255),
        (0, 0, 0),
        (255, 255, 255),
        (128, 128, 128),
        (255, 255, 0),
        (12, 200, 190),
    ];
    Pix::from_fn(width, height, |x, y| {
        let i = y.wrapping_mul(width).wrapping_add(x);
        if (x + y) % 4 == 0 {
            let (r, g, b) = ANCHORS[((i / 4).wrapping_add(seed) % 8) as usize];
            return codec::compose::<O>(r, g, b, (i % 256) as u8);
        }
        let r = x.wrapping_mul(37).wrapping_add(y * 91).wrapping_add(seed * 13) % 256;
        let g = x.wrapping_mul(113).wrapping_add(y * 7).wrapping_add(seed * 29) % 256;
        let b = (x ^ y).wrapping_mul(59).wrapping_add(seed * 71) % 256;
        let t = i.wrapping_mul(151).wrapping_add(seed) % 256;
        codec::compose::<O>(r as u8, g as u8, b as u8, t as u8)
    })
    .expect("pattern dimensions")
}

#[cfg(test)]
mod tests {
    use super::*;
    use satura_core::{DecoderOrder, DisplayOrder};

    #[test]
    fn test_gradient_same_picture_in_both_orders() {
        let a = gradient_image::<DecoderOrder>(5, 4);
        let b = gradient_image::<DisplayOrder>(5, 4);
        for (&pa, &pb) in a.data().iter().zip(b.data()) {
            assert_eq!(
                codec::extract_rgb::<DecoderOrder>(pa),
                codec::extract_rgb::<DisplayOrder>(pb)
            );
        }
        assert_eq!(codec::extract_rgb::<DecoderOrder>(a.data()[4]), (255, 0, 255));
    }

    #[test]
    fn test_pattern_depends_on_seed() {
        let a = patterned_image::<DisplayOrder>(9, 3, 1);
        let b = patterned_image::<DisplayOrder>(9, 3, 2);
        assert_ne!(a, b);
        assert_eq!(a, patterned_image::<DisplayOrder>(9, 3, 1));
    }

    #[test]
    fn test_empty_images() {
        assert!(gradient_image::<DisplayOrder>(0, 5).data().is_empty());
        assert!(patterned_image::<DisplayOrder>(5, 0, 3).data().is_empty());
    }
}
