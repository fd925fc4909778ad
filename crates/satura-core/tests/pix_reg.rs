//! Buffer primitive regression test
//!
//! Vertical flip and lane order swap: both must be involutions, the flip
//! must mirror rows exactly and the swap must only exchange the red and
//! blue bytes.

use satura_core::{DecoderOrder, DisplayOrder, Pix, codec};
use satura_test::{RegParams, gradient_image, patterned_image};

const WIDTHS: [u32; 6] = [1, 2, 3, 4, 7, 16];
const HEIGHTS: [u32; 5] = [1, 2, 3, 8, 9];

#[test]
fn flip_reg() {
    let mut rp = RegParams::new("flip");

    // --- Test 1: flipping twice restores the buffer ---
    eprintln!("=== Flip involution ===");
    for &w in &WIDTHS {
        for &h in &HEIGHTS {
            let original = patterned_image::<DisplayOrder>(w, h, w * 31 + h);
            let mut pix = original.clone();
            pix.flip_tb();
            pix.flip_tb();
            rp.compare_pix(&original, &pix);
        }
    }

    // --- Test 2: row y lands at row h - 1 - y ---
    eprintln!("=== Flip row mapping ===");
    let original = patterned_image::<DecoderOrder>(5, 7, 3);
    let mut flipped = original.clone();
    flipped.flip_tb();
    let mut mismatches = 0;
    for y in 0..7 {
        for x in 0..5 {
            if original.get_pixel(x, y) != flipped.get_pixel(x, 6 - y) {
                mismatches += 1;
            }
        }
    }
    rp.compare_values(0.0, mismatches as f64, 0.0);
    rp.write_pix_for_display(&flipped, "flipped")
        .expect("write flipped");

    // --- Test 3: empty buffers are a no-op ---
    let mut empty = Pix::<DisplayOrder>::new(0, 5).unwrap();
    empty.flip_tb();
    rp.compare_values(0.0, empty.data().len() as f64, 0.0);

    assert!(rp.cleanup(), "flip regression test failed");
}

#[test]
fn swap_reg() {
    let mut rp = RegParams::new("swap");

    // --- Test 1: swapping twice restores the buffer ---
    eprintln!("=== Swap involution ===");
    for &w in &WIDTHS {
        for &h in &HEIGHTS {
            let original = patterned_image::<DecoderOrder>(w, h, w + h * 17);
            let back = original.clone().swap_lane_order().swap_lane_order();
            rp.compare_pix(&original, &back);
        }
    }

    // --- Test 2: channels read the same after a swap ---
    eprintln!("=== Swap keeps colors ===");
    let decoded = gradient_image::<DecoderOrder>(9, 4);
    let display: Pix<DisplayOrder> = decoded.clone().swap_lane_order();
    let mut mismatches = 0;
    for (&d, &s) in decoded.data().iter().zip(display.data()) {
        if codec::extract_rgb::<DecoderOrder>(d) != codec::extract_rgb::<DisplayOrder>(s)
            || codec::tag(d) != codec::tag(s)
        {
            mismatches += 1;
        }
    }
    rp.compare_values(0.0, mismatches as f64, 0.0);

    // --- Test 3: the same picture built in either order swaps to the other ---
    let built = gradient_image::<DisplayOrder>(9, 4);
    rp.compare_pix(&built, &display);

    // --- Test 4: literal byte layout ---
    let pix = Pix::<DecoderOrder>::from_vec(vec![0x80_33_22_11], 1, 1).unwrap();
    let swapped = pix.swap_lane_order();
    rp.compare_values(0x80_11_22_33u32 as f64, swapped.data()[0] as f64, 0.0);

    assert!(rp.cleanup(), "swap regression test failed");
}
