//! Lane orders of packed 32-bit pixels
//!
//! Two byte layouts coexist. The PNG loader produces *decoder order*
//! (red in the low byte) while display surfaces expect *display order*
//! (red in bits 16-23). Buffers carry their order as a type parameter so a
//! pass written for one layout cannot be handed the other by accident.
//!
//! | Order            | bits 0-7 | 8-15 | 16-23 | 24-31 |
//! |------------------|----------|------|-------|-------|
//! | [`DecoderOrder`] | R        | G    | B     | tag   |
//! | [`DisplayOrder`] | B        | G    | R     | tag   |
//!
//! The tag byte (alpha, or whatever the surface stores there) is never
//! modified by any operation in this workspace.

use std::fmt::Debug;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::DecoderOrder {}
    impl Sealed for super::DisplayOrder {}
}

/// Bits occupied by the untouched fourth byte in both orders.
pub const TAG_MASK: u32 = 0xff00_0000;

/// Byte layout of a packed pixel.
pub trait LaneOrder: sealed::Sealed + Copy + Default + Debug + Send + Sync + 'static {
    /// The order reached by exchanging the red and blue bytes.
    type Swapped: LaneOrder<Swapped = Self>;

    /// Human-readable name, used in log output.
    const NAME: &'static str;

    /// Shift of the red channel.
    const RED_SHIFT: u32;
    /// Shift of the green channel.
    const GREEN_SHIFT: u32 = 8;
    /// Shift of the blue channel.
    const BLUE_SHIFT: u32;
}

/// Layout produced by the image loader: `0xTTBBGGRR`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DecoderOrder;

/// Layout consumed by display surfaces: `0xTTRRGGBB`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DisplayOrder;

impl LaneOrder for DecoderOrder {
    type Swapped = DisplayOrder;
    const NAME: &'static str = "decoder";
    const RED_SHIFT: u32 = 0;
    const BLUE_SHIFT: u32 = 16;
}

impl LaneOrder for DisplayOrder {
    type Swapped = DecoderOrder;
    const NAME: &'static str = "display";
    const RED_SHIFT: u32 = 16;
    const BLUE_SHIFT: u32 = 0;
}

/// Exchange bytes 0 and 2 of a pixel, leaving green and the tag byte alone.
///
/// Converts a single pixel between [`DecoderOrder`] and [`DisplayOrder`] in
/// either direction.
#[inline]
pub fn swap_red_blue(pixel: u32) -> u32 {
    (pixel & 0xff00_ff00) | ((pixel & 0x0000_00ff) << 16) | ((pixel & 0x00ff_0000) >> 16)
}
