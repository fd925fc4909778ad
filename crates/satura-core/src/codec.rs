//! Packed pixel codec
//!
//! Splits a packed 32-bit pixel into three 8-bit channels and packs them
//! back. The lane order is a type parameter: the same bit pattern decodes
//! differently under [`DecoderOrder`](crate::DecoderOrder) and
//! [`DisplayOrder`](crate::DisplayOrder).
//!
//! Encoding clamps each channel to its valid range and truncates toward
//! zero. The fourth byte of the original pixel is always carried over.

use crate::color::Rgb;
use crate::order::{LaneOrder, TAG_MASK};

/// Extract the red channel.
#[inline]
pub fn red<O: LaneOrder>(pixel: u32) -> u8 {
    ((pixel >> O::RED_SHIFT) & 0xff) as u8
}

/// Extract the green channel.
#[inline]
pub fn green<O: LaneOrder>(pixel: u32) -> u8 {
    ((pixel >> O::GREEN_SHIFT) & 0xff) as u8
}

/// Extract the blue channel.
#[inline]
pub fn blue<O: LaneOrder>(pixel: u32) -> u8 {
    ((pixel >> O::BLUE_SHIFT) & 0xff) as u8
}

/// Extract the untouched fourth byte.
#[inline]
pub fn tag(pixel: u32) -> u8 {
    (pixel >> 24) as u8
}

/// Extract the three color channels.
#[inline]
pub fn extract_rgb<O: LaneOrder>(pixel: u32) -> (u8, u8, u8) {
    (red::<O>(pixel), green::<O>(pixel), blue::<O>(pixel))
}

/// Compose a pixel from three channels and a tag byte.
#[inline]
pub fn compose<O: LaneOrder>(r: u8, g: u8, b: u8, tag: u8) -> u32 {
    ((r as u32) << O::RED_SHIFT)
        | ((g as u32) << O::GREEN_SHIFT)
        | ((b as u32) << O::BLUE_SHIFT)
        | ((tag as u32) << 24)
}

/// Compose a pixel from three channels, copying the tag byte of `original`.
#[inline]
pub fn compose_keep_tag<O: LaneOrder>(r: u8, g: u8, b: u8, original: u32) -> u32 {
    (original & TAG_MASK)
        | ((r as u32) << O::RED_SHIFT)
        | ((g as u32) << O::GREEN_SHIFT)
        | ((b as u32) << O::BLUE_SHIFT)
}

/// Decode to a 0-255 scale triple.
#[inline]
pub fn decode_255<O: LaneOrder>(pixel: u32) -> Rgb {
    Rgb::new(
        red::<O>(pixel) as f32,
        green::<O>(pixel) as f32,
        blue::<O>(pixel) as f32,
    )
}

/// Decode to a 0-1 scale triple.
#[inline]
pub fn decode_unit<O: LaneOrder>(pixel: u32) -> Rgb {
    decode_255::<O>(pixel).to_unit()
}

/// Encode a 0-255 scale triple, preserving the tag byte of `original`.
///
/// Channels are clamped to `[0, 255]` and truncated.
#[inline]
pub fn encode_255<O: LaneOrder>(color: Rgb, original: u32) -> u32 {
    let c = color.clamp(0.0, 255.0);
    compose_keep_tag::<O>(c.r as u8, c.g as u8, c.b as u8, original)
}

/// Encode a 0-1 scale triple, preserving the tag byte of `original`.
///
/// Channels are clamped to `[0, 1]`, multiplied by 255 and truncated.
#[inline]
pub fn encode_unit<O: LaneOrder>(color: Rgb, original: u32) -> u32 {
    let c = color.clamp_unit();
    compose_keep_tag::<O>(
        (c.r * 255.0) as u8,
        (c.g * 255.0) as u8,
        (c.b * 255.0) as u8,
        original,
    )
}
