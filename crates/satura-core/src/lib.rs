//! Satura Core - Pixel buffers and the packed pixel codec
//!
//! This crate provides the data structures every saturation pass works on:
//!
//! - [`Pix`] / [`PixelGrid`] - Owned buffer / borrowed in-place view
//! - [`DecoderOrder`] / [`DisplayOrder`] - Type-level lane order tags
//! - [`Rgb`] - Floating-point color triple
//! - [`codec`] - Packing and unpacking of 32-bit pixels
//!
//! The two buffer-wide primitives that do no color math, the vertical flip
//! and the lane order swap, also live here as methods on the buffer types.

pub mod codec;
pub mod color;
pub mod error;
pub mod order;
pub mod pix;

pub use color::Rgb;
pub use error::{Error, Result};
pub use order::{DecoderOrder, DisplayOrder, LaneOrder, TAG_MASK, swap_red_blue};
pub use pix::{Pix, PixelGrid};
