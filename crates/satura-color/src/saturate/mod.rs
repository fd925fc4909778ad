//! Saturation adjustment
//!
//! Two families of passes change how far each pixel sits from gray:
//!
//! - **Fused saturate + flip** ([`pix_saturate_flip`]) on display-order
//!   buffers. Uses the luminance formula on the 0-255 scale and mirrors the
//!   image top-to-bottom in the same traversal. Runs on either the per-pixel
//!   scalar loop or the chunked engine; both produce identical buffers.
//! - **Model-selectable saturate** ([`pix_saturate`]) on decoder-order
//!   buffers. Works on the 0-1 scale in one of four [`SaturationModel`]s and
//!   never flips.
//!
//! # Luminance formula
//!
//! ```text
//! gray = (Y, Y, Y)            Y = 0.2126 R + 0.7152 G + 0.0722 B
//! out  = gray + (src - gray) * factor
//! ```
//!
//! A factor of 1.0 is the identity, 0.0 collapses to gray, larger values
//! push channels away from gray and clip at the channel range.

mod engine;
mod fused;
mod mask;
mod options;
#[cfg(any(test, not(feature = "simd")))]
mod portable;
#[cfg(feature = "simd")]
mod simd;

pub use mask::{CHUNK, RowEndMask};
pub use options::{Engine, FACTOR_STEP, SaturateOptions, SaturationModel};

use crate::ColorResult;
use crate::colorspace::{
    hsl_to_rgb, hsv_to_rgb, relative_luminance, rgb_to_hsl, rgb_to_hsv, rgb_to_linear,
    rgb_to_srgb,
};
use satura_core::{DecoderOrder, DisplayOrder, PixelGrid, Rgb, codec};

/// Move `color` toward or away from its luminance gray.
///
/// Scale-agnostic: the result is on the same scale as `color` and is not
/// clamped.
#[inline]
pub fn saturate_about_luminance(color: Rgb, factor: f32) -> Rgb {
    let luminance = relative_luminance(color);
    let gray = Rgb::splat(luminance);
    let mut diff = color - gray;
    diff *= factor;
    gray + diff
}

/// Saturate one display-order pixel on the 0-255 scale.
///
/// This is the reference result every execution path of
/// [`pix_saturate_flip`] reproduces bit for bit. The tag byte is kept.
#[inline]
pub fn saturate_pixel(pixel: u32, factor: f32) -> u32 {
    let source = codec::decode_255::<DisplayOrder>(pixel);
    let out = saturate_about_luminance(source, factor);
    codec::encode_255::<DisplayOrder>(out, pixel)
}

/// Saturate one 0-1 scale color in the given model, clamped to [0, 1].
pub fn saturate_color(color: Rgb, factor: f32, model: SaturationModel) -> Rgb {
    let out = match model {
        SaturationModel::Hsv => {
            let mut hsv = rgb_to_hsv(color);
            hsv.s *= factor;
            hsv_to_rgb(hsv)
        }
        SaturationModel::Hsl => {
            let mut hsl = rgb_to_hsl(color);
            hsl.s *= factor;
            hsl_to_rgb(hsl)
        }
        SaturationModel::LuminanceSrgb => saturate_about_luminance(color, factor),
        SaturationModel::LuminanceLinear => {
            let linear = rgb_to_linear(color);
            rgb_to_srgb(saturate_about_luminance(linear, factor))
        }
    };
    out.clamp_unit()
}

/// Saturate every pixel of a decoder-order grid in the chosen model.
///
/// Rows are visited top to bottom; nothing is flipped. The tag byte of
/// every pixel is kept.
pub fn pix_saturate(grid: &mut PixelGrid<'_, DecoderOrder>, factor: f32, model: SaturationModel) {
    tracing::debug!(
        width = grid.width(),
        height = grid.height(),
        factor,
        %model,
        "pix_saturate"
    );
    for px in grid.data_mut().iter_mut() {
        let source = codec::decode_unit::<DecoderOrder>(*px);
        let out = saturate_color(source, factor, model);
        *px = codec::encode_unit::<DecoderOrder>(out, *px);
    }
}

/// Saturate a display-order grid and flip it top-to-bottom in one pass.
///
/// Row `y` ends up holding the saturated contents of row `height - 1 - y`.
/// For odd heights the middle row is saturated in place. `engine` picks the
/// execution path; the output does not depend on it.
pub fn pix_saturate_flip(grid: &mut PixelGrid<'_, DisplayOrder>, factor: f32, engine: Engine) {
    tracing::debug!(
        width = grid.width(),
        height = grid.height(),
        factor,
        %engine,
        "pix_saturate_flip"
    );
    if grid.is_empty() {
        return;
    }
    match engine {
        Engine::Scalar => fused::saturate_flip_scalar(grid, factor),
        Engine::Vector => engine::saturate_flip_chunked(grid, factor),
    }
}

/// Validate `options` and run the pass it describes.
///
/// Display-order grids go through [`pix_saturate_flip`] with the configured
/// engine.
pub fn pix_saturate_flip_with_options(
    grid: &mut PixelGrid<'_, DisplayOrder>,
    options: &SaturateOptions,
) -> ColorResult<()> {
    options.validate()?;
    pix_saturate_flip(grid, options.factor, options.engine);
    Ok(())
}

/// Validate `options` and run the model-selectable pass it describes.
pub fn pix_saturate_with_options(
    grid: &mut PixelGrid<'_, DecoderOrder>,
    options: &SaturateOptions,
) -> ColorResult<()> {
    options.validate()?;
    pix_saturate(grid, options.factor, options.model);
    Ok(())
}
