//! Satura Color - Color math and saturation passes
//!
//! This crate provides the color side of the saturation engine:
//!
//! - **Color space conversion** ([`colorspace`]): RGB <-> HSV, HSL, linear light, luminance
//! - **Saturation** ([`saturate`]): fused saturate + flip on display-order buffers,
//!   model-selectable saturate on decoder-order buffers
//!
//! The fused pass runs on a per-pixel loop or on a chunked engine that
//! handles four pixels of two mirrored rows per step. With the default
//! `simd` feature the chunked engine uses `wide` vector registers; without
//! it the same engine runs lane by lane. Test that build with
//! `cargo test -p satura-color --no-default-features`.

pub mod colorspace;
pub mod error;
pub mod saturate;

// Re-export core types
pub use satura_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export color space types and functions
pub use colorspace::{
    // Types
    Hsl,
    Hsv,
    // Conversions
    hsl_to_rgb,
    hsv_to_rgb,
    linear_to_srgb,
    relative_luminance,
    rgb_to_hsl,
    rgb_to_hsv,
    rgb_to_linear,
    rgb_to_srgb,
    srgb_to_linear,
};

// Re-export saturation types and functions
pub use saturate::{
    // Types
    CHUNK,
    Engine,
    RowEndMask,
    SaturateOptions,
    SaturationModel,
    // Pixel-level
    saturate_about_luminance,
    saturate_color,
    saturate_pixel,
    // Buffer-level
    pix_saturate,
    pix_saturate_flip,
    pix_saturate_flip_with_options,
    pix_saturate_with_options,
};
