//! Color space conversion
//!
//! Provides conversion between RGB and:
//! - HSV (Hue, Saturation, Value)
//! - HSL (Hue, Saturation, Lightness)
//! - linear light, through the sRGB transfer function
//!
//! plus the BT.709 relative luminance of an RGB triple.
//!
//! Every function here works on the 0-1 scale and is pure.
//!
//! # Hue branch selection
//!
//! RGB -> HSV and RGB -> HSL pick the hue formula by comparing the maximum
//! channel against red, then green, then blue with exact float equality.
//! When two channels tie for the maximum the first one in R, G, B order
//! wins. Ties only change which of two equivalent formulas runs, but the
//! equality test is sensitive to rounding in the inputs.

use satura_core::Rgb;

/// BT.709 red weight for relative luminance
pub const LUMA_R: f32 = 0.2126;
/// BT.709 green weight for relative luminance
pub const LUMA_G: f32 = 0.7152;
/// BT.709 blue weight for relative luminance
pub const LUMA_B: f32 = 0.0722;

/// HSV color representation
///
/// - `h`: Hue in range [0.0, 1.0), a fraction of a full turn
/// - `s`: Saturation in range [0.0, 1.0]
/// - `v`: Value in range [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    /// Create a new HSV color
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }
}

/// HSL color representation
///
/// - `h`: Hue in range [0.0, 1.0), a fraction of a full turn
/// - `s`: Saturation in range [0.0, 1.0]
/// - `l`: Lightness in range [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    /// Create a new HSL color
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }
}

/// Relative luminance: `0.2126 R + 0.7152 G + 0.0722 B`
///
/// Scale-agnostic; the result is on the same scale as the input.
#[inline]
pub fn relative_luminance(color: Rgb) -> f32 {
    color.r * LUMA_R + color.g * LUMA_G + color.b * LUMA_B
}

/// Convert RGB to HSV
///
/// A gray input (all channels equal) gives hue 0 and saturation 0.
pub fn rgb_to_hsv(color: Rgb) -> Hsv {
    let cmax = color.max_channel();
    let cmin = color.min_channel();
    let delta = cmax - cmin;

    let mut hsv = Hsv {
        v: cmax,
        ..Hsv::default()
    };

    if delta > 0.0 {
        let sector = if cmax == color.r {
            ((color.g - color.b) / delta) % 6.0
        } else if cmax == color.g {
            (color.b - color.r) / delta + 2.0
        } else {
            (color.r - color.g) / delta + 4.0
        };

        hsv.h = sector / 6.0;
        if hsv.h < 0.0 {
            hsv.h += 1.0;
        }
        if cmax > 0.0 {
            hsv.s = delta / cmax;
        }
    }

    hsv
}

/// Convert HSV to RGB
///
/// The hue must already be wrapped into [0, 1). A hue of 1.0 or more has no
/// sector and yields black.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let Hsv { h, s, v } = hsv;

    let h6 = h * 6.0;
    let sector = h6 as i32;
    let f = h6 - sector as f32;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector {
        0 => Rgb::new(v, t, p),
        1 => Rgb::new(q, v, p),
        2 => Rgb::new(p, v, t),
        3 => Rgb::new(p, q, v),
        4 => Rgb::new(t, p, v),
        5 => Rgb::new(v, p, q),
        _ => Rgb::default(),
    }
}

/// Convert RGB to HSL
///
/// A gray input gives hue 0 and saturation 0, with lightness equal to the
/// gray level.
pub fn rgb_to_hsl(color: Rgb) -> Hsl {
    let max = color.max_channel();
    let min = color.min_channel();

    let mut hsl = Hsl {
        l: (max + min) * 0.5,
        ..Hsl::default()
    };

    if max != min {
        let delta = max - min;

        hsl.s = if hsl.l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let sector = if max == color.r {
            let h = (color.g - color.b) / delta;
            if color.g < color.b { h + 6.0 } else { h }
        } else if max == color.g {
            (color.b - color.r) / delta + 2.0
        } else {
            (color.r - color.g) / delta + 4.0
        };

        hsl.h = sector / 6.0;
    }

    hsl
}

/// Convert HSL to RGB
///
/// The hue must already be wrapped into [0, 1). A hue of 1.0 or more has no
/// sector and yields the gray `(m, m, m)`.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl { h, s, l } = hsl;

    let h6 = h * 6.0;
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    // second largest component
    let x = chroma * (1.0 - ((h6 % 2.0) - 1.0).abs());
    let m = l - chroma / 2.0;

    let base = match h6 as i32 {
        0 => Rgb::new(chroma, x, 0.0),
        1 => Rgb::new(x, chroma, 0.0),
        2 => Rgb::new(0.0, chroma, x),
        3 => Rgb::new(0.0, x, chroma),
        4 => Rgb::new(x, 0.0, chroma),
        5 => Rgb::new(chroma, 0.0, x),
        _ => Rgb::default(),
    };

    base + Rgb::splat(m)
}

/// sRGB transfer function, encoded -> linear
#[inline]
pub fn srgb_to_linear(s: f32) -> f32 {
    if s > 0.04045 {
        ((s + 0.055) / 1.055).powf(2.4)
    } else {
        s / 12.92
    }
}

/// sRGB transfer function, linear -> encoded
#[inline]
pub fn linear_to_srgb(l: f32) -> f32 {
    if l > 0.003_130_8 {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    } else {
        l * 12.92
    }
}

/// Apply [`srgb_to_linear`] to every channel
#[inline]
pub fn rgb_to_linear(color: Rgb) -> Rgb {
    color.map(srgb_to_linear)
}

/// Apply [`linear_to_srgb`] to every channel
#[inline]
pub fn rgb_to_srgb(color: Rgb) -> Rgb {
    color.map(linear_to_srgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hsv_pure_red() {
        let hsv = rgb_to_hsv(Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(hsv, Hsv::new(0.0, 1.0, 1.0));
    }

    #[test]
    fn test_rgb_to_hsv_pure_green() {
        let hsv = rgb_to_hsv(Rgb::new(0.0, 1.0, 0.0));
        assert!((hsv.h - 1.0 / 3.0).abs() < 1e-6);
        assert_eq!(hsv.s, 1.0);
    }

    #[test]
    fn test_rgb_to_hsv_pure_blue() {
        let hsv = rgb_to_hsv(Rgb::new(0.0, 0.0, 1.0));
        assert!((hsv.h - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_rgb_to_hsv_magenta_wraps() {
        // red max with g < b lands in the negative sector and wraps
        let hsv = rgb_to_hsv(Rgb::new(1.0, 0.0, 0.5));
        assert!(hsv.h > 0.9 && hsv.h < 1.0);
    }

    #[test]
    fn test_rgb_to_hsv_gray() {
        let hsv = rgb_to_hsv(Rgb::splat(0.4));
        assert_eq!(hsv, Hsv::new(0.0, 0.0, 0.4));
        assert_eq!(hsv_to_rgb(hsv), Rgb::splat(0.4));
    }

    #[test]
    fn test_hsv_roundtrip_literal() {
        let rgb = Rgb::new(0.5, 0.25, 0.25);
        let hsv = rgb_to_hsv(rgb);
        assert!((hsv.h - 0.0).abs() < 1e-6);
        assert!((hsv.s - 0.5).abs() < 1e-6);
        assert!((hsv.v - 0.5).abs() < 1e-6);
        assert!(hsv_to_rgb(hsv).approx_eq(rgb, 0.01));
    }

    #[test]
    fn test_hsv_out_of_range_hue_is_black() {
        assert_eq!(hsv_to_rgb(Hsv::new(1.0, 1.0, 1.0)), Rgb::default());
    }

    #[test]
    fn test_hsl_roundtrip_literal() {
        let rgb = Rgb::new(0.75, 0.25, 0.25);
        let hsl = rgb_to_hsl(rgb);
        assert!((hsl.h - 0.0).abs() < 1e-6);
        assert!((hsl.s - 0.5).abs() < 1e-6);
        assert!((hsl.l - 0.5).abs() < 1e-6);
        assert!(hsl_to_rgb(hsl).approx_eq(rgb, 0.01));
    }

    #[test]
    fn test_hsl_gray_keeps_lightness() {
        let hsl = rgb_to_hsl(Rgb::splat(0.7));
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert!((hsl.l - 0.7).abs() < 1e-6);
        assert!(hsl_to_rgb(hsl).approx_eq(Rgb::splat(0.7), 1e-6));
    }

    #[test]
    fn test_hsl_negative_sector_wraps() {
        let hsl = rgb_to_hsl(Rgb::new(1.0, 0.0, 0.5));
        assert!(hsl.h > 0.9 && hsl.h < 1.0);
        assert!(hsl_to_rgb(hsl).approx_eq(Rgb::new(1.0, 0.0, 0.5), 1e-5));
    }

    #[test]
    fn test_gamma_endpoints() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        assert!((linear_to_srgb(1.0) - 1.0).abs() < 1e-6);
        // linear segment
        assert!((srgb_to_linear(0.04) - 0.04 / 12.92).abs() < 1e-9);
        // mid gray is about 21.4% linear light
        assert!((srgb_to_linear(0.5) - 0.214_041).abs() < 1e-5);
    }

    #[test]
    fn test_gamma_roundtrip() {
        for i in 0..50 {
            let s = i as f32 / 49.0;
            let back = linear_to_srgb(srgb_to_linear(s));
            assert!((back - s).abs() < 1e-4, "gamma roundtrip failed at {s}: {back}");
        }
    }

    #[test]
    fn test_relative_luminance() {
        assert!((relative_luminance(Rgb::splat(1.0)) - 1.0).abs() < 1e-6);
        assert_eq!(relative_luminance(Rgb::new(1.0, 0.0, 0.0)), LUMA_R);
        assert_eq!(relative_luminance(Rgb::new(0.0, 0.0, 255.0)), 255.0 * LUMA_B);
    }
}
