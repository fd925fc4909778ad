//! Floating-point color triples
//!
//! [`Rgb`] is the working representation of a decoded pixel. Two scales are
//! in use and the triple itself does not record which one applies:
//!
//! - 0-255, produced by [`crate::codec::decode_255`] for the luminance
//!   transform on display-order buffers
//! - 0-1, produced by [`crate::codec::decode_unit`] for the color space
//!   conversions and the model-selectable pass

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

/// Three floating-point color channels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Create a new triple.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// A triple with all three channels equal to `value`.
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }

    /// Largest channel.
    #[inline]
    pub fn max_channel(self) -> f32 {
        self.r.max(self.g).max(self.b)
    }

    /// Smallest channel.
    #[inline]
    pub fn min_channel(self) -> f32 {
        self.r.min(self.g).min(self.b)
    }

    /// Apply `f` to every channel.
    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
        }
    }

    /// Clamp every channel to `[lo, hi]`.
    ///
    /// Written as two comparisons rather than `f32::clamp` so that the
    /// result matches the min/max sequence of the vector engine lane for
    /// lane.
    #[inline]
    pub fn clamp(self, lo: f32, hi: f32) -> Self {
        self.map(|v| clamp_channel(v, lo, hi))
    }

    /// Clamp every channel to `[0, 1]`.
    #[inline]
    pub fn clamp_unit(self) -> Self {
        self.clamp(0.0, 1.0)
    }

    /// Scale from 0-1 to 0-255.
    #[inline]
    pub fn to_255(self) -> Self {
        self * 255.0
    }

    /// Scale from 0-255 to 0-1.
    #[inline]
    pub fn to_unit(self) -> Self {
        self.map(|v| v / 255.0)
    }

    /// Check that every channel of `other` is within `epsilon` of `self`.
    pub fn approx_eq(self, other: Rgb, epsilon: f32) -> bool {
        (self.r - other.r).abs() <= epsilon
            && (self.g - other.g).abs() <= epsilon
            && (self.b - other.b).abs() <= epsilon
    }
}

#[inline]
fn clamp_channel(value: f32, lo: f32, hi: f32) -> f32 {
    let mut v = value;
    if v < lo {
        v = lo;
    }
    if v > hi {
        v = hi;
    }
    v
}

impl Add for Rgb {
    type Output = Rgb;

    #[inline]
    fn add(self, rhs: Rgb) -> Rgb {
        Rgb::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Sub for Rgb {
    type Output = Rgb;

    #[inline]
    fn sub(self, rhs: Rgb) -> Rgb {
        Rgb::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul<f32> for Rgb {
    type Output = Rgb;

    #[inline]
    fn mul(self, rhs: f32) -> Rgb {
        Rgb::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl Mul<Rgb> for f32 {
    type Output = Rgb;

    #[inline]
    fn mul(self, rhs: Rgb) -> Rgb {
        rhs * self
    }
}

impl AddAssign for Rgb {
    #[inline]
    fn add_assign(&mut self, rhs: Rgb) {
        *self = *self + rhs;
    }
}

impl SubAssign for Rgb {
    #[inline]
    fn sub_assign(&mut self, rhs: Rgb) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Rgb {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl From<(f32, f32, f32)> for Rgb {
    fn from((r, g, b): (f32, f32, f32)) -> Self {
        Rgb::new(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        let c = Rgb::new(-3.0, 0.5, 300.0).clamp(0.0, 255.0);
        assert_eq!(c, Rgb::new(0.0, 0.5, 255.0));
        assert_eq!(Rgb::new(-0.1, 1.2, 0.3).clamp_unit(), Rgb::new(0.0, 1.0, 0.3));
    }

    #[test]
    fn test_arith() {
        let a = Rgb::new(1.0, 2.0, 3.0);
        let b = Rgb::splat(1.0);
        assert_eq!(a - b, Rgb::new(0.0, 1.0, 2.0));
        assert_eq!((a - b) * 2.0 + b, Rgb::new(1.0, 3.0, 5.0));
        assert_eq!(a.max_channel(), 3.0);
        assert_eq!(a.min_channel(), 1.0);
    }

    #[test]
    fn test_scale() {
        let c = Rgb::new(0.0, 0.5, 1.0).to_255();
        assert_eq!(c, Rgb::new(0.0, 127.5, 255.0));
        assert!(c.to_unit().approx_eq(Rgb::new(0.0, 0.5, 1.0), 1e-6));
    }
}
