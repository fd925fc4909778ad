//! Saturation configuration

use crate::{ColorError, ColorResult};
use std::fmt;
use std::str::FromStr;

/// Amount [`SaturateOptions::increase`] and [`SaturateOptions::decrease`]
/// move the factor by
pub const FACTOR_STEP: f32 = 0.1;

/// Color model used by the model-selectable saturation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SaturationModel {
    /// Scale HSV saturation
    Hsv,
    /// Scale HSL saturation
    Hsl,
    /// Luminance formula applied directly to sRGB-encoded values
    LuminanceSrgb,
    /// Luminance formula applied in linear light
    #[default]
    LuminanceLinear,
}

impl SaturationModel {
    /// Every model, in declaration order
    pub const ALL: [SaturationModel; 4] = [
        SaturationModel::Hsv,
        SaturationModel::Hsl,
        SaturationModel::LuminanceSrgb,
        SaturationModel::LuminanceLinear,
    ];

    /// Name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            SaturationModel::Hsv => "hsv",
            SaturationModel::Hsl => "hsl",
            SaturationModel::LuminanceSrgb => "luminance-srgb",
            SaturationModel::LuminanceLinear => "luminance-linear",
        }
    }
}

impl fmt::Display for SaturationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SaturationModel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ColorError::InvalidParameters(format!("unknown saturation model: {s}")))
    }
}

/// Execution path of the fused saturate + flip pass
///
/// Both engines produce bit-identical buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Engine {
    /// One pixel at a time
    Scalar,
    /// Four pixels of a row and its mirror row per step
    #[default]
    Vector,
}

impl Engine {
    /// Name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            Engine::Scalar => "scalar",
            Engine::Vector => "vector",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Engine {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scalar" => Ok(Engine::Scalar),
            "vector" => Ok(Engine::Vector),
            _ => Err(ColorError::InvalidParameters(format!("unknown engine: {s}"))),
        }
    }
}

/// Options for a saturation pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturateOptions {
    /// Saturation factor; 1.0 leaves colors unchanged, 0.0 gives gray
    pub factor: f32,
    /// Model for the model-selectable pass
    pub model: SaturationModel,
    /// Engine for the fused saturate + flip pass
    pub engine: Engine,
}

impl Default for SaturateOptions {
    fn default() -> Self {
        Self {
            factor: 1.0,
            model: SaturationModel::default(),
            engine: Engine::default(),
        }
    }
}

impl SaturateOptions {
    /// Create options with a custom factor
    pub fn with_factor(mut self, factor: f32) -> Self {
        self.factor = factor;
        self
    }

    /// Create options with a custom model
    pub fn with_model(mut self, model: SaturationModel) -> Self {
        self.model = model;
        self
    }

    /// Create options with a custom engine
    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }

    /// Check that the factor is finite and not negative.
    pub fn validate(&self) -> ColorResult<()> {
        if !self.factor.is_finite() || self.factor < 0.0 {
            return Err(ColorError::InvalidFactor(self.factor));
        }
        Ok(())
    }

    /// Raise the factor by [`FACTOR_STEP`].
    pub fn increase(&mut self) {
        self.factor += FACTOR_STEP;
    }

    /// Lower the factor by [`FACTOR_STEP`], stopping at zero.
    pub fn decrease(&mut self) {
        self.factor = (self.factor - FACTOR_STEP).max(0.0);
    }

    /// Put the factor back to 1.0.
    pub fn reset(&mut self) {
        self.factor = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_parse_and_display() {
        for model in SaturationModel::ALL {
            assert_eq!(model.to_string().parse::<SaturationModel>().unwrap(), model);
        }
        assert_eq!(
            "HSV".parse::<SaturationModel>().unwrap(),
            SaturationModel::Hsv
        );
        assert!("cmyk".parse::<SaturationModel>().is_err());
    }

    #[test]
    fn test_engine_parse() {
        assert_eq!("scalar".parse::<Engine>().unwrap(), Engine::Scalar);
        assert_eq!("Vector".parse::<Engine>().unwrap(), Engine::Vector);
        assert!("gpu".parse::<Engine>().is_err());
    }

    #[test]
    fn test_defaults() {
        let opts = SaturateOptions::default();
        assert_eq!(opts.factor, 1.0);
        assert_eq!(opts.model, SaturationModel::LuminanceLinear);
        assert_eq!(opts.engine, Engine::Vector);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        let opts = SaturateOptions::default();
        assert!(opts.with_factor(0.0).validate().is_ok());
        assert!(opts.with_factor(5.0).validate().is_ok());
        assert!(matches!(
            opts.with_factor(-0.5).validate(),
            Err(ColorError::InvalidFactor(_))
        ));
        assert!(opts.with_factor(f32::NAN).validate().is_err());
        assert!(opts.with_factor(f32::INFINITY).validate().is_err());
    }

    #[test]
    fn test_step_adjustments() {
        let mut opts = SaturateOptions::default();
        opts.increase();
        assert!((opts.factor - 1.1).abs() < 1e-6);
        opts.reset();
        assert_eq!(opts.factor, 1.0);

        let mut opts = SaturateOptions::default().with_factor(0.05);
        opts.decrease();
        assert_eq!(opts.factor, 0.0);
        opts.decrease();
        assert_eq!(opts.factor, 0.0);
    }
}
