//! Error types for satura-color

use thiserror::Error;

/// Errors that can occur while configuring or running a saturation pass
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] satura_core::Error),

    /// Saturation factor is negative, infinite or NaN
    #[error("invalid saturation factor: {0}")]
    InvalidFactor(f32),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
