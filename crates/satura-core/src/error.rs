//! Error types for satura-core
//!
//! Pixel-level operations are total and never fail. Errors only arise when
//! a buffer is wrapped, that is when the caller's storage does not match the
//! dimensions it claims to have.

use thiserror::Error;

/// satura-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Width times height does not fit in the address space
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Storage length does not match width times height
    #[error("buffer of {len} pixels does not match {width}x{height}")]
    BufferSizeMismatch { width: u32, height: u32, len: usize },
}

/// Result type alias for satura-core operations
pub type Result<T> = std::result::Result<T, Error>;
