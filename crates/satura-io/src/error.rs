//! I/O error types
//!
//! Maps errors from the `png` crate and the file system into one error
//! type so that callers only need to handle `IoError`.

use thiserror::Error;

/// Error type for image I/O operations.
///
/// A decode failure means the saturation passes are never invoked on the
/// image; the caller decides how to report it.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The PNG color type or bit depth is not supported
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The PNG decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The PNG encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library (e.g. dimension mismatch)
    #[error("core error: {0}")]
    Core(#[from] satura_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
