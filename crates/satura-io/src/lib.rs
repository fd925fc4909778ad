//! satura-io - Image loading and saving
//!
//! The loader and writer collaborators of the saturation engine. Images
//! come in and go out as PNG in [`DecoderOrder`]; callers that hand the
//! buffer to a display surface must swap it to
//! [`DisplayOrder`](satura_core::DisplayOrder) themselves.

mod error;
pub mod png;

pub use error::{IoError, IoResult};
pub use png::{read_png, write_png};

use satura_core::{DecoderOrder, Pix};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read a PNG image from a file path.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix<DecoderOrder>> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading image");
    let file = File::open(path)?;
    read_png(BufReader::new(file))
}

/// Write a PNG image to a file path.
pub fn write_image<P: AsRef<Path>>(pix: &Pix<DecoderOrder>, path: P) -> IoResult<()> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "writing image");
    let file = File::create(path)?;
    write_png(pix, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file() {
        let err = read_image("/nonexistent/dir/image.png").unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }

    #[test]
    fn test_file_roundtrip() {
        let pix = Pix::<DecoderOrder>::from_vec(vec![0xff_20_40_80, 0x10_00_00_00], 2, 1).unwrap();
        let path = std::env::temp_dir().join(format!("satura_io_{}.png", std::process::id()));
        write_image(&pix, &path).unwrap();
        let back = read_image(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(back, pix);
    }
}
