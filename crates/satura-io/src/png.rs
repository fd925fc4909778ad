//! PNG image format support
//!
//! Decoded images are always returned in [`DecoderOrder`] with the fourth
//! byte holding alpha (255 when the file has none).

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use satura_core::{DecoderOrder, Pix, codec};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
///
/// Palette and sub-byte images are expanded by the decoder, so every
/// color type is accepted. For 16 bit samples the high byte is kept.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix<DecoderOrder>> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let (color_type, bit_depth) = reader.output_color_type();

    // Bytes per sample and samples per pixel
    let sample_bytes = match bit_depth {
        BitDepth::Eight => 1,
        BitDepth::Sixteen => 2,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG bit depth: {:?}",
                bit_depth
            )));
        }
    };
    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG was not expanded".to_string(),
            ));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let stride = samples * sample_bytes;

    let mut pix = Pix::<DecoderOrder>::new(width, height)?;
    let mut grid = pix.grid();
    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        let src = &data[row_start..row_start + width as usize * stride];
        for (dst, px) in grid.row_mut(y).iter_mut().zip(src.chunks_exact(stride)) {
            // High byte of each sample; PNG stores 16 bit samples big-endian
            let s = |i: usize| px[i * sample_bytes];
            let (r, g, b, a) = match samples {
                1 => (s(0), s(0), s(0), 255),
                2 => (s(0), s(0), s(0), s(1)),
                3 => (s(0), s(1), s(2), 255),
                _ => (s(0), s(1), s(2), s(3)),
            };
            *dst = codec::compose::<DecoderOrder>(r, g, b, a);
        }
    }

    tracing::debug!(width, height, ?color_type, ?bit_depth, "decoded PNG");
    Ok(pix)
}

/// Write a PNG image as 8 bit RGBA
pub fn write_png<W: Write>(pix: &Pix<DecoderOrder>, writer: W) -> IoResult<()> {
    let width = pix.width();
    let height = pix.height();

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = Vec::with_capacity(pix.data().len() * 4);
    for &pixel in pix.data() {
        let (r, g, b) = codec::extract_rgb::<DecoderOrder>(pixel);
        data.extend_from_slice(&[r, g, b, codec::tag(pixel)]);
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    tracing::debug!(width, height, "encoded PNG");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_png_roundtrip_rgba() {
        let pix = Pix::<DecoderOrder>::from_fn(5, 3, |x, y| {
            codec::compose::<DecoderOrder>((x * 50) as u8, (y * 80) as u8, 7, (200 + x) as u8)
        })
        .unwrap();

        let mut buffer = Vec::new();
        write_png(&pix, &mut buffer).unwrap();

        let pix2 = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(pix2.width(), 5);
        assert_eq!(pix2.height(), 3);
        assert_eq!(pix2, pix);
    }

    #[test]
    fn test_png_read_rgb_sets_opaque_tag() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 2, 1);
            encoder.set_color(ColorType::Rgb);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[255, 0, 0, 1, 2, 3]).unwrap();
        }

        let pix = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(pix.get_pixel(0, 0), Some(0xff_00_00_ff));
        assert_eq!(pix.get_pixel(1, 0), Some(0xff_03_02_01));
    }

    #[test]
    fn test_png_read_gray16() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 1, 1);
            encoder.set_color(ColorType::Grayscale);
            encoder.set_depth(BitDepth::Sixteen);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0xab, 0xcd]).unwrap();
        }

        let pix = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(
            codec::extract_rgb::<DecoderOrder>(pix.data()[0]),
            (0xab, 0xab, 0xab)
        );
    }

    #[test]
    fn test_png_garbage_is_decode_error() {
        let err = read_png(Cursor::new(b"not a png".to_vec())).unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }
}
