//! PNG image format support
//!
//! Decoding expands palettes and low bit depths and strips 16-bit samples,
//! so every input arrives as 8-bit gray, gray+alpha, RGB or RGBA and is
//! converted to ARGB. Encoding always writes 8-bit RGBA.

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use slidealign_core::{Layer, PixelBuffer, color};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image as an ARGB layer
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Layer> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG output depth: {:?}",
            bit_depth
        )));
    }
    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG color type: {:?}",
                other
            )));
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
    let mut pixels = Vec::with_capacity(width as usize * height as usize);

    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..];
        for x in 0..width as usize {
            let s = &row[x * samples..x * samples + samples];
            let pixel = match samples {
                1 => color::compose_rgb(s[0], s[0], s[0]),
                2 => color::compose_argb(s[1], s[0], s[0], s[0]),
                3 => color::compose_rgb(s[0], s[1], s[2]),
                _ => color::compose_argb(s[3], s[0], s[1], s[2]),
            };
            pixels.push(pixel);
        }
    }

    Ok(Layer::from_argb(width, height, pixels)?)
}

/// Write a buffer as 8-bit RGBA PNG
pub fn write_png<W: Write>(buffer: &PixelBuffer, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, buffer.width(), buffer.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = Vec::with_capacity(buffer.len() * 4);
    for &pixel in buffer.pixels() {
        let (a, r, g, b) = color::extract_argb(pixel);
        data.extend_from_slice(&[r, g, b, a]);
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_png_preserves_alpha_and_channels() {
        let buf = PixelBuffer::from_vec(2, 2, vec![0xFFEEEEEE, 0x80102030, 0x00000000, 0xFF000000])
            .unwrap();

        let mut bytes = Vec::new();
        write_png(&buf, &mut bytes).unwrap();
        let layer = read_png(Cursor::new(bytes)).unwrap();

        assert_eq!(layer.width(), 2);
        assert_eq!(layer.height(), 2);
        assert_eq!(layer.pixels(), buf.pixels());
    }

    #[test]
    fn test_png_grayscale_is_opaque() {
        let mut bytes = Vec::new();
        {
            let mut encoder = Encoder::new(&mut bytes, 2, 1);
            encoder.set_color(ColorType::Grayscale);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0x10, 0xEE]).unwrap();
        }
        let layer = read_png(Cursor::new(bytes)).unwrap();
        assert_eq!(layer.pixels(), &[0xFF101010, 0xFFEEEEEE]);
    }

    #[test]
    fn test_png_rejects_garbage() {
        let err = read_png(Cursor::new(b"not a png".to_vec())).unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }
}
