//! slidealign-io - Captcha layer decoding and composite export
//!
//! Layers are read from PNG into ARGB [`Layer`]s; composites are written
//! back as 8-bit RGBA PNG.
//!
//! # Examples
//!
//! ```no_run
//! use slidealign_io::{load_assets, write_png_file};
//!
//! let assets = load_assets("fg.png", Some("bg.png")).unwrap();
//! let fg = assets.foreground().unwrap();
//! write_png_file(fg.buffer(), "copy.png").unwrap();
//! ```

mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use slidealign_core::{CaptchaAssets, Layer, PixelBuffer};
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor};
use std::path::Path;

/// Read a captcha layer from a file.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for anything that is not PNG and
/// [`IoError::DecodeError`] for a corrupt PNG.
pub fn read_layer<P: AsRef<Path>>(path: P) -> IoResult<Layer> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let file = File::open(path)?;
    read_layer_format(BufReader::new(file), format)
}

/// Read a captcha layer from memory.
pub fn read_layer_mem(data: &[u8]) -> IoResult<Layer> {
    let format = detect_format_from_bytes(data)?;
    read_layer_format(Cursor::new(data), format)
}

fn read_layer_format<R: std::io::BufRead + std::io::Seek>(
    reader: R,
    format: ImageFormat,
) -> IoResult<Layer> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        _ => {
            let _ = reader;
            Err(IoError::UnsupportedFormat(format!(
                "{:?} captcha layers are not supported",
                format
            )))
        }
    }
}

/// Load a foreground and an optional background into [`CaptchaAssets`].
pub fn load_assets<P: AsRef<Path>>(foreground: P, background: Option<P>) -> IoResult<CaptchaAssets> {
    let fg = read_layer(foreground)?;
    let bg = background.map(read_layer).transpose()?;
    Ok(CaptchaAssets::new(fg, bg))
}

/// Write a buffer to a PNG file.
pub fn write_png_file<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    write_png_to(buffer, BufWriter::new(file))
}

/// Encode a buffer as PNG in memory.
pub fn write_png_mem(buffer: &PixelBuffer) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();
    write_png_to(buffer, &mut out)?;
    Ok(out)
}

#[cfg(feature = "png-format")]
fn write_png_to<W: std::io::Write>(buffer: &PixelBuffer, writer: W) -> IoResult<()> {
    png::write_png(buffer, writer)
}

#[cfg(not(feature = "png-format"))]
fn write_png_to<W: std::io::Write>(_buffer: &PixelBuffer, _writer: W) -> IoResult<()> {
    Err(IoError::UnsupportedFormat(
        "PNG support not enabled".to_string(),
    ))
}
