//! regionpress-io - Image I/O for regionpress
//!
//! Decodes PNG, JPEG and binary PNM files into 32-bit [`Raster`]s and
//! encodes rasters back. Formats are enabled through cargo features
//! (`png-format`, `jpeg`, `pnm`; all on by default).
//!
//! Besides file I/O the crate measures encoded sizes in memory, which the
//! compression harness uses to compare strategies.

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes, format_from_extension};
pub use regionpress_core::ImageFormat;

use regionpress_core::{Raster, color};
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// JPEG quality used when none is given.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Read an image from a file, detecting the format from its header.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let file = File::open(path)?;
    read_image_format(BufReader::new(file), format)
}

/// Read an image from an in-memory buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<Raster> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), format)
}

fn read_image_format<R>(reader: R, format: ImageFormat) -> IoResult<Raster>
where
    R: std::io::BufRead + std::io::Seek,
{
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        other => Err(IoError::UnsupportedFormat(format!(
            "reading {:?} is not enabled",
            other
        ))),
    }
}

/// Write an image to a file.
///
/// [`ImageFormat::Unknown`] picks the format from the file extension.
/// JPEG output uses [`DEFAULT_JPEG_QUALITY`].
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P, format: ImageFormat) -> IoResult<()> {
    write_image_with_quality(raster, path, format, DEFAULT_JPEG_QUALITY)
}

/// Write an image to a file with an explicit JPEG quality (1-100).
///
/// The quality is ignored by lossless formats.
pub fn write_image_with_quality<P: AsRef<Path>>(
    raster: &Raster,
    path: P,
    format: ImageFormat,
    quality: u8,
) -> IoResult<()> {
    let path = path.as_ref();
    let format = match format {
        ImageFormat::Unknown => format_from_extension(path),
        known => known,
    };
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_image_format(raster, &mut writer, format, quality)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into memory.
pub fn write_image_mem(raster: &Raster, format: ImageFormat) -> IoResult<Vec<u8>> {
    write_image_mem_with_quality(raster, format, DEFAULT_JPEG_QUALITY)
}

/// Encode an image into memory with an explicit JPEG quality (1-100).
pub fn write_image_mem_with_quality(
    raster: &Raster,
    format: ImageFormat,
    quality: u8,
) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_format(raster, &mut buffer, format, quality)?;
    Ok(buffer)
}

/// Size in bytes of `raster` once encoded as `format`.
pub fn encoded_size(raster: &Raster, format: ImageFormat, quality: u8) -> IoResult<u64> {
    let bytes = write_image_mem_with_quality(raster, format, quality)?;
    Ok(bytes.len() as u64)
}

/// Format a byte count as whole kibibytes, e.g. `"12 KB"`.
///
/// Uses integer division, so anything under 1024 bytes reports `"0 KB"`.
pub fn file_size_kb(bytes: u64) -> String {
    format!("{} KB", bytes / 1024)
}

#[cfg_attr(not(feature = "jpeg"), allow(unused_variables))]
fn write_image_format<W: Write>(
    raster: &Raster,
    writer: W,
    format: ImageFormat,
    quality: u8,
) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(raster, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(raster, writer, quality),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(raster, writer),
        other => Err(IoError::UnsupportedFormat(format!(
            "writing {:?} is not enabled",
            other
        ))),
    }
}

/// Pack a raster into interleaved 8-bit RGB samples.
#[cfg_attr(
    not(any(feature = "png-format", feature = "jpeg", feature = "pnm")),
    allow(dead_code)
)]
pub(crate) fn rgb_bytes(raster: &Raster) -> Vec<u8> {
    let mut data = Vec::with_capacity(raster.data().len() * 3);
    for y in 0..raster.height() {
        for &pixel in raster.row_data(y) {
            let (r, g, b) = color::extract_rgb(pixel);
            data.extend_from_slice(&[r, g, b]);
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_size_kb() {
        assert_eq!(file_size_kb(0), "0 KB");
        assert_eq!(file_size_kb(1023), "0 KB");
        assert_eq!(file_size_kb(1024), "1 KB");
        assert_eq!(file_size_kb(10 * 1024 + 1000), "10 KB");
    }

    #[test]
    fn test_unknown_format_rejected_in_memory() {
        let raster = Raster::new(2, 2).unwrap();
        assert!(matches!(
            write_image_mem(&raster, ImageFormat::Unknown),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_rgb_bytes() {
        let raster = Raster::new_filled(2, 1, color::compose_rgb(1, 2, 3)).unwrap();
        assert_eq!(rgb_bytes(&raster), vec![1, 2, 3, 1, 2, 3]);

        // Rows are emitted top to bottom
        let mut two_rows = Raster::new(1, 2).unwrap().to_mut();
        two_rows.set_rgb(0, 1, 4, 5, 6).unwrap();
        let two_rows: Raster = two_rows.into();
        assert_eq!(rgb_bytes(&two_rows), vec![0, 0, 0, 4, 5, 6]);
    }

    #[cfg(feature = "pnm")]
    #[test]
    fn test_mem_roundtrip_detects_format() {
        let raster = Raster::new_filled(4, 3, color::compose_rgb(9, 8, 7)).unwrap();
        let bytes = write_image_mem(&raster, ImageFormat::Pnm).unwrap();
        assert_eq!(encoded_size(&raster, ImageFormat::Pnm, 50).unwrap(), bytes.len() as u64);
        let decoded = read_image_mem(&bytes).unwrap();
        assert_eq!(decoded.data(), raster.data());
    }
}
