//! JPEG image format support
//!
//! Reads baseline and progressive JPEG through `jpeg-decoder` and writes
//! RGB JPEG through `jpeg-encoder`.

use crate::{IoError, IoResult, rgb_bytes};
use jpeg_decoder::PixelFormat;
use regionpress_core::{ImageFormat, Raster, color};
use std::io::{Read, Write};
use tracing::debug;

/// Read a JPEG image from a reader.
///
/// Grayscale, 16-bit grayscale, RGB and CMYK sources are all converted to
/// opaque 32-bit pixels.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Raster> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    let stride = match info.pixel_format {
        PixelFormat::L8 => 1,
        PixelFormat::L16 => 2,
        PixelFormat::RGB24 => 3,
        PixelFormat::CMYK32 => 4,
    };
    let expected = width as usize * height as usize * stride;
    if data.len() < expected {
        return Err(IoError::InvalidData(format!(
            "JPEG data too short: {} < {}",
            data.len(),
            expected
        )));
    }

    let mut raster = Raster::new(width, height)?.to_mut();
    raster.set_informat(ImageFormat::Jpeg);
    for (pixel, px) in raster.data_mut().iter_mut().zip(data.chunks_exact(stride)) {
        *pixel = match info.pixel_format {
            PixelFormat::L8 => color::gray(px[0]),
            // Big-endian samples: keep the high byte
            PixelFormat::L16 => color::gray(px[0]),
            PixelFormat::RGB24 => color::compose_rgb(px[0], px[1], px[2]),
            PixelFormat::CMYK32 => {
                let k = px[3] as u32;
                let channel = |c: u8| ((255 - c as u32) * (255 - k) / 255) as u8;
                color::compose_rgb(channel(px[0]), channel(px[1]), channel(px[2]))
            }
        };
    }

    debug!(width, height, format = ?info.pixel_format, "decoded JPEG");
    Ok(raster.into())
}

/// Write a raster as RGB JPEG with the given quality (1-100).
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] when either dimension exceeds
/// the JPEG limit of 65535 pixels.
pub fn write_jpeg<W: Write>(raster: &Raster, writer: W, quality: u8) -> IoResult<()> {
    let (width, height) = (raster.width(), raster.height());
    let (w, h) = match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "JPEG dimensions limited to 65535, got {}x{}",
                width, height
            )));
        }
    };
    let quality = quality.clamp(1, 100);

    let encoder = jpeg_encoder::Encoder::new(writer, quality);
    encoder
        .encode(&rgb_bytes(raster), w, h, jpeg_encoder::ColorType::Rgb)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;

    debug!(width, height, quality, "encoded JPEG");
    Ok(())
}
