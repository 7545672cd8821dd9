//! PNG image format support
//!
//! Every PNG colour type is expanded to 8 bits per sample and stored as a
//! 32-bit RGBA raster. Output is always 8-bit RGB.

use crate::{IoError, IoResult, rgb_bytes};
use regionpress_core::{ImageFormat, Raster, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};
use tracing::debug;

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let mut decoder = Decoder::new(reader);
    // Palette, tRNS and low bit depths become plain 8-bit samples
    decoder.set_transformations(Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    let (color_type, bit_depth) = reader.output_color_type();

    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };
    // 16-bit samples keep only their high byte
    let bytes_per_sample = match bit_depth {
        BitDepth::Eight => 1,
        BitDepth::Sixteen => 2,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unexpected PNG output depth: {:?}",
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
    let stride = samples * bytes_per_sample;

    let mut raster = Raster::new(width, height)?.to_mut();
    raster.set_informat(ImageFormat::Png);
    for y in 0..height {
        let row = &data[y as usize * bytes_per_row..];
        for (x, pixel) in raster.row_data_mut(y).iter_mut().enumerate() {
            let px = &row[x * stride..(x + 1) * stride];
            let sample = |i: usize| px[i * bytes_per_sample];
            *pixel = match samples {
                1 => color::gray(sample(0)),
                2 => {
                    let g = sample(0);
                    color::compose_rgba(g, g, g, sample(1))
                }
                3 => color::compose_rgb(sample(0), sample(1), sample(2)),
                _ => color::compose_rgba(sample(0), sample(1), sample(2), sample(3)),
            };
        }
    }

    debug!(width, height, ?color_type, ?bit_depth, "decoded PNG");
    Ok(raster.into())
}

/// Write a PNG image as 8-bit RGB
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let width = raster.width();
    let height = raster.height();

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let data = rgb_bytes(raster);
    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    debug!(width, height, "encoded PNG");
    Ok(())
}
