//! PNM (Portable Any Map) format support
//!
//! Reads binary PGM (P5) and PPM (P6) with maxval up to 255; samples with a
//! smaller maxval are rescaled to 0-255. Writes binary PPM (P6).

use crate::{IoError, IoResult};
use regionpress_core::{ImageFormat, Raster, color};
use std::io::{BufRead, Read, Write};
use tracing::debug;

/// Parsed PNM header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PnmHeader {
    /// 1 for P5, 3 for P6
    samples: usize,
    width: u32,
    height: u32,
    maxval: u32,
}

/// Read a binary PNM image (P5/P6) from a reader.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Raster> {
    let header = read_header(&mut reader)?;
    let PnmHeader {
        samples,
        width,
        height,
        maxval,
    } = header;

    let len = (width as u64)
        .checked_mul(height as u64)
        .and_then(|n| n.checked_mul(samples as u64))
        .ok_or_else(|| {
            IoError::InvalidData(format!("PNM dimensions {}x{} too large", width, height))
        })?;
    // Buffer only the bytes actually present; the header size is not trusted.
    let mut data = Vec::new();
    reader.by_ref().take(len).read_to_end(&mut data)?;
    if (data.len() as u64) < len {
        return Err(IoError::InvalidData(format!(
            "PNM pixel data truncated: {} of {} bytes",
            data.len(),
            len
        )));
    }

    let scale = |v: u8| -> u8 {
        if maxval == 255 {
            v
        } else {
            ((v as u32).min(maxval) * 255 / maxval) as u8
        }
    };

    let mut raster = Raster::new(width, height)?.to_mut();
    raster.set_informat(ImageFormat::Pnm);
    for (pixel, px) in raster.data_mut().iter_mut().zip(data.chunks_exact(samples)) {
        *pixel = if samples == 1 {
            color::gray(scale(px[0]))
        } else {
            color::compose_rgb(scale(px[0]), scale(px[1]), scale(px[2]))
        };
    }

    debug!(width, height, samples, maxval, "decoded PNM");
    Ok(raster.into())
}

/// Write a raster as binary PPM (P6).
pub fn write_pnm<W: Write>(raster: &Raster, mut writer: W) -> IoResult<()> {
    write!(writer, "P6\n{} {}\n255\n", raster.width(), raster.height())?;
    writer.write_all(&crate::rgb_bytes(raster))?;
    writer.flush()?;
    debug!(width = raster.width(), height = raster.height(), "encoded PNM");
    Ok(())
}

fn read_header<R: BufRead>(reader: &mut R) -> IoResult<PnmHeader> {
    let magic = next_token(reader)?;
    let samples = match magic.as_str() {
        "P5" => 1,
        "P6" => 3,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNM variant {} (only P5 and P6 are supported)",
                other
            )));
        }
    };
    let width = next_number(reader, "width")?;
    let height = next_number(reader, "height")?;
    let maxval = next_number(reader, "maxval")?;
    if maxval == 0 || maxval > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "PNM maxval {} (must be 1-255)",
            maxval
        )));
    }
    // A single whitespace byte separates the header from the raster; it
    // was consumed by `next_token`.
    Ok(PnmHeader {
        samples,
        width,
        height,
        maxval,
    })
}

fn next_number<R: BufRead>(reader: &mut R, what: &str) -> IoResult<u32> {
    let token = next_token(reader)?;
    token
        .parse()
        .map_err(|_| IoError::InvalidData(format!("PNM {} is not a number: {:?}", what, token)))
}

/// Read one whitespace-delimited header token, skipping `#` comments.
///
/// Consumes exactly one whitespace byte after the token.
fn next_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    let mut in_comment = false;
    let mut byte = [0u8; 1];
    loop {
        if reader.read(&mut byte)? == 0 {
            if token.is_empty() {
                return Err(IoError::InvalidData("PNM header truncated".to_string()));
            }
            return Ok(token);
        }
        let b = byte[0];
        if in_comment {
            if b == b'\n' || b == b'\r' {
                in_comment = false;
            }
            continue;
        }
        match b {
            b'#' if token.is_empty() => in_comment = true,
            b if b.is_ascii_whitespace() => {
                if !token.is_empty() {
                    return Ok(token);
                }
            }
            b => token.push(b as char),
        }
    }
}
