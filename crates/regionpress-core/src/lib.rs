//! regionpress Core - Raster and region types for region compression
//!
//! This crate provides the data structures shared by every regionpress
//! crate:
//!
//! - [`Raster`] / [`RasterMut`] - Packed 32-bit RGB image (immutable / mutable)
//! - [`Region`] - Axis-aligned rectangle inside a raster
//! - [`RasterAccess`] - The capability set the compressors are written against
//! - [`Channel`] - Which colour byte the compressors sample
//! - [`ImageFormat`] - Encoded formats understood by `regionpress-io`

pub mod error;
pub mod raster;
pub mod region;

pub use error::{Error, Result};
pub use raster::{ImageFormat, Raster, RasterAccess, RasterMut};
pub use region::{GridCells, Region};

/// Colour channel sampled by the compressors.
///
/// The compressors read one channel and write the resulting gray level back
/// to all three colour channels. The sample channel is therefore the only
/// colour information that influences the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Channel {
    /// Red channel (bits 24-31)
    Red,
    /// Green channel (bits 16-23)
    Green,
    /// Blue channel (bits 8-15), the low colour byte
    #[default]
    Blue,
}

impl Channel {
    /// Extract this channel from a packed pixel.
    #[inline]
    pub fn extract(self, pixel: u32) -> u8 {
        match self {
            Channel::Red => color::red(pixel),
            Channel::Green => color::green(pixel),
            Channel::Blue => color::blue(pixel),
        }
    }

    /// Lowercase channel name.
    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

/// Color channel helpers for packed 32-bit pixels.
///
/// # Pixel format
///
/// Pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | (255 << ALPHA_SHIFT)
    }

    /// Compose a 32-bit RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Compose an opaque gray pixel with `value` in every colour channel.
    #[inline]
    pub fn gray(value: u8) -> u32 {
        compose_rgb(value, value, value)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

}
