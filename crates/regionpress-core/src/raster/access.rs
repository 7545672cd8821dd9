//! Pixel access functions
//!
//! Bounds-checked getters and setters on [`Raster`] / [`RasterMut`], plus the
//! [`RasterAccess`] trait that the compressors are generic over.

use super::{Raster, RasterMut};
use crate::color;
use crate::error::{Error, Result};

/// Minimal raster capability set required by the compressors.
///
/// Implementors expose their dimensions, the value of the sampled channel
/// and a gray/colour pixel setter. Coordinates passed by the compressors are
/// always inside `width() x height()`; implementations may panic otherwise.
pub trait RasterAccess {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Value of the sampled channel at (x, y).
    fn channel_value(&self, x: u32, y: u32) -> u8;

    /// Overwrite the pixel at (x, y) with an opaque RGB colour.
    fn set_pixel_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8);
}

impl Raster {
    /// Get a packed pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y)])
    }

    /// Get RGB values at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgb)
    }

    /// Get the sampled channel value at (x, y).
    pub fn channel_value(&self, x: u32, y: u32) -> Option<u8> {
        self.get_pixel(x, y)
            .map(|p| self.inner.sample_channel.extract(p))
    }
}

impl RasterMut {
    /// Get a packed pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y)])
    }

    /// Get RGB values at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgb)
    }

    /// Set a packed pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a packed pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = val;
    }

    /// Set an opaque RGB pixel at (x, y).
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_pixel(x, y, color::compose_rgb(r, g, b))
    }
}

impl RasterAccess for RasterMut {
    #[inline]
    fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    fn channel_value(&self, x: u32, y: u32) -> u8 {
        let pixel = self.inner.data[self.inner.index(x, y)];
        self.inner.sample_channel.extract(pixel)
    }

    #[inline]
    fn set_pixel_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        self.set_pixel_unchecked(x, y, color::compose_rgb(r, g, b));
    }
}
