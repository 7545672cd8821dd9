//! Region - Rectangles inside a raster
//!
//! A [`Region`] is an axis-aligned rectangle addressed in pixel units. The
//! compressors derive every candidate region from the full raster rectangle,
//! either by halving ([`Region::quadrants`], [`Region::tiling_quadrants`])
//! or by sweeping a regular grid ([`Region::grid`]).

use crate::error::{Error, Result};

/// A rectangle region
///
/// Small and `Copy`; right and bottom edges are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    /// Left x coordinate
    pub x: u32,
    /// Top y coordinate
    pub y: u32,
    /// Width
    pub w: u32,
    /// Height
    pub h: u32,
}

impl Region {
    /// Create a new region
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] if width or height is zero.
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Result<Self> {
        if w == 0 || h == 0 {
            return Err(Error::InvalidRegion { x, y, w, h });
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a region without validation
    pub const fn new_unchecked(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// The region covering a whole `width x height` raster
    pub const fn whole(width: u32, height: u32) -> Self {
        Self::new_unchecked(0, 0, width, height)
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> u64 {
        self.x as u64 + self.w as u64
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> u64 {
        self.y as u64 + self.h as u64
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// Check if the region is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Check if a point is inside the region
    #[inline]
    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.x && (x as u64) < self.right() && y >= self.y && (y as u64) < self.bottom()
    }

    /// Check that the region is non-empty and lies inside `width x height`
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        !self.is_empty() && self.right() <= width as u64 && self.bottom() <= height as u64
    }

    /// Clip the region to `width x height`
    ///
    /// Returns `None` if nothing of the region remains.
    pub fn clip(&self, width: u32, height: u32) -> Option<Region> {
        let right = self.right().min(width as u64);
        let bottom = self.bottom().min(height as u64);
        if (self.x as u64) < right && (self.y as u64) < bottom {
            Some(Region {
                x: self.x,
                y: self.y,
                w: (right - self.x as u64) as u32,
                h: (bottom - self.y as u64) as u32,
            })
        } else {
            None
        }
    }

    /// Split into four quadrants of size `(w/2, h/2)`.
    ///
    /// Order is top-left, top-right, bottom-left, bottom-right, with the
    /// split point at `(x + w/2, y + h/2)`. For odd widths the rightmost
    /// column is not covered by any quadrant; for odd heights the bottom
    /// row is not covered. Quadrants of a region narrower than 2 are empty.
    ///
    /// Split coordinates saturate at `u32::MAX` for regions built with
    /// [`Region::new_unchecked`] that extend past the coordinate range.
    pub fn quadrants(&self) -> [Region; 4] {
        let hw = self.w / 2;
        let hh = self.h / 2;
        let mid_x = self.x.saturating_add(hw);
        let mid_y = self.y.saturating_add(hh);
        [
            Region::new_unchecked(self.x, self.y, hw, hh),
            Region::new_unchecked(mid_x, self.y, hw, hh),
            Region::new_unchecked(self.x, mid_y, hw, hh),
            Region::new_unchecked(mid_x, mid_y, hw, hh),
        ]
    }

    /// Split into four quadrants that tile the region exactly.
    ///
    /// Same split point and order as [`Region::quadrants`]; the right and
    /// bottom quadrants take the ceiling half so odd remainders are covered.
    /// Split coordinates saturate like those of [`Region::quadrants`].
    pub fn tiling_quadrants(&self) -> [Region; 4] {
        let lw = self.w / 2;
        let th = self.h / 2;
        let rw = self.w - lw;
        let bh = self.h - th;
        let mid_x = self.x.saturating_add(lw);
        let mid_y = self.y.saturating_add(th);
        [
            Region::new_unchecked(self.x, self.y, lw, th),
            Region::new_unchecked(mid_x, self.y, rw, th),
            Region::new_unchecked(self.x, mid_y, lw, bh),
            Region::new_unchecked(mid_x, mid_y, rw, bh),
        ]
    }

    /// Iterate the cells of a `step x step` grid over a `width x height`
    /// raster.
    ///
    /// Cells are yielded column by column (x outer, y inner). Cells in the
    /// last column / row are clipped to the raster. A zero `step` yields
    /// nothing.
    pub fn grid(width: u32, height: u32, step: u32) -> GridCells {
        GridCells {
            width,
            height,
            step,
            x: 0,
            y: 0,
        }
    }
}

/// Iterator over the cells of a regular grid, see [`Region::grid`].
#[derive(Debug, Clone)]
pub struct GridCells {
    width: u32,
    height: u32,
    step: u32,
    x: u32,
    y: u32,
}

impl Iterator for GridCells {
    type Item = Region;

    fn next(&mut self) -> Option<Region> {
        if self.step == 0 || self.x >= self.width || self.height == 0 {
            return None;
        }
        let cell = Region::new_unchecked(self.x, self.y, self.step, self.step)
            .clip(self.width, self.height)?;
        match self.y.checked_add(self.step) {
            Some(next_y) if next_y < self.height => self.y = next_y,
            _ => {
                self.y = 0;
                self.x = self.x.checked_add(self.step).unwrap_or(self.width);
            }
        }
        Some(cell)
    }
}
