//! Compression options and run summaries

use crate::error::{CompressError, CompressResult};

/// How the recursive compressor treats odd-sized regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RemainderPolicy {
    /// Split into four `(w/2, h/2)` quadrants. The rightmost column and
    /// bottom row of an odd-sized region are never visited.
    #[default]
    Skip,
    /// Split so the four quadrants tile the region exactly; right and
    /// bottom quadrants take the ceiling half.
    Cover,
}

impl RemainderPolicy {
    /// Lowercase policy name.
    pub fn name(self) -> &'static str {
        match self {
            RemainderPolicy::Skip => "skip",
            RemainderPolicy::Cover => "cover",
        }
    }
}

/// Options shared by both compressors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressOptions {
    threshold: f64,
    remainder: RemainderPolicy,
}

impl CompressOptions {
    /// Create options with the given collapse threshold.
    ///
    /// # Errors
    ///
    /// Returns [`CompressError::InvalidThreshold`] if `threshold` is
    /// negative, NaN or infinite.
    pub fn new(threshold: f64) -> CompressResult<Self> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(CompressError::InvalidThreshold(threshold));
        }
        Ok(Self {
            threshold,
            remainder: RemainderPolicy::default(),
        })
    }

    /// Set the remainder policy used by the recursive compressor.
    pub fn with_remainder(mut self, remainder: RemainderPolicy) -> Self {
        self.remainder = remainder;
        self
    }

    /// Maximum standard deviation of a region that still collapses.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Remainder policy for odd-sized regions.
    #[inline]
    pub fn remainder(&self) -> RemainderPolicy {
        self.remainder
    }
}

/// Counters collected during one compressor run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompressSummary {
    /// Regions whose statistics were computed
    pub regions_measured: u64,
    /// Regions filled with their average
    pub regions_collapsed: u64,
    /// Pixel writes performed (a pixel may be written in several passes)
    pub pixels_filled: u64,
    /// Deepest recursion level reached (recursive) or passes run (iterative)
    pub depth: u32,
}
