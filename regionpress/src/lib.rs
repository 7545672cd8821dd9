//! regionpress - Lossy region-variance image compression for Rust
//!
//! Near-uniform rectangular regions of an image are replaced by their
//! average intensity, trading fine detail for flat areas that encode
//! smaller. Two strategies are provided:
//!
//! - Recursive quadtree subdivision (`compress::compress_recursive`)
//! - Iterative power-of-two grid sweep (`compress::compress_iterative`)
//!
//! Image I/O (PNG, JPEG, PNM) lives in [`io`].
//!
//! # Example
//!
//! ```
//! use regionpress::Raster;
//! use regionpress::compress::compress_recursive;
//!
//! let mut raster = Raster::from_gray_values(2, 2, &[40, 41, 41, 40])
//!     .unwrap()
//!     .to_mut();
//! compress_recursive(&mut raster, 1.0).unwrap();
//! assert_eq!(raster.get_rgb(1, 0), Some((40, 40, 40)));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use regionpress_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use regionpress_compress as compress;
pub use regionpress_io as io;
