//! Denoise - Spatial-domain noise removal for grayscale images
//!
//! # Overview
//!
//! Every output pixel is computed from a square neighborhood of the
//! zero-padded input:
//!
//! - Arithmetic and geometric mean filters
//! - Median filter
//! - Adaptive local noise reduction
//! - Adaptive median filter with per-pixel window growth
//! - Pseudo-coloring of the result (intensity slicing, sine palettes)
//!
//! # Example
//!
//! ```
//! use denoise::GrayImage;
//! use denoise::filter::{FilterConfig, run};
//!
//! let img = GrayImage::from_rows(&[[10, 10, 10], [10, 200, 10], [10, 10, 10]]).unwrap();
//! let config = FilterConfig::from_name("median", 3, None).unwrap();
//! let out = run(&img, &config).unwrap();
//! assert_eq!(out.get_pixel(1, 1), Some(10));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use denoise_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use denoise_color as color;
pub use denoise_filter as filter;
