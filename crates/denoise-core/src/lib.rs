//! denoise-core - Basic data structures for spatial denoising
//!
//! This crate provides the image containers shared by the rest of the
//! workspace:
//!
//! - [`GrayImage`] - 8-bit single channel intensity grid (filter input/output)
//! - [`RgbImage`] - 3-channel color grid (pseudo-coloring output)
//!
//! Borders (zero padding for neighborhood filters) are added with
//! [`GrayImage::add_border`] and removed with [`GrayImage::remove_border`].

pub mod error;
pub mod image;

pub use error::{Error, Result};
pub use image::{GrayImage, RgbImage};

/// Channel helpers for packed 32-bit RGB pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
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

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | (255 << ALPHA_SHIFT)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_compose_extract_rgb() {
            let pixel = compose_rgb(12, 200, 255);
            assert_eq!(extract_rgb(pixel), (12, 200, 255));
            assert_eq!(pixel & 0xff, 255);
        }

        #[test]
        fn test_black_is_opaque() {
            assert_eq!(compose_rgb(0, 0, 0), 0x0000_00ff);
        }
    }
}
