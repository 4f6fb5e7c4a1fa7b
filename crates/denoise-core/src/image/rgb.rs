//! RgbImage - 3-channel color grid
//!
//! Output container for the pseudo-coloring routines. Pixels are packed
//! as `0xRRGGBBAA` words (see [`crate::color`]) with alpha fixed at 255.

use crate::color;
use crate::error::{Error, Result};

/// 24-bit RGB image, stored as packed 32-bit words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl RgbImage {
    /// Create a new all-black image
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(RgbImage {
            width,
            height,
            data: vec![color::compose_rgb(0, 0, 0); size],
        })
    }

    /// Get the width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Packed pixel data, row-major
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Get RGB values at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        Some(color::extract_rgb(self.data[idx]))
    }

    /// Set a packed pixel by flat row-major index without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `index >= width * height`.
    #[inline]
    pub fn set_packed_unchecked(&mut self, index: usize, pixel: u32) {
        self.data[index] = pixel;
    }
}
