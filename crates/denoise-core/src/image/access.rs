//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels.
//! The checked variants return `None`/`Err` outside the image; the
//! unchecked variants are for inner loops whose bounds are guaranteed by
//! the caller (for instance neighborhood reads inside a padded image).

use super::GrayImage;
use crate::error::{Error, Result};

impl GrayImage {
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index falls outside the pixel buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height);
        self.data[self.index(x, y)]
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        if x >= self.width {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width as usize,
            });
        }
        if y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height as usize,
            });
        }
        let idx = self.index(x, y);
        self.data[idx] = val;
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index falls outside the pixel buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u8) {
        debug_assert!(x < self.width && y < self.height);
        let idx = self.index(x, y);
        self.data[idx] = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_pixel() {
        let mut img = GrayImage::new(3, 2).unwrap();
        img.set_pixel(2, 1, 42).unwrap();
        assert_eq!(img.get_pixel(2, 1), Some(42));
        assert_eq!(img.get_pixel_unchecked(2, 1), 42);
        assert_eq!(img.data()[5], 42);
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut img = GrayImage::new(3, 2).unwrap();
        assert!(matches!(
            img.set_pixel(3, 0, 1),
            Err(Error::IndexOutOfBounds { index: 3, len: 3 })
        ));
        assert!(img.set_pixel(0, 2, 1).is_err());
        assert_eq!(img.get_pixel(0, 2), None);
    }
}
