//! Border operations for images
//!
//! This module provides functions for adding and removing borders
//! (padding) around images:
//!
//! - Uniform borders (same size on all sides)
//! - General borders (different size per side)
//!
//! Neighborhood filters pad with a zero border of the window's half-size so
//! that every pixel of the source has a full square window.

use super::GrayImage;
use crate::error::{Error, Result};

impl GrayImage {
    /// Add a uniform border around the image.
    ///
    /// Creates a new image with `npix` pixels of border on all sides,
    /// filled with `val`. The interior `[npix, npix + height) x
    /// [npix, npix + width)` is a copy of `self`. A zero-width border
    /// returns a plain copy.
    ///
    /// # Arguments
    ///
    /// * `npix` - Border width in pixels
    /// * `val` - Border pixel value
    ///
    /// # Returns
    ///
    /// New image with dimensions `(width + 2*npix, height + 2*npix)`.
    ///
    /// # Errors
    ///
    /// Returns error if the bordered dimensions would overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use denoise_core::GrayImage;
    ///
    /// let img = GrayImage::new_with_value(3, 3, 7).unwrap();
    /// let padded = img.add_border(2, 0).unwrap();
    /// assert_eq!(padded.dimensions(), (7, 7));
    /// assert_eq!(padded.get_pixel(0, 0), Some(0));
    /// assert_eq!(padded.get_pixel(2, 2), Some(7));
    /// ```
    pub fn add_border(&self, npix: u32, val: u8) -> Result<GrayImage> {
        self.add_border_general(npix, npix, npix, npix, val)
    }

    /// Add a general border with different sizes per side.
    ///
    /// # Arguments
    ///
    /// * `left` - Left border width
    /// * `right` - Right border width
    /// * `top` - Top border height
    /// * `bot` - Bottom border height
    /// * `val` - Border pixel value
    ///
    /// # Returns
    ///
    /// New image with dimensions `(width + left + right, height + top + bot)`.
    ///
    /// # Errors
    ///
    /// Returns error if dimensions would overflow.
    pub fn add_border_general(
        &self,
        left: u32,
        right: u32,
        top: u32,
        bot: u32,
        val: u8,
    ) -> Result<GrayImage> {
        let overflow = || {
            Error::InvalidParameter(format!(
                "border ({left}, {right}, {top}, {bot}) overflows {}x{}",
                self.width, self.height
            ))
        };
        let wd = self
            .width
            .checked_add(left)
            .and_then(|w| w.checked_add(right))
            .ok_or_else(overflow)?;
        let hd = self
            .height
            .checked_add(top)
            .and_then(|h| h.checked_add(bot))
            .ok_or_else(overflow)?;

        let mut out = GrayImage::new_with_value(wd, hd, val)?;

        let ws = self.width as usize;
        let wdu = wd as usize;
        for y in 0..self.height as usize {
            let dst = (y + top as usize) * wdu + left as usize;
            out.data[dst..dst + ws].copy_from_slice(&self.data[y * ws..(y + 1) * ws]);
        }

        Ok(out)
    }

    /// Remove a uniform border from the image.
    ///
    /// # Returns
    ///
    /// New image with dimensions `(width - 2*npix, height - 2*npix)`.
    ///
    /// # Errors
    ///
    /// Returns error if border is larger than the image.
    pub fn remove_border(&self, npix: u32) -> Result<GrayImage> {
        self.remove_border_general(npix, npix, npix, npix)
    }

    /// Remove a general border with different sizes per side.
    ///
    /// # Errors
    ///
    /// Returns error if border is larger than the image.
    pub fn remove_border_general(&self, left: u32, right: u32, top: u32, bot: u32) -> Result<GrayImage> {
        let horizontal = left as u64 + right as u64;
        let vertical = top as u64 + bot as u64;
        if horizontal >= self.width as u64 || vertical >= self.height as u64 {
            return Err(Error::InvalidParameter(format!(
                "border ({left}, {right}, {top}, {bot}) too large for {}x{}",
                self.width, self.height
            )));
        }

        let wd = self.width - left - right;
        let hd = self.height - top - bot;
        let ws = self.width as usize;
        let mut data = Vec::with_capacity((wd as usize) * (hd as usize));
        for y in top..top + hd {
            let start = (y as usize) * ws + left as usize;
            data.extend_from_slice(&self.data[start..start + wd as usize]);
        }

        GrayImage::from_vec(wd, hd, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_border_zero_is_copy() {
        let img = GrayImage::from_rows(&[[1, 2], [3, 4]]).unwrap();
        assert_eq!(img.add_border(0, 9).unwrap(), img);
    }

    #[test]
    fn test_add_border_general_layout() {
        let img = GrayImage::from_rows(&[[1, 2], [3, 4]]).unwrap();
        let b = img.add_border_general(1, 0, 2, 1, 5).unwrap();
        assert_eq!(b.dimensions(), (3, 5));
        assert_eq!(b.row(0), &[5, 5, 5]);
        assert_eq!(b.row(2), &[5, 1, 2]);
        assert_eq!(b.row(3), &[5, 3, 4]);
        assert_eq!(b.row(4), &[5, 5, 5]);
    }

    #[test]
    fn test_add_border_overflow() {
        let img = GrayImage::new(2, 2).unwrap();
        assert!(img.add_border(u32::MAX, 0).is_err());
    }

    #[test]
    fn test_remove_border_inverts_add() {
        let img = GrayImage::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
        let b = img.add_border(3, 0).unwrap();
        assert_eq!(b.remove_border(3).unwrap(), img);
        assert!(b.remove_border(5).is_err());
    }
}
