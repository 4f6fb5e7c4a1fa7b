//! GrayImage - The main intensity grid
//!
//! `GrayImage` is a 2D array of 8-bit intensities. It is the input and the
//! output of every denoising filter; filters never modify their input and
//! always allocate a new output grid.
//!
//! # Memory Layout
//!
//! Data is stored in row-major order with no padding. The pixel at (x, y)
//! is at index `y * width + x`.
//!
//! # Examples
//!
//! ```
//! use denoise_core::GrayImage;
//!
//! let mut img = GrayImage::new(4, 3).unwrap();
//! img.set_pixel(1, 2, 200).unwrap();
//! assert_eq!(img.get_pixel(1, 2), Some(200));
//! assert_eq!(img.get_pixel(4, 0), None);
//! ```

mod access;
mod border;
mod rgb;

pub use rgb::RgbImage;

use crate::error::{Error, Result};

/// 8-bit grayscale image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel data (row-major, no padding)
    data: Vec<u8>,
}

impl GrayImage {
    /// Create a new image with all pixels set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, 0)
    }

    /// Create a new image with all pixels set to `value`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new_with_value(width: u32, height: u32, value: u8) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        Ok(GrayImage {
            width,
            height,
            data: vec![value; size],
        })
    }

    /// Create an image from row-major data
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0, and
    /// `Error::InvalidParameter` if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} does not match {}x{}",
                data.len(),
                width,
                height
            )));
        }

        Ok(GrayImage {
            width,
            height,
            data,
        })
    }

    /// Create an image from a slice of equally long rows
    ///
    /// # Examples
    ///
    /// ```
    /// use denoise_core::GrayImage;
    ///
    /// let img = GrayImage::from_rows(&[[10, 10, 10], [10, 200, 10], [10, 10, 10]]).unwrap();
    /// assert_eq!(img.width(), 3);
    /// assert_eq!(img.get_pixel(1, 1), Some(200));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` for an empty grid and
    /// `Error::DimensionMismatch` if a row differs in length from the first.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.as_ref().len()) as u32;
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for row in rows {
            let row = row.as_ref();
            if row.len() as u32 != width {
                return Err(Error::DimensionMismatch {
                    expected: (width, height),
                    actual: (row.len() as u32, height),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(GrayImage {
            width,
            height,
            data,
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

    /// Check whether another image has the same dimensions
    pub fn sizes_equal(&self, other: &GrayImage) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Get the pixel data as a row-major slice
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get mutable access to the row-major pixel data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Get one row of pixels
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.width as usize;
        let start = (y as usize) * w;
        &self.data[start..start + w]
    }

    /// Count the pixels whose value differs from `other` at the same location
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` if the images differ in size.
    pub fn count_differences(&self, other: &GrayImage) -> Result<usize> {
        if !self.sizes_equal(other) {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .filter(|(a, b)| a != b)
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(GrayImage::new(0, 5).is_err());
        assert!(GrayImage::new(5, 0).is_err());
        assert!(GrayImage::new(1, 1).is_ok());
    }

    #[test]
    fn test_from_vec_length_check() {
        assert!(GrayImage::from_vec(2, 2, vec![1, 2, 3]).is_err());
        let img = GrayImage::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(img.row(1), &[3, 4]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let rows: Vec<Vec<u8>> = vec![vec![1, 2], vec![3]];
        assert!(matches!(
            GrayImage::from_rows(&rows),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_count_differences() {
        let a = GrayImage::from_rows(&[[5, 9], [0, 7]]).unwrap();
        let b = GrayImage::from_rows(&[[5, 8], [0, 6]]).unwrap();
        assert_eq!(a.count_differences(&b).unwrap(), 2);

        let c = GrayImage::new(3, 2).unwrap();
        assert!(a.count_differences(&c).is_err());
    }
}
