//! Padding and neighborhood extraction
//!
//! Every filter reads square windows out of a zero-padded copy of the
//! source image. [`pad`] builds that copy once per pass; a [`Neighborhood`]
//! is then refilled for every pixel (and, for the adaptive median filter,
//! for every window size) without reallocating.
//!
//! # Scan order
//!
//! Values are read row by row, top to bottom, and left to right within a
//! row. For a window of side `w = 2 * radius + 1` the center pixel is
//! therefore always at flat index `(w * w - 1) / 2`, which is what
//! [`Neighborhood::center`] returns.

use crate::FilterResult;
use denoise_core::GrayImage;

/// Zero-pad an image by `radius` pixels on every side
///
/// The result is `(width + 2*radius) x (height + 2*radius)`; its interior
/// is a copy of `image` and its border is zero. The source is not modified.
///
/// # Errors
///
/// Returns an error if the padded dimensions overflow.
pub fn pad(image: &GrayImage, radius: u32) -> FilterResult<GrayImage> {
    Ok(image.add_border(radius, 0)?)
}

/// Smallest, middle and largest value of a neighborhood
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderStats {
    /// Smallest value
    pub min: u8,
    /// Element at index `len / 2` after sorting
    pub median: u8,
    /// Largest value
    pub max: u8,
}

/// Square window of intensities read from a padded image
#[derive(Debug, Clone, Default)]
pub struct Neighborhood {
    values: Vec<u8>,
    sorted: Vec<u8>,
    radius: u32,
}

impl Neighborhood {
    /// Create an empty neighborhood with room for windows up to `radius`
    pub fn with_radius(radius: u32) -> Self {
        let side = (2 * radius + 1) as usize;
        Self {
            values: Vec::with_capacity(side * side),
            sorted: Vec::with_capacity(side * side),
            radius,
        }
    }

    /// Extract the window of `radius` centered at (x, y) of a padded image
    ///
    /// # Panics
    ///
    /// Panics if the window does not lie entirely inside `padded`.
    ///
    /// # Examples
    ///
    /// ```
    /// use denoise_core::GrayImage;
    /// use denoise_filter::Neighborhood;
    ///
    /// let img = GrayImage::from_rows(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
    /// let nbhd = Neighborhood::extract(&img, 1, 1, 1);
    /// assert_eq!(nbhd.values(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// assert_eq!(nbhd.center(), 5);
    /// ```
    pub fn extract(padded: &GrayImage, x: u32, y: u32, radius: u32) -> Self {
        let mut nbhd = Self::with_radius(radius);
        nbhd.fill(padded, x, y, radius);
        nbhd
    }

    /// Refill this neighborhood with the window of `radius` centered at (x, y)
    ///
    /// # Panics
    ///
    /// Panics if the window does not lie entirely inside `padded`. The
    /// caller must have padded the image by at least `radius`.
    pub fn fill(&mut self, padded: &GrayImage, x: u32, y: u32, radius: u32) {
        let (w, h) = padded.dimensions();
        assert!(
            x >= radius && y >= radius && x + radius < w && y + radius < h,
            "window of radius {radius} at ({x}, {y}) exceeds padded image {w}x{h}"
        );

        self.radius = radius;
        self.values.clear();
        let x0 = (x - radius) as usize;
        let x1 = (x + radius) as usize;
        for yy in (y - radius)..=(y + radius) {
            self.values.extend_from_slice(&padded.row(yy)[x0..=x1]);
        }
    }

    /// Window values in scan order
    #[inline]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Number of values (`side * side`)
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been extracted yet
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Window half-size
    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Window side length
    #[inline]
    pub fn side(&self) -> u32 {
        2 * self.radius + 1
    }

    /// Value of the window's center pixel
    ///
    /// # Panics
    ///
    /// Panics if the neighborhood is empty.
    #[inline]
    pub fn center(&self) -> u8 {
        self.values[self.values.len() / 2]
    }

    /// Window values sorted ascending
    ///
    /// The scan-order values are left untouched, so [`Neighborhood::center`]
    /// stays valid after sorting.
    pub fn sorted(&mut self) -> &[u8] {
        let sorted = self.scratch();
        sorted.sort_unstable();
        sorted
    }

    /// Scan-order copy of the window that callers may reorder freely
    ///
    /// Used for in-place selection (see [`crate::stats::median`]) without
    /// disturbing [`Neighborhood::values`].
    pub fn scratch(&mut self) -> &mut [u8] {
        self.sorted.clear();
        self.sorted.extend_from_slice(&self.values);
        &mut self.sorted
    }

    /// Min, median and max of the window
    ///
    /// # Panics
    ///
    /// Panics if the neighborhood is empty.
    pub fn order_stats(&mut self) -> OrderStats {
        let sorted = self.sorted();
        OrderStats {
            min: sorted[0],
            median: sorted[sorted.len() / 2],
            max: sorted[sorted.len() - 1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: u32, height: u32) -> GrayImage {
        let data = (0..width * height).map(|v| v as u8).collect();
        GrayImage::from_vec(width, height, data).unwrap()
    }

    #[test]
    fn test_scan_order_is_row_major() {
        let img = numbered(5, 5);
        let nbhd = Neighborhood::extract(&img, 2, 2, 1);
        assert_eq!(nbhd.values(), &[6, 7, 8, 11, 12, 13, 16, 17, 18]);
        assert_eq!(nbhd.side(), 3);
    }

    #[test]
    fn test_center_index() {
        let img = numbered(9, 9);
        for radius in 0..=4 {
            let nbhd = Neighborhood::extract(&img, 4, 4, radius);
            let side = (2 * radius + 1) as usize;
            assert_eq!(nbhd.len(), side * side);
            assert_eq!(nbhd.center(), img.get_pixel(4, 4).unwrap());
            assert_eq!(nbhd.values()[(side * side - 1) / 2], nbhd.center());
        }
    }

    #[test]
    fn test_radius_zero_is_single_pixel() {
        let img = numbered(3, 3);
        let nbhd = Neighborhood::extract(&img, 0, 2, 0);
        assert_eq!(nbhd.values(), &[6]);
    }

    #[test]
    fn test_fill_reuses_buffer() {
        let img = numbered(7, 7);
        let mut nbhd = Neighborhood::with_radius(3);
        nbhd.fill(&img, 3, 3, 3);
        assert_eq!(nbhd.len(), 49);
        nbhd.fill(&img, 3, 3, 1);
        assert_eq!(nbhd.len(), 9);
        assert_eq!(nbhd.radius(), 1);
        assert_eq!(nbhd.center(), 24);
    }

    #[test]
    fn test_order_stats_keeps_scan_order() {
        let img = GrayImage::from_rows(&[[9, 1, 8], [2, 7, 3], [6, 4, 5]]).unwrap();
        let mut nbhd = Neighborhood::extract(&img, 1, 1, 1);
        let stats = nbhd.order_stats();
        assert_eq!(
            stats,
            OrderStats {
                min: 1,
                median: 5,
                max: 9
            }
        );
        assert_eq!(nbhd.center(), 7);
    }

    #[test]
    fn test_scratch_leaves_values_in_scan_order() {
        let img = GrayImage::from_rows(&[[9, 1, 8], [2, 7, 3], [6, 4, 5]]).unwrap();
        let mut nbhd = Neighborhood::extract(&img, 1, 1, 1);
        nbhd.scratch().reverse();
        assert_eq!(nbhd.values(), &[9, 1, 8, 2, 7, 3, 6, 4, 5]);
        assert_eq!(crate::stats::median(nbhd.scratch()), 5);
        assert_eq!(nbhd.center(), 7);
    }

    #[test]
    #[should_panic(expected = "exceeds padded image")]
    fn test_out_of_bounds_window_panics() {
        let img = numbered(3, 3);
        Neighborhood::extract(&img, 0, 1, 1);
    }

    #[test]
    fn test_pad() {
        let img = numbered(2, 2);
        let padded = pad(&img, 1).unwrap();
        assert_eq!(padded.dimensions(), (4, 4));
        let nbhd = Neighborhood::extract(&padded, 1, 1, 1);
        assert_eq!(nbhd.values(), &[0, 0, 0, 0, 0, 1, 0, 2, 3]);
    }
}
