//! Pseudo-coloring of grayscale images
//!
//! Both techniques split the 8-bit dynamic range into `n_slices + 1` equal
//! intervals and paint every pixel with the palette entry of the interval
//! its intensity falls in:
//!
//! 1. **Intensity slicing** ([`intensity_slicing`]): each interval gets a
//!    random color
//!
//! 2. **Color transformation** ([`color_transformation`]): interval `r` gets
//!    `255 * sin(r + theta)` per channel, with a separate phase per channel
//!
//! Interval 0 (the darkest) is always black.
//!
//! # Examples
//!
//! ```
//! use denoise_color::coloring::{color_transformation, intensity_slicing_seeded};
//! use denoise_core::GrayImage;
//!
//! let img = GrayImage::from_rows(&[[0, 64, 128, 255]]).unwrap();
//!
//! let sliced = intensity_slicing_seeded(&img, 3, 42).unwrap();
//! assert_eq!(sliced.get_rgb(0, 0), Some((0, 0, 0)));
//!
//! let waves = color_transformation(&img, 3, [0.0, 120.0, 240.0]).unwrap();
//! assert_eq!(waves.dimensions(), (4, 1));
//! ```

use crate::{ColorError, ColorResult};
use denoise_core::{GrayImage, RgbImage, color};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest supported number of slices (256 intervals of one level each)
pub const MAX_SLICES: u32 = 255;

/// Interval colors for one pseudo-coloring pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlicePalette {
    colors: Vec<(u8, u8, u8)>,
}

impl SlicePalette {
    /// Palette with black for interval 0 and random colors elsewhere
    ///
    /// Components are drawn from `0..255`.
    pub fn random<R: Rng>(n_slices: u32, rng: &mut R) -> ColorResult<Self> {
        let len = interval_count(n_slices)?;
        let mut colors = Vec::with_capacity(len);
        colors.push((0, 0, 0));
        for _ in 1..len {
            colors.push((
                rng.random_range(0..255),
                rng.random_range(0..255),
                rng.random_range(0..255),
            ));
        }
        Ok(Self { colors })
    }

    /// Palette with `255 * sin(r + theta[c] * pi / 180)` for channel `c` of
    /// interval `r >= 1`
    ///
    /// Negative values become 0; fractional values are truncated.
    pub fn sinusoidal(n_slices: u32, theta: [f64; 3]) -> ColorResult<Self> {
        let len = interval_count(n_slices)?;
        let phase = theta.map(f64::to_radians);
        let channel = |r: usize, c: usize| -> u8 {
            let v = 255.0 * (r as f64 + phase[c]).sin();
            v.clamp(0.0, 255.0) as u8
        };

        let mut colors = Vec::with_capacity(len);
        colors.push((0, 0, 0));
        for r in 1..len {
            colors.push((channel(r, 0), channel(r, 1), channel(r, 2)));
        }
        Ok(Self { colors })
    }

    /// Number of intervals (`n_slices + 1`)
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a palette has at least one interval
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color of interval `index`
    pub fn get(&self, index: usize) -> Option<(u8, u8, u8)> {
        self.colors.get(index).copied()
    }

    /// Interval an intensity belongs to
    ///
    /// `floor(v / (256 / len))`, computed exactly in integers.
    #[inline]
    pub fn interval_of(&self, value: u8) -> usize {
        value as usize * self.colors.len() / 256
    }

    /// Paint every pixel of `image` with the color of its interval
    pub fn apply(&self, image: &GrayImage) -> ColorResult<RgbImage> {
        let packed: Vec<u32> = self
            .colors
            .iter()
            .map(|&(r, g, b)| color::compose_rgb(r, g, b))
            .collect();

        let mut out = RgbImage::new(image.width(), image.height())?;
        for (i, &v) in image.data().iter().enumerate() {
            out.set_packed_unchecked(i, packed[self.interval_of(v)]);
        }
        Ok(out)
    }
}

fn interval_count(n_slices: u32) -> ColorResult<usize> {
    if n_slices > MAX_SLICES {
        return Err(ColorError::InvalidParameters(format!(
            "n_slices must be <= {MAX_SLICES}, got {n_slices}"
        )));
    }
    Ok(n_slices as usize + 1)
}

/// Color a grayscale image by intensity slicing with random colors
///
/// # Arguments
///
/// * `image` - Grayscale input
/// * `n_slices` - Number of cuts in the dynamic range; produces
///   `n_slices + 1` intervals
/// * `rng` - Source of the palette colors
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] if `n_slices > 255`.
pub fn intensity_slicing<R: Rng>(image: &GrayImage, n_slices: u32, rng: &mut R) -> ColorResult<RgbImage> {
    let palette = SlicePalette::random(n_slices, rng)?;
    log::debug!(
        "intensity slicing: {}x{} image, {} intervals",
        image.width(),
        image.height(),
        palette.len()
    );
    palette.apply(image)
}

/// [`intensity_slicing`] with a palette drawn from a seeded generator
pub fn intensity_slicing_seeded(image: &GrayImage, n_slices: u32, seed: u64) -> ColorResult<RgbImage> {
    let mut rng = StdRng::seed_from_u64(seed);
    intensity_slicing(image, n_slices, &mut rng)
}

/// Color a grayscale image with per-channel sine waves over the intervals
///
/// `theta` holds the red, green and blue phases in degrees.
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] if `n_slices > 255` or a phase
/// is not finite.
pub fn color_transformation(image: &GrayImage, n_slices: u32, theta: [f64; 3]) -> ColorResult<RgbImage> {
    if theta.iter().any(|t| !t.is_finite()) {
        return Err(ColorError::InvalidParameters(format!(
            "phases must be finite, got {theta:?}"
        )));
    }
    let palette = SlicePalette::sinusoidal(n_slices, theta)?;
    log::debug!(
        "color transformation: {}x{} image, {} intervals, theta {:?}",
        image.width(),
        image.height(),
        palette.len(),
        theta
    );
    palette.apply(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_of() {
        let palette = SlicePalette::sinusoidal(3, [0.0; 3]).unwrap();
        // 4 intervals of 64 levels
        assert_eq!(palette.interval_of(0), 0);
        assert_eq!(palette.interval_of(63), 0);
        assert_eq!(palette.interval_of(64), 1);
        assert_eq!(palette.interval_of(191), 2);
        assert_eq!(palette.interval_of(255), 3);

        let palette = SlicePalette::sinusoidal(MAX_SLICES, [0.0; 3]).unwrap();
        assert_eq!(palette.len(), 256);
        for v in 0..=255u8 {
            assert_eq!(palette.interval_of(v), v as usize);
        }
    }

    #[test]
    fn test_too_many_slices() {
        assert!(SlicePalette::sinusoidal(256, [0.0; 3]).is_err());
        let mut rng = StdRng::seed_from_u64(1);
        assert!(SlicePalette::random(1000, &mut rng).is_err());
    }

    #[test]
    fn test_random_palette() {
        let mut rng = StdRng::seed_from_u64(5);
        let palette = SlicePalette::random(10, &mut rng).unwrap();
        assert_eq!(palette.len(), 11);
        assert_eq!(palette.get(0), Some((0, 0, 0)));
        for i in 0..palette.len() {
            let (r, g, b) = palette.get(i).unwrap();
            assert!(r < 255 && g < 255 && b < 255);
        }
        assert_eq!(palette.get(11), None);
    }

    #[test]
    fn test_sinusoidal_palette() {
        let palette = SlicePalette::sinusoidal(4, [0.0, 90.0, 180.0]).unwrap();
        // r = 1: sin(1) = 0.841, sin(1 + pi/2) = cos(1) = 0.540, sin(1 + pi) < 0
        assert_eq!(palette.get(1), Some((214, 137, 0)));
        // r = 4: sin(4) < 0, cos(4) < 0, -sin(4) = 0.757
        assert_eq!(palette.get(4), Some((0, 0, 192)));
        assert_eq!(palette.get(0), Some((0, 0, 0)));
    }

    #[test]
    fn test_zero_slices_is_black() {
        let img = GrayImage::new_with_value(3, 2, 250).unwrap();
        let out = color_transformation(&img, 0, [10.0, 20.0, 30.0]).unwrap();
        assert!(out.data().iter().all(|&p| color::extract_rgb(p) == (0, 0, 0)));
    }

    #[test]
    fn test_non_finite_theta() {
        let img = GrayImage::new(2, 2).unwrap();
        assert!(color_transformation(&img, 3, [f64::NAN, 0.0, 0.0]).is_err());
    }
}
