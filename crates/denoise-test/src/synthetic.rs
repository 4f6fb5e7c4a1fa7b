//! Deterministic synthetic test images
//!
//! Clean reference images plus seeded noise generators. The same seed
//! always yields the same corrupted image, so regression tests can compare
//! exact pixel values.

use crate::error::{TestError, TestResult};
use denoise_core::GrayImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Image with every pixel set to `value`
pub fn uniform(width: u32, height: u32, value: u8) -> TestResult<GrayImage> {
    Ok(GrayImage::new_with_value(width, height, value)?)
}

/// Left-to-right ramp from 0 to 255
pub fn horizontal_gradient(width: u32, height: u32) -> TestResult<GrayImage> {
    let mut img = GrayImage::new(width, height)?;
    let span = (width.max(2) - 1) as u64;
    for y in 0..height {
        for x in 0..width {
            img.set_pixel_unchecked(x, y, (x as u64 * 255 / span) as u8);
        }
    }
    Ok(img)
}

/// Checkerboard of `cell`-sized squares alternating `low` and `high`
pub fn checkerboard(width: u32, height: u32, cell: u32, low: u8, high: u8) -> TestResult<GrayImage> {
    if cell == 0 {
        return Err(TestError::InvalidParameter("cell size must be > 0".into()));
    }
    let mut img = GrayImage::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let v = if ((x / cell) + (y / cell)) % 2 == 0 {
                low
            } else {
                high
            };
            img.set_pixel_unchecked(x, y, v);
        }
    }
    Ok(img)
}

/// Corrupt an image with salt-and-pepper impulse noise
///
/// Each pixel is independently replaced with probability `density`; a
/// replaced pixel becomes 0 or 255 with equal chance.
///
/// # Errors
///
/// Returns `TestError::InvalidParameter` if `density` is outside [0, 1].
pub fn salt_and_pepper(image: &GrayImage, density: f64, seed: u64) -> TestResult<GrayImage> {
    if !(0.0..=1.0).contains(&density) {
        return Err(TestError::InvalidParameter(format!(
            "density {density} outside [0, 1]"
        )));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = image.clone();
    for v in out.data_mut() {
        if rng.random_bool(density) {
            *v = if rng.random_bool(0.5) { 255 } else { 0 };
        }
    }
    Ok(out)
}

/// Add uniformly distributed noise in `[-amplitude, amplitude]`, clamped to 0..=255
pub fn uniform_noise(image: &GrayImage, amplitude: u8, seed: u64) -> TestResult<GrayImage> {
    let mut rng = StdRng::seed_from_u64(seed);
    let a = amplitude as i32;
    let mut out = image.clone();
    for v in out.data_mut() {
        let delta = rng.random_range(-a..=a);
        *v = (*v as i32 + delta).clamp(0, 255) as u8;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_endpoints() {
        let img = horizontal_gradient(16, 2).unwrap();
        assert_eq!(img.get_pixel(0, 1), Some(0));
        assert_eq!(img.get_pixel(15, 1), Some(255));
    }

    #[test]
    fn test_checkerboard_cells() {
        let img = checkerboard(4, 4, 2, 10, 90).unwrap();
        assert_eq!(img.get_pixel(0, 0), Some(10));
        assert_eq!(img.get_pixel(2, 0), Some(90));
        assert_eq!(img.get_pixel(2, 2), Some(10));
        assert!(checkerboard(4, 4, 0, 0, 1).is_err());
    }

    #[test]
    fn test_salt_and_pepper_is_seeded() {
        let clean = uniform(32, 32, 128).unwrap();
        let a = salt_and_pepper(&clean, 0.2, 7).unwrap();
        let b = salt_and_pepper(&clean, 0.2, 7).unwrap();
        assert_eq!(a, b);
        assert!(a.data().iter().all(|&v| v == 0 || v == 128 || v == 255));
        assert!(a.count_differences(&clean).unwrap() > 0);
        assert!(salt_and_pepper(&clean, 1.5, 7).is_err());
    }

    #[test]
    fn test_uniform_noise_bounds() {
        let clean = uniform(16, 16, 100).unwrap();
        let noisy = uniform_noise(&clean, 10, 3).unwrap();
        assert!(noisy.data().iter().all(|&v| (90..=110).contains(&v)));
    }
}
