//! Whole-image filtering
//!
//! [`run`] validates a [`FilterConfig`], pads the source once, sweeps every
//! output pixel and assembles a new image of the same size:
//!
//! - fixed-window strategies pad by `(window_size - 1) / 2` and reduce each
//!   window with one [`FixedWindowFilter`]
//! - the adaptive median pads by `(max_window_size - 1) / 2`, since any
//!   pixel may grow to the largest window
//!
//! Rows are independent, so they can be processed sequentially or on the
//! rayon thread pool ([`Schedule`]) with identical results.

use crate::adaptive::{AdaptiveSummary, adaptive_median_pixel_with};
use crate::config::{FilterConfig, FilterKind, Schedule, Strategy};
use crate::neighborhood::{Neighborhood, pad};
use crate::stats::{FixedWindowFilter, to_intensity};
use crate::{FilterError, FilterResult};
use denoise_core::GrayImage;
use rayon::prelude::*;

/// Filter an image with the given configuration
///
/// The source is not modified; the result has the same dimensions.
///
/// # Errors
///
/// Returns [`FilterError::InvalidConfig`] before any pixel is processed if
/// the configuration is invalid.
///
/// # Examples
///
/// ```
/// use denoise_core::GrayImage;
/// use denoise_filter::{FilterConfig, FilterKind, run};
///
/// let img = GrayImage::from_rows(&[[10, 10, 10], [10, 200, 10], [10, 10, 10]]).unwrap();
/// let out = run(&img, &FilterConfig::new(FilterKind::Median, 3)).unwrap();
/// assert_eq!(out.get_pixel(1, 1), Some(10));
/// ```
pub fn run(image: &GrayImage, config: &FilterConfig) -> FilterResult<GrayImage> {
    match config.strategy()? {
        Strategy::Fixed {
            filter,
            window_size,
        } => run_fixed(image, filter, window_size, config.schedule),
        Strategy::Adaptive { start, max } => {
            run_adaptive(image, start, max, config.schedule).map(|(out, _)| out)
        }
    }
}

/// Compute one output pixel
///
/// `(x, y)` are coordinates in the source image; `padded` must be the
/// source padded by `config.padding()`. This is the per-pixel kernel of
/// [`run`], exposed so callers can schedule pixels themselves.
///
/// # Errors
///
/// Returns [`FilterError::InvalidConfig`] if the configuration is invalid.
///
/// # Panics
///
/// Panics if `padded` has less border than the configuration requires.
pub fn filter_pixel(padded: &GrayImage, x: u32, y: u32, config: &FilterConfig) -> FilterResult<u8> {
    let strategy = config.strategy()?;
    let p = strategy.padding();
    let mut nbhd = Neighborhood::with_radius(p);
    Ok(match strategy {
        Strategy::Fixed { filter, .. } => {
            nbhd.fill(padded, x + p, y + p, p);
            to_intensity(filter.apply(&mut nbhd))
        }
        Strategy::Adaptive { start, max } => {
            adaptive_median_pixel_with(&mut nbhd, padded, x + p, y + p, start, max).value
        }
    })
}

/// Apply the arithmetic mean filter with a `size x size` window
pub fn arithmetic_mean_filter(image: &GrayImage, size: u32) -> FilterResult<GrayImage> {
    run(image, &FilterConfig::new(FilterKind::ArithmeticMean, size))
}

/// Apply the geometric mean filter with a `size x size` window
pub fn geometric_mean_filter(image: &GrayImage, size: u32) -> FilterResult<GrayImage> {
    run(image, &FilterConfig::new(FilterKind::GeometricMean, size))
}

/// Apply the median filter with a `size x size` window
pub fn median_filter(image: &GrayImage, size: u32) -> FilterResult<GrayImage> {
    run(image, &FilterConfig::new(FilterKind::Median, size))
}

/// Apply the local noise reduction filter
///
/// `noise_variance` is the estimated variance of the noise over the image.
pub fn local_noise_filter(image: &GrayImage, size: u32, noise_variance: f64) -> FilterResult<GrayImage> {
    run(
        image,
        &FilterConfig::new(FilterKind::LocalNoise, size).with_noise_variance(noise_variance),
    )
}

/// Apply the adaptive median filter
///
/// Windows start at `size` (at least 3) and grow up to `max_size`.
pub fn adaptive_median_filter(image: &GrayImage, size: u32, max_size: u32) -> FilterResult<GrayImage> {
    run(
        image,
        &FilterConfig::new(FilterKind::AdaptiveMedian, size).with_max_window_size(max_size),
    )
}

/// Apply the adaptive median filter and report how each pixel was settled
///
/// # Errors
///
/// Returns [`FilterError::InvalidConfig`] if `config` is invalid or is not
/// an adaptive median configuration.
pub fn adaptive_median_filter_with_summary(
    image: &GrayImage,
    config: &FilterConfig,
) -> FilterResult<(GrayImage, AdaptiveSummary)> {
    match config.strategy()? {
        Strategy::Adaptive { start, max } => run_adaptive(image, start, max, config.schedule),
        Strategy::Fixed { .. } => Err(FilterError::InvalidConfig(format!(
            "expected adaptive_median, got {}",
            config.kind
        ))),
    }
}

fn run_fixed(
    image: &GrayImage,
    filter: FixedWindowFilter,
    window_size: u32,
    schedule: Schedule,
) -> FilterResult<GrayImage> {
    let radius = (window_size - 1) / 2;
    let padded = pad(image, radius)?;
    log::debug!(
        "{:?} filter: {}x{} image, window {}, padding {}, {:?}",
        filter,
        image.width(),
        image.height(),
        window_size,
        radius,
        schedule
    );

    let (out, _) = sweep(image, schedule, |y, row| {
        let mut nbhd = Neighborhood::with_radius(radius);
        for (x, px) in row.iter_mut().enumerate() {
            nbhd.fill(&padded, x as u32 + radius, y + radius, radius);
            *px = to_intensity(filter.apply(&mut nbhd));
        }
    })?;
    Ok(out)
}

fn run_adaptive(
    image: &GrayImage,
    start: u32,
    max: u32,
    schedule: Schedule,
) -> FilterResult<(GrayImage, AdaptiveSummary)> {
    let radius = (max - 1) / 2;
    let padded = pad(image, radius)?;
    log::debug!(
        "adaptive median filter: {}x{} image, window {}..={}, padding {}, {:?}",
        image.width(),
        image.height(),
        start,
        max,
        radius,
        schedule
    );

    let (out, rows) = sweep(image, schedule, |y, row| {
        let mut nbhd = Neighborhood::with_radius(radius);
        let mut summary = AdaptiveSummary::default();
        for (x, px) in row.iter_mut().enumerate() {
            let outcome =
                adaptive_median_pixel_with(&mut nbhd, &padded, x as u32 + radius, y + radius, start, max);
            summary.record(&outcome);
            *px = outcome.value;
        }
        summary
    })?;

    let summary = rows
        .into_iter()
        .fold(AdaptiveSummary::default(), AdaptiveSummary::merge);
    log::debug!(
        "adaptive median filter: {} kept, {} replaced, {} exhausted",
        summary.kept_center,
        summary.replaced,
        summary.exhausted
    );
    Ok((out, summary))
}

/// Allocate an output the size of `image` and fill it row by row
///
/// `row_fn` receives the row index and the output row, and returns a
/// per-row value collected in row order.
fn sweep<S, F>(image: &GrayImage, schedule: Schedule, row_fn: F) -> FilterResult<(GrayImage, Vec<S>)>
where
    S: Send,
    F: Fn(u32, &mut [u8]) -> S + Sync + Send,
{
    let mut out = GrayImage::new(image.width(), image.height())?;
    let width = image.width() as usize;

    let rows: Vec<S> = match schedule {
        Schedule::Sequential => out
            .data_mut()
            .chunks_mut(width)
            .enumerate()
            .map(|(y, row)| row_fn(y as u32, row))
            .collect(),
        Schedule::Parallel => out
            .data_mut()
            .par_chunks_mut(width)
            .enumerate()
            .map(|(y, row)| row_fn(y as u32, row))
            .collect(),
    };

    Ok((out, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_rejects_invalid_config_before_pass() {
        let img = GrayImage::new(4, 4).unwrap();
        assert!(matches!(
            run(&img, &FilterConfig::new(FilterKind::Median, 4)),
            Err(FilterError::InvalidConfig(_))
        ));
        assert!(run(&img, &FilterConfig::new(FilterKind::LocalNoise, 3)).is_err());
    }

    #[test]
    fn test_output_has_source_dimensions() {
        let img = GrayImage::new_with_value(7, 3, 50).unwrap();
        for kind in FilterKind::ALL {
            let config = FilterConfig::new(kind, 5).with_noise_variance(10.0);
            let out = run(&img, &config).unwrap();
            assert_eq!(out.dimensions(), (7, 3));
        }
    }

    #[test]
    fn test_filter_pixel_matches_run() {
        let img = GrayImage::from_rows(&[
            [12, 200, 14, 15],
            [0, 18, 255, 20],
            [21, 22, 23, 24],
        ])
        .unwrap();
        for kind in FilterKind::ALL {
            let config = FilterConfig::new(kind, 3).with_noise_variance(25.0);
            let out = run(&img, &config).unwrap();
            let padded = pad(&img, config.padding()).unwrap();
            for y in 0..img.height() {
                for x in 0..img.width() {
                    assert_eq!(
                        filter_pixel(&padded, x, y, &config).unwrap(),
                        out.get_pixel_unchecked(x, y),
                        "{kind} at ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_summary_requires_adaptive() {
        let img = GrayImage::new(3, 3).unwrap();
        let config = FilterConfig::new(FilterKind::Median, 3);
        assert!(adaptive_median_filter_with_summary(&img, &config).is_err());
    }

    #[test]
    fn test_summary_covers_every_pixel() {
        let img = GrayImage::from_rows(&[[1, 2, 3, 4], [5, 6, 7, 8]]).unwrap();
        let config = FilterConfig::new(FilterKind::AdaptiveMedian, 3);
        let (_, summary) = adaptive_median_filter_with_summary(&img, &config).unwrap();
        assert_eq!(summary.total(), 8);
    }
}
