//! Adaptive median filter
//!
//! For each pixel the window grows from a starting size until its median
//! is strictly between the window minimum and maximum (stage A), or until
//! the window would exceed the maximum size. Once stage A passes, the
//! original pixel is kept if it is itself strictly between the minimum and
//! maximum (stage B); otherwise it is replaced by the window median.
//!
//! This removes impulse (salt-and-pepper) noise while leaving plausible
//! pixels, and therefore fine detail, unchanged.
//!
//! # Window growth
//!
//! | step | window | outcome |
//! |------|--------|---------|
//! | stage A fails, `w + 2 <= max` | `w + 2` | grow |
//! | stage A fails, `w + 2 > max` | `w` | median of the last window |
//! | stage A passes, stage B passes | `w` | original pixel |
//! | stage A passes, stage B fails | `w` | median of `w` |

use crate::neighborhood::{Neighborhood, OrderStats};
use denoise_core::GrayImage;

/// How the adaptive median filter settled a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdaptiveDecision {
    /// Stage A and stage B passed; the original value was kept
    KeepCenter,
    /// Stage A passed, stage B failed; the window median replaced the pixel
    Median,
    /// Stage A never passed; the median of the largest window was used
    Exhausted,
}

/// Result of the adaptive median filter at one pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdaptiveOutcome {
    /// Output intensity
    pub value: u8,
    /// Side of the window the decision was made at
    pub window_size: u32,
    /// Which terminal state was reached
    pub decision: AdaptiveDecision,
}

/// Outcome counts over a whole pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdaptiveSummary {
    /// Pixels that kept their original value
    pub kept_center: usize,
    /// Pixels replaced by a median after stage A passed
    pub replaced: usize,
    /// Pixels whose window grew to the maximum without passing stage A
    pub exhausted: usize,
}

impl AdaptiveSummary {
    /// Count one outcome
    pub fn record(&mut self, outcome: &AdaptiveOutcome) {
        match outcome.decision {
            AdaptiveDecision::KeepCenter => self.kept_center += 1,
            AdaptiveDecision::Median => self.replaced += 1,
            AdaptiveDecision::Exhausted => self.exhausted += 1,
        }
    }

    /// Add the counts of another summary
    pub fn merge(mut self, other: AdaptiveSummary) -> AdaptiveSummary {
        self.kept_center += other.kept_center;
        self.replaced += other.replaced;
        self.exhausted += other.exhausted;
        self
    }

    /// Total number of pixels counted
    pub fn total(&self) -> usize {
        self.kept_center + self.replaced + self.exhausted
    }
}

/// Run the adaptive median filter at one pixel of a padded image
///
/// `(x, y)` are coordinates in `padded`. `start` and `max` are odd window
/// sides with `start <= max`, and `padded` must have at least
/// `(max - 1) / 2` pixels of border around `(x, y)`.
///
/// # Panics
///
/// Panics if the largest window does not fit inside `padded`.
///
/// # Examples
///
/// ```
/// use denoise_core::GrayImage;
/// use denoise_filter::{AdaptiveDecision, adaptive_median_pixel, pad};
///
/// let img = GrayImage::from_rows(&[
///     [10, 20, 30],
///     [40, 255, 60],
///     [70, 80, 90],
/// ]).unwrap();
/// let padded = pad(&img, 1).unwrap();
/// let outcome = adaptive_median_pixel(&padded, 2, 2, 3, 3);
/// assert_eq!(outcome.decision, AdaptiveDecision::Median);
/// assert_eq!(outcome.value, 60);
/// ```
pub fn adaptive_median_pixel(padded: &GrayImage, x: u32, y: u32, start: u32, max: u32) -> AdaptiveOutcome {
    let mut nbhd = Neighborhood::with_radius((max - 1) / 2);
    adaptive_median_pixel_with(&mut nbhd, padded, x, y, start, max)
}

/// [`adaptive_median_pixel`] with a caller-provided scratch neighborhood
pub(crate) fn adaptive_median_pixel_with(
    nbhd: &mut Neighborhood,
    padded: &GrayImage,
    x: u32,
    y: u32,
    start: u32,
    max: u32,
) -> AdaptiveOutcome {
    debug_assert!(start % 2 == 1 && max % 2 == 1 && start <= max);

    // Center of the largest window, read once: every stage B test compares
    // this same value against the statistics of the current window.
    let z_xy = padded.get_pixel_unchecked(x, y);

    let mut window = start;
    loop {
        nbhd.fill(padded, x, y, (window - 1) / 2);
        let OrderStats {
            min,
            median,
            max: z_max,
        } = nbhd.order_stats();

        // Stage A
        if min < median && median < z_max {
            // Stage B
            let (value, decision) = if min < z_xy && z_xy < z_max {
                (z_xy, AdaptiveDecision::KeepCenter)
            } else {
                (median, AdaptiveDecision::Median)
            };
            return AdaptiveOutcome {
                value,
                window_size: window,
                decision,
            };
        }

        if window + 2 > max {
            return AdaptiveOutcome {
                value: median,
                window_size: window,
                decision: AdaptiveDecision::Exhausted,
            };
        }
        window += 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighborhood::pad;

    #[test]
    fn test_plausible_pixel_is_kept_at_start() {
        let img = GrayImage::from_rows(&[[10, 20, 30], [40, 50, 60], [70, 80, 90]]).unwrap();
        let padded = pad(&img, 7).unwrap();
        let outcome = adaptive_median_pixel(&padded, 8, 8, 3, 15);
        assert_eq!(
            outcome,
            AdaptiveOutcome {
                value: 50,
                window_size: 3,
                decision: AdaptiveDecision::KeepCenter,
            }
        );
    }

    #[test]
    fn test_flat_region_exhausts_at_max() {
        let img = GrayImage::new_with_value(40, 40, 128).unwrap();
        let padded = pad(&img, 7).unwrap();
        let outcome = adaptive_median_pixel(&padded, 27, 27, 3, 15);
        assert_eq!(outcome.decision, AdaptiveDecision::Exhausted);
        assert_eq!(outcome.window_size, 15);
        assert_eq!(outcome.value, 128);
    }

    #[test]
    fn test_window_grows_past_impulse_cluster() {
        // 3x3 block of 255 around the center, 200 elsewhere, one dark pixel
        // in the corner. Windows 3, 5 and 7 all have median == min or
        // median == max; the 9x9 window is the first to include the 10.
        let mut img = GrayImage::new_with_value(9, 9, 200).unwrap();
        for y in 3..6 {
            for x in 3..6 {
                img.set_pixel(x, y, 255).unwrap();
            }
        }
        img.set_pixel(0, 0, 10).unwrap();
        let padded = pad(&img, 7).unwrap();
        let outcome = adaptive_median_pixel(&padded, 11, 11, 3, 15);
        // 9x9 window (the whole image) contains 10, 200 and 255
        assert_eq!(outcome.window_size, 9);
        assert_eq!(outcome.decision, AdaptiveDecision::Median);
        assert_eq!(outcome.value, 200);
    }

    #[test]
    fn test_start_equal_to_max_runs_once() {
        let img = GrayImage::new_with_value(3, 3, 9).unwrap();
        let padded = pad(&img, 1).unwrap();
        let outcome = adaptive_median_pixel(&padded, 1, 1, 3, 3);
        assert_eq!(outcome.window_size, 3);
        assert_eq!(outcome.decision, AdaptiveDecision::Exhausted);
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = AdaptiveSummary::default();
        for decision in [
            AdaptiveDecision::KeepCenter,
            AdaptiveDecision::KeepCenter,
            AdaptiveDecision::Median,
            AdaptiveDecision::Exhausted,
        ] {
            summary.record(&AdaptiveOutcome {
                value: 0,
                window_size: 3,
                decision,
            });
        }
        let merged = summary.merge(summary);
        assert_eq!(merged.kept_center, 4);
        assert_eq!(merged.replaced, 2);
        assert_eq!(merged.exhausted, 2);
        assert_eq!(merged.total(), 8);
    }
}
