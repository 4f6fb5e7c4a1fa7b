//! Fixed-window statistic filters
//!
//! Each statistic reduces the values of one neighborhood to a single
//! intensity. The slice functions are usable on their own; the
//! [`FixedWindowFilter`] enum dispatches between them for a whole pass.
//!
//! All statistics return `f64`; [`to_intensity`] converts the result to the
//! 8-bit output representation.

use crate::neighborhood::Neighborhood;

/// Statistic applied to every window of a fixed-window pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FixedWindowFilter {
    /// [`arithmetic_mean`]
    ArithmeticMean,
    /// [`geometric_mean`]
    GeometricMean,
    /// [`median`]
    Median,
    /// [`local_noise`] with the given noise variance estimate
    LocalNoise {
        /// Estimated variance of the noise over the whole image
        noise_variance: f64,
    },
}

impl FixedWindowFilter {
    /// Reduce a neighborhood to one value
    ///
    /// # Panics
    ///
    /// Panics if the neighborhood is empty.
    pub fn apply(&self, nbhd: &mut Neighborhood) -> f64 {
        match *self {
            FixedWindowFilter::ArithmeticMean => arithmetic_mean(nbhd.values()),
            FixedWindowFilter::GeometricMean => geometric_mean(nbhd.values()),
            FixedWindowFilter::Median => median(nbhd.scratch()) as f64,
            FixedWindowFilter::LocalNoise { noise_variance } => {
                local_noise(nbhd.values(), noise_variance)
            }
        }
    }
}

/// Sum of the values divided by their count
pub fn arithmetic_mean(values: &[u8]) -> f64 {
    let sum: u64 = values.iter().map(|&v| v as u64).sum();
    sum as f64 / values.len() as f64
}

/// Product of the values raised to `1 / count`
///
/// Any zero value makes the result zero. The product is accumulated in
/// the log domain so that large windows do not overflow; results within
/// [`GEOMETRIC_SNAP`] of an integer are snapped to it, so a window of equal
/// values returns that value exactly.
pub fn geometric_mean(values: &[u8]) -> f64 {
    if values.iter().any(|&v| v == 0) {
        return 0.0;
    }
    let log_sum: f64 = values.iter().map(|&v| (v as f64).ln()).sum();
    let g = (log_sum / values.len() as f64).exp();
    let nearest = g.round();
    if (g - nearest).abs() < GEOMETRIC_SNAP {
        nearest
    } else {
        g
    }
}

/// Largest log-domain drift [`geometric_mean`] treats as an exact integer
pub const GEOMETRIC_SNAP: f64 = 1e-9;

/// Element at index `count / 2` of the ascending sort
///
/// Selects in place, so `values` is reordered.
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn median(values: &mut [u8]) -> u8 {
    let mid = values.len() / 2;
    *values.select_nth_unstable(mid).1
}

/// Adaptive local noise reduction
///
/// With `m` the local mean, `s2` the local variance (mean of squares minus
/// squared mean), `c` the center value (`values[len / 2]`, see the scan
/// order in [`crate::neighborhood`]) and `n2` the noise variance:
///
/// ```text
/// result = c - (n2 / s2) * (c - m)
/// ```
///
/// A flat window (`s2 == 0`) clamps the ratio to 1, so the result is the
/// local mean. The variance is computed from exact integer sums, so a
/// window of equal values always takes that branch.
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn local_noise(values: &[u8], noise_variance: f64) -> f64 {
    let n = values.len() as u128;
    let (sum, sum_sq) = values.iter().fold((0u128, 0u128), |(s, sq), &v| {
        let v = v as u128;
        (s + v, sq + v * v)
    });
    let mean = sum as f64 / n as f64;

    // n^2 * variance, exact
    let spread = n * sum_sq - sum * sum;
    if spread == 0 {
        return mean;
    }

    let local_variance = spread as f64 / (n * n) as f64;
    let center = values[values.len() / 2] as f64;
    center - (noise_variance / local_variance) * (center - mean)
}

/// Convert a statistic to an 8-bit intensity
///
/// Clamps to 0..=255 and truncates toward zero; NaN maps to 0.
#[inline]
pub fn to_intensity(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0) as u8
}
