//! Filter configuration
//!
//! A [`FilterConfig`] is fixed for one filtering pass. It names the
//! strategy, the window size, the noise variance estimate used by the
//! local-noise filter, and the largest window the adaptive median filter
//! may grow to.
//!
//! # Examples
//!
//! ```
//! use denoise_filter::{FilterConfig, FilterKind};
//!
//! let config = FilterConfig::from_name("local_noise", 5, Some(400.0)).unwrap();
//! assert_eq!(config.kind, FilterKind::LocalNoise);
//! assert!(config.validate().is_ok());
//!
//! let adaptive = FilterConfig::new(FilterKind::AdaptiveMedian, 3).with_max_window_size(9);
//! assert_eq!(adaptive.padding(), 4);
//! ```

use crate::stats::FixedWindowFilter;
use crate::{FilterError, FilterResult};
use std::fmt;
use std::str::FromStr;

/// Default largest window for the adaptive median filter
pub const DEFAULT_MAX_WINDOW_SIZE: u32 = 15;

/// Smallest window the adaptive median filter starts from
pub const MIN_ADAPTIVE_WINDOW_SIZE: u32 = 3;

/// Filter strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterKind {
    /// Arithmetic mean of the window
    ArithmeticMean,
    /// Geometric mean of the window
    GeometricMean,
    /// Median of the window
    #[default]
    Median,
    /// Adaptive local noise reduction (minimum mean-square error rule)
    LocalNoise,
    /// Adaptive median with per-pixel window growth
    AdaptiveMedian,
}

impl FilterKind {
    /// All strategies, in declaration order
    pub const ALL: [FilterKind; 5] = [
        FilterKind::ArithmeticMean,
        FilterKind::GeometricMean,
        FilterKind::Median,
        FilterKind::LocalNoise,
        FilterKind::AdaptiveMedian,
    ];

    /// Snake-case strategy name, as accepted by [`FilterKind::from_str`]
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::ArithmeticMean => "arithmetic_mean",
            FilterKind::GeometricMean => "geometric_mean",
            FilterKind::Median => "median",
            FilterKind::LocalNoise => "local_noise",
            FilterKind::AdaptiveMedian => "adaptive_median",
        }
    }

    /// Whether this strategy grows its window per pixel
    pub fn is_adaptive(self) -> bool {
        self == FilterKind::AdaptiveMedian
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    fn from_str(s: &str) -> FilterResult<Self> {
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| FilterError::UnknownStrategy(s.to_string()))
    }
}

/// How output rows are scheduled
///
/// Every output pixel depends only on the padded input and the
/// configuration, so both schedules produce identical images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Schedule {
    /// Process rows one after another on the calling thread
    #[default]
    Sequential,
    /// Process rows on the rayon thread pool
    Parallel,
}

/// Validated per-pass strategy, derived from a [`FilterConfig`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// Reduce a fixed-size window with one statistic
    Fixed {
        /// Statistic applied to every neighborhood
        filter: FixedWindowFilter,
        /// Odd window side length
        window_size: u32,
    },
    /// Grow the window per pixel from `start` to `max`
    Adaptive {
        /// Odd starting window side length (>= 3)
        start: u32,
        /// Odd largest window side length
        max: u32,
    },
}

impl Strategy {
    /// Half-size of the zero border the padded image needs
    pub fn padding(&self) -> u32 {
        match *self {
            Strategy::Fixed { window_size, .. } => (window_size - 1) / 2,
            Strategy::Adaptive { max, .. } => (max - 1) / 2,
        }
    }
}

/// Parameters for one filtering pass
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    /// Filter strategy
    pub kind: FilterKind,
    /// Window side length (odd, >= 1); the starting size for adaptive median
    pub window_size: u32,
    /// Noise variance estimate, required by [`FilterKind::LocalNoise`]
    pub noise_variance: Option<f64>,
    /// Largest adaptive window side length (odd, >= starting size)
    pub max_window_size: u32,
    /// Row scheduling
    pub schedule: Schedule,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            kind: FilterKind::default(),
            window_size: 3,
            noise_variance: None,
            max_window_size: DEFAULT_MAX_WINDOW_SIZE,
            schedule: Schedule::default(),
        }
    }
}

impl FilterConfig {
    /// Create a configuration for `kind` with the given window size
    pub fn new(kind: FilterKind, window_size: u32) -> Self {
        Self {
            kind,
            window_size,
            ..Default::default()
        }
    }

    /// Create a configuration from a strategy name
    ///
    /// Accepted names are `arithmetic_mean`, `geometric_mean`, `median`,
    /// `local_noise` and `adaptive_median`. The adaptive window limit is
    /// [`DEFAULT_MAX_WINDOW_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnknownStrategy`] for any other name and
    /// [`FilterError::InvalidConfig`] if the resulting configuration is
    /// invalid.
    pub fn from_name(name: &str, window_size: u32, noise_variance: Option<f64>) -> FilterResult<Self> {
        let config = Self {
            kind: name.parse()?,
            window_size,
            noise_variance,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the noise variance estimate
    pub fn with_noise_variance(mut self, noise_variance: f64) -> Self {
        self.noise_variance = Some(noise_variance);
        self
    }

    /// Set the largest adaptive window size
    pub fn with_max_window_size(mut self, max_window_size: u32) -> Self {
        self.max_window_size = max_window_size;
        self
    }

    /// Set the row schedule
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Starting window of the adaptive median filter
    pub fn adaptive_start(&self) -> u32 {
        self.window_size.max(MIN_ADAPTIVE_WINDOW_SIZE)
    }

    /// Half-size of the zero border a pass with this configuration uses
    pub fn padding(&self) -> u32 {
        if self.kind.is_adaptive() {
            self.max_window_size.saturating_sub(1) / 2
        } else {
            self.window_size.saturating_sub(1) / 2
        }
    }

    /// Check the configuration without running a pass
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidConfig`] if:
    /// - the window size is zero or even
    /// - a local-noise filter has no finite, non-negative noise variance
    /// - an adaptive median filter has an even maximum window, or one
    ///   smaller than its starting window
    pub fn validate(&self) -> FilterResult<()> {
        self.strategy().map(|_| ())
    }

    /// Validate and resolve the configuration into a [`Strategy`]
    pub fn strategy(&self) -> FilterResult<Strategy> {
        log::trace!("validating {:?}", self);

        if self.window_size == 0 || self.window_size % 2 == 0 {
            return Err(FilterError::InvalidConfig(format!(
                "window size must be odd and positive, got {}",
                self.window_size
            )));
        }

        let fixed = |filter: FixedWindowFilter| -> FilterResult<Strategy> {
            Ok(Strategy::Fixed {
                filter,
                window_size: self.window_size,
            })
        };

        match self.kind {
            FilterKind::ArithmeticMean => fixed(FixedWindowFilter::ArithmeticMean),
            FilterKind::GeometricMean => fixed(FixedWindowFilter::GeometricMean),
            FilterKind::Median => fixed(FixedWindowFilter::Median),
            FilterKind::LocalNoise => match self.noise_variance {
                Some(v) if v.is_finite() && v >= 0.0 => {
                    fixed(FixedWindowFilter::LocalNoise { noise_variance: v })
                }
                Some(v) => Err(FilterError::InvalidConfig(format!(
                    "noise variance must be finite and non-negative, got {v}"
                ))),
                None => Err(FilterError::InvalidConfig(
                    "local_noise requires a noise variance".into(),
                )),
            },
            FilterKind::AdaptiveMedian => {
                let start = self.adaptive_start();
                let max = self.max_window_size;
                if max % 2 == 0 {
                    return Err(FilterError::InvalidConfig(format!(
                        "maximum window size must be odd, got {max}"
                    )));
                }
                if max < start {
                    return Err(FilterError::InvalidConfig(format!(
                        "maximum window size {max} is smaller than starting size {start}"
                    )));
                }
                Ok(Strategy::Adaptive { start, max })
            }
        }
    }
}
