//! denoise-filter - Spatial-domain denoising filters
//!
//! This crate replaces every pixel of a grayscale image with a statistic of
//! its square neighborhood:
//!
//! - Padding and neighborhood extraction ([`pad`], [`Neighborhood`])
//! - Fixed-window statistics: arithmetic mean, geometric mean, median and
//!   adaptive local noise reduction ([`FixedWindowFilter`])
//! - Adaptive median filtering with per-pixel window growth
//!   ([`adaptive_median_pixel`])
//! - Whole-image passes driven by a [`FilterConfig`] ([`run`])

pub mod adaptive;
pub mod config;
mod error;
pub mod filtering;
pub mod neighborhood;
pub mod stats;

pub use error::{FilterError, FilterResult};

pub use adaptive::{AdaptiveDecision, AdaptiveOutcome, AdaptiveSummary, adaptive_median_pixel};
pub use config::{
    DEFAULT_MAX_WINDOW_SIZE, FilterConfig, FilterKind, MIN_ADAPTIVE_WINDOW_SIZE, Schedule, Strategy,
};
pub use filtering::{
    adaptive_median_filter, adaptive_median_filter_with_summary, arithmetic_mean_filter,
    filter_pixel, geometric_mean_filter, local_noise_filter, median_filter, run,
};
pub use neighborhood::{Neighborhood, OrderStats, pad};
pub use stats::{
    FixedWindowFilter, GEOMETRIC_SNAP, arithmetic_mean, geometric_mean, local_noise, median,
    to_intensity,
};
