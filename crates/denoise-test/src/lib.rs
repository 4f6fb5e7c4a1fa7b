//! denoise-test - Regression test framework for denoise
//!
//! This crate provides a small regression test harness and deterministic
//! synthetic test images:
//!
//! - [`RegParams`] records numbered comparisons and reports every failure
//!   at [`RegParams::cleanup`] instead of stopping at the first one
//! - [`synthetic`] builds uniform, gradient and checkerboard images and
//!   corrupts them with seeded salt-and-pepper or uniform noise
//!
//! # Usage
//!
//! ```ignore
//! use denoise_test::{RegParams, synthetic};
//!
//! let mut rp = RegParams::new("median");
//! let clean = synthetic::uniform(32, 32, 128).unwrap();
//! rp.compare_values(128.0, clean.get_pixel(5, 5).unwrap() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod error;
mod params;
pub mod synthetic;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
