//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] denoise_core::Error),

    /// Invalid fixture parameter
    #[error("invalid fixture parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
