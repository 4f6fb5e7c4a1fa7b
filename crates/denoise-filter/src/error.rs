//! Error types for denoise-filter
//!
//! Configuration problems are reported before any image pass begins.
//! Per-pixel work never fails; out-of-bounds neighborhood reads are
//! contract violations and panic instead of producing an error.

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] denoise_core::Error),

    /// Strategy name that does not match any filter
    #[error("unknown filter strategy: {0:?}")]
    UnknownStrategy(String),

    /// Invalid filter configuration
    #[error("invalid filter configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
