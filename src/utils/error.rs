//! Error types for tabfit
//!
//! The table transform itself never fails; these errors come from reading
//! input, writing output and validating user-supplied thresholds.

use std::io;
use thiserror::Error;

/// Result type for tabfit operations
pub type TabfitResult<T> = Result<T, TabfitError>;

/// Errors raised around the table transform
#[derive(Error, Debug)]
pub enum TabfitError {
    /// I/O error when reading input or writing output
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A width threshold is outside its allowed range
    #[error("invalid {name} {value}: {reason}")]
    InvalidThreshold {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}
