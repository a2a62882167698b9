//! Argument errors raised by the converter entry points.

use thiserror::Error;

use crate::foundation::config::{ERR_INVALID_RADIX, ERR_NEGATIVE_NUMBER};

/// Rejected input to one of the conversion functions.
///
/// Every failure is immediate and carries the offending value. There is no
/// partial output and nothing to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// The radix is not 8, 10 or 16.
    #[error("radix is not equal 8, 10 or 16 (got {radix})")]
    InvalidRadix { radix: i32 },

    /// A `positive` entry point was handed a negative number.
    #[error("number is less than zero (got {number})")]
    NegativeNumber { number: i32 },
}

impl ArgumentError {
    /// Name of the argument that was rejected.
    pub const fn param_name(&self) -> &'static str {
        match self {
            ArgumentError::InvalidRadix { .. } => "radix",
            ArgumentError::NegativeNumber { .. } => "number",
        }
    }

    /// Stable numeric code for callers that report failures as integers.
    pub const fn code(&self) -> i32 {
        match self {
            ArgumentError::InvalidRadix { .. } => ERR_INVALID_RADIX,
            ArgumentError::NegativeNumber { .. } => ERR_NEGATIVE_NUMBER,
        }
    }
}
