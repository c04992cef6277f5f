//! Error types for HAL helper operations.
//!
//! Only two conversions in this crate can fail: numeric `Decimal64`
//! conversion and parsing a log severity name. Every other lookup fails
//! open to an `UNKNOWN` value instead of returning an error.

use thiserror::Error;

/// Result type alias for HAL helper operations.
pub type HalResult<T> = Result<T, HalError>;

/// Errors returned by the fallible HAL helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HalError {
    /// A numeric conversion produced a value that cannot be represented.
    #[error("Out of range: {message}")]
    OutOfRange {
        /// Error message.
        message: String,
    },

    /// An input string or value was not recognized.
    #[error("Invalid parameter: {message}")]
    InvalidParam {
        /// Error message.
        message: String,
    },
}

impl HalError {
    /// Creates an out-of-range error.
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::OutOfRange {
            message: message.into(),
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_param(message: impl Into<String>) -> Self {
        Self::InvalidParam {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HalError::invalid_param("Invalid severity string \"LOUD\".");
        assert_eq!(
            err.to_string(),
            "Invalid parameter: Invalid severity string \"LOUD\"."
        );
    }

    #[test]
    fn test_out_of_range() {
        let err = HalError::out_of_range("too big");
        assert!(matches!(err, HalError::OutOfRange { .. }));
        assert_eq!(err.to_string(), "Out of range: too big");
    }
}
