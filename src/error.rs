//! Error types for time value parsing and conversion.

/// Result alias for timer operations that may fail.
pub type TimerResult<T> = Result<T, TimerError>;

/// Errors raised by parsing and conversion entry points.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimerError {
    #[error("Invalid clock time '{input}': {reason}")]
    InvalidUnitFormat { input: String, reason: String },

    #[error("Unsupported unit: {0}")]
    UnsupportedConversion(String),

    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("Minutes per unit must be finite and greater than zero, got {0}")]
    InvalidScale(f64),

    #[error("Division by zero")]
    DivisionByZero,
}

impl TimerError {
    pub(crate) fn invalid_format(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidUnitFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
