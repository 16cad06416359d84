//! # State Error Types
//!
//! Errors raised while setting up calculator state. Once a [`Calculator`]
//! exists, none of its setters can fail except [`Calculator::set_digit`]
//! with an out-of-range slot.
//!
//! [`Calculator`]: crate::Calculator
//! [`Calculator::set_digit`]: crate::Calculator::set_digit

use resistor_core::CoreError;
use thiserror::Error;

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum StateError {
    /// A configured value failed domain validation.
    #[error("Invalid configuration: {0}")]
    Core(#[from] CoreError),

    /// The configuration document is not valid JSON for [`CalculatorConfig`].
    ///
    /// [`CalculatorConfig`]: crate::CalculatorConfig
    #[error("Malformed configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Convenience type alias for Results with StateError.
pub type StateResult<T> = Result<T, StateError>;

#[cfg(test)]
mod tests {
    use super::*;
    use resistor_core::ValidationError;

    #[test]
    fn test_error_messages() {
        let err: StateError = CoreError::from(ValidationError::InvalidFormat {
            field: "smd_code".to_string(),
            reason: "must be 3 or 4 characters, got 5".to_string(),
        })
        .into();

        assert_eq!(
            err.to_string(),
            "Invalid configuration: Validation error: smd_code has invalid format: must be 3 or 4 characters, got 5"
        );
    }
}
