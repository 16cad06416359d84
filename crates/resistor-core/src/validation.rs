//! # Validation Module
//!
//! Checks for values that arrive from outside the type system: digit
//! positions picked by index and SMD codes typed into configuration.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Type system                                                  │
//! │  └── Band colors are closed enums, nothing to check at runtime         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Digit slot indices (0..=2)                                        │
//! │  └── SMD code shape for stored configuration                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Decoders                                                     │
//! │  └── smd::decode() accepts ANY string and answers Unknown if unsure    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Live user edits are never validated here: the SMD decoder is total, so
//! a half-typed code simply reads as Unknown until it becomes meaningful.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Highest digit slot index (digit C).
pub const MAX_DIGIT_INDEX: usize = 2;

/// Validates a significant-digit slot index.
///
/// ## Example
/// ```rust
/// use resistor_core::validation::validate_digit_index;
///
/// assert!(validate_digit_index(2).is_ok());
/// assert!(validate_digit_index(3).is_err());
/// ```
pub fn validate_digit_index(index: usize) -> ValidationResult<usize> {
    if index > MAX_DIGIT_INDEX {
        return Err(ValidationError::OutOfRange {
            field: "digit index".to_string(),
            min: 0,
            max: MAX_DIGIT_INDEX,
            value: index,
        });
    }

    Ok(index)
}

/// Validates the shape of a stored SMD code.
///
/// ## Rules
/// - One to four zeros (a jumper), or
/// - Three or four characters from `0-9` / `A-Z` (either case)
///
/// Stricter than [`crate::smd::decode`]: a configured default must look
/// like a marking, even if it then decodes to Unknown.
///
/// ## Example
/// ```rust
/// use resistor_core::validation::validate_smd_code;
///
/// assert!(validate_smd_code("4R7").is_ok());
/// assert!(validate_smd_code("0").is_ok());
/// assert!(validate_smd_code("12345").is_err());
/// assert!(validate_smd_code("1#2").is_err());
/// ```
pub fn validate_smd_code(code: &str) -> ValidationResult<()> {
    let len = code.chars().count();

    if (1..=4).contains(&len) && code.chars().all(|c| c == '0') {
        return Ok(());
    }

    if !(3..=4).contains(&len) {
        return Err(ValidationError::InvalidFormat {
            field: "smd_code".to_string(),
            reason: format!("must be 3 or 4 characters, got {}", len),
        });
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidFormat {
            field: "smd_code".to_string(),
            reason: "must contain only digits and letters".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_index_bounds() {
        assert_eq!(validate_digit_index(0).unwrap(), 0);
        assert_eq!(validate_digit_index(2).unwrap(), 2);

        let err = validate_digit_index(7).unwrap_err();
        assert_eq!(
            err.to_string(),
            "digit index must be between 0 and 2, got 7"
        );
    }

    #[test]
    fn test_smd_code_jumpers() {
        for code in ["0", "00", "000", "0000"] {
            assert!(validate_smd_code(code).is_ok(), "{code} should be valid");
        }
        assert!(validate_smd_code("00000").is_err());
    }

    #[test]
    fn test_smd_code_shapes() {
        assert!(validate_smd_code("102").is_ok());
        assert!(validate_smd_code("01a").is_ok());
        assert!(validate_smd_code("10R5").is_ok());
        assert!(validate_smd_code("").is_err());
        assert!(validate_smd_code("12").is_err());
        assert!(validate_smd_code("4 7").is_err());
        assert!(validate_smd_code("1µ2").is_err());
    }
}
