//! # Error Types
//!
//! Domain-specific error types for resistor-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  resistor-core errors (this file)                                      │
//! │  ├── CoreError        - Wraps ValidationError for callers upstream     │
//! │  ├── ValidationError  - Malformed inputs (names, counts, indices)      │
//! │  └── SmdError         - Why an SMD code could not be decoded           │
//! │                                                                         │
//! │  resistor-state errors (separate crate)                                │
//! │  └── StateError       - Config loading, wraps CoreError                │
//! │                                                                         │
//! │  Flow: SmdError ──► smd::decode() ──► Resistance::Unknown (no panic)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending input in the message
//! 3. Errors are enum variants, never String
//! 4. An unreadable SMD code is reported, never raised: [`crate::smd::decode`]
//!    folds every [`SmdError`] into the Unknown sentinel

use thiserror::Error;

use crate::colors::Topology;

// =============================================================================
// Core Error
// =============================================================================

/// Error handed to crates built on resistor-core.
///
/// [`SmdError`] is not wrapped: it only ever comes out of
/// [`crate::smd::try_decode`] and is folded into Unknown by callers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The number of significant digits does not match the topology.
    ///
    /// ## When This Occurs
    /// - Three digit colors handed to a four-band spec
    /// - Two digit colors handed to a five- or six-band spec
    #[error("{topology} resistor needs {expected} digit bands, got {actual}")]
    DigitCount {
        topology: Topology,
        expected: usize,
        actual: usize,
    },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        min: usize,
        max: usize,
        value: usize,
    },

    /// Value is not in allowed set.
    #[error("{field} '{value}' must be one of: {allowed:?}")]
    NotAllowed {
        field: String,
        value: String,
        allowed: Vec<String>,
    },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// SMD Error
// =============================================================================

/// Why a surface-mount code could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SmdError {
    /// Codes are three or four characters long (all-zero codes excepted).
    #[error("SMD code '{code}' has {len} characters, expected 3 or 4")]
    Length { code: String, len: usize },

    /// Letter in a radix-point position that is not `R`.
    #[error("SMD code '{code}' has '{found}' where the radix marker 'R' belongs")]
    RadixMarker { code: String, found: char },

    /// EIA-96 index past the end of the value table.
    #[error("EIA-96 index {index} in '{code}' is out of range (max {max})")]
    Eia96Index { code: String, index: u8, max: u8 },

    /// Unknown EIA-96 multiplier letter.
    #[error("EIA-96 code '{code}' has unknown multiplier letter '{letter}'")]
    Eia96Multiplier { code: String, letter: char },

    /// Digit/letter layout matches no marking scheme.
    #[error("SMD code '{code}' matches no known marking scheme")]
    Pattern { code: String },
}

// =============================================================================
// Unit Tests
// =============================================================================
