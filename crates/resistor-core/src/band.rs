//! # Band Decoder
//!
//! Turns the color bands of an axial resistor into a value and its
//! tolerance window.
//!
//! ## Decoding Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Orange  Orange  ×Brown   Gold       (four-band)                        │
//! │     3       3     10^1    ±5%                                           │
//! │     │       │      │       │                                            │
//! │     └───┬───┘      │       │                                            │
//! │         ▼          │       │                                            │
//! │   base = 10·3 + 3  │       │                                            │
//! │        = 33        │       │                                            │
//! │         └────┬─────┘       │                                            │
//! │              ▼             │                                            │
//! │      value = 33 × 10 = 330 Ω                                            │
//! │              └──────┬──────┘                                            │
//! │                     ▼                                                   │
//! │      min = 330 × 0.95 = 313.5 Ω   max = 330 × 1.05 = 346.5 Ω           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no error path. Every band combination is representable and
//! decodes to a non-negative value.

use crate::colors::{Band, TRANSPARENT};
use crate::types::{Resistance, ResistanceResult, ResistorSpec};

/// Concatenates the significant digits into one base-10 integer.
///
/// ## Example
/// ```rust
/// use resistor_core::{band, Color, MultiplierBand, ResistorSpec, ToleranceBand};
///
/// let spec = ResistorSpec::five_band(
///     [Color::Brown, Color::Black, Color::Red],
///     MultiplierBand::Black,
///     ToleranceBand::Brown,
/// );
/// assert_eq!(band::base_value(&spec), 102);
/// ```
pub fn base_value(spec: &ResistorSpec) -> u32 {
    spec.digits()
        .iter()
        .fold(0, |acc, color| acc * 10 + u32::from(color.digit()))
}

/// Decodes a band spec into its nominal value and tolerance window.
///
/// ## Example
/// ```rust
/// use resistor_core::{band, Color, MultiplierBand, Resistance, ResistorSpec, ToleranceBand};
///
/// let spec = ResistorSpec::four_band(
///     [Color::Orange, Color::Orange],
///     MultiplierBand::Brown,
///     ToleranceBand::Gold,
/// );
/// let result = band::decode(&spec);
///
/// assert_eq!(result.value, Resistance::Ohms(330.0));
/// assert_eq!(result.tolerance_percent, 5.0);
/// ```
pub fn decode(spec: &ResistorSpec) -> ResistanceResult {
    let value = spec.multiplier().apply(f64::from(base_value(spec)));
    ResistanceResult::with_tolerance(Resistance::Ohms(value), spec.tolerance().percent())
}

/// Colors to paint on the six strip slots, in body order.
///
/// ## Slot Layout
/// ```text
/// [digit A] [digit B] [digit C] [multiplier] [tolerance] [tempco]
///                        │                                  │
///                        └─ "transparent" on four-band      └─ "transparent" unless six-band
/// ```
///
/// ## Example
/// ```rust
/// use resistor_core::{band, Color, MultiplierBand, ResistorSpec, ToleranceBand};
///
/// let spec = ResistorSpec::four_band(
///     [Color::Orange, Color::Orange],
///     MultiplierBand::Brown,
///     ToleranceBand::Gold,
/// );
/// assert_eq!(
///     band::strip_colors(&spec),
///     vec!["#f57c00", "#f57c00", "transparent", "#5d4037", "#d4af37", "transparent"],
/// );
/// ```
pub fn strip_colors(spec: &ResistorSpec) -> Vec<&'static str> {
    let mut strips: Vec<&'static str> = spec.digits().iter().map(|c| c.hex()).collect();
    strips.resize(3, TRANSPARENT);

    strips.push(spec.multiplier().hex());
    strips.push(spec.tolerance().hex());
    strips.push(if spec.topology().has_tempco() {
        spec.tempco().hex()
    } else {
        TRANSPARENT
    });

    strips
}

// =============================================================================
// Unit Tests
// =============================================================================
