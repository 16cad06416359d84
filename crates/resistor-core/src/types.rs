//! # Domain Types
//!
//! Values that flow between the decoders, the formatter and the
//! presentation layer.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌─────────────────┐      │
//! │  │  ResistorSpec   │   │ ResistanceResult │   │   SmdReading    │      │
//! │  │  ─────────────  │   │  ──────────────  │   │  ─────────────  │      │
//! │  │  topology       │──►│  value           │   │  value          │      │
//! │  │  digits (2..3)  │   │  min / max       │   │  tolerance %    │      │
//! │  │  multiplier     │   │  tolerance %     │   │  standard       │      │
//! │  │  tolerance      │   └──────────────────┘   └─────────────────┘      │
//! │  │  tempco         │             │                     │               │
//! │  └─────────────────┘             └──────────┬──────────┘               │
//! │                                             ▼                           │
//! │                                  ┌─────────────────────┐               │
//! │                                  │     Resistance      │               │
//! │                                  │  Unknown | Ohms(f64)│               │
//! │                                  └─────────────────────┘               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Unknown Is Not Zero
//! A zero-ohm resistor (a jumper) is a perfectly valid part. "Could not
//! decode" is therefore its own variant, never a magic number.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::colors::{Color, MultiplierBand, TempcoBand, ToleranceBand, Topology};
use crate::error::ValidationError;
use crate::validation::ValidationResult;

// =============================================================================
// Power-of-ten Scaling
// =============================================================================

/// Multiplies `value` by `10^exponent`.
///
/// Negative exponents divide by the exact positive power instead of
/// multiplying by an inexact fraction, so `47 × 10^-1` is exactly `4.7`.
pub(crate) fn scale_pow10(value: f64, exponent: i32) -> f64 {
    if exponent >= 0 {
        value * 10f64.powi(exponent)
    } else {
        value / 10f64.powi(-exponent)
    }
}

// =============================================================================
// Resistance
// =============================================================================

/// A resistance in ohms, or the "could not decode" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Resistance {
    /// The marking did not match any known scheme.
    Unknown,
    /// A decoded value in ohms. Zero is a jumper.
    Ohms(f64),
}

impl Resistance {
    /// Zero ohms.
    pub const JUMPER: Resistance = Resistance::Ohms(0.0);

    /// Builds a resistance from a raw number. Negative, NaN and infinite
    /// inputs have no physical meaning and become [`Resistance::Unknown`].
    ///
    /// ## Example
    /// ```rust
    /// use resistor_core::Resistance;
    ///
    /// assert_eq!(Resistance::from_ohms(4.7), Resistance::Ohms(4.7));
    /// assert_eq!(Resistance::from_ohms(-1.0), Resistance::Unknown);
    /// ```
    pub fn from_ohms(ohms: f64) -> Self {
        if ohms.is_finite() && ohms >= 0.0 {
            Resistance::Ohms(ohms)
        } else {
            Resistance::Unknown
        }
    }

    /// The value in ohms, if known.
    #[inline]
    pub fn ohms(&self) -> Option<f64> {
        match *self {
            Resistance::Ohms(ohms) => Some(ohms),
            Resistance::Unknown => None,
        }
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Resistance::Unknown)
    }

    /// Checks for a zero-ohm jumper.
    #[inline]
    pub fn is_jumper(&self) -> bool {
        matches!(*self, Resistance::Ohms(ohms) if ohms == 0.0)
    }

    /// Checks for a known, strictly positive value.
    #[inline]
    pub fn is_positive(&self) -> bool {
        matches!(*self, Resistance::Ohms(ohms) if ohms > 0.0)
    }

    /// Scales a known value by `factor`; Unknown stays Unknown.
    pub fn scaled(&self, factor: f64) -> Self {
        match *self {
            Resistance::Ohms(ohms) => Resistance::Ohms(ohms * factor),
            Resistance::Unknown => Resistance::Unknown,
        }
    }
}

impl Default for Resistance {
    fn default() -> Self {
        Resistance::Unknown
    }
}

impl From<f64> for Resistance {
    fn from(ohms: f64) -> Self {
        Resistance::from_ohms(ohms)
    }
}

// =============================================================================
// Resistor Spec
// =============================================================================

/// Everything painted on an axial resistor body.
///
/// ## Invariants
/// - `digits().len() == topology.digit_count()` (2 for four-band, 3 otherwise)
/// - Every band value comes from a closed enumeration
///
/// The invariant is checked once, in [`ResistorSpec::new`]. The typed
/// constructors ([`ResistorSpec::four_band`] and friends) cannot violate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResistorSpec {
    topology: Topology,
    digits: [Color; 3],
    multiplier: MultiplierBand,
    tolerance: ToleranceBand,
    tempco: TempcoBand,
}

impl ResistorSpec {
    /// Builds a spec from a digit slice, checking it against the topology.
    ///
    /// ## Example
    /// ```rust
    /// use resistor_core::{
    ///     Color, MultiplierBand, ResistorSpec, TempcoBand, ToleranceBand, Topology,
    /// };
    ///
    /// let spec = ResistorSpec::new(
    ///     Topology::FourBand,
    ///     &[Color::Orange, Color::Orange],
    ///     MultiplierBand::Brown,
    ///     ToleranceBand::Gold,
    ///     TempcoBand::Brown,
    /// );
    /// assert!(spec.is_ok());
    ///
    /// let wrong = ResistorSpec::new(
    ///     Topology::FiveBand,
    ///     &[Color::Orange, Color::Orange],
    ///     MultiplierBand::Brown,
    ///     ToleranceBand::Gold,
    ///     TempcoBand::Brown,
    /// );
    /// assert!(wrong.is_err());
    /// ```
    pub fn new(
        topology: Topology,
        digits: &[Color],
        multiplier: MultiplierBand,
        tolerance: ToleranceBand,
        tempco: TempcoBand,
    ) -> ValidationResult<Self> {
        let expected = topology.digit_count();
        if digits.len() != expected {
            return Err(ValidationError::DigitCount {
                topology,
                expected,
                actual: digits.len(),
            });
        }

        let mut slots = [Color::Black; 3];
        slots[..expected].copy_from_slice(digits);

        Ok(ResistorSpec {
            topology,
            digits: slots,
            multiplier,
            tolerance,
            tempco,
        })
    }

    /// A four-band resistor: two digits, multiplier, tolerance.
    pub fn four_band(
        digits: [Color; 2],
        multiplier: MultiplierBand,
        tolerance: ToleranceBand,
    ) -> Self {
        ResistorSpec {
            topology: Topology::FourBand,
            digits: [digits[0], digits[1], Color::Black],
            multiplier,
            tolerance,
            tempco: TempcoBand::Brown,
        }
    }

    /// A five-band resistor: three digits, multiplier, tolerance.
    pub fn five_band(
        digits: [Color; 3],
        multiplier: MultiplierBand,
        tolerance: ToleranceBand,
    ) -> Self {
        ResistorSpec {
            topology: Topology::FiveBand,
            digits,
            multiplier,
            tolerance,
            tempco: TempcoBand::Brown,
        }
    }

    /// A six-band resistor: five-band plus a temperature coefficient.
    pub fn six_band(
        digits: [Color; 3],
        multiplier: MultiplierBand,
        tolerance: ToleranceBand,
        tempco: TempcoBand,
    ) -> Self {
        ResistorSpec {
            topology: Topology::SixBand,
            digits,
            multiplier,
            tolerance,
            tempco,
        }
    }

    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// The significant-digit bands that participate in the value.
    #[inline]
    pub fn digits(&self) -> &[Color] {
        &self.digits[..self.topology.digit_count()]
    }

    #[inline]
    pub fn multiplier(&self) -> MultiplierBand {
        self.multiplier
    }

    #[inline]
    pub fn tolerance(&self) -> ToleranceBand {
        self.tolerance
    }

    /// The tempco band. Carried for every topology, only painted on six-band.
    #[inline]
    pub fn tempco(&self) -> TempcoBand {
        self.tempco
    }
}

// =============================================================================
// Resistance Result
// =============================================================================

/// A nominal value with its tolerance window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ResistanceResult {
    /// Nominal value.
    pub value: Resistance,
    /// `value × (1 - tolerance)`.
    pub min: Resistance,
    /// `value × (1 + tolerance)`.
    pub max: Resistance,
    /// Tolerance class in percent (Gold = 5.0).
    pub tolerance_percent: f64,
}

impl ResistanceResult {
    /// Computes the tolerance window around `value`.
    ///
    /// ## Example
    /// ```rust
    /// use resistor_core::{Resistance, ResistanceResult};
    ///
    /// let result = ResistanceResult::with_tolerance(Resistance::Ohms(100.0), 50.0);
    /// assert_eq!(result.min, Resistance::Ohms(50.0));
    /// assert_eq!(result.max, Resistance::Ohms(150.0));
    /// ```
    pub fn with_tolerance(value: Resistance, tolerance_percent: f64) -> Self {
        let fraction = tolerance_percent / 100.0;
        ResistanceResult {
            value,
            min: value.scaled(1.0 - fraction),
            max: value.scaled(1.0 + fraction),
            tolerance_percent,
        }
    }

    /// The "could not decode" result.
    pub const fn unknown() -> Self {
        ResistanceResult {
            value: Resistance::Unknown,
            min: Resistance::Unknown,
            max: Resistance::Unknown,
            tolerance_percent: 0.0,
        }
    }
}

// =============================================================================
// SMD Reading
// =============================================================================

/// Which surface-mount marking scheme a code was decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SmdStandard {
    /// All zeros: a zero-ohm link.
    Jumper,
    /// Plain digits, last digit is the power of ten ("102", "4701").
    Standard,
    /// `R` marks the decimal point ("4R7", "0R22", "10R5").
    RadixPoint,
    /// Two-digit table index plus multiplier letter ("01A").
    Eia96,
    /// No scheme matched.
    Unrecognized,
}

/// The outcome of decoding a surface-mount code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SmdReading {
    pub value: Resistance,
    /// Tolerance class implied by the scheme (0, 1 or 5).
    pub tolerance_percent: u8,
    pub standard: SmdStandard,
}

impl SmdReading {
    pub const fn new(value: f64, tolerance_percent: u8, standard: SmdStandard) -> Self {
        SmdReading {
            value: Resistance::Ohms(value),
            tolerance_percent,
            standard,
        }
    }

    pub const fn jumper() -> Self {
        SmdReading {
            value: Resistance::JUMPER,
            tolerance_percent: 0,
            standard: SmdStandard::Jumper,
        }
    }

    pub const fn unknown() -> Self {
        SmdReading {
            value: Resistance::Unknown,
            tolerance_percent: 0,
            standard: SmdStandard::Unrecognized,
        }
    }

    /// Expands the reading into a value with its tolerance window.
    pub fn to_result(&self) -> ResistanceResult {
        ResistanceResult::with_tolerance(self.value, f64::from(self.tolerance_percent))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_pow10_is_exact_for_negative_exponents() {
        assert_eq!(scale_pow10(47.0, -1), 4.7);
        assert_eq!(scale_pow10(1.0, -2), 0.01);
        assert_eq!(scale_pow10(33.0, 1), 330.0);
        assert_eq!(scale_pow10(999.0, 9), 999e9);
    }

    #[test]
    fn test_resistance_predicates() {
        assert!(Resistance::Unknown.is_unknown());
        assert!(Resistance::JUMPER.is_jumper());
        assert!(!Resistance::JUMPER.is_positive());
        assert!(Resistance::Ohms(1.0).is_positive());
        assert_eq!(Resistance::Unknown.ohms(), None);
        assert_eq!(Resistance::default(), Resistance::Unknown);
    }

    #[test]
    fn test_resistance_from_invalid_numbers() {
        assert_eq!(Resistance::from(f64::NAN), Resistance::Unknown);
        assert_eq!(Resistance::from(f64::INFINITY), Resistance::Unknown);
        assert_eq!(Resistance::from(0.0), Resistance::JUMPER);
    }

    #[test]
    fn test_spec_digit_count_checked() {
        let err = ResistorSpec::new(
            Topology::FourBand,
            &[Color::Red, Color::Red, Color::Red],
            MultiplierBand::Black,
            ToleranceBand::Brown,
            TempcoBand::Brown,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ValidationError::DigitCount { expected: 2, actual: 3, .. }
        ));
    }

    #[test]
    fn test_spec_digits_follow_topology() {
        let four = ResistorSpec::four_band(
            [Color::Yellow, Color::Violet],
            MultiplierBand::Red,
            ToleranceBand::Gold,
        );
        assert_eq!(four.digits(), &[Color::Yellow, Color::Violet]);

        let six = ResistorSpec::six_band(
            [Color::Brown, Color::Black, Color::Black],
            MultiplierBand::Black,
            ToleranceBand::Brown,
            TempcoBand::Red,
        );
        assert_eq!(six.digits().len(), 3);
        assert_eq!(six.tempco(), TempcoBand::Red);
    }

    #[test]
    fn test_tolerance_window() {
        let result = ResistanceResult::with_tolerance(Resistance::Ohms(100.0), 50.0);
        assert_eq!(result.min, Resistance::Ohms(50.0));
        assert_eq!(result.max, Resistance::Ohms(150.0));

        // 1.1 has no exact binary form, so compare within an epsilon
        let result = ResistanceResult::with_tolerance(Resistance::Ohms(100.0), 10.0);
        let min = result.min.ohms().unwrap();
        let max = result.max.ohms().unwrap();
        assert!((min - 90.0).abs() < 1e-9, "got {min}");
        assert!((max - 110.0).abs() < 1e-9, "got {max}");
    }

    #[test]
    fn test_unknown_result_has_unknown_bounds() {
        let result = ResistanceResult::with_tolerance(Resistance::Unknown, 5.0);
        assert_eq!(result.min, Resistance::Unknown);
        assert_eq!(result.max, Resistance::Unknown);
        assert_eq!(ResistanceResult::unknown().tolerance_percent, 0.0);
    }

    #[test]
    fn test_smd_reading_bounds() {
        let reading = SmdReading::new(1000.0, 5, SmdStandard::Standard);
        let result = reading.to_result();
        assert_eq!(result.min, Resistance::Ohms(950.0));
        assert_eq!(result.max, Resistance::Ohms(1050.0));
    }

    #[test]
    fn test_resistance_json_shape() {
        let json = serde_json::to_string(&Resistance::Ohms(4.7)).unwrap();
        assert_eq!(json, r#"{"ohms":4.7}"#);
        let json = serde_json::to_string(&Resistance::Unknown).unwrap();
        assert_eq!(json, r#""unknown""#);
    }
}
