//! # Formatter
//!
//! Renders resistances as human strings with an SI magnitude prefix.
//!
//! ## Rendering Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Unknown ──────────────────────────────────► "Unknown"                  │
//! │  0 Ω ──────────────────────────────────────► "0 Ω (jumper)"             │
//! │                                                                         │
//! │  otherwise: scan checkpoints 9, 6, 3, 0, -3, -6, -9 (first hit wins)    │
//! │                                                                         │
//! │    value >= 10^9 ? ── G      1000 ──► 10^3 ──► "1 kΩ"                    │
//! │    value >= 10^6 ? ── M      4.7  ──► 10^0 ──► "4.70 Ω"                  │
//! │    value >= 10^3 ? ── k      0.22 ──► 10^-3 ─► "220 mΩ"                  │
//! │    value >= 10^0 ? ── (none)                                            │
//! │    value >= 10^-3? ── m      mantissa = value / 10^exp                  │
//! │    value >= 10^-6? ── µ      whole  → "330"                             │
//! │    value >= 10^-9? ── n      else   → "313.50" (two decimals)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Checkpoint Scan, Not log10
//! Only the seven checkpoints are compared with `>=`, and the mantissa is
//! then rounded to two decimals. A value a hair under a checkpoint keeps
//! the lower bracket even when rounding pushes its mantissa to 1000:
//! `999.999` renders as `"1000.00 Ω"`, not `"1.00 kΩ"`. Existing readouts
//! depend on this, so it is kept as is.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{scale_pow10, Resistance};

/// Exponents tested in order. The first with `value >= 10^exp` wins.
pub const CHECKPOINTS: [i32; 7] = [9, 6, 3, 0, -3, -6, -9];

/// Lowest exponent the scan will step down to for sub-nano values.
const MIN_EXPONENT: i32 = -324;

// =============================================================================
// Labels
// =============================================================================

/// The translatable words in rendered strings.
///
/// ## Example
/// ```rust
/// use resistor_core::format::{format_resistance_with, Labels};
/// use resistor_core::Resistance;
///
/// let spanish = Labels {
///     unknown: "Desconocido".to_string(),
///     jumper: "(puente)".to_string(),
/// };
/// assert_eq!(format_resistance_with(Resistance::Unknown, &spanish), "Desconocido");
/// assert_eq!(format_resistance_with(Resistance::JUMPER, &spanish), "0 Ω (puente)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct Labels {
    /// Shown instead of a value when decoding failed.
    pub unknown: String,
    /// Appended to "0 Ω" for zero-ohm parts.
    pub jumper: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            unknown: "Unknown".to_string(),
            jumper: "(jumper)".to_string(),
        }
    }
}

// =============================================================================
// Exponent Selection
// =============================================================================

/// Picks the SI exponent for a positive value by checkpoint scan.
///
/// Values under 1 nΩ keep stepping down by three (-12, -15, ...).
///
/// ## Example
/// ```rust
/// use resistor_core::format::si_exponent;
///
/// assert_eq!(si_exponent(4700.0), 3);
/// assert_eq!(si_exponent(999.0), 0);
/// assert_eq!(si_exponent(0.22), -3);
/// ```
pub fn si_exponent(ohms: f64) -> i32 {
    if let Some(&exponent) = CHECKPOINTS
        .iter()
        .find(|&&exponent| ohms >= scale_pow10(1.0, exponent))
    {
        return exponent;
    }

    let mut exponent = CHECKPOINTS[CHECKPOINTS.len() - 1] - 3;
    while exponent > MIN_EXPONENT && ohms < scale_pow10(1.0, exponent) {
        exponent -= 3;
    }
    exponent
}

/// SI prefix for an exponent; anything without a prefix becomes `E<exp>`.
pub fn si_prefix(exponent: i32) -> Cow<'static, str> {
    match exponent {
        9 => Cow::Borrowed("G"),
        6 => Cow::Borrowed("M"),
        3 => Cow::Borrowed("k"),
        0 => Cow::Borrowed(""),
        -3 => Cow::Borrowed("m"),
        -6 => Cow::Borrowed("\u{b5}"),
        -9 => Cow::Borrowed("n"),
        other => Cow::Owned(format!("E{}", other)),
    }
}

// =============================================================================
// Rendering
// =============================================================================

fn render_mantissa(mantissa: f64) -> String {
    if mantissa.fract() == 0.0 {
        format!("{:.0}", mantissa)
    } else {
        format!("{:.2}", mantissa)
    }
}

/// Renders a resistance with English labels.
///
/// ## Example
/// ```rust
/// use resistor_core::format::format_resistance;
/// use resistor_core::Resistance;
///
/// assert_eq!(format_resistance(Resistance::Ohms(1000.0)), "1 kΩ");
/// assert_eq!(format_resistance(Resistance::Ohms(4.7)), "4.70 Ω");
/// assert_eq!(format_resistance(Resistance::Ohms(0.0)), "0 Ω (jumper)");
/// assert_eq!(format_resistance(Resistance::Unknown), "Unknown");
/// ```
pub fn format_resistance(value: Resistance) -> String {
    format_resistance_with(value, &Labels::default())
}

/// Renders a resistance with the given labels.
///
/// Negative and non-finite numbers have no physical reading and render
/// like Unknown.
pub fn format_resistance_with(value: Resistance, labels: &Labels) -> String {
    let ohms = match value {
        Resistance::Ohms(ohms) if ohms.is_finite() && ohms >= 0.0 => ohms,
        _ => return labels.unknown.clone(),
    };

    if ohms == 0.0 {
        return format!("0 Ω {}", labels.jumper);
    }

    let exponent = si_exponent(ohms);
    // Sub-ohm values scale up by multiplying, keeping 0.47 at exactly 470
    let mantissa = scale_pow10(ohms, -exponent);

    format!("{} {}Ω", render_mantissa(mantissa), si_prefix(exponent))
}

/// Renders a tolerance percentage without trailing zeros (`5`, `0.25`).
pub fn format_percent(percent: f64) -> String {
    format!("{}", percent)
}

/// Renders a resistance followed by ` ± <percent>%`.
///
/// The suffix is only added for positive values: Unknown and jumpers
/// read the same as [`format_resistance_with`].
///
/// ## Example
/// ```rust
/// use resistor_core::format::{format_with_tolerance, Labels};
/// use resistor_core::Resistance;
///
/// let labels = Labels::default();
/// assert_eq!(format_with_tolerance(Resistance::Ohms(330.0), 5.0, &labels), "330 Ω ± 5%");
/// assert_eq!(format_with_tolerance(Resistance::JUMPER, 5.0, &labels), "0 Ω (jumper)");
/// ```
pub fn format_with_tolerance(value: Resistance, tolerance_percent: f64, labels: &Labels) -> String {
    let mut text = format_resistance_with(value, labels);
    if value.is_positive() {
        text.push_str(" ± ");
        text.push_str(&format_percent(tolerance_percent));
        text.push('%');
    }
    text
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(ohms: f64) -> String {
        format_resistance(Resistance::Ohms(ohms))
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(format_resistance(Resistance::Unknown), "Unknown");
        assert_eq!(fmt(0.0), "0 Ω (jumper)");
    }

    #[test]
    fn test_every_prefix() {
        assert_eq!(fmt(2.2e9), "2.20 GΩ");
        assert_eq!(fmt(1e6), "1 MΩ");
        assert_eq!(fmt(47_000.0), "47 kΩ");
        assert_eq!(fmt(330.0), "330 Ω");
        assert_eq!(fmt(0.5), "500 mΩ");
        assert_eq!(fmt(0.000_002), "2 µΩ");
        assert_eq!(fmt(0.000_000_003), "3 nΩ");
    }

    #[test]
    fn test_fractional_mantissa_has_two_decimals() {
        assert_eq!(fmt(4.7), "4.70 Ω");
        assert_eq!(fmt(313.5), "313.50 Ω");
        assert_eq!(fmt(4750.0), "4.75 kΩ");
        assert_eq!(fmt(0.22), "220 mΩ");
    }

    #[test]
    fn test_mantissa_scales_up_by_multiplying() {
        // 0.47 / 10^-3 would give 469.99999999999994 and render "470.00"
        assert_eq!(fmt(0.47), "470 mΩ");
        assert_eq!(fmt(0.0047), "4.70 mΩ");
        assert_eq!(fmt(0.000_33), "330 µΩ");
    }

    #[test]
    fn test_checkpoint_scan_keeps_lower_bracket() {
        assert_eq!(si_exponent(999.0), 0);
        assert_eq!(fmt(999.0), "999 Ω");
        // Rounds up to 1000 but stays in the ohm bracket
        assert_eq!(fmt(999.999), "1000.00 Ω");
        assert_eq!(si_exponent(1000.0), 3);
    }

    #[test]
    fn test_large_values_stay_in_giga() {
        assert_eq!(fmt(999e9), "999 GΩ");
        assert_eq!(fmt(2e12), "2000 GΩ");
    }

    #[test]
    fn test_sub_nano_falls_back_to_exponent_notation() {
        assert_eq!(si_exponent(5e-12), -12);
        assert_eq!(si_prefix(-12), "E-12");
        assert!(fmt(5e-12).ends_with(" E-12Ω"));
        assert_eq!(si_exponent(5e-16), -18);
    }

    #[test]
    fn test_invalid_numbers_render_unknown() {
        assert_eq!(fmt(-1.0), "Unknown");
        assert_eq!(fmt(f64::NAN), "Unknown");
        assert_eq!(fmt(f64::INFINITY), "Unknown");
    }

    #[test]
    fn test_tolerance_suffix() {
        let labels = Labels::default();
        assert_eq!(
            format_with_tolerance(Resistance::Ohms(330.0), 5.0, &labels),
            "330 Ω ± 5%"
        );
        assert_eq!(
            format_with_tolerance(Resistance::Ohms(1000.0), 0.25, &labels),
            "1 kΩ ± 0.25%"
        );
        assert_eq!(
            format_with_tolerance(Resistance::Unknown, 0.0, &labels),
            "Unknown"
        );
    }

    #[test]
    fn test_percent_rendering() {
        assert_eq!(format_percent(5.0), "5");
        assert_eq!(format_percent(0.05), "0.05");
        assert_eq!(format_percent(10.0), "10");
    }

    #[test]
    fn test_labels_deserialize_with_defaults() {
        let labels: Labels = serde_json::from_str(r#"{"unknown":"Inconnu"}"#).unwrap();
        assert_eq!(labels.unknown, "Inconnu");
        assert_eq!(labels.jumper, "(jumper)");
    }
}
