//! # SMD Decoder
//!
//! Reads the short alphanumeric codes printed on surface-mount resistors.
//!
//! ## Marking Schemes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    SMD Code Disambiguation                              │
//! │                                                                         │
//! │  "0" "00" "000" "0000" ─────────────────────► Jumper      0 Ω    0%    │
//! │                                                                         │
//! │  length ∉ {3, 4} ───────────────────────────► Unknown            0%    │
//! │                                                                         │
//! │  3 chars   D D D   "102"  (10)·10^2 ────────► Standard    1 kΩ   5%    │
//! │            D R D   "4R7"  4 + 7/10 ─────────► RadixPoint  4.7 Ω  5%    │
//! │            D D L   "01A"  table[1]·1 ───────► EIA-96      100 Ω  1%    │
//! │            other ───────────────────────────► Unknown            0%    │
//! │                                                                         │
//! │  4 chars   D D D D "4701" (470)·10^1 ───────► Standard    4.7 kΩ 1%    │
//! │            D R D D "0R22" 0 + 2/10 + 2/100 ─► RadixPoint  0.22 Ω 1%    │
//! │            D D R D "10R5" 10 + 5/10 ────────► RadixPoint  10.5 Ω 1%    │
//! │            other ───────────────────────────► Unknown            0%    │
//! │                                                                         │
//! │  D = ASCII digit, L = any non-digit, R = 'R' or 'r'                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Classification is purely positional: each character is a digit or not,
//! and the resulting shape picks exactly one scheme. There is no
//! backtracking into a second interpretation.
//!
//! ## Two Entry Points
//! - [`try_decode`] says *why* a code is unreadable via [`SmdError`]
//! - [`decode`] is total: every string yields a reading, unreadable codes
//!   yield [`Resistance::Unknown`](crate::Resistance::Unknown) with a 0%
//!   tolerance class

use crate::error::SmdError;
use crate::types::{scale_pow10, SmdReading, SmdStandard};

// =============================================================================
// EIA-96 Table
// =============================================================================

/// EIA-96 base values, indexed by the two-digit code. Slot 0 is unused.
pub const EIA96_VALUES: [u16; 97] = [
    0, //
    100, 102, 105, 107, 110, 113, 115, 118, 121, 124, 127, 130, 133, 137, 140, 143, //
    147, 150, 154, 158, 162, 165, 169, 174, 178, 182, 187, 191, 196, 200, 205, 210, //
    215, 221, 226, 232, 237, 243, 249, 255, 261, 267, 274, 280, 287, 294, 301, 309, //
    316, 324, 332, 340, 348, 357, 365, 374, 383, 392, 402, 412, 422, 432, 442, 453, //
    464, 475, 487, 499, 511, 523, 536, 549, 562, 576, 590, 604, 619, 634, 649, 665, //
    681, 698, 715, 732, 750, 768, 787, 806, 825, 845, 866, 887, 909, 931, 953, 976, //
];

/// Highest index with a table entry.
pub const EIA96_MAX_INDEX: u8 = (EIA96_VALUES.len() - 1) as u8;

/// Power of ten for an EIA-96 multiplier letter (case-insensitive).
///
/// ## Letter Table
/// ```text
/// Z → 10^-3   Y,R → 10^-2   X,S → 10^-1   A → 10^0
/// B,H → 10^1  C → 10^2      D → 10^3      E → 10^4    F → 10^5
/// ```
pub fn eia96_exponent(letter: char) -> Option<i32> {
    match letter.to_ascii_uppercase() {
        'Z' => Some(-3),
        'Y' | 'R' => Some(-2),
        'X' | 'S' => Some(-1),
        'A' => Some(0),
        'B' | 'H' => Some(1),
        'C' => Some(2),
        'D' => Some(3),
        'E' => Some(4),
        'F' => Some(5),
        _ => None,
    }
}

// =============================================================================
// Tolerance Classes
// =============================================================================

/// Three-digit standard and three-character radix codes.
const TOLERANCE_E24: u8 = 5;
/// Four-character codes and EIA-96.
const TOLERANCE_E96: u8 = 1;

// =============================================================================
// Character Classification
// =============================================================================

/// One code position, classified.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Digit(u8),
    Other(char),
}

impl Slot {
    fn classify(c: char) -> Self {
        match c.to_digit(10) {
            Some(d) => Slot::Digit(d as u8),
            None => Slot::Other(c),
        }
    }
}

/// Checks for the zero-ohm codes "0", "00", "000" and "0000".
pub fn is_jumper_code(code: &str) -> bool {
    (1..=4).contains(&code.len()) && code.bytes().all(|b| b == b'0')
}

fn expect_radix(code: &str, marker: char) -> Result<(), SmdError> {
    if marker.eq_ignore_ascii_case(&'R') {
        Ok(())
    } else {
        Err(SmdError::RadixMarker {
            code: code.to_string(),
            found: marker,
        })
    }
}

fn decode_eia96(code: &str, index: u8, letter: char) -> Result<SmdReading, SmdError> {
    let base = EIA96_VALUES
        .get(usize::from(index))
        .copied()
        .ok_or_else(|| SmdError::Eia96Index {
            code: code.to_string(),
            index,
            max: EIA96_MAX_INDEX,
        })?;

    let exponent = eia96_exponent(letter).ok_or_else(|| SmdError::Eia96Multiplier {
        code: code.to_string(),
        letter,
    })?;

    Ok(SmdReading::new(
        scale_pow10(f64::from(base), exponent),
        TOLERANCE_E96,
        SmdStandard::Eia96,
    ))
}

// =============================================================================
// Decoding
// =============================================================================

/// Decodes an SMD code, explaining failures.
///
/// ## Example
/// ```rust
/// use resistor_core::smd::try_decode;
/// use resistor_core::{Resistance, SmdError, SmdStandard};
///
/// let reading = try_decode("01A").unwrap();
/// assert_eq!(reading.value, Resistance::Ohms(100.0));
/// assert_eq!(reading.tolerance_percent, 1);
/// assert_eq!(reading.standard, SmdStandard::Eia96);
///
/// assert!(matches!(try_decode("4K7"), Err(SmdError::RadixMarker { found: 'K', .. })));
/// ```
pub fn try_decode(code: &str) -> Result<SmdReading, SmdError> {
    if is_jumper_code(code) {
        return Ok(SmdReading::jumper());
    }

    let slots: Vec<Slot> = code.chars().map(Slot::classify).collect();

    match slots.as_slice() {
        // ---------------------------------------------------------------
        // Three characters
        // ---------------------------------------------------------------
        &[Slot::Digit(a), Slot::Digit(b), Slot::Digit(exp)] => Ok(SmdReading::new(
            scale_pow10(f64::from(a * 10 + b), i32::from(exp)),
            TOLERANCE_E24,
            SmdStandard::Standard,
        )),

        &[Slot::Digit(a), Slot::Other(marker), Slot::Digit(c)] => {
            expect_radix(code, marker)?;
            Ok(SmdReading::new(
                scale_pow10(f64::from(a * 10 + c), -1),
                TOLERANCE_E24,
                SmdStandard::RadixPoint,
            ))
        }

        &[Slot::Digit(a), Slot::Digit(b), Slot::Other(letter)] => {
            decode_eia96(code, a * 10 + b, letter)
        }

        // ---------------------------------------------------------------
        // Four characters
        // ---------------------------------------------------------------
        &[Slot::Digit(a), Slot::Digit(b), Slot::Digit(c), Slot::Digit(exp)] => Ok(SmdReading::new(
            scale_pow10(
                f64::from(u16::from(a) * 100 + u16::from(b) * 10 + u16::from(c)),
                i32::from(exp),
            ),
            TOLERANCE_E96,
            SmdStandard::Standard,
        )),

        &[Slot::Digit(a), Slot::Other(marker), Slot::Digit(c), Slot::Digit(d)] => {
            expect_radix(code, marker)?;
            Ok(SmdReading::new(
                scale_pow10(
                    f64::from(u16::from(a) * 100 + u16::from(c) * 10 + u16::from(d)),
                    -2,
                ),
                TOLERANCE_E96,
                SmdStandard::RadixPoint,
            ))
        }

        &[Slot::Digit(a), Slot::Digit(b), Slot::Other(marker), Slot::Digit(d)] => {
            expect_radix(code, marker)?;
            Ok(SmdReading::new(
                scale_pow10(
                    f64::from(u16::from(a) * 100 + u16::from(b) * 10 + u16::from(d)),
                    -1,
                ),
                TOLERANCE_E96,
                SmdStandard::RadixPoint,
            ))
        }

        [_, _, _] | [_, _, _, _] => Err(SmdError::Pattern {
            code: code.to_string(),
        }),

        other => Err(SmdError::Length {
            code: code.to_string(),
            len: other.len(),
        }),
    }
}

/// Decodes an SMD code. Never fails: unreadable codes come back as
/// Unknown with a 0% tolerance class.
///
/// ## Example
/// ```rust
/// use resistor_core::smd::decode;
/// use resistor_core::Resistance;
///
/// assert_eq!(decode("102").value, Resistance::Ohms(1000.0));
/// assert_eq!(decode("4R7").value, Resistance::Ohms(4.7));
/// assert_eq!(decode("000").value, Resistance::Ohms(0.0));
/// assert_eq!(decode("XYZ").value, Resistance::Unknown);
/// ```
pub fn decode(code: &str) -> SmdReading {
    try_decode(code).unwrap_or_else(|_| SmdReading::unknown())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Resistance;

    fn reading(code: &str) -> (Resistance, u8) {
        let r = decode(code);
        (r.value, r.tolerance_percent)
    }

    #[test]
    fn test_table_shape() {
        assert_eq!(EIA96_VALUES.len(), 97);
        assert_eq!(EIA96_VALUES[0], 0);
        assert_eq!(EIA96_VALUES[1], 100);
        assert_eq!(EIA96_VALUES[96], 976);
        assert!(EIA96_VALUES[1..].windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_jumper_codes() {
        for code in ["0", "00", "000", "0000"] {
            let r = decode(code);
            assert_eq!(r.value, Resistance::JUMPER, "{code}");
            assert_eq!(r.tolerance_percent, 0);
            assert_eq!(r.standard, SmdStandard::Jumper);
        }
    }

    #[test]
    fn test_bad_lengths_are_unknown() {
        for code in ["", "1", "10", "10000", "12345678", "00000"] {
            assert_eq!(reading(code), (Resistance::Unknown, 0), "{code:?}");
            assert!(matches!(try_decode(code), Err(SmdError::Length { .. })));
        }
    }

    #[test]
    fn test_three_digit_standard() {
        assert_eq!(reading("102"), (Resistance::Ohms(1000.0), 5));
        assert_eq!(reading("473"), (Resistance::Ohms(47_000.0), 5));
        assert_eq!(reading("100"), (Resistance::Ohms(10.0), 5));
        assert_eq!(reading("999"), (Resistance::Ohms(99e9), 5));
        assert_eq!(decode("102").standard, SmdStandard::Standard);
    }

    #[test]
    fn test_three_char_radix() {
        assert_eq!(reading("4R7"), (Resistance::Ohms(4.7), 5));
        assert_eq!(reading("4r7"), (Resistance::Ohms(4.7), 5));
        assert_eq!(reading("0R1"), (Resistance::Ohms(0.1), 5));
        assert_eq!(decode("4R7").standard, SmdStandard::RadixPoint);

        assert_eq!(reading("4K7"), (Resistance::Unknown, 0));
        assert_eq!(reading("4.7"), (Resistance::Unknown, 0));
    }

    #[test]
    fn test_eia96() {
        assert_eq!(reading("01A"), (Resistance::Ohms(100.0), 1));
        assert_eq!(reading("01a"), (Resistance::Ohms(100.0), 1));
        assert_eq!(reading("96F"), (Resistance::Ohms(97_600_000.0), 1));
        assert_eq!(reading("68X"), (Resistance::Ohms(49.9), 1));
        assert_eq!(reading("68S"), (Resistance::Ohms(49.9), 1));
        assert_eq!(reading("01Z"), (Resistance::Ohms(0.1), 1));
        assert_eq!(reading("01Y"), (Resistance::Ohms(1.0), 1));
        assert_eq!(reading("01R"), (Resistance::Ohms(1.0), 1));
        assert_eq!(reading("43H"), (Resistance::Ohms(2740.0), 1));
        assert_eq!(reading("43B"), (Resistance::Ohms(2740.0), 1));
        assert_eq!(reading("30C"), (Resistance::Ohms(20_000.0), 1));
        assert_eq!(reading("30D"), (Resistance::Ohms(200_000.0), 1));
        assert_eq!(reading("30E"), (Resistance::Ohms(2_000_000.0), 1));
    }

    #[test]
    fn test_eia96_failures() {
        assert_eq!(reading("97A"), (Resistance::Unknown, 0));
        assert!(matches!(
            try_decode("99A"),
            Err(SmdError::Eia96Index { index: 99, max: 96, .. })
        ));

        assert_eq!(reading("01Q"), (Resistance::Unknown, 0));
        assert!(matches!(
            try_decode("01G"),
            Err(SmdError::Eia96Multiplier { letter: 'G', .. })
        ));
    }

    /// Slot 0 of the table is zero, so "00A" reads as a zero-ohm EIA-96 part.
    #[test]
    fn test_eia96_index_zero() {
        let r = decode("00A");
        assert_eq!(r.value, Resistance::JUMPER);
        assert_eq!(r.tolerance_percent, 1);
        assert_eq!(r.standard, SmdStandard::Eia96);
    }

    #[test]
    fn test_three_char_other_patterns() {
        for code in ["XYZ", "R47", "A1B", "1AB", "AB1", "ABC", "47 "] {
            assert_eq!(reading(code), (Resistance::Unknown, 0), "{code}");
        }
        assert!(matches!(try_decode("XYZ"), Err(SmdError::Pattern { .. })));
    }

    #[test]
    fn test_four_digit_standard() {
        assert_eq!(reading("4701"), (Resistance::Ohms(4700.0), 1));
        assert_eq!(reading("1000"), (Resistance::Ohms(100.0), 1));
        assert_eq!(reading("1002"), (Resistance::Ohms(10_000.0), 1));
        assert_eq!(reading("0001"), (Resistance::Ohms(0.0), 1));
    }

    #[test]
    fn test_four_char_radix() {
        assert_eq!(reading("0R22"), (Resistance::Ohms(0.22), 1));
        assert_eq!(reading("4R75"), (Resistance::Ohms(4.75), 1));
        assert_eq!(reading("10R5"), (Resistance::Ohms(10.5), 1));
        assert_eq!(reading("10r5"), (Resistance::Ohms(10.5), 1));

        assert_eq!(reading("4K75"), (Resistance::Unknown, 0));
        assert_eq!(reading("10K5"), (Resistance::Unknown, 0));
    }

    #[test]
    fn test_four_char_other_patterns() {
        for code in ["R100", "1R0R", "12AB", "ABCD", "1A2B", "100R"] {
            assert_eq!(reading(code), (Resistance::Unknown, 0), "{code}");
        }
    }

    #[test]
    fn test_non_ascii_characters() {
        assert_eq!(reading("4Ω7"), (Resistance::Unknown, 0));
        assert_eq!(reading("١٠٢"), (Resistance::Unknown, 0));
        assert_eq!(reading("ØØØ"), (Resistance::Unknown, 0));
    }

    #[test]
    fn test_decode_is_total() {
        let alphabet: Vec<char> = "0123456789ARZrxQ .-Ω".chars().collect();
        let mut codes = vec![String::new()];
        for len in 1..=5 {
            let mut next = Vec::new();
            for prefix in codes.iter().filter(|c| c.chars().count() == len - 1) {
                for &c in &alphabet {
                    let mut code = prefix.clone();
                    code.push(c);
                    next.push(code);
                }
            }
            codes.extend(next);
            if len == 4 {
                break;
            }
        }

        for code in &codes {
            let r = decode(code);
            match r.value {
                Resistance::Unknown => assert_eq!(r.tolerance_percent, 0, "{code:?}"),
                Resistance::Ohms(ohms) => assert!(ohms >= 0.0 && ohms.is_finite(), "{code:?}"),
            }
        }
    }
}
