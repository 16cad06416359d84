//! # Calculator Configuration
//!
//! Startup defaults and display labels for the calculator.
//!
//! ## Configuration Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     RESISTOR_TOPOLOGY=5-band                                           │
//! │     RESISTOR_SMD_CODE=4R7                                              │
//! │                                                                         │
//! │  2. JSON Document (CalculatorConfig::from_json)                        │
//! │     Supplied by the host, e.g. from its settings store                 │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     Orange/Orange/Orange ×Brown ±Gold, 4-band, SMD "102"               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## JSON Format
//! ```json
//! {
//!   "topology": "five_band",
//!   "digits": ["brown", "black", "black"],
//!   "multiplier": "red",
//!   "tolerance": "brown",
//!   "tempco": "brown",
//!   "smdCode": "01A",
//!   "labels": { "unknown": "Unknown", "jumper": "(jumper)" }
//! }
//! ```
//! Every field is optional; missing fields keep their defaults.

use std::str::FromStr;

use resistor_core::validation::validate_smd_code;
use resistor_core::{
    Color, CoreError, Labels, MultiplierBand, TempcoBand, ToleranceBand, Topology,
};
use serde::{de, Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::error::StateResult;

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_TOPOLOGY: &str = "RESISTOR_TOPOLOGY";
/// Comma-separated digit colors, e.g. `"brown,black,black"`.
pub const ENV_DIGITS: &str = "RESISTOR_DIGITS";
pub const ENV_MULTIPLIER: &str = "RESISTOR_MULTIPLIER";
pub const ENV_TOLERANCE: &str = "RESISTOR_TOLERANCE";
pub const ENV_TEMPCO: &str = "RESISTOR_TEMPCO";
pub const ENV_SMD_CODE: &str = "RESISTOR_SMD_CODE";
pub const ENV_UNKNOWN_LABEL: &str = "RESISTOR_UNKNOWN_LABEL";
pub const ENV_JUMPER_LABEL: &str = "RESISTOR_JUMPER_LABEL";

// =============================================================================
// Calculator Config
// =============================================================================

/// Initial selections and display labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatorConfig {
    pub topology: Topology,

    /// Digit A, B and C. C is kept even on four-band so switching
    /// topology back and forth does not lose it. Two colors are accepted
    /// on input, with C defaulting to black.
    #[serde(deserialize_with = "deserialize_digits")]
    pub digits: [Color; 3],

    pub multiplier: MultiplierBand,

    pub tolerance: ToleranceBand,

    pub tempco: TempcoBand,

    pub smd_code: String,

    pub labels: Labels,
}

impl Default for CalculatorConfig {
    /// ## Default Values
    /// - Bands: Orange, Orange, Orange, ×Brown, ±Gold, Brown tempco
    /// - Topology: four-band (reads 330 Ω ± 5%)
    /// - SMD code: "102" (reads 1 kΩ)
    /// - Labels: English
    fn default() -> Self {
        CalculatorConfig {
            topology: Topology::FourBand,
            digits: [Color::Orange, Color::Orange, Color::Orange],
            multiplier: MultiplierBand::Brown,
            tolerance: ToleranceBand::Gold,
            tempco: TempcoBand::Brown,
            smd_code: "102".to_string(),
            labels: Labels::default(),
        }
    }
}

impl CalculatorConfig {
    /// Parses and validates a JSON document.
    ///
    /// ## Example
    /// ```rust
    /// use resistor_state::CalculatorConfig;
    /// use resistor_core::Topology;
    ///
    /// let json = r#"{"topology":"six_band","smdCode":"4R7"}"#;
    /// let config = CalculatorConfig::from_json(json).unwrap();
    /// assert_eq!(config.topology, Topology::SixBand);
    /// assert_eq!(config.smd_code, "4R7");
    ///
    /// assert!(CalculatorConfig::from_json(r#"{"smdCode":"12345"}"#).is_err());
    /// ```
    pub fn from_json(json: &str) -> StateResult<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        debug!(
            topology = %config.topology,
            smd_code = %config.smd_code,
            "Loaded calculator config"
        );
        Ok(config)
    }

    /// Checks values the type system cannot.
    pub fn validate(&self) -> StateResult<()> {
        validate_smd_code(&self.smd_code).map_err(CoreError::from)?;
        Ok(())
    }

    /// Defaults overridden by `RESISTOR_*` environment variables.
    ///
    /// ## Environment Variables
    /// - `RESISTOR_TOPOLOGY`: `4`, `5-band`, `six`, ...
    /// - `RESISTOR_DIGITS`: `orange,orange,orange`
    /// - `RESISTOR_MULTIPLIER`, `RESISTOR_TOLERANCE`, `RESISTOR_TEMPCO`: color names
    /// - `RESISTOR_SMD_CODE`: initial SMD code
    /// - `RESISTOR_UNKNOWN_LABEL`, `RESISTOR_JUMPER_LABEL`: translated labels
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = CalculatorConfig::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Applies overrides from any key/value source.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(topology) = parse_override(&lookup, ENV_TOPOLOGY) {
            self.topology = topology;
        }

        if let Some(raw) = lookup(ENV_DIGITS) {
            match parse_digits(&raw) {
                Some(digits) => self.digits = digits,
                None => warn!(key = ENV_DIGITS, value = %raw, "Ignoring invalid digit list"),
            }
        }

        if let Some(multiplier) = parse_override(&lookup, ENV_MULTIPLIER) {
            self.multiplier = multiplier;
        }

        if let Some(tolerance) = parse_override(&lookup, ENV_TOLERANCE) {
            self.tolerance = tolerance;
        }

        if let Some(tempco) = parse_override(&lookup, ENV_TEMPCO) {
            self.tempco = tempco;
        }

        if let Some(code) = lookup(ENV_SMD_CODE) {
            match validate_smd_code(&code) {
                Ok(()) => self.smd_code = code,
                Err(err) => warn!(
                    key = ENV_SMD_CODE,
                    value = %code,
                    error = %err,
                    "Ignoring invalid override"
                ),
            }
        }

        if let Some(unknown) = lookup(ENV_UNKNOWN_LABEL) {
            self.labels.unknown = unknown;
        }

        if let Some(jumper) = lookup(ENV_JUMPER_LABEL) {
            self.labels.jumper = jumper;
        }
    }
}

fn parse_override<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(key)?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, value = %raw, error = %err, "Ignoring invalid override");
            None
        }
    }
}

/// Fills the three digit slots from two or three colors. A missing third
/// digit defaults to black.
fn digit_slots(colors: &[Color]) -> Option<[Color; 3]> {
    match *colors {
        [a, b] => Some([a, b, Color::Black]),
        [a, b, c] => Some([a, b, c]),
        _ => None,
    }
}

/// Parses two or three comma-separated colors.
fn parse_digits(raw: &str) -> Option<[Color; 3]> {
    let colors: Vec<Color> = raw
        .split(',')
        .map(|part| part.parse::<Color>().ok())
        .collect::<Option<_>>()?;

    digit_slots(&colors)
}

fn deserialize_digits<'de, D>(deserializer: D) -> Result<[Color; 3], D::Error>
where
    D: Deserializer<'de>,
{
    let colors = Vec::<Color>::deserialize(deserializer)?;
    digit_slots(&colors)
        .ok_or_else(|| de::Error::invalid_length(colors.len(), &"2 or 3 digit colors"))
}
