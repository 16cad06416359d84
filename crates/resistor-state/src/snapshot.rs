//! # Calculator Snapshot
//!
//! A serializable view of everything the presentation layer renders, built
//! from a [`Calculator`] in one call. Exported to TypeScript so a web front
//! end can bind to the same shape.

use resistor_core::{
    Band, Color, MultiplierBand, Resistance, SmdStandard, TempcoBand, ToleranceBand, Topology,
};
use serde::Serialize;
use ts_rs::TS;

use crate::calculator::Calculator;

/// Names and swatch colors for every picker, index-aligned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BandTables {
    pub digit_names: Vec<String>,
    pub first_digit_names: Vec<String>,
    pub multiplier_names: Vec<String>,
    pub tolerance_names: Vec<String>,
    pub tempco_names: Vec<String>,
    pub digit_colors: Vec<String>,
    pub multiplier_colors: Vec<String>,
    pub tolerance_colors: Vec<String>,
    pub tempco_colors: Vec<String>,
}

fn owned(items: Vec<&'static str>) -> Vec<String> {
    items.into_iter().map(str::to_string).collect()
}

impl BandTables {
    pub fn new() -> Self {
        BandTables {
            digit_names: owned(Color::names()),
            first_digit_names: owned(Color::first_digit_names()),
            multiplier_names: owned(MultiplierBand::names()),
            tolerance_names: owned(ToleranceBand::names()),
            tempco_names: owned(TempcoBand::names()),
            digit_colors: owned(Color::hex_colors()),
            multiplier_colors: owned(MultiplierBand::hex_colors()),
            tolerance_colors: owned(ToleranceBand::hex_colors()),
            tempco_colors: owned(TempcoBand::hex_colors()),
        }
    }
}

impl Default for BandTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Current selections and every derived readout.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorSnapshot {
    pub topology: Topology,
    pub digits: Vec<Color>,
    pub multiplier: MultiplierBand,
    pub tolerance: ToleranceBand,
    pub tempco: TempcoBand,

    pub resistance: Resistance,
    pub min_resistance: Resistance,
    pub max_resistance: Resistance,
    pub resistance_str: String,
    pub min_resistance_str: String,
    pub max_resistance_str: String,
    pub tempco_str: String,
    pub strip_colors: Vec<String>,

    pub smd_code: String,
    pub smd_resistance: Resistance,
    pub smd_tolerance: u8,
    pub smd_standard: SmdStandard,
    pub smd_resistance_str: String,

    /// Picker contents, so a frontend needs no second call to fill them.
    pub tables: BandTables,
}

impl From<&Calculator> for CalculatorSnapshot {
    fn from(calc: &Calculator) -> Self {
        let smd = calc.smd_reading();
        CalculatorSnapshot {
            topology: calc.topology(),
            digits: calc.digits().to_vec(),
            multiplier: calc.multiplier(),
            tolerance: calc.tolerance(),
            tempco: calc.tempco(),
            resistance: calc.resistance(),
            min_resistance: calc.min_resistance(),
            max_resistance: calc.max_resistance(),
            resistance_str: calc.resistance_str(),
            min_resistance_str: calc.min_resistance_str(),
            max_resistance_str: calc.max_resistance_str(),
            tempco_str: calc.tempco_str(),
            strip_colors: owned(calc.strip_colors()),
            smd_code: calc.smd_code().to_string(),
            smd_resistance: smd.value,
            smd_tolerance: smd.tolerance_percent,
            smd_standard: smd.standard,
            smd_resistance_str: calc.smd_resistance_str(),
            tables: BandTables::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_of_defaults() {
        let snapshot = CalculatorSnapshot::from(&Calculator::new());

        assert_eq!(snapshot.resistance_str, "330 Ω ± 5%");
        assert_eq!(snapshot.smd_resistance_str, "1 kΩ ± 5%");
        assert_eq!(snapshot.smd_standard, SmdStandard::Standard);
        assert_eq!(snapshot.strip_colors.len(), 6);
        assert_eq!(snapshot.tempco_str, "100 PPM/°C");
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let mut calc = Calculator::new();
        calc.set_smd_code("XYZ");
        let json = serde_json::to_value(CalculatorSnapshot::from(&calc)).unwrap();

        assert_eq!(json["topology"], "four_band");
        assert_eq!(json["resistance"]["ohms"], 330.0);
        assert_eq!(json["smdResistance"], "unknown");
        assert_eq!(json["smdStandard"], "unrecognized");
        assert_eq!(json["smdResistanceStr"], "Unknown");
        assert_eq!(json["tables"]["firstDigitNames"][0], "Brown");
        assert_eq!(json["tables"]["tempcoColors"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_band_tables() {
        let tables = BandTables::new();
        assert_eq!(tables.digit_names.len(), tables.digit_colors.len());
        assert_eq!(
            tables.multiplier_names.len(),
            tables.multiplier_colors.len()
        );
        assert_eq!(tables.first_digit_names[0], "Brown");
        assert_eq!(tables.tolerance_names[0], "Brown");
    }
}
