//! # Calculator State
//!
//! The one in-memory record the presentation layer edits and reads.
//!
//! ## Edit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Calculator Operations                                │
//! │                                                                         │
//! │  UI Action               Setter                   Recomputed            │
//! │  ─────────               ──────                   ──────────            │
//! │                                                                         │
//! │  Pick band count ───────► set_topology() ───────► band result          │
//! │  Pick digit color ──────► set_digit_a/b/c() ────► band result          │
//! │  Pick multiplier ───────► set_multiplier() ─────► band result          │
//! │  Pick tolerance ────────► set_tolerance() ──────► band result          │
//! │  Pick tempco ───────────► set_tempco() ─────────► band result          │
//! │  Type SMD code ─────────► set_smd_code() ───────► SMD reading          │
//! │                                                                         │
//! │  Read anything ─────────► resistance_str(), strip_colors(), ...        │
//! │                                                                         │
//! │  NOTE: Every setter recomputes immediately and in full. There is no    │
//! │        observer graph: the caller reads the getters after the call.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use resistor_core::format::{format_resistance_with, format_with_tolerance};
use resistor_core::validation::validate_digit_index;
use resistor_core::{
    band, smd, Band, Color, Labels, MultiplierBand, Resistance, ResistanceResult, ResistorSpec,
    SmdReading, TempcoBand, ToleranceBand, Topology, ValidationError,
};
use tracing::debug;

use crate::config::CalculatorConfig;

/// Band and SMD selections plus their decoded results.
///
/// ## Invariants
/// - `bands` always reflects the current band selections
/// - `smd` always reflects the current SMD code
#[derive(Debug, Clone)]
pub struct Calculator {
    topology: Topology,
    digits: [Color; 3],
    multiplier: MultiplierBand,
    tolerance: ToleranceBand,
    tempco: TempcoBand,
    smd_code: String,
    labels: Labels,

    bands: ResistanceResult,
    smd: SmdReading,
}

impl Calculator {
    /// Creates a calculator with the default selections.
    ///
    /// ## Example
    /// ```rust
    /// use resistor_state::Calculator;
    ///
    /// let calc = Calculator::new();
    /// assert_eq!(calc.resistance_str(), "330 Ω ± 5%");
    /// assert_eq!(calc.smd_resistance_str(), "1 kΩ ± 5%");
    /// ```
    pub fn new() -> Self {
        Calculator::from_config(&CalculatorConfig::default())
    }

    /// Creates a calculator from configured selections.
    pub fn from_config(config: &CalculatorConfig) -> Self {
        let mut calc = Calculator {
            topology: config.topology,
            digits: config.digits,
            multiplier: config.multiplier,
            tolerance: config.tolerance,
            tempco: config.tempco,
            smd_code: config.smd_code.clone(),
            labels: config.labels.clone(),
            bands: ResistanceResult::unknown(),
            smd: SmdReading::unknown(),
        };
        calc.recalculate_bands();
        calc.recalculate_smd();
        calc
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    pub fn set_topology(&mut self, topology: Topology) {
        self.topology = topology;
        self.recalculate_bands();
    }

    pub fn set_digit_a(&mut self, color: Color) {
        self.digits[0] = color;
        self.recalculate_bands();
    }

    pub fn set_digit_b(&mut self, color: Color) {
        self.digits[1] = color;
        self.recalculate_bands();
    }

    /// Digit C is stored on four-band too, it just does not count.
    pub fn set_digit_c(&mut self, color: Color) {
        self.digits[2] = color;
        self.recalculate_bands();
    }

    /// Sets a digit by slot index (0 = A, 1 = B, 2 = C).
    pub fn set_digit(&mut self, index: usize, color: Color) -> Result<(), ValidationError> {
        let index = validate_digit_index(index)?;
        self.digits[index] = color;
        self.recalculate_bands();
        Ok(())
    }

    pub fn set_multiplier(&mut self, multiplier: MultiplierBand) {
        self.multiplier = multiplier;
        self.recalculate_bands();
    }

    pub fn set_tolerance(&mut self, tolerance: ToleranceBand) {
        self.tolerance = tolerance;
        self.recalculate_bands();
    }

    /// Tempco is cosmetic but still triggers a recompute, so every setter
    /// behaves the same way.
    pub fn set_tempco(&mut self, tempco: TempcoBand) {
        self.tempco = tempco;
        self.recalculate_bands();
    }

    /// Stores the code as typed and decodes it. Any string is accepted.
    pub fn set_smd_code(&mut self, code: impl Into<String>) {
        self.smd_code = code.into();
        self.recalculate_smd();
    }

    /// Swaps the display labels (e.g. after a language change).
    pub fn set_labels(&mut self, labels: Labels) {
        self.labels = labels;
    }

    // =========================================================================
    // Selections
    // =========================================================================

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// All three digit slots, including an unused digit C on four-band.
    pub fn digits(&self) -> [Color; 3] {
        self.digits
    }

    pub fn digit_a(&self) -> Color {
        self.digits[0]
    }

    pub fn digit_b(&self) -> Color {
        self.digits[1]
    }

    pub fn digit_c(&self) -> Color {
        self.digits[2]
    }

    pub fn multiplier(&self) -> MultiplierBand {
        self.multiplier
    }

    pub fn tolerance(&self) -> ToleranceBand {
        self.tolerance
    }

    pub fn tempco(&self) -> TempcoBand {
        self.tempco
    }

    pub fn smd_code(&self) -> &str {
        &self.smd_code
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// The current selections as a validated spec.
    pub fn spec(&self) -> ResistorSpec {
        let [a, b, c] = self.digits;
        match self.topology {
            Topology::FourBand => ResistorSpec::four_band([a, b], self.multiplier, self.tolerance),
            Topology::FiveBand => {
                ResistorSpec::five_band([a, b, c], self.multiplier, self.tolerance)
            }
            Topology::SixBand => {
                ResistorSpec::six_band([a, b, c], self.multiplier, self.tolerance, self.tempco)
            }
        }
    }

    // =========================================================================
    // Band Results
    // =========================================================================

    pub fn result(&self) -> ResistanceResult {
        self.bands
    }

    pub fn resistance(&self) -> Resistance {
        self.bands.value
    }

    pub fn min_resistance(&self) -> Resistance {
        self.bands.min
    }

    pub fn max_resistance(&self) -> Resistance {
        self.bands.max
    }

    /// e.g. `"330 Ω ± 5%"`.
    pub fn resistance_str(&self) -> String {
        format_with_tolerance(self.bands.value, self.bands.tolerance_percent, &self.labels)
    }

    pub fn min_resistance_str(&self) -> String {
        format_resistance_with(self.bands.min, &self.labels)
    }

    pub fn max_resistance_str(&self) -> String {
        format_resistance_with(self.bands.max, &self.labels)
    }

    /// e.g. `"100 PPM/°C"`.
    pub fn tempco_str(&self) -> String {
        self.tempco.describe()
    }

    /// Six hex colors (or `"transparent"`) for the strip preview.
    pub fn strip_colors(&self) -> Vec<&'static str> {
        band::strip_colors(&self.spec())
    }

    // =========================================================================
    // SMD Results
    // =========================================================================

    pub fn smd_reading(&self) -> SmdReading {
        self.smd
    }

    pub fn smd_resistance(&self) -> Resistance {
        self.smd.value
    }

    /// Tolerance class in percent; 0 when the code is unknown or a jumper.
    pub fn smd_tolerance(&self) -> u8 {
        self.smd.tolerance_percent
    }

    /// e.g. `"4.70 Ω ± 5%"`.
    pub fn smd_resistance_str(&self) -> String {
        format_with_tolerance(
            self.smd.value,
            f64::from(self.smd.tolerance_percent),
            &self.labels,
        )
    }

    // =========================================================================
    // Static Tables
    // =========================================================================

    pub fn digit_names() -> Vec<&'static str> {
        Color::names()
    }

    /// Digit names without Black, for the first band.
    pub fn first_digit_names() -> Vec<&'static str> {
        Color::first_digit_names()
    }

    pub fn multiplier_names() -> Vec<&'static str> {
        MultiplierBand::names()
    }

    pub fn tolerance_names() -> Vec<&'static str> {
        ToleranceBand::names()
    }

    pub fn tempco_names() -> Vec<&'static str> {
        TempcoBand::names()
    }

    pub fn digit_colors() -> Vec<&'static str> {
        Color::hex_colors()
    }

    pub fn multiplier_colors() -> Vec<&'static str> {
        MultiplierBand::hex_colors()
    }

    pub fn tolerance_colors() -> Vec<&'static str> {
        ToleranceBand::hex_colors()
    }

    pub fn tempco_colors() -> Vec<&'static str> {
        TempcoBand::hex_colors()
    }

    // =========================================================================
    // Recalculation
    // =========================================================================

    fn recalculate_bands(&mut self) {
        self.bands = band::decode(&self.spec());
        debug!(
            topology = %self.topology,
            ohms = ?self.bands.value.ohms(),
            tolerance = self.bands.tolerance_percent,
            "Recalculated band resistance"
        );
    }

    fn recalculate_smd(&mut self) {
        self.smd = match smd::try_decode(&self.smd_code) {
            Ok(reading) => {
                debug!(
                    code = %self.smd_code,
                    standard = ?reading.standard,
                    ohms = ?reading.value.ohms(),
                    "Decoded SMD code"
                );
                reading
            }
            Err(err) => {
                debug!(code = %self.smd_code, reason = %err, "SMD code not recognized");
                SmdReading::unknown()
            }
        };
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resistor_core::SmdStandard;

    fn assert_close(actual: Resistance, expected: f64) {
        let ohms = actual.ohms().unwrap();
        assert!(
            (ohms - expected).abs() < 1e-9,
            "expected {expected}, got {ohms}"
        );
    }

    #[test]
    fn test_defaults_match_startup_screen() {
        let calc = Calculator::new();

        assert_eq!(calc.topology(), Topology::FourBand);
        assert_eq!(calc.resistance(), Resistance::Ohms(330.0));
        assert_close(calc.min_resistance(), 313.5);
        assert_close(calc.max_resistance(), 346.5);
        assert_eq!(calc.resistance_str(), "330 Ω ± 5%");
        assert_eq!(calc.min_resistance_str(), "313.50 Ω");
        assert_eq!(calc.max_resistance_str(), "346.50 Ω");

        assert_eq!(calc.smd_code(), "102");
        assert_eq!(calc.smd_resistance(), Resistance::Ohms(1000.0));
        assert_eq!(calc.smd_tolerance(), 5);
    }

    #[test]
    fn test_topology_switch_recomputes() {
        let mut calc = Calculator::new();

        calc.set_topology(Topology::FiveBand);
        assert_eq!(calc.resistance(), Resistance::Ohms(3330.0));
        assert_eq!(calc.resistance_str(), "3.33 kΩ ± 5%");

        calc.set_topology(Topology::FourBand);
        assert_eq!(calc.resistance(), Resistance::Ohms(330.0));
    }

    #[test]
    fn test_every_band_setter_recomputes() {
        let mut calc = Calculator::new();

        calc.set_digit_a(Color::Yellow);
        calc.set_digit_b(Color::Violet);
        assert_eq!(calc.resistance(), Resistance::Ohms(470.0));

        calc.set_multiplier(MultiplierBand::Red);
        assert_eq!(calc.resistance(), Resistance::Ohms(4700.0));

        calc.set_tolerance(ToleranceBand::Silver);
        assert_eq!(calc.resistance_str(), "4.70 kΩ ± 10%");
        assert_eq!(calc.min_resistance_str(), "4.23 kΩ");
        assert_eq!(calc.max_resistance_str(), "5.17 kΩ");

        calc.set_topology(Topology::SixBand);
        calc.set_digit_c(Color::Black);
        assert_eq!(calc.resistance(), Resistance::Ohms(47_000.0));

        calc.set_tempco(TempcoBand::Violet);
        assert_eq!(calc.resistance(), Resistance::Ohms(47_000.0));
        assert_eq!(calc.tempco_str(), "5 PPM/°C");
    }

    #[test]
    fn test_set_digit_by_index() {
        let mut calc = Calculator::new();

        calc.set_digit(0, Color::Brown).unwrap();
        calc.set_digit(1, Color::Black).unwrap();
        assert_eq!(calc.resistance(), Resistance::Ohms(100.0));
        assert_eq!(calc.digit_a(), Color::Brown);

        assert!(calc.set_digit(3, Color::Red).is_err());
        assert_eq!(calc.digits(), [Color::Brown, Color::Black, Color::Orange]);
    }

    #[test]
    fn test_jumper_and_unknown_strings() {
        let mut calc = Calculator::new();

        calc.set_digit_a(Color::Black);
        calc.set_digit_b(Color::Black);
        assert_eq!(calc.resistance_str(), "0 Ω (jumper)");

        calc.set_smd_code("000");
        assert_eq!(calc.smd_resistance_str(), "0 Ω (jumper)");
        assert_eq!(calc.smd_tolerance(), 0);

        calc.set_smd_code("XYZ");
        assert_eq!(calc.smd_resistance(), Resistance::Unknown);
        assert_eq!(calc.smd_resistance_str(), "Unknown");
        assert_eq!(calc.smd_tolerance(), 0);
    }

    #[test]
    fn test_smd_edits() {
        let mut calc = Calculator::new();

        calc.set_smd_code("4R7");
        assert_eq!(calc.smd_resistance_str(), "4.70 Ω ± 5%");
        assert_eq!(calc.smd_reading().standard, SmdStandard::RadixPoint);

        calc.set_smd_code(String::from("01A"));
        assert_eq!(calc.smd_resistance_str(), "100 Ω ± 1%");

        // A half-typed code is just unknown
        calc.set_smd_code("4");
        assert_eq!(calc.smd_resistance_str(), "Unknown");
    }

    #[test]
    fn test_labels_localize_output() {
        let mut calc = Calculator::new();
        calc.set_labels(Labels {
            unknown: "Desconocido".to_string(),
            jumper: "(puente)".to_string(),
        });

        calc.set_smd_code("??");
        assert_eq!(calc.smd_resistance_str(), "Desconocido");
        calc.set_smd_code("0");
        assert_eq!(calc.smd_resistance_str(), "0 Ω (puente)");
    }

    #[test]
    fn test_strip_colors_follow_topology() {
        let mut calc = Calculator::new();
        assert_eq!(
            calc.strip_colors(),
            vec![
                "#f57c00",
                "#f57c00",
                "transparent",
                "#5d4037",
                "#d4af37",
                "transparent",
            ]
        );

        calc.set_topology(Topology::SixBand);
        assert_eq!(
            calc.strip_colors(),
            vec![
                "#f57c00", "#f57c00", "#f57c00", "#5d4037", "#d4af37", "#5d4037"
            ]
        );
    }

    #[test]
    fn test_static_tables() {
        assert_eq!(Calculator::digit_names().len(), 10);
        assert_eq!(Calculator::first_digit_names().len(), 9);
        assert_eq!(Calculator::multiplier_names().len(), 12);
        assert_eq!(Calculator::tolerance_names().len(), 8);
        assert_eq!(Calculator::tempco_names().len(), 6);
        assert_eq!(Calculator::digit_colors()[8], "#888888");
        assert_eq!(Calculator::multiplier_colors()[10], "#d4af37");
        assert_eq!(Calculator::tolerance_colors()[2], "#388e3c");
        assert_eq!(Calculator::tempco_colors()[3], "#fbc02d");
    }

    #[test]
    fn test_from_config() {
        let config = CalculatorConfig {
            topology: Topology::FiveBand,
            digits: [Color::Brown, Color::Black, Color::Black],
            multiplier: MultiplierBand::Brown,
            tolerance: ToleranceBand::Brown,
            smd_code: "0R22".to_string(),
            ..CalculatorConfig::default()
        };
        let calc = Calculator::from_config(&config);

        assert_eq!(calc.resistance_str(), "1 kΩ ± 1%");
        assert_eq!(calc.smd_resistance_str(), "220 mΩ ± 1%");
    }
}
