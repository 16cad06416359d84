//! # resistor-state: Calculator State
//!
//! Holds what the user has picked and keeps every readout current.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         resistor-state                                  │
//! │                                                                         │
//! │   ┌──────────────┐    setters     ┌──────────────┐                      │
//! │   │ Presentation │ ─────────────► │  Calculator  │                      │
//! │   │    layer     │ ◄───────────── │              │                      │
//! │   └──────────────┘    getters     └──────┬───────┘                      │
//! │          ▲                               │ recompute on every edit      │
//! │          │ JSON / TypeScript             ▼                              │
//! │   ┌──────┴───────────┐           ┌──────────────┐                      │
//! │   │CalculatorSnapshot│           │resistor-core │  band / smd / format │
//! │   └──────────────────┘           └──────────────┘                      │
//! │                                                                         │
//! │   CalculatorConfig ──► startup defaults (JSON document, RESISTOR_*)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use resistor_state::{Calculator, CalculatorSnapshot};
//! use resistor_core::{Color, Topology};
//!
//! let mut calc = Calculator::new();
//! calc.set_topology(Topology::FiveBand);
//! calc.set_digit_c(Color::Black);
//! assert_eq!(calc.resistance_str(), "3.30 kΩ ± 5%");
//!
//! let snapshot = CalculatorSnapshot::from(&calc);
//! assert_eq!(snapshot.smd_resistance_str, "1 kΩ ± 5%");
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod snapshot;

pub use calculator::Calculator;
pub use config::CalculatorConfig;
pub use error::{StateError, StateResult};
pub use snapshot::{BandTables, CalculatorSnapshot};

use tracing::info;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,resistor=debug";

/// Sets up the tracing subscriber.
///
/// Reads `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`]. Calling it
/// again after a subscriber is installed does nothing.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Err only means a subscriber is already set
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Builds the startup calculator from defaults plus `RESISTOR_*` overrides.
pub fn start() -> Calculator {
    let config = CalculatorConfig::from_env();
    let calc = Calculator::from_config(&config);

    info!(
        topology = %calc.topology(),
        resistance = %calc.resistance_str(),
        smd_code = %calc.smd_code(),
        "Resistor calculator ready"
    );

    calc
}
