//! # resistor-core: Pure Decoding Logic for Resistor Markings
//!
//! This crate is the **heart** of the resistor calculator. It turns color
//! bands and surface-mount codes into resistances, and resistances into
//! readable strings, as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Resistor Calculator Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation Layer                           │   │
//! │  │    Band pickers ──► Strip preview ──► SMD input ──► Readouts    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ setters / getters                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    resistor-state                               │   │
//! │  │    Calculator (recompute on every edit), config, logging        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ resistor-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  colors   │  │   band    │  │    smd    │  │  format   │  │   │
//! │  │   │  Color    │  │  decode   │  │  decode   │  │  SI text  │  │   │
//! │  │   │  bands    │  │  strips   │  │  EIA-96   │  │  labels   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO SHARED STATE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`colors`] - Band enumerations and their swatches
//! - [`types`] - Resistance, ResistorSpec, results
//! - [`band`] - Color band decoder
//! - [`smd`] - Surface-mount code decoder
//! - [`format`] - SI-prefixed rendering
//! - [`error`] - Domain error types
//! - [`validation`] - Input checks for values outside the type system
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **Closed Enums**: Band colors cannot be out of range, so band decoding never fails
//! 3. **Total SMD Decoding**: Unreadable codes become `Resistance::Unknown`, never a panic
//! 4. **Unknown Is Not Zero**: A 0 Ω jumper is a real part, distinct from "could not decode"
//!
//! ## Example Usage
//!
//! ```rust
//! use resistor_core::{band, format, smd};
//! use resistor_core::{Color, MultiplierBand, ResistorSpec, ToleranceBand};
//!
//! let spec = ResistorSpec::four_band(
//!     [Color::Orange, Color::Orange],
//!     MultiplierBand::Brown,
//!     ToleranceBand::Gold,
//! );
//! let result = band::decode(&spec);
//! let labels = format::Labels::default();
//! assert_eq!(
//!     format::format_with_tolerance(result.value, result.tolerance_percent, &labels),
//!     "330 Ω ± 5%"
//! );
//!
//! let reading = smd::decode("102");
//! assert_eq!(format::format_resistance(reading.value), "1 kΩ");
//! assert_eq!(reading.tolerance_percent, 5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod band;
pub mod colors;
pub mod error;
pub mod format;
pub mod smd;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use resistor_core::Color` instead of
// `use resistor_core::colors::Color`

pub use colors::{Band, Color, MultiplierBand, Swatch, TempcoBand, ToleranceBand, Topology};
pub use error::{CoreError, SmdError, ValidationError};
pub use format::Labels;
pub use types::*;
