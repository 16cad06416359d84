//! # Color Band Tables
//!
//! Closed enumerations for every band position on an axial resistor.
//!
//! ## Band Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Axial Resistor Band Positions                       │
//! │                                                                         │
//! │      ┌───┬───┬───┬───┬───────────┬───┬───┐                              │
//! │  ────┤ A │ B │ C │ × │           │ ± │ T ├────                          │
//! │      └───┴───┴───┴───┴───────────┴───┴───┘                              │
//! │        │   │   │   │               │   │                                │
//! │        │   │   │   │               │   └── TempcoBand (6-band only)     │
//! │        │   │   │   │               └────── ToleranceBand                │
//! │        │   │   │   └────────────────────── MultiplierBand               │
//! │        │   │   └────────────────────────── Color (5/6-band only)        │
//! │        └───┴────────────────────────────── Color (significant digits)   │
//! │                                                                         │
//! │  Topology decides how many significant digits participate (2 or 3)     │
//! │  and whether the tempco band is drawn at all.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every band enumeration carries a [`Swatch`] (display name + hex color)
//! through the [`Band`] trait, so the presentation layer can fill its
//! selection widgets straight from [`Band::names`] and [`Band::hex_colors`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Swatch Palette
// =============================================================================

/// A display name paired with the `#rrggbb` color used to paint a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Swatch {
    pub name: &'static str,
    pub hex: &'static str,
}

impl Swatch {
    const fn new(name: &'static str, hex: &'static str) -> Self {
        Swatch { name, hex }
    }
}

/// The twelve colors that appear on resistor bodies.
pub mod palette {
    use super::Swatch;

    pub const BLACK: Swatch = Swatch::new("Black", "#000000");
    pub const BROWN: Swatch = Swatch::new("Brown", "#5d4037");
    pub const RED: Swatch = Swatch::new("Red", "#d32f2f");
    pub const ORANGE: Swatch = Swatch::new("Orange", "#f57c00");
    pub const YELLOW: Swatch = Swatch::new("Yellow", "#fbc02d");
    pub const GREEN: Swatch = Swatch::new("Green", "#388e3c");
    pub const BLUE: Swatch = Swatch::new("Blue", "#4169e1");
    pub const VIOLET: Swatch = Swatch::new("Violet", "#512da8");
    pub const GRAY: Swatch = Swatch::new("Gray", "#888888");
    pub const WHITE: Swatch = Swatch::new("White", "#ffffff");
    pub const GOLD: Swatch = Swatch::new("Gold", "#d4af37");
    pub const SILVER: Swatch = Swatch::new("Silver", "#c0c0c0");
}

/// Color drawn in a strip slot that the current topology does not use.
pub const TRANSPARENT: &str = "transparent";

// =============================================================================
// Band Trait
// =============================================================================

/// Shared behavior of every band enumeration.
///
/// ## Example
/// ```rust
/// use resistor_core::colors::{Band, TempcoBand};
///
/// assert_eq!(TempcoBand::names(), vec!["Brown", "Red", "Orange", "Yellow", "Blue", "Violet"]);
/// assert_eq!(TempcoBand::Blue.hex(), "#4169e1");
/// ```
pub trait Band: Copy + Sized + 'static {
    /// Every variant, in the order selection widgets list them.
    const ALL: &'static [Self];

    /// Field name used in validation errors.
    const FIELD: &'static str;

    /// The swatch painted for this band.
    fn swatch(self) -> Swatch;

    /// Display name (e.g. "Orange").
    fn name(self) -> &'static str {
        self.swatch().name
    }

    /// Hex color (e.g. "#f57c00").
    fn hex(self) -> &'static str {
        self.swatch().hex
    }

    /// Position of this variant within [`Band::ALL`].
    fn index(self) -> usize;

    /// Display names of every variant, in order.
    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|band| band.name()).collect()
    }

    /// Hex colors of every variant, in order.
    fn hex_colors() -> Vec<&'static str> {
        Self::ALL.iter().map(|band| band.hex()).collect()
    }

    /// Looks a variant up by its position within [`Band::ALL`].
    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parses a variant from its display name, ignoring ASCII case.
    fn from_name(name: &str) -> Result<Self, ValidationError> {
        let wanted = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|band| band.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: Self::FIELD.to_string(),
                value: name.to_string(),
                allowed: Self::names().into_iter().map(String::from).collect(),
            })
    }
}

/// Implements `Display` and `FromStr` in terms of [`Band`].
macro_rules! band_text {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as Band>::from_name(s)
            }
        }
    };
}

// =============================================================================
// Significant Digit Color
// =============================================================================

/// A significant-digit band. The digit it encodes equals its ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Gray,
    White,
}

impl Color {
    /// The decimal digit this band encodes (0-9).
    #[inline]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    /// Colors allowed on the first band. A leading black band is never
    /// offered, since it would just drop a significant digit.
    pub fn first_digit_names() -> Vec<&'static str> {
        Self::ALL[1..].iter().map(|c| c.name()).collect()
    }
}

impl Band for Color {
    const ALL: &'static [Self] = &[
        Color::Black,
        Color::Brown,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Violet,
        Color::Gray,
        Color::White,
    ];

    const FIELD: &'static str = "digit";

    fn swatch(self) -> Swatch {
        match self {
            Color::Black => palette::BLACK,
            Color::Brown => palette::BROWN,
            Color::Red => palette::RED,
            Color::Orange => palette::ORANGE,
            Color::Yellow => palette::YELLOW,
            Color::Green => palette::GREEN,
            Color::Blue => palette::BLUE,
            Color::Violet => palette::VIOLET,
            Color::Gray => palette::GRAY,
            Color::White => palette::WHITE,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

band_text!(Color);

// =============================================================================
// Tolerance Band
// =============================================================================

/// The precision band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ToleranceBand {
    Brown,
    Red,
    Green,
    Blue,
    Violet,
    Gray,
    Gold,
    Silver,
}

impl ToleranceBand {
    /// Tolerance as a percentage (Gold = 5.0).
    pub const fn percent(self) -> f64 {
        match self {
            ToleranceBand::Brown => 1.0,
            ToleranceBand::Red => 2.0,
            ToleranceBand::Green => 0.5,
            ToleranceBand::Blue => 0.25,
            ToleranceBand::Violet => 0.1,
            ToleranceBand::Gray => 0.05,
            ToleranceBand::Gold => 5.0,
            ToleranceBand::Silver => 10.0,
        }
    }

    /// Tolerance as a fraction of the nominal value (Gold = 0.05).
    #[inline]
    pub fn fraction(self) -> f64 {
        self.percent() / 100.0
    }
}

impl Band for ToleranceBand {
    const ALL: &'static [Self] = &[
        ToleranceBand::Brown,
        ToleranceBand::Red,
        ToleranceBand::Green,
        ToleranceBand::Blue,
        ToleranceBand::Violet,
        ToleranceBand::Gray,
        ToleranceBand::Gold,
        ToleranceBand::Silver,
    ];

    const FIELD: &'static str = "tolerance";

    fn swatch(self) -> Swatch {
        match self {
            ToleranceBand::Brown => palette::BROWN,
            ToleranceBand::Red => palette::RED,
            ToleranceBand::Green => palette::GREEN,
            ToleranceBand::Blue => palette::BLUE,
            ToleranceBand::Violet => palette::VIOLET,
            ToleranceBand::Gray => palette::GRAY,
            ToleranceBand::Gold => palette::GOLD,
            ToleranceBand::Silver => palette::SILVER,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

band_text!(ToleranceBand);

// =============================================================================
// Multiplier Band
// =============================================================================

/// The power-of-ten band that scales the significant digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MultiplierBand {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Gray,
    White,
    Gold,
    Silver,
}

impl MultiplierBand {
    /// Power of ten this band multiplies by (Gold = -1, Silver = -2).
    pub const fn exponent(self) -> i32 {
        match self {
            MultiplierBand::Gold => -1,
            MultiplierBand::Silver => -2,
            // Black..White carry their own ordinal as the exponent
            other => other as i32,
        }
    }

    /// The multiplication factor (`10^exponent`).
    pub fn factor(self) -> f64 {
        crate::types::scale_pow10(1.0, self.exponent())
    }

    /// Scales a significant-digit base by this band.
    ///
    /// ## Example
    /// ```rust
    /// use resistor_core::colors::MultiplierBand;
    ///
    /// assert_eq!(MultiplierBand::Brown.apply(33.0), 330.0);
    /// assert_eq!(MultiplierBand::Gold.apply(47.0), 4.7);
    /// ```
    pub fn apply(self, base: f64) -> f64 {
        crate::types::scale_pow10(base, self.exponent())
    }
}

impl Band for MultiplierBand {
    const ALL: &'static [Self] = &[
        MultiplierBand::Black,
        MultiplierBand::Brown,
        MultiplierBand::Red,
        MultiplierBand::Orange,
        MultiplierBand::Yellow,
        MultiplierBand::Green,
        MultiplierBand::Blue,
        MultiplierBand::Violet,
        MultiplierBand::Gray,
        MultiplierBand::White,
        MultiplierBand::Gold,
        MultiplierBand::Silver,
    ];

    const FIELD: &'static str = "multiplier";

    fn swatch(self) -> Swatch {
        match self {
            MultiplierBand::Black => palette::BLACK,
            MultiplierBand::Brown => palette::BROWN,
            MultiplierBand::Red => palette::RED,
            MultiplierBand::Orange => palette::ORANGE,
            MultiplierBand::Yellow => palette::YELLOW,
            MultiplierBand::Green => palette::GREEN,
            MultiplierBand::Blue => palette::BLUE,
            MultiplierBand::Violet => palette::VIOLET,
            MultiplierBand::Gray => palette::GRAY,
            MultiplierBand::White => palette::WHITE,
            MultiplierBand::Gold => palette::GOLD,
            MultiplierBand::Silver => palette::SILVER,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

band_text!(MultiplierBand);

// =============================================================================
// Temperature Coefficient Band
// =============================================================================

/// Temperature coefficient band. Only drawn on six-band resistors and has
/// no effect on the resistance value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TempcoBand {
    Brown,
    Red,
    Orange,
    Yellow,
    Blue,
    Violet,
}

impl TempcoBand {
    /// Drift in parts per million per degree Celsius.
    pub const fn ppm(self) -> u32 {
        match self {
            TempcoBand::Brown => 100,
            TempcoBand::Red => 50,
            TempcoBand::Orange => 15,
            TempcoBand::Yellow => 25,
            TempcoBand::Blue => 10,
            TempcoBand::Violet => 5,
        }
    }

    /// Human-readable drift, e.g. `"100 PPM/°C"`.
    pub fn describe(self) -> String {
        format!("{} PPM/°C", self.ppm())
    }
}

impl Band for TempcoBand {
    const ALL: &'static [Self] = &[
        TempcoBand::Brown,
        TempcoBand::Red,
        TempcoBand::Orange,
        TempcoBand::Yellow,
        TempcoBand::Blue,
        TempcoBand::Violet,
    ];

    const FIELD: &'static str = "tempco";

    fn swatch(self) -> Swatch {
        match self {
            TempcoBand::Brown => palette::BROWN,
            TempcoBand::Red => palette::RED,
            TempcoBand::Orange => palette::ORANGE,
            TempcoBand::Yellow => palette::YELLOW,
            TempcoBand::Blue => palette::BLUE,
            TempcoBand::Violet => palette::VIOLET,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

band_text!(TempcoBand);

// =============================================================================
// Topology
// =============================================================================

/// How many bands the resistor body carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    /// Two digits, multiplier, tolerance.
    #[default]
    FourBand,
    /// Three digits, multiplier, tolerance.
    FiveBand,
    /// Three digits, multiplier, tolerance, tempco.
    SixBand,
}

impl Topology {
    pub const ALL: [Topology; 3] = [Topology::FourBand, Topology::FiveBand, Topology::SixBand];

    /// Number of significant-digit bands.
    #[inline]
    pub const fn digit_count(self) -> usize {
        match self {
            Topology::FourBand => 2,
            Topology::FiveBand | Topology::SixBand => 3,
        }
    }

    /// Whether the tempco band is drawn.
    #[inline]
    pub const fn has_tempco(self) -> bool {
        matches!(self, Topology::SixBand)
    }

    /// Total number of bands on the body.
    #[inline]
    pub const fn band_count(self) -> usize {
        match self {
            Topology::FourBand => 4,
            Topology::FiveBand => 5,
            Topology::SixBand => 6,
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-band", self.band_count())
    }
}

/// Accepts `"4"`, `"4-band"`, `"four"`, `"four_band"` and the like.
impl FromStr for Topology {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        let stem = normalized.strip_suffix("band").unwrap_or(normalized.as_str());

        match stem {
            "4" | "four" => Ok(Topology::FourBand),
            "5" | "five" => Ok(Topology::FiveBand),
            "6" | "six" => Ok(Topology::SixBand),
            _ => Err(ValidationError::NotAllowed {
                field: "topology".to_string(),
                value: s.to_string(),
                allowed: vec![
                    "4-band".to_string(),
                    "5-band".to_string(),
                    "6-band".to_string(),
                ],
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
