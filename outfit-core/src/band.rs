//! Temperature banding shared by the outfit table and the display palette.
//!
//! Bands are half-open intervals `[lower, upper)`: a temperature sitting exactly on a
//! breakpoint belongs to the warmer band. The coldest band is unbounded below and the
//! hottest unbounded above, so every non-NaN temperature (including the infinities)
//! lands in exactly one band.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::ParseError;

/// Lower bounds of every band except the coldest, ascending.
pub const BREAKPOINTS: [f64; 7] = [5.0, 9.0, 12.0, 17.0, 20.0, 23.0, 28.0];

/// Background token used when a temperature falls into no band (NaN).
pub const FALLBACK_BACKGROUND: &str = "White";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TemperatureBand {
    ExtremeCold,
    VeryCold,
    Cold,
    Cool,
    Mild,
    Warm,
    VeryHot,
    ExtremeHot,
}

impl TemperatureBand {
    /// All bands, coldest first. `ALL[i]` starts at `BREAKPOINTS[i - 1]`.
    pub const ALL: [TemperatureBand; 8] = [
        TemperatureBand::ExtremeCold,
        TemperatureBand::VeryCold,
        TemperatureBand::Cold,
        TemperatureBand::Cool,
        TemperatureBand::Mild,
        TemperatureBand::Warm,
        TemperatureBand::VeryHot,
        TemperatureBand::ExtremeHot,
    ];

    /// Band containing `temperature_c`, or `None` for NaN.
    pub fn of(temperature_c: f64) -> Option<Self> {
        if temperature_c.is_nan() {
            return None;
        }

        let idx = BREAKPOINTS
            .iter()
            .take_while(|&&lower| temperature_c >= lower)
            .count();

        Some(Self::ALL[idx])
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Inclusive lower bound, `None` for the coldest band.
    pub fn lower_bound(self) -> Option<f64> {
        self.index().checked_sub(1).map(|i| BREAKPOINTS[i])
    }

    /// Exclusive upper bound, `None` for the hottest band.
    pub fn upper_bound(self) -> Option<f64> {
        BREAKPOINTS.get(self.index()).copied()
    }

    pub fn contains(self, temperature_c: f64) -> bool {
        Self::of(temperature_c) == Some(self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureBand::ExtremeCold => "ExtremeCold",
            TemperatureBand::VeryCold => "VeryCold",
            TemperatureBand::Cold => "Cold",
            TemperatureBand::Cool => "Cool",
            TemperatureBand::Mild => "Mild",
            TemperatureBand::Warm => "Warm",
            TemperatureBand::VeryHot => "VeryHot",
            TemperatureBand::ExtremeHot => "ExtremeHot",
        }
    }

    /// Background color token. Tokens are named after the band so the host's color
    /// assets can be looked up directly.
    pub fn background_token(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Foreground text color drawn on top of a band's background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextToken {
    White,
    #[default]
    Black,
}

impl TextToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextToken::White => "white",
            TextToken::Black => "black",
        }
    }
}

impl fmt::Display for TextToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextToken {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "white" => Ok(TextToken::White),
            "black" => Ok(TextToken::Black),
            _ => Err(ParseError::TextToken(s.to_string())),
        }
    }
}

/// Background and text tokens for a single temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorTokens {
    pub background: &'static str,
    pub text: TextToken,
}

/// Text-color assignment per band.
///
/// Only the Cool band's text color varies between deployments; every other band is
/// fixed: white on the two hot bands and the three cold ones, black on Warm and Mild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    pub cool_text: TextToken,
}

impl Palette {
    pub fn new(cool_text: TextToken) -> Self {
        Self { cool_text }
    }

    pub fn text_token(&self, band: TemperatureBand) -> TextToken {
        match band {
            TemperatureBand::ExtremeHot | TemperatureBand::VeryHot => TextToken::White,
            TemperatureBand::Warm | TemperatureBand::Mild => TextToken::Black,
            TemperatureBand::Cool => self.cool_text,
            TemperatureBand::Cold | TemperatureBand::VeryCold | TemperatureBand::ExtremeCold => {
                TextToken::White
            }
        }
    }

    pub fn colors(&self, band: TemperatureBand) -> ColorTokens {
        ColorTokens {
            background: band.background_token(),
            text: self.text_token(band),
        }
    }

    /// Colors for a raw temperature. Unbanded input gets a white background with black
    /// text.
    pub fn colors_for(&self, temperature_c: f64) -> ColorTokens {
        match TemperatureBand::of(temperature_c) {
            Some(band) => self.colors(band),
            None => ColorTokens {
                background: FALLBACK_BACKGROUND,
                text: TextToken::Black,
            },
        }
    }
}
