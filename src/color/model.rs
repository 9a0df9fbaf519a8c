//! RGB and HSL value types

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use super::conversion;
use crate::PaletteError;

/// 24-bit sRGB color, one byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Canonical hex form, e.g. "#3366CC"
    pub fn to_hex(self) -> String {
        conversion::rgb_to_hex(self.r, self.g, self.b)
    }

    /// HSL with integer-rounded components
    pub fn to_hsl(self) -> Hsl {
        conversion::rgb_to_hsl(self.r, self.g, self.b)
    }
}

impl From<Rgb> for Srgb<u8> {
    fn from(rgb: Rgb) -> Self {
        Srgb::<u8>::new(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Srgb<u8>> for Rgb {
    fn from(srgb: Srgb<u8>) -> Self {
        Rgb::new(srgb.red, srgb.green, srgb.blue)
    }
}

/// Strict parsing: unlike [`conversion::hex_to_rgb`], a malformed string
/// is reported as [`PaletteError::InvalidHex`].
impl FromStr for Rgb {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        conversion::hex_to_rgb(s).ok_or_else(|| PaletteError::invalid_hex(s))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Hue in degrees, saturation and lightness in percent.
///
/// Components are kept as `f64` because palette schemes nudge them by
/// fractional steps before converting back to RGB.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Same color with the hue rotated and wrapped into [0, 360)
    pub fn rotate(self, degrees: f64) -> Self {
        Self {
            h: (self.h + degrees).rem_euclid(360.0),
            ..self
        }
    }

    pub fn to_rgb(self) -> Rgb {
        conversion::hsl_to_rgb(self.h, self.s, self.l)
    }

    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            conversion::round_half_up(self.h),
            conversion::round_half_up(self.s),
            conversion::round_half_up(self.l)
        )
    }
}
