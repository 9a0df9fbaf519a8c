//! Color space conversion utilities
//!
//! Provides conversions between the three color representations:
//! - HEX strings ("#RRGGBB", optional '#', any case)
//! - 8-bit RGB triples
//! - HSL with hue in degrees and saturation/lightness in percent
//!
//! Parsing is lenient: a malformed hex string yields `None` (or a documented
//! fallback value) instead of an error. Use `"..".parse::<Rgb>()` for a typed
//! failure.
//!
//! RGB↔HSL goes through `palette` in `f64`. Channel values that land exactly
//! on a .5 boundary are rounded from palette's result, so a handful of
//! inputs come out one unit away from a hand-written `hue2rgb` evaluation,
//! e.g. `hsl_to_rgb(0.0, 50.0, 20.0)` is `(77, 26, 26)`.

use std::ops::Range;

use palette::{FromColor, Hsl as SrgbHsl, Srgb};
use rand::Rng;

use super::model::{Hsl, Rgb};
use crate::constants::brightness;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Round to the nearest integer with halves going up, e.g. -0.5 -> 0
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn to_channel(value: f64) -> u8 {
    round_half_up(value.clamp(0.0, 1.0) * 255.0) as u8
}

/// Parse a 6-digit hex color
///
/// # Arguments
///
/// * `hex` - Hex color string (e.g., "#FF0000", "ff0000")
///
/// # Returns
///
/// `None` for anything other than exactly three two-digit hex groups,
/// including the 3-digit shorthand and named colors.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Format RGB channels as an uppercase hex string (e.g., "#0A0B0C")
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Convert RGB to HSL
///
/// Hue is rounded to whole degrees and wrapped into [0, 360); saturation
/// and lightness are rounded to whole percent. Achromatic colors get hue
/// and saturation 0.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let srgb = Srgb::<u8>::new(r, g, b).into_format::<f64>();
    let hsl: SrgbHsl<palette::encoding::Srgb, f64> = SrgbHsl::from_color(srgb);

    Hsl::new(
        round_half_up(hsl.hue.into_positive_degrees()) % 360.0,
        round_half_up(hsl.saturation * 100.0),
        round_half_up(hsl.lightness * 100.0),
    )
}

/// Convert HSL to RGB
///
/// # Arguments
///
/// * `h` - Hue in degrees (any value, wrapped onto the color wheel)
/// * `s` - Saturation in percent, clamped to [0, 100]
/// * `l` - Lightness in percent, clamped to [0, 100]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let hsl = SrgbHsl::<palette::encoding::Srgb, f64>::new(
        h,
        (s / 100.0).clamp(0.0, 1.0),
        (l / 100.0).clamp(0.0, 1.0),
    );
    let srgb = Srgb::<f64>::from_color(hsl);

    Rgb::new(to_channel(srgb.red), to_channel(srgb.green), to_channel(srgb.blue))
}

/// Parse a hex color straight to HSL
pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    hex_to_rgb(hex).map(Rgb::to_hsl)
}

/// Perceived brightness in [0, 1] (BT.601 luma)
///
/// Returns 0.5 for an unparseable color.
pub fn get_color_brightness(hex: &str) -> f64 {
    match hex_to_rgb(hex) {
        Some(rgb) => {
            (brightness::RED_WEIGHT * f64::from(rgb.r)
                + brightness::GREEN_WEIGHT * f64::from(rgb.g)
                + brightness::BLUE_WEIGHT * f64::from(rgb.b))
                / 255.0
        }
        None => {
            tracing::debug!(hex, "unparseable color, using neutral brightness");
            brightness::FALLBACK
        }
    }
}

/// Shift all three channels by `round(factor * 255)`
///
/// `factor` is expected in [-1, 1]. Channels are clamped to [0, 255].
/// An unparseable color is returned unchanged.
pub fn adjust_color_brightness(hex: &str, factor: f64) -> String {
    let Some(rgb) = hex_to_rgb(hex) else {
        tracing::debug!(hex, "unparseable color, brightness left unchanged");
        return hex.to_string();
    };

    let adjustment = round_half_up(factor * 255.0) as i32;
    let shift = |channel: u8| (i32::from(channel) + adjustment).clamp(0, 255) as u8;

    rgb_to_hex(shift(rgb.r), shift(rgb.g), shift(rgb.b))
}

/// Random color with six uniformly distributed hex digits
pub fn generate_random_color() -> String {
    generate_random_color_with(&mut rand::thread_rng())
}

/// Random color drawn from the given generator
pub fn generate_random_color_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut color = String::with_capacity(7);
    color.push('#');
    for _ in 0..6 {
        color.push(char::from(HEX_DIGITS[rng.gen_range(0..HEX_DIGITS.len())]));
    }
    color
}

/// CSS functional notation, e.g. "rgb(51, 102, 204)"
///
/// Echoes the input for an unparseable color.
pub fn hex_to_rgb_string(hex: &str) -> String {
    hex_to_rgb(hex).map_or_else(|| hex.to_string(), |rgb| rgb.to_string())
}

/// CSS functional notation, e.g. "hsl(220, 60%, 50%)"
///
/// Echoes the input for an unparseable color.
pub fn hex_to_hsl_string(hex: &str) -> String {
    hex_to_hsl(hex).map_or_else(|| hex.to_string(), |hsl| hsl.to_string())
}
