//! Contrast math and WCAG level classification
//!
//! Algorithm: WCAG 2.x relative luminance with the 0.03928 sRGB threshold,
//! contrast ratio `(L_max + 0.05) / (L_min + 0.05)`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::color::{get_color_brightness, hex_to_rgb};
use crate::constants::{brightness, colors, wcag};

/// WCAG conformance level reached by a contrast ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum AccessibilityLevel {
    #[serde(rename = "AAA")]
    #[strum(serialize = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    #[strum(serialize = "AA")]
    Aa,
    #[serde(rename = "AA Large")]
    #[strum(serialize = "AA Large")]
    AaLarge,
    #[serde(rename = "Fail")]
    #[strum(serialize = "Fail")]
    Fail,
}

impl AccessibilityLevel {
    /// Classify a contrast ratio; each threshold is inclusive
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= wcag::AAA_RATIO {
            Self::Aaa
        } else if ratio >= wcag::AA_RATIO {
            Self::Aa
        } else if ratio >= wcag::AA_LARGE_RATIO {
            Self::AaLarge
        } else {
            Self::Fail
        }
    }

    /// Human-readable score label
    pub fn score(self) -> &'static str {
        match self {
            Self::Aaa => "Excellent",
            Self::Aa => "Good",
            Self::AaLarge => "Acceptable",
            Self::Fail => "Insufficient",
        }
    }

    /// Badge color used when displaying the level
    pub fn display_color(self) -> &'static str {
        match self {
            Self::Aaa => "#28A745",
            Self::Aa => "#17A2B8",
            Self::AaLarge => "#FFC107",
            Self::Fail => "#DC3545",
        }
    }
}

/// Level together with its fixed label and display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccessibilityRating {
    pub level: AccessibilityLevel,
    pub score: &'static str,
    pub color: &'static str,
}

/// Text size category for the readability check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TextSize {
    #[default]
    Normal,
    Large,
}

impl TextSize {
    /// Minimum contrast ratio for text of this size
    pub fn min_ratio(self) -> f64 {
        match self {
            TextSize::Normal => wcag::AA_RATIO,
            TextSize::Large => wcag::AA_LARGE_RATIO,
        }
    }
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= wcag::LINEAR_THRESHOLD {
        c / wcag::LINEAR_DIVISOR
    } else {
        ((c + wcag::GAMMA_OFFSET) / wcag::GAMMA_SCALE).powf(wcag::GAMMA_EXPONENT)
    }
}

/// WCAG relative luminance in [0, 1]
///
/// Returns 0 for an unparseable color.
pub fn relative_luminance(hex: &str) -> f64 {
    let Some(rgb) = hex_to_rgb(hex) else {
        tracing::debug!(hex, "unparseable color, luminance taken as 0");
        return 0.0;
    };

    wcag::RED_WEIGHT * linearize(rgb.r)
        + wcag::GREEN_WEIGHT * linearize(rgb.g)
        + wcag::BLUE_WEIGHT * linearize(rgb.b)
}

/// WCAG contrast ratio, always >= 1 and symmetric in its arguments
pub fn contrast_ratio(color_a: &str, color_b: &str) -> f64 {
    let luminance_a = relative_luminance(color_a);
    let luminance_b = relative_luminance(color_b);

    let lighter = luminance_a.max(luminance_b);
    let darker = luminance_a.min(luminance_b);

    (lighter + wcag::CONTRAST_FLARE) / (darker + wcag::CONTRAST_FLARE)
}

/// Classify a contrast ratio into a rating with label and display color
pub fn accessibility_level(ratio: f64) -> AccessibilityRating {
    let level = AccessibilityLevel::from_ratio(ratio);
    AccessibilityRating {
        level,
        score: level.score(),
        color: level.display_color(),
    }
}

/// Whether text in `text_color` is readable on `background_color`
///
/// Large text needs a ratio of 3, normal text 4.5 (WCAG AA).
pub fn is_text_readable(text_color: &str, background_color: &str, size: TextSize) -> bool {
    contrast_ratio(text_color, background_color) >= size.min_ratio()
}

/// Black text on bright backgrounds, white text otherwise
///
/// A plain brightness threshold, not a contrast search.
pub fn optimal_text_color(background_color: &str) -> &'static str {
    if get_color_brightness(background_color) > brightness::TEXT_THRESHOLD {
        colors::BLACK
    } else {
        colors::WHITE
    }
}
