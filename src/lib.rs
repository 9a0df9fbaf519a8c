//! # Swatchbook
//!
//! A Rust crate for building color palettes and checking them for accessibility.
//!
//! This library provides:
//! - Conversion between HEX, RGB and HSL representations
//! - WCAG relative luminance, contrast ratios and conformance levels
//! - Palette generation by color-theory scheme, by mood, and by gradient
//!
//! Malformed colors never panic: lenient helpers fall back to a documented
//! default, and strict entry points such as [`describe_color`] return a
//! [`PaletteError`].
//!
//! ## Example
//!
//! ```rust
//! use swatchbook::{analyze_palette_accessibility, generate_palette_by_type};
//!
//! let palette = generate_palette_by_type("#3366CC", "triadic", 5);
//! assert_eq!(palette[0], "#3366CC");
//!
//! for pair in analyze_palette_accessibility(&palette) {
//!     println!("{} / {}: {} ({})", pair.color1, pair.color2, pair.contrast, pair.level);
//! }
//! ```

use serde::{Deserialize, Serialize};

pub mod error;
pub mod constants;
pub mod config;
pub mod color;
pub mod accessibility;
pub mod generation;

pub use error::{PaletteError, Result};
pub use config::GeneratorConfig;
pub use color::{
    adjust_color_brightness, generate_random_color, generate_random_color_with,
    get_color_brightness, hex_to_hsl, hex_to_hsl_string, hex_to_rgb, hex_to_rgb_string,
    hsl_to_rgb, rgb_to_hex, rgb_to_hsl, Hsl, Rgb,
};
pub use accessibility::{
    accessibility_level, analyze_palette_accessibility, contrast_ratio, is_text_readable,
    optimal_text_color, relative_luminance, AccessibilityLevel, AccessibilityRating, PairReport,
    TextSize,
};
pub use generation::{
    analogous_palette, available_moods, available_palette_types, color_gradient,
    complementary_palette, generate_palette_by_type, harmonious_palette, monochromatic_palette,
    mood_palette, multi_gradient_palette, palette_type_info, split_complementary_palette,
    square_palette, tetradic_palette, triadic_palette, Mood, PaletteGenerator, PaletteReport,
    PaletteTypeInfo, SchemeKind,
};

/// Every representation of a single color, as shown next to a swatch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorInfo {
    /// Canonical hexadecimal representation
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    /// Perceived brightness (0.0 = black, 1.0 = white)
    pub brightness: f64,
    /// WCAG relative luminance
    pub luminance: f64,
    /// Black or white, whichever reads better on this color
    pub text_color: String,
}

/// Describe one color in all supported representations
///
/// # Errors
///
/// Returns [`PaletteError::InvalidHex`] if `hex` is not a 6-digit hex color.
pub fn describe_color(hex: &str) -> Result<ColorInfo> {
    let rgb: Rgb = hex.parse()?;
    let canonical = rgb.to_hex();

    Ok(ColorInfo {
        hsl: rgb.to_hsl(),
        brightness: get_color_brightness(&canonical),
        luminance: relative_luminance(&canonical),
        text_color: optimal_text_color(&canonical).to_string(),
        hex: canonical,
        rgb,
    })
}
