//! Color value types and color space conversion
//!
//! This module handles the HEX, RGB and HSL representations used
//! throughout the library and the conversions between them.

pub mod model;
pub mod conversion;

pub use model::{Hsl, Rgb};
pub use conversion::{
    adjust_color_brightness, generate_random_color, generate_random_color_with,
    get_color_brightness, hex_to_hsl, hex_to_hsl_string, hex_to_rgb, hex_to_rgb_string,
    hsl_to_rgb, rgb_to_hex, rgb_to_hsl,
};
