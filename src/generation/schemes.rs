//! Color-theory palette schemes
//!
//! Every scheme keeps the base color (as supplied) in the first slot, adds
//! its defining hues, then pads up to `count` with per-index variations.
//! The padding steps and clamp bounds differ per scheme.
//!
//! An unparseable base color yields `max(count, 1)` copies of the base.

use crate::color::{hex_to_hsl, Hsl};

fn unparsed_base(base_color: &str, count: usize) -> Vec<String> {
    tracing::debug!(base_color, "unparseable base color, repeating it");
    vec![base_color.to_string(); count.max(1)]
}

fn signed(step: f64, positive: bool) -> f64 {
    if positive {
        step
    } else {
        -step
    }
}

/// Shades of the base hue with lightness spread across the range
pub fn monochromatic_palette(base_color: &str, count: usize) -> Vec<String> {
    let Some(hsl) = hex_to_hsl(base_color) else {
        return unparsed_base(base_color, count);
    };

    let lightness_step = 100.0 / (count as f64 + 1.0);
    let saturation_step = 30.0 / (count as f64 + 1.0);

    let mut palette = vec![base_color.to_string()];
    for i in 1..count {
        let s = (hsl.s + signed(saturation_step, i % 2 == 0)).clamp(20.0, 100.0);
        let l = (hsl.l + (i as f64 * lightness_step - 50.0)).clamp(10.0, 90.0);
        palette.push(Hsl::new(hsl.h, s, l).to_hex());
    }
    palette
}

/// Neighbouring hues, alternating `-spread`, `+spread`, `-2·spread`, ...
pub fn analogous_palette(base_color: &str, count: usize, spread: f64) -> Vec<String> {
    let Some(hsl) = hex_to_hsl(base_color) else {
        return unparsed_base(base_color, count);
    };

    let mut palette = vec![base_color.to_string()];
    for i in 1..count {
        let direction = if i % 2 == 0 { 1.0 } else { -1.0 };
        let steps = i.div_ceil(2) as f64;
        palette.push(hsl.rotate(direction * steps * spread).to_hex());
    }
    palette
}

/// Base and its complement (+180°)
pub fn complementary_palette(base_color: &str, count: usize) -> Vec<String> {
    let Some(hsl) = hex_to_hsl(base_color) else {
        return unparsed_base(base_color, count);
    };

    let mut palette = vec![base_color.to_string(), hsl.rotate(180.0).to_hex()];
    for i in 2..count {
        let s = (hsl.s + signed(10.0, i % 3 == 0)).clamp(50.0, 100.0);
        let l = (hsl.l + signed(5.0, i % 2 == 0)).clamp(30.0, 70.0);
        palette.push(Hsl::new(hsl.h, s, l).rotate(60.0 * i as f64).to_hex());
    }
    palette
}

/// Three hues 120° apart
pub fn triadic_palette(base_color: &str, count: usize) -> Vec<String> {
    let Some(hsl) = hex_to_hsl(base_color) else {
        return unparsed_base(base_color, count);
    };

    let mut palette = vec![base_color.to_string()];
    palette.extend([120.0, 240.0].map(|offset| hsl.rotate(offset).to_hex()));
    for i in 3..count {
        let s = (hsl.s + signed(15.0, i % 2 == 0)).clamp(60.0, 100.0);
        let l = (hsl.l + signed(10.0, i % 3 == 0)).clamp(40.0, 80.0);
        palette.push(Hsl::new(hsl.h, s, l).rotate(60.0 * i as f64).to_hex());
    }
    palette
}

/// Two complementary pairs (+90°, +180°, +270°)
pub fn tetradic_palette(base_color: &str, count: usize) -> Vec<String> {
    let Some(hsl) = hex_to_hsl(base_color) else {
        return unparsed_base(base_color, count);
    };

    let mut palette = vec![base_color.to_string()];
    palette.extend([90.0, 180.0, 270.0].map(|offset| hsl.rotate(offset).to_hex()));
    for i in 4..count {
        let s = (hsl.s + signed(20.0, i % 2 == 0)).clamp(40.0, 100.0);
        let l = (hsl.l + signed(15.0, i % 3 == 0)).clamp(20.0, 90.0);
        palette.push(Hsl::new(hsl.h, s, l).rotate(45.0 * i as f64).to_hex());
    }
    palette
}

/// Base plus the two neighbours of its complement (+150°, +210°)
pub fn split_complementary_palette(base_color: &str, count: usize) -> Vec<String> {
    let Some(hsl) = hex_to_hsl(base_color) else {
        return unparsed_base(base_color, count);
    };

    let mut palette = vec![base_color.to_string()];
    palette.extend([150.0, 210.0].map(|offset| hsl.rotate(offset).to_hex()));
    for i in 3..count {
        let s = (hsl.s + signed(12.0, i % 2 == 0)).clamp(50.0, 100.0);
        let l = (hsl.l + signed(8.0, i % 4 == 0)).clamp(25.0, 85.0);
        palette.push(Hsl::new(hsl.h, s, l).rotate(75.0 * i as f64).to_hex());
    }
    palette
}

/// Four hues 90° apart, padded in 72° steps
pub fn square_palette(base_color: &str, count: usize) -> Vec<String> {
    let Some(hsl) = hex_to_hsl(base_color) else {
        return unparsed_base(base_color, count);
    };

    let mut palette = vec![base_color.to_string()];
    palette.extend([90.0, 180.0, 270.0].map(|offset| hsl.rotate(offset).to_hex()));
    for i in 4..count {
        let s = (hsl.s + signed(25.0, i % 3 == 0)).clamp(30.0, 100.0);
        let l = (hsl.l + signed(20.0, i % 2 == 0)).clamp(15.0, 95.0);
        palette.push(Hsl::new(hsl.h, s, l).rotate(72.0 * i as f64).to_hex());
    }
    palette
}

/// Hue walked in 30° steps with gentle saturation and lightness changes
pub fn harmonious_palette(base_color: &str, count: usize) -> Vec<String> {
    let Some(hsl) = hex_to_hsl(base_color) else {
        return unparsed_base(base_color, count);
    };

    let mut palette = vec![base_color.to_string()];
    for i in 1..count {
        let s = (hsl.s + signed(10.0, i % 2 == 0)).clamp(20.0, 100.0);
        let l = (hsl.l + signed(5.0, i % 3 == 0)).clamp(20.0, 80.0);
        palette.push(Hsl::new(hsl.h, s, l).rotate(30.0 * i as f64).to_hex());
    }
    palette
}
