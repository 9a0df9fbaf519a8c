//! Reference values for color math and palette generation
//!
//! Compile-time constants taken from WCAG 2.x and from the perceptual
//! brightness heuristic used for picking text colors.

/// WCAG 2.x relative luminance and contrast constants
pub mod wcag {
    /// sRGB channel value at or below which the linear segment applies
    pub const LINEAR_THRESHOLD: f64 = 0.03928;

    /// Divisor of the linear segment
    pub const LINEAR_DIVISOR: f64 = 12.92;

    /// Offset and scale of the gamma segment: ((c + 0.055) / 1.055) ^ 2.4
    pub const GAMMA_OFFSET: f64 = 0.055;
    pub const GAMMA_SCALE: f64 = 1.055;
    pub const GAMMA_EXPONENT: f64 = 2.4;

    /// Channel weights for relative luminance (Rec. 709 primaries)
    pub const RED_WEIGHT: f64 = 0.2126;
    pub const GREEN_WEIGHT: f64 = 0.7152;
    pub const BLUE_WEIGHT: f64 = 0.0722;

    /// Flare term added to both luminances in the contrast ratio
    pub const CONTRAST_FLARE: f64 = 0.05;

    /// Minimum contrast for level AAA
    pub const AAA_RATIO: f64 = 7.0;

    /// Minimum contrast for level AA (normal text)
    pub const AA_RATIO: f64 = 4.5;

    /// Minimum contrast for level AA on large text
    pub const AA_LARGE_RATIO: f64 = 3.0;
}

/// Perceptual brightness weights (ITU-R BT.601 luma)
pub mod brightness {
    pub const RED_WEIGHT: f64 = 0.299;
    pub const GREEN_WEIGHT: f64 = 0.587;
    pub const BLUE_WEIGHT: f64 = 0.114;

    /// Returned when a color cannot be parsed
    pub const FALLBACK: f64 = 0.5;

    /// Backgrounds brighter than this get dark text
    pub const TEXT_THRESHOLD: f64 = 0.5;
}

/// Canonical colors produced by the library
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const WHITE: &str = "#FFFFFF";
}

/// Default generation parameters
pub mod defaults {
    /// Number of colors in a generated palette
    pub const PALETTE_SIZE: usize = 5;

    /// Hue distance between neighbours in an analogous palette (degrees)
    pub const ANALOGOUS_SPREAD: f64 = 30.0;

    /// Number of points in a two-color gradient
    pub const GRADIENT_STEPS: usize = 5;

    /// Number of points per segment in a multi-color gradient
    pub const MULTI_GRADIENT_STEPS: usize = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_weights_sum_to_one() {
        let sum = wcag::RED_WEIGHT + wcag::GREEN_WEIGHT + wcag::BLUE_WEIGHT;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_brightness_weights_sum_to_one() {
        let sum = brightness::RED_WEIGHT + brightness::GREEN_WEIGHT + brightness::BLUE_WEIGHT;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_ordering() {
        assert!(wcag::AA_LARGE_RATIO < wcag::AA_RATIO);
        assert!(wcag::AA_RATIO < wcag::AAA_RATIO);
    }
}
