//! WCAG accessibility analysis
//!
//! Relative luminance and contrast ratio per WCAG 2.x, level
//! classification, and pairwise analysis of whole palettes.

pub mod contrast;
pub mod report;

pub use contrast::{
    accessibility_level, contrast_ratio, is_text_readable, optimal_text_color,
    relative_luminance, AccessibilityLevel, AccessibilityRating, TextSize,
};
pub use report::{analyze_palette_accessibility, PairReport};
