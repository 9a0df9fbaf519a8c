//! Pairwise accessibility report for a whole palette

use serde::{Deserialize, Serialize};

use super::contrast::{accessibility_level, contrast_ratio, AccessibilityLevel};
use crate::constants::wcag;

/// Contrast analysis of one unordered pair of palette colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairReport {
    pub color1: String,
    pub color2: String,
    /// Contrast ratio rounded to two decimals for display
    pub contrast: f64,
    pub level: AccessibilityLevel,
    pub score: String,
    /// Normal-text readability (ratio >= 4.5), computed on the unrounded ratio
    pub is_readable: bool,
}

/// Analyze every unordered pair `(i, j)` with `i < j` exactly once
///
/// A palette of `n` colors yields `n * (n - 1) / 2` reports, in row-major
/// order of the pair indices.
pub fn analyze_palette_accessibility<S: AsRef<str>>(colors: &[S]) -> Vec<PairReport> {
    let mut reports = Vec::with_capacity(colors.len() * colors.len().saturating_sub(1) / 2);

    for (i, first) in colors.iter().enumerate() {
        for second in &colors[i + 1..] {
            let (first, second) = (first.as_ref(), second.as_ref());
            let ratio = contrast_ratio(first, second);
            let rating = accessibility_level(ratio);

            reports.push(PairReport {
                color1: first.to_string(),
                color2: second.to_string(),
                contrast: (ratio * 100.0).round() / 100.0,
                level: rating.level,
                score: rating.score.to_string(),
                is_readable: ratio >= wcag::AA_RATIO,
            });
        }
    }

    tracing::debug!(colors = colors.len(), pairs = reports.len(), "palette accessibility analyzed");
    reports
}
