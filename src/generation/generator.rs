//! Configured palette generator
//!
//! Bundles a [`GeneratorConfig`] with the scheme, gradient and
//! accessibility functions so callers only pass colors around.

use serde::Serialize;

use super::catalog::SchemeKind;
use super::gradient::color_gradient;
use super::schemes::analogous_palette;
use crate::accessibility::{analyze_palette_accessibility, is_text_readable, PairReport};
use crate::config::GeneratorConfig;
use crate::Result;

/// A generated palette together with its accessibility analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteReport {
    pub scheme: SchemeKind,
    pub colors: Vec<String>,
    pub accessibility: Vec<PairReport>,
    /// Number of pairs readable as normal text
    pub readable_pairs: usize,
}

/// Palette generator driven by a [`GeneratorConfig`]
#[derive(Debug, Clone, Default)]
pub struct PaletteGenerator {
    config: GeneratorConfig,
}

impl PaletteGenerator {
    /// Create a generator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator from validated settings
    pub fn from_config(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Palette of the configured scheme and size
    pub fn generate(&self, base_color: &str) -> Vec<String> {
        match self.config.scheme {
            SchemeKind::Analogous => {
                analogous_palette(base_color, self.config.count, self.config.analogous_spread)
            }
            scheme => scheme.generate(base_color, self.config.count),
        }
    }

    /// Gradient with the configured number of steps
    pub fn gradient(&self, color_a: &str, color_b: &str) -> Vec<String> {
        color_gradient(color_a, color_b, self.config.gradient_steps)
    }

    /// Readability of text on a background at the configured text size
    pub fn is_readable(&self, text_color: &str, background_color: &str) -> bool {
        is_text_readable(text_color, background_color, self.config.text_size)
    }

    /// Generate a palette and analyze every pair of its colors
    pub fn report(&self, base_color: &str) -> PaletteReport {
        let colors = self.generate(base_color);
        let accessibility = analyze_palette_accessibility(&colors);
        let readable_pairs = accessibility.iter().filter(|r| r.is_readable).count();

        tracing::debug!(
            base_color,
            scheme = %self.config.scheme,
            colors = colors.len(),
            readable_pairs,
            "palette report generated"
        );

        PaletteReport {
            scheme: self.config.scheme,
            colors,
            accessibility,
            readable_pairs,
        }
    }
}
