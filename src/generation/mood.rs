//! Fixed palettes keyed by mood

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::color::{hex_to_hsl, Hsl};
use crate::{PaletteError, Result};

/// Mood with a hand-picked five-color palette
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mood {
    #[default]
    Calm,
    Energetic,
    Professional,
    Playful,
    Nature,
    Sunset,
    Ocean,
}

impl Mood {
    /// Look up a mood by name, falling back to calm
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::debug!(name, "unknown mood, using calm");
            Mood::Calm
        })
    }

    /// Look up a mood by name, reporting unknown names
    pub fn try_from_name(name: &str) -> Result<Self> {
        name.parse().map_err(|_| PaletteError::UnknownMood {
            name: name.to_string(),
        })
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    /// The mood's base palette
    pub fn swatches(self) -> &'static [&'static str; 5] {
        match self {
            Mood::Calm => &["#667EEA", "#5A67D8", "#4C51BF", "#434190", "#3C366B"],
            Mood::Energetic => &["#F56565", "#ED8936", "#ECC94B", "#48BB78", "#4299E1"],
            Mood::Professional => &["#1A202C", "#2D3748", "#4A5568", "#718096", "#CBD5E0"],
            Mood::Playful => &["#F687B3", "#D6BCFA", "#9AE6B4", "#FBB6CE", "#B794F4"],
            Mood::Nature => &["#38A169", "#2F855A", "#276749", "#22543D", "#1C4532"],
            Mood::Sunset => &["#F6AD55", "#FC8181", "#F687B3", "#D69E2E", "#9C4221"],
            Mood::Ocean => &["#3182CE", "#2B6CB0", "#2C5282", "#2A4365", "#1A365D"],
        }
    }

    /// `count` colors for this mood
    ///
    /// Up to five colors are a prefix of the base palette. Beyond that each
    /// extra slot `i` is derived from `swatches[i % 5]` by rotating the hue
    /// 30° per index and nudging saturation and lightness.
    pub fn palette(self, count: usize) -> Vec<String> {
        let swatches = self.swatches();
        if count <= swatches.len() {
            return swatches[..count].iter().map(|s| s.to_string()).collect();
        }

        let mut palette: Vec<String> = swatches.iter().map(|s| s.to_string()).collect();
        for i in swatches.len()..count {
            let seed = hex_to_hsl(swatches[i % swatches.len()]).unwrap_or_default();
            let s = (seed.s + if i % 2 == 0 { 15.0 } else { -15.0 }).clamp(20.0, 100.0);
            let l = (seed.l + if i % 3 == 0 { 10.0 } else { -10.0 }).clamp(30.0, 80.0);
            palette.push(Hsl::new(seed.h, s, l).rotate(30.0 * i as f64).to_hex());
        }
        palette
    }
}

/// Palette for a mood name; unknown moods use the calm palette
pub fn mood_palette(mood: &str, count: usize) -> Vec<String> {
    Mood::from_name(mood).palette(count)
}
