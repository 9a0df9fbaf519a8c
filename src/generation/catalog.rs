//! Scheme catalog and name-based dispatch
//!
//! Scheme names are parsed once into [`SchemeKind`] at the boundary; the
//! rest of the crate matches on the enum.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use super::mood::Mood;
use super::schemes;
use crate::constants::defaults;
use crate::{PaletteError, Result};

/// Color-theory palette scheme
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
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SchemeKind {
    Monochromatic,
    #[default]
    Analogous,
    Complementary,
    Triadic,
    Tetradic,
    SplitComplementary,
    Square,
}

/// Descriptive metadata for one scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteTypeInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub use_cases: &'static [&'static str],
    pub icon: &'static str,
}

impl SchemeKind {
    /// Look up a scheme by name, falling back to analogous
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::debug!(name, "unknown palette type, using analogous");
            SchemeKind::Analogous
        })
    }

    /// Look up a scheme by name, reporting unknown names
    pub fn try_from_name(name: &str) -> Result<Self> {
        name.parse().map_err(|_| PaletteError::UnknownScheme {
            name: name.to_string(),
        })
    }

    /// Catalog name, e.g. "splitComplementary"
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Generate a palette of this scheme from `base_color`
    ///
    /// Analogous palettes use the default 30° spread.
    pub fn generate(self, base_color: &str, count: usize) -> Vec<String> {
        match self {
            SchemeKind::Monochromatic => schemes::monochromatic_palette(base_color, count),
            SchemeKind::Analogous => {
                schemes::analogous_palette(base_color, count, defaults::ANALOGOUS_SPREAD)
            }
            SchemeKind::Complementary => schemes::complementary_palette(base_color, count),
            SchemeKind::Triadic => schemes::triadic_palette(base_color, count),
            SchemeKind::Tetradic => schemes::tetradic_palette(base_color, count),
            SchemeKind::SplitComplementary => {
                schemes::split_complementary_palette(base_color, count)
            }
            SchemeKind::Square => schemes::square_palette(base_color, count),
        }
    }

    pub fn info(self) -> PaletteTypeInfo {
        match self {
            SchemeKind::Monochromatic => PaletteTypeInfo {
                name: "Monochromatic",
                description: "Shades of a single color",
                use_cases: &["minimalism", "branding", "corporate style"],
                icon: "🎨",
            },
            SchemeKind::Analogous => PaletteTypeInfo {
                name: "Analogous",
                description: "Neighboring colors on the color wheel",
                use_cases: &["websites", "interfaces", "nature themes"],
                icon: "🌈",
            },
            SchemeKind::Complementary => PaletteTypeInfo {
                name: "Complementary",
                description: "Opposite colors",
                use_cases: &["accents", "call-to-action buttons", "highlighting"],
                icon: "⚡",
            },
            SchemeKind::Triadic => PaletteTypeInfo {
                name: "Triadic",
                description: "Three evenly spaced colors",
                use_cases: &["games", "children's projects", "creative design"],
                icon: "🔶",
            },
            SchemeKind::Tetradic => PaletteTypeInfo {
                name: "Tetradic",
                description: "Two complementary pairs",
                use_cases: &["complex interfaces", "games", "data design"],
                icon: "🔷",
            },
            SchemeKind::SplitComplementary => PaletteTypeInfo {
                name: "Split Complementary",
                description: "Base color plus the two neighbors of its complement",
                use_cases: &["blogs", "portfolios", "educational platforms"],
                icon: "🎯",
            },
            SchemeKind::Square => PaletteTypeInfo {
                name: "Square",
                description: "Four evenly spaced colors",
                use_cases: &["data visualization", "infographics", "presentations"],
                icon: "⬛",
            },
        }
    }
}

/// Generate a palette by scheme name; unknown names produce an analogous palette
pub fn generate_palette_by_type(base_color: &str, palette_type: &str, count: usize) -> Vec<String> {
    SchemeKind::from_name(palette_type).generate(base_color, count)
}

/// Metadata for a scheme name; unknown names describe the analogous scheme
pub fn palette_type_info(palette_type: &str) -> PaletteTypeInfo {
    SchemeKind::from_name(palette_type).info()
}

/// All scheme names in catalog order
pub fn available_palette_types() -> Vec<&'static str> {
    SchemeKind::iter().map(SchemeKind::name).collect()
}

/// All mood names in catalog order
pub fn available_moods() -> Vec<&'static str> {
    Mood::iter().map(Mood::name).collect()
}
