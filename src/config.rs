//! Configuration for palette generation.
//!
//! Holds the choices a user makes around a base color: which scheme to
//! apply, how many colors to produce, and the parameters of analogous
//! palettes, gradients and readability checks.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use swatchbook::GeneratorConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = GeneratorConfig::from_json_file(Path::new("palette.json"))?;
//!
//! // Or use defaults
//! let config = GeneratorConfig::default();
//! # Ok::<(), swatchbook::PaletteError>(())
//! ```
//!
//! Fields missing from the file take their default values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::accessibility::TextSize;
use crate::constants::defaults;
use crate::generation::SchemeKind;
use crate::{PaletteError, Result};

/// Palette generation settings.
///
/// Can be serialized to/from JSON so a palette can be regenerated later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Color-theory scheme applied to the base color
    pub scheme: SchemeKind,

    /// Requested number of colors
    pub count: usize,

    /// Hue distance between neighbours in analogous palettes (degrees)
    pub analogous_spread: f64,

    /// Number of points in a two-color gradient
    pub gradient_steps: usize,

    /// Text size assumed by readability checks
    pub text_size: TextSize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            scheme: SchemeKind::default(),
            count: defaults::PALETTE_SIZE,
            analogous_spread: defaults::ANALOGOUS_SPREAD,
            gradient_steps: defaults::GRADIENT_STEPS,
            text_size: TextSize::default(),
        }
    }
}

impl GeneratorConfig {
    /// Check that all parameters are usable
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(PaletteError::InvalidParameter {
                parameter: "count".to_string(),
                value: self.count.to_string(),
            });
        }

        if !self.analogous_spread.is_finite() {
            return Err(PaletteError::InvalidParameter {
                parameter: "analogous_spread".to_string(),
                value: self.analogous_spread.to_string(),
            });
        }

        Ok(())
    }

    /// Load and validate configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PaletteError::config(format!("Failed to read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            PaletteError::config(format!("Failed to parse {}", path.display()), e)
        })?;
        config.validate()?;

        tracing::debug!(path = %path.display(), scheme = %config.scheme, "configuration loaded");
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PaletteError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            PaletteError::config(format!("Failed to write {}", path.display()), e)
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.scheme, SchemeKind::Analogous);
        assert_eq!(config.count, 5);
        assert_eq!(config.analogous_spread, 30.0);
        assert_eq!(config.gradient_steps, 5);
        assert_eq!(config.text_size, TextSize::Normal);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"scheme": "splitComplementary", "count": 7}"#).unwrap();
        assert_eq!(config.scheme, SchemeKind::SplitComplementary);
        assert_eq!(config.count, 7);
        assert_eq!(config.analogous_spread, 30.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = GeneratorConfig {
            count: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PaletteError::InvalidParameter { ref parameter, .. }) if parameter == "count"
        ));

        let config = GeneratorConfig {
            analogous_spread: f64::NAN,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_any_finite_spread() {
        for spread in [-30.0, 0.0, 400.0] {
            let config = GeneratorConfig {
                analogous_spread: spread,
                ..GeneratorConfig::default()
            };
            assert!(config.validate().is_ok(), "spread {}", spread);
        }
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palette.json");

        let config = GeneratorConfig {
            scheme: SchemeKind::Square,
            count: 8,
            text_size: TextSize::Large,
            ..GeneratorConfig::default()
        };
        config.to_json_file(&path).unwrap();

        let loaded = GeneratorConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let err = GeneratorConfig::from_json_file(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, PaletteError::ConfigError { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(GeneratorConfig::from_json_file(&path).is_err());
    }
}
