//! Error types for the swatchbook library

use thiserror::Error;

/// Result type alias for swatchbook operations
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Error types for the strict entry points of the library.
///
/// The lenient color helpers never return these; they fall back to a
/// documented default instead.
#[derive(Error, Debug)]
pub enum PaletteError {
    /// Input is not a 6-digit hex color
    #[error("Invalid hex color: {input:?} (expected 6 hex digits with optional '#')")]
    InvalidHex { input: String },

    /// Palette scheme name is not in the catalog
    #[error("Unknown palette scheme: {name}")]
    UnknownScheme { name: String },

    /// Mood name is not in the catalog
    #[error("Unknown mood: {name}")]
    UnknownMood { name: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be read, parsed or written
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PaletteError {
    /// Create an invalid hex error for the given input
    pub fn invalid_hex(input: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// Unknown names are recoverable because the lenient API redirects them
    /// to a default scheme or mood.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PaletteError::UnknownScheme { .. } | PaletteError::UnknownMood { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            PaletteError::InvalidHex { input } => {
                format!("\"{}\" is not a valid color. Use six hex digits, for example #3366CC.", input)
            }
            PaletteError::UnknownScheme { name } => {
                format!("Palette type \"{}\" is not available. The analogous palette will be used.", name)
            }
            PaletteError::UnknownMood { name } => {
                format!("Mood \"{}\" is not available. The calm palette will be used.", name)
            }
            PaletteError::InvalidParameter { parameter, .. } => {
                format!("The value for {} is out of range.", parameter)
            }
            PaletteError::ConfigError { .. } => {
                "Could not load the settings file. Please check that it is valid JSON.".to_string()
            }
        }
    }
}
