//! Presentation themes
//!
//! A theme is a small TOML palette for the parts of the output that do not
//! come from the layout source: the background fill, the text color drawn
//! over element fills, and the font. The defaults reproduce the classic
//! dark-blue presentation (`#003366` background, white "Segoe UI Light"
//! text at 16 px).

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing themes
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse theme TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Palette applied by renderers. Colors are CSS color strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Background fill behind all elements.
    pub background: String,
    /// Text color drawn over element fills.
    pub text: String,
    pub font_family: String,
    pub font_size: f64,
}

/// TOML structure for deserializing themes
#[derive(Deserialize)]
struct TomlTheme {
    colors: Option<TomlColors>,
    font: Option<TomlFont>,
}

#[derive(Deserialize)]
struct TomlColors {
    background: Option<String>,
    text: Option<String>,
}

#[derive(Deserialize)]
struct TomlFont {
    family: Option<String>,
    size: Option<f64>,
}

impl Theme {
    /// Load a theme from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a theme from a TOML string; absent keys keep their defaults
    pub fn from_str(content: &str) -> Result<Self, ThemeError> {
        let parsed: TomlTheme = toml::from_str(content)?;
        let defaults = Theme::default();

        Ok(Theme {
            background: parsed
                .colors
                .as_ref()
                .and_then(|colors| colors.background.clone())
                .unwrap_or(defaults.background),
            text: parsed
                .colors
                .as_ref()
                .and_then(|colors| colors.text.clone())
                .unwrap_or(defaults.text),
            font_family: parsed
                .font
                .as_ref()
                .and_then(|font| font.family.clone())
                .unwrap_or(defaults.font_family),
            font_size: parsed
                .font
                .as_ref()
                .and_then(|font| font.size)
                .unwrap_or(defaults.font_size),
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#003366".to_string(),
            text: "#ffffff".to_string(),
            font_family: "Segoe UI Light".to_string(),
            font_size: 16.0,
        }
    }
}
