//! Render configuration.
//!
//! A [`RenderConfig`] bundles everything a render needs besides the bytes
//! and the base URL: the display mode, the style and where icon images come
//! from. It can be built in code or loaded from a TOML or JSON file:
//!
//! ```toml
//! display_mode = "text"
//! icon_dir = "/usr/share/gophermap/icons"
//!
//! [style]
//! margin = 24.0
//! internal_link_color = "#0056B3"
//! ```

use std::path::{Path, PathBuf};

use gophermap_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::builder::DisplayMode;
use crate::error::ConfigError;
use crate::style::DocumentStyle;

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format (`.toml`).
    Toml,
    /// JSON format (`.json`).
    Json,
}

impl ConfigFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "toml" => Some(ConfigFormat::Toml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }
}

/// Configuration for rendering gophermaps.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Icon presentation.
    pub display_mode: DisplayMode,
    /// Theme values carried into the document.
    pub style: DocumentStyle,
    /// Directory holding `<icon>.svg` files for graphical mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_dir: Option<PathBuf>,
}

impl RenderConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display mode.
    pub fn display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    /// Set the display mode from a stored setting value (`"text"` or other).
    pub fn display_setting(mut self, value: &str) -> Self {
        self.display_mode = DisplayMode::from_setting(value);
        self
    }

    /// Set the document style.
    pub fn style(mut self, style: DocumentStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the icon directory.
    pub fn icon_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.icon_dir = Some(dir.into());
        self
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a configuration file, choosing the format by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = match format {
            ConfigFormat::Toml => Self::from_toml(&content)?,
            ConfigFormat::Json => Self::from_json(&content)?,
        };

        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            mode = %config.display_mode,
            "loaded render config"
        );
        Ok(config)
    }
}
