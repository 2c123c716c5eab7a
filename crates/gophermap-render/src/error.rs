//! Error types for the render crate.
//!
//! Building a document never fails. These errors come from the surfaces
//! around it: base URL parsing, configuration files and icon assets.

use std::path::PathBuf;

use gophermap_core::GopherIcon;
use thiserror::Error;

/// Errors that can occur while setting up a render.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The base URL of the menu could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// Loading the render configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Loading an icon asset failed.
    #[error(transparent)]
    Asset(#[from] AssetError),
}

/// Errors that can occur while loading a render configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for a render configuration.
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file is not valid JSON for a render configuration.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension is neither `.toml` nor `.json`.
    #[error("unsupported config format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Errors that can occur while loading icon assets.
#[derive(Error, Debug)]
pub enum AssetError {
    /// The asset file could not be read.
    #[error("failed to read icon asset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The asset source has no image for this icon.
    #[error("no asset for icon '{0}'")]
    Missing(GopherIcon),
}

/// Result type for render setup operations.
pub type RenderResult<T> = Result<T, RenderError>;
