//! Error types for icon configuration and rendering

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring the renderer or rendering an icon
#[derive(Debug, Error)]
pub enum IconError {
    /// The icon directory is unset, or does not exist
    #[error("{message}")]
    Configuration { message: String },

    /// An attribute name or value cannot be rendered
    #[error("invalid attribute '{attribute}': {reason}")]
    Validation { attribute: String, reason: String },

    /// No svg file exists for the requested icon
    #[error("unrecognized icon \"{}\" (svg file \"{}\" does not exist)", .icon, .path.display())]
    NotFound { icon: String, path: PathBuf },

    /// The svg file has no `<path d="..." />` element
    #[error("\"{}\" could not be recognized as an icon file", .path.display())]
    MalformedIcon { path: PathBuf },

    /// Reading an icon or config file failed
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The TOML config file could not be parsed
    #[error("failed to parse config TOML: {0}")]
    ConfigFile(#[from] toml::de::Error),
}

impl IconError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Error for a renderer with no directory and nothing auto-detected
    pub fn path_not_specified() -> Self {
        Self::configuration("icons path not specified")
    }

    /// Error for a configured directory that does not exist
    pub fn missing_directory(path: impl Into<PathBuf>) -> Self {
        Self::configuration(format!(
            "specified icons path ({}) does not exist",
            path.into().display()
        ))
    }

    /// Create a validation error for a named attribute
    pub fn validation(attribute: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            attribute: attribute.into(),
            reason: reason.into(),
        }
    }
}
