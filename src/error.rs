//! Error types for the huewheel application layer.

use huewheel_ui::ColorError;
use thiserror::Error;

/// Errors that can occur while loading settings or producing output.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// A color string could not be parsed
    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// Configuration values the picker cannot run with
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem
        message: String,
    },

    /// A text field holds something that is not a color
    #[error("Invalid {field} value: '{input}'")]
    InvalidInput {
        /// Which field was edited
        field: &'static str,
        /// The rejected text
        input: String,
    },

    /// Unrecognized command-line usage
    #[error("Usage: {0}")]
    Usage(String),
}

impl AppError {
    /// Create an invalid configuration error with a message.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid input error for a text field.
    pub fn invalid_input(field: &'static str, input: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            input: input.into(),
        }
    }
}
