//! huewheel - color converter built on an interactive HSV wheel
//!
//! The application layer: versioned configuration, error types and the
//! converter page that keeps hex/RGB/HSL text fields in sync with the picker.

pub mod config;
pub mod converter;
pub mod error;
pub mod message;

pub use config::{AppConfig, LogLevel, UserPreferences};
pub use converter::ColorConverter;
pub use error::AppError;
pub use message::Message;
