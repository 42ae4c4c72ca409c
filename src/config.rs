//! Configuration file support for huewheel.
//!
//! Settings are stored as versioned JSON. Missing fields fall back to their
//! defaults so older files keep loading.

use huewheel_ui::constants::{DEFAULT_WHEEL_SIZE, MIN_WHEEL_SIZE};
use huewheel_ui::{Hsv, hex_to_rgb};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
pub const CONFIG_VERSION: u32 = 1;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// User preferences
    #[serde(default)]
    pub preferences: UserPreferences,
}

/// User preferences section of the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Requested wheel diameter in pixels
    #[serde(default = "default_wheel_size")]
    pub wheel_size: f32,

    /// Width available to the picker; the wheel never exceeds it
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f32,

    /// Color the picker starts at, as `#rrggbb` or `#rgb`
    #[serde(default = "default_initial_color")]
    pub initial_color: String,

    /// Starting brightness (0-100). Overrides the brightness of
    /// `initial_color` when set.
    #[serde(default)]
    pub brightness: Option<f32>,
}

fn default_wheel_size() -> f32 {
    DEFAULT_WHEEL_SIZE
}

fn default_viewport_width() -> f32 {
    1024.0
}

fn default_initial_color() -> String {
    "#ffffff".to_string()
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            wheel_size: default_wheel_size(),
            viewport_width: default_viewport_width(),
            initial_color: default_initial_color(),
            brightness: None,
        }
    }
}

impl UserPreferences {
    /// Starting color of the picker.
    pub fn initial_hsv(&self) -> Result<Hsv, AppError> {
        let hsv = hex_to_rgb(&self.initial_color)?.to_hsv();
        Ok(match self.brightness {
            Some(v) => hsv.with_value(v),
            None => hsv,
        })
    }
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            preferences: UserPreferences::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize and validate configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the picker cannot run with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.version > CONFIG_VERSION {
            return Err(AppError::VersionTooNew {
                file_version: self.version,
                supported_version: CONFIG_VERSION,
            });
        }

        let prefs = &self.preferences;
        if !prefs.wheel_size.is_finite() || prefs.wheel_size < MIN_WHEEL_SIZE {
            return Err(AppError::invalid_config(format!(
                "wheel_size must be at least {MIN_WHEEL_SIZE}, got {}",
                prefs.wheel_size
            )));
        }
        if !prefs.viewport_width.is_finite() || prefs.viewport_width <= 0.0 {
            return Err(AppError::invalid_config(format!(
                "viewport_width must be positive, got {}",
                prefs.viewport_width
            )));
        }
        if let Some(v) = prefs.brightness {
            if !(0.0..=100.0).contains(&v) {
                return Err(AppError::invalid_config(format!(
                    "brightness must be within 0-100, got {v}"
                )));
            }
        }
        prefs.initial_hsv()?;
        Ok(())
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "huewheel-config.json"
    }

    /// Get the default config file path.
    pub fn default_path() -> Option<std::path::PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("huewheel").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("huewheel")
                    .join(Self::default_filename())
            })
        }
    }

    /// Load configuration from a file.
    pub fn load(path: &std::path::Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load configuration from `path` if the file exists.
    /// A file that exists but can't be used is an error.
    pub fn load_if_exists(path: &std::path::Path) -> Result<Option<Self>, AppError> {
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Load configuration from the default path, if there is one.
    pub fn load_from_default_path() -> Result<Option<Self>, AppError> {
        match Self::default_path() {
            Some(path) => Self::load_if_exists(&path),
            None => Ok(None),
        }
    }

    /// Save configuration to a file, creating parent directories.
    pub fn save(&self, path: &std::path::Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_preferences_use_defaults() {
        let config = AppConfig::from_json(r#"{ "version": 1 }"#).unwrap();
        assert_eq!(config, AppConfig::new());
        assert_eq!(config.preferences.wheel_size, DEFAULT_WHEEL_SIZE);
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = AppConfig::new();
        config.preferences.log_level = LogLevel::Debug;
        config.preferences.initial_color = "#0f0".to_string();
        config.preferences.brightness = Some(40.0);
        let json = config.to_json().unwrap();
        assert!(json.contains("\"log_level\": \"debug\""));
        assert_eq!(AppConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_newer_version() {
        let err = AppConfig::from_json(r#"{ "version": 99 }"#).unwrap_err();
        assert!(matches!(
            err,
            AppError::VersionTooNew {
                file_version: 99,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_bad_values() {
        for prefs in [
            r#"{ "wheel_size": 0 }"#,
            r#"{ "viewport_width": -5 }"#,
            r#"{ "brightness": 120 }"#,
            r#"{ "initial_color": "teal" }"#,
        ] {
            let json = format!(r#"{{ "version": 1, "preferences": {prefs} }}"#);
            assert!(AppConfig::from_json(&json).is_err(), "{prefs}");
        }
    }

    #[test]
    fn test_bad_color_is_a_color_error() {
        let json = r##"{ "version": 1, "preferences": { "initial_color": "#12" } }"##;
        assert!(matches!(
            AppConfig::from_json(json),
            Err(AppError::Color(_))
        ));
    }

    #[test]
    fn test_initial_hsv_applies_brightness_override() {
        let prefs = UserPreferences {
            initial_color: "#ff0000".to_string(),
            brightness: Some(25.0),
            ..UserPreferences::default()
        };
        let hsv = prefs.initial_hsv().unwrap();
        assert_eq!(hsv.h, 0.0);
        assert_eq!(hsv.s, 100.0);
        assert_eq!(hsv.v, 25.0);
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("huewheel-config-{}", std::process::id()));
        let path = dir.join("nested").join(AppConfig::default_filename());
        let config = AppConfig::new();
        config.save(&path).unwrap();
        assert_eq!(AppConfig::load(&path).unwrap(), config);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_if_exists_reports_bad_files() {
        let dir = std::env::temp_dir().join(format!("huewheel-bad-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let missing = dir.join("missing.json");
        assert_eq!(AppConfig::load_if_exists(&missing).unwrap(), None);

        let broken = dir.join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(
            AppConfig::load_if_exists(&broken),
            Err(AppError::Json(_))
        ));

        let invalid = dir.join("invalid.json");
        std::fs::write(&invalid, r#"{ "version": 1, "preferences": { "wheel_size": 0 } }"#)
            .unwrap();
        assert!(matches!(
            AppConfig::load_if_exists(&invalid),
            Err(AppError::InvalidConfig { .. })
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }
}
