//! Native entry point: `huewheel-native [config.json] [out.png]`
//!
//! Loads the configuration, renders the picker at its starting color to a
//! PNG and prints the starting color as JSON.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use huewheel::{AppConfig, AppError, ColorConverter, LogLevel};

const DEFAULT_OUTPUT: &str = "huewheel.png";

/// Start logging before anything else runs, at the default level.
///
/// Returns whether `RUST_LOG` picked the level, in which case the config
/// file's `log_level` is ignored.
fn init_logging() -> bool {
    let from_env = std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_some();
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Trace)
        .parse_default_env()
        .init();
    if !from_env {
        log::set_max_level(LogLevel::default().to_level_filter());
    }
    from_env
}

/// An explicit path must load. A broken file at the default path is
/// reported and replaced by the defaults.
fn load_config(path: Option<&Path>) -> Result<AppConfig, AppError> {
    match path {
        Some(path) => AppConfig::load(path),
        None => match AppConfig::load_from_default_path() {
            Ok(config) => Ok(config.unwrap_or_default()),
            Err(e) => {
                log::warn!("Ignoring default config file: {}", e);
                Ok(AppConfig::default())
            }
        },
    }
}

fn run(args: &[String], level_from_env: bool) -> Result<(), AppError> {
    let (config_path, output) = match args {
        [] => (None, PathBuf::from(DEFAULT_OUTPUT)),
        [config] => (Some(PathBuf::from(config)), PathBuf::from(DEFAULT_OUTPUT)),
        [config, output] => (Some(PathBuf::from(config)), PathBuf::from(output)),
        _ => {
            return Err(AppError::Usage(
                "huewheel-native [config.json] [out.png]".to_string(),
            ));
        }
    };

    let config = load_config(config_path.as_deref())?;
    if !level_from_env {
        log::set_max_level(config.preferences.log_level.to_level_filter());
    }

    let mut page = ColorConverter::from_config(&config)?;
    let canvas = page.render();
    canvas.save(&output)?;
    log::info!(
        "Rendered {}x{} picker to {:?}",
        canvas.width(),
        canvas.height(),
        output
    );

    println!("{}", serde_json::to_string_pretty(&page.color())?);
    Ok(())
}

fn main() -> ExitCode {
    let level_from_env = init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args, level_from_env) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config_path_must_load() {
        let missing = std::env::temp_dir().join("huewheel-no-such-config.json");
        assert!(matches!(
            load_config(Some(missing.as_path())),
            Err(AppError::Io(_))
        ));
    }

    #[test]
    fn test_extra_arguments_are_a_usage_error() {
        let args = ["a", "b", "c"].map(String::from);
        assert!(matches!(run(&args, true), Err(AppError::Usage(_))));
    }
}
