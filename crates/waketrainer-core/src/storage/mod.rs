mod config;

pub use config::{AlarmConfig, Config, JourneyConfig, WakeConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/waketrainer[-dev]/` based on WAKETRAINER_ENV.
///
/// Set WAKETRAINER_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("WAKETRAINER_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("waketrainer-dev")
    } else {
        base_dir.join("waketrainer")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DataDir {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
