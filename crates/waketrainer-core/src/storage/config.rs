//! TOML-based application configuration.
//!
//! Stores user settings including:
//! - The wake-time endpoints and daily step size
//! - The journey start date
//! - Alarm preferences (sound, snooze)
//!
//! Configuration is stored at `~/.config/waketrainer/config.toml`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::ConfigError;
use crate::journey::Journey;
use crate::schedule::{WakeSchedule, DEFAULT_STEP_MINUTES};
use crate::time::TimeOfDay;

/// Wake-time settings. The endpoints of the journey live here; the schedule
/// is derived fresh from them on every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WakeConfig {
    #[serde(default = "default_current_wake")]
    pub current: TimeOfDay,
    #[serde(default = "default_target_wake")]
    pub target: TimeOfDay,
    #[serde(default = "default_step_minutes")]
    pub step_minutes: u16,
}

/// Journey tracking state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JourneyConfig {
    /// Date the journey began. Unset until `journey start`.
    #[serde(default)]
    pub started_on: Option<NaiveDate>,
}

/// Alarm preferences. Delivery is handled by the platform; only the
/// user-owned settings live here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlarmConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_sound")]
    pub sound: String,
    #[serde(default = "default_snooze_minutes")]
    pub snooze_minutes: u16,
    #[serde(default = "default_snooze_limit")]
    pub snooze_limit: u16,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/waketrainer/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub wake: WakeConfig,
    #[serde(default)]
    pub journey: JourneyConfig,
    #[serde(default)]
    pub alarm: AlarmConfig,
}

// Default functions
fn default_current_wake() -> TimeOfDay {
    TimeOfDay::from_minutes(8 * 60)
}
fn default_target_wake() -> TimeOfDay {
    TimeOfDay::from_minutes(6 * 60)
}
fn default_step_minutes() -> u16 {
    DEFAULT_STEP_MINUTES
}
fn default_true() -> bool {
    true
}
fn default_sound() -> String {
    "sunrise".into()
}
fn default_snooze_minutes() -> u16 {
    9
}
fn default_snooze_limit() -> u16 {
    3
}

impl Default for WakeConfig {
    fn default() -> Self {
        Self {
            current: default_current_wake(),
            target: default_target_wake(),
            step_minutes: default_step_minutes(),
        }
    }
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sound: default_sound(),
            snooze_minutes: default_snooze_minutes(),
            snooze_limit: default_snooze_limit(),
        }
    }
}

impl Config {
    fn json_get<'a>(root: &'a serde_json::Value, key: &str) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }
        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn json_set(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let (parent_path, leaf) = match key.rsplit_once('.') {
            Some((parent, leaf)) => (Some(parent), leaf),
            None => (None, key),
        };
        let mut parent = &mut *root;
        if let Some(path) = parent_path {
            for part in path.split('.') {
                parent = parent.get_mut(part).ok_or_else(unknown)?;
            }
        }

        let obj = parent.as_object_mut().ok_or_else(unknown)?;
        let existing = obj.get(leaf).ok_or_else(unknown)?;
        let new_value = match existing {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(
                value
                    .parse::<bool>()
                    .map_err(|_| invalid(format!("expected a boolean, got '{value}'")))?,
            ),
            serde_json::Value::Number(_) => {
                if let Ok(n) = value.parse::<u64>() {
                    serde_json::Value::Number(n.into())
                } else if let Ok(n) = value.parse::<f64>() {
                    serde_json::Number::from_f64(n)
                        .map(serde_json::Value::Number)
                        .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?
                } else {
                    return Err(invalid(format!("cannot parse '{value}' as number")));
                }
            }
            serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
            }
            _ => serde_json::Value::String(value.into()),
        };

        obj.insert(leaf.to_string(), new_value);
        Ok(())
    }

    /// Path of the config file.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing the default config if none exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing the default config if the file
    /// does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::json_get(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key. The new value is parsed
    /// against the type of the existing one, and the whole config is
    /// re-validated, so an unparseable wake time is rejected here rather
    /// than surfacing on the next load.
    ///
    /// Does not persist; call [`Config::save`] afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let to_invalid = |e: serde_json::Error| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        };
        let mut json = serde_json::to_value(&*self).map_err(to_invalid)?;
        Self::json_set(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(to_invalid)?;
        Ok(())
    }

    /// The wake schedule derived from the `[wake]` section.
    pub fn schedule(&self) -> WakeSchedule {
        WakeSchedule::with_step(self.wake.current, self.wake.target, self.wake.step_minutes)
            .unwrap_or_else(|_| WakeSchedule::new(self.wake.current, self.wake.target))
    }

    /// The journey, if a start date has been recorded.
    pub fn journey(&self) -> Option<Journey> {
        self.journey
            .started_on
            .map(|started_on| Journey::new(self.schedule(), started_on))
    }
}
