//! Core error types for waketrainer-core.
//!
//! The schedule arithmetic itself is total and never fails; errors only
//! arise at the edges (parsing user input, configuration IO).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for waketrainer-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to create the data directory
    #[error("Failed to create data directory {path}: {message}")]
    DataDir { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Hour or minute outside the 24-hour clock
    #[error("invalid time of day {hour:02}:{minute:02}")]
    InvalidTime { hour: u8, minute: u8 },

    /// Unparseable time-of-day string
    #[error("cannot parse '{0}' as a time of day (expected HH:MM)")]
    ParseTime(String),

    /// Zero-length daily adjustment step
    #[error("adjustment step must be at least one minute")]
    InvalidStep,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
