//! Error types for core module
//!
//! Covers configuration loading: reading and parsing the settings file and
//! interpreting environment overrides.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// An explicitly requested settings file does not exist
    #[error("Settings file not found: {}", path.display())]
    SettingsNotFound { path: PathBuf },

    /// An environment variable holds a value that cannot be used
    #[error("Invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },

    /// The settings file holds a value that cannot be used
    #[error("Invalid setting {key}: {value:?}")]
    InvalidSetting { key: &'static str, value: String },

    /// The log filter directive could not be parsed
    #[error("Invalid log filter {filter:?}: {message}")]
    LogFilter { filter: String, message: String },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
