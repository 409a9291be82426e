//! Runtime configuration
//!
//! [`Settings`] is resolved in layers, each overriding the one before:
//!
//! 1. Built-in defaults
//! 2. `settings.json` in the user's configuration directory (or `--config`)
//! 3. Environment variables (a `.env` file is loaded first by the binary)
//! 4. Command-line flags
//!
//! # Error Handling
//!
//! A missing or unreadable settings file at the default location is not an
//! error: the defaults are used and the failure is handed back in
//! [`LoadedSettings::fallback`], so the binary can report it once logging is
//! up. A file passed explicitly with `--config` must exist and parse.
//!
//! A request timeout of zero seconds is rejected in every layer.

use super::error::{CoreError, CoreResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_MODEL: &str = "GPTCHESS_MODEL";
pub const ENV_ENDPOINT: &str = "GPTCHESS_ENDPOINT";
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_TIMEOUT_SECS: &str = "GPTCHESS_TIMEOUT_SECS";

/// Everything the game needs to reach the external mover
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Model identifier sent with every request
    pub model: String,

    /// Chat-completions URL: the provider itself, or the relay endpoint
    pub endpoint: String,

    /// Bearer key sent to `endpoint`. Leave unset when talking to the relay,
    /// which holds its own key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Upper bound on one external move round-trip
    pub request_timeout_secs: u64,

    /// `tracing` filter directive used when `RUST_LOG` is not set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_filter: None,
        }
    }
}

/// Values taken from the command line; `None` leaves the setting alone
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub log_filter: Option<String>,
}

/// Result of [`Settings::load`]
#[derive(Debug)]
#[must_use]
pub struct LoadedSettings {
    pub settings: Settings,

    /// Set when the default settings file existed but could not be used
    pub fallback: Option<SettingsFallback>,
}

/// A settings file that was skipped in favour of the defaults
#[derive(Debug)]
pub struct SettingsFallback {
    pub path: PathBuf,
    pub error: CoreError,
}

impl SettingsFallback {
    pub fn report(&self) {
        warn!(
            "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
            self.path, self.error
        );
    }
}

fn parse_timeout_secs(raw: &str) -> Option<u64> {
    raw.trim().parse().ok().filter(|secs| *secs > 0)
}

/// Resolve the default settings file path
///
/// Returns `settings.json` in the user's configuration directory, e.g.
/// `~/.config/gptchess/settings.json`. Falls back to a local `settings.json`
/// if the system config dir cannot be found.
pub fn default_settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "gptchess", "gptchess") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Load all layers except the command line
    ///
    /// `explicit_path` is the `--config` argument, if any.
    pub fn load(explicit_path: Option<&Path>) -> CoreResult<LoadedSettings> {
        let mut loaded = match explicit_path {
            Some(path) => LoadedSettings {
                settings: Self::from_file(path)?,
                fallback: None,
            },
            None => Self::load_or_default(&default_settings_path()),
        };
        loaded.settings.apply_env(|key| std::env::var(key).ok())?;
        Ok(loaded)
    }

    /// Read a settings file that must exist
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::SettingsNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&contents)?;
        if settings.request_timeout_secs == 0 {
            return Err(CoreError::InvalidSetting {
                key: "request_timeout_secs",
                value: settings.request_timeout_secs.to_string(),
            });
        }
        info!("[SETTINGS] Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Read an optional settings file, using the defaults when it is absent
    /// or broken
    pub fn load_or_default(path: &Path) -> LoadedSettings {
        if !path.exists() {
            info!(
                "[SETTINGS] No settings file found at {:?}. Using defaults.",
                path
            );
            return LoadedSettings {
                settings: Self::default(),
                fallback: None,
            };
        }

        match Self::from_file(path) {
            Ok(settings) => LoadedSettings {
                settings,
                fallback: None,
            },
            Err(error) => LoadedSettings {
                settings: Self::default(),
                fallback: Some(SettingsFallback {
                    path: path.to_path_buf(),
                    error,
                }),
            },
        }
    }

    /// Apply environment overrides read through `lookup`
    ///
    /// Empty values are treated as unset.
    pub fn apply_env<F>(&mut self, lookup: F) -> CoreResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(model) = get(ENV_MODEL) {
            self.model = model;
        }
        if let Some(endpoint) = get(ENV_ENDPOINT) {
            self.endpoint = endpoint;
        }
        if let Some(key) = get(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            self.request_timeout_secs = parse_timeout_secs(&raw).ok_or_else(|| CoreError::InvalidEnv {
                key: ENV_TIMEOUT_SECS,
                value: raw.clone(),
            })?;
        }
        Ok(())
    }

    /// Apply command-line overrides
    ///
    /// A zero timeout is left out, the binary's argument parser refuses it.
    #[must_use]
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(model) = overrides.model {
            self.model = model;
        }
        if let Some(endpoint) = overrides.endpoint {
            self.endpoint = endpoint;
        }
        if let Some(secs) = overrides.request_timeout_secs.filter(|secs| *secs > 0) {
            self.request_timeout_secs = secs;
        }
        if let Some(filter) = overrides.log_filter {
            self.log_filter = Some(filter);
        }
        self
    }
}
