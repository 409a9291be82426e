//! Core module - configuration, logging and error types shared by the binary
//! and the game layer
//!
//! - [`config`] - Layered [`Settings`] (defaults, settings file, environment, CLI)
//! - [`logging`] - `tracing` subscriber installation
//! - [`error`] - [`CoreError`] and [`CoreResult`]

pub mod config;
pub mod error;
pub mod logging;

pub use config::{
    default_settings_path, LoadedSettings, Settings, SettingsFallback, SettingsOverrides,
};
pub use error::{CoreError, CoreResult};
pub use logging::init_logging;
