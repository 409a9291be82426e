//! Logging setup
//!
//! Installs a `tracing-subscriber` fmt subscriber. Filter precedence:
//! `RUST_LOG`, then the configured filter directive, then the level picked by
//! the `-v` count on the command line.

use super::error::{CoreError, CoreResult};
use tracing_subscriber::EnvFilter;

/// Default directive for a given `-v` count
pub fn verbosity_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn,gptchess=info",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the filter without installing anything
pub fn build_filter(configured: Option<&str>, verbosity: u8) -> CoreResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let directive = configured.unwrap_or_else(|| verbosity_directive(verbosity));
    EnvFilter::try_new(directive).map_err(|e| CoreError::LogFilter {
        filter: directive.to_string(),
        message: e.to_string(),
    })
}

/// Install the global subscriber. Logs go to stderr so they do not interleave
/// with the board drawn on stdout.
pub fn init_logging(configured: Option<&str>, verbosity: u8) -> CoreResult<()> {
    let filter = build_filter(configured, verbosity)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CoreError::LogFilter {
            filter: "global subscriber".to_string(),
            message: e.to_string(),
        })
}
