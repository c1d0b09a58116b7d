//! Diagnostic logging for the CLI binary.
//!
//! Library crates log through the `log` facade; the subscriber installed
//! here bridges those records and writes them to stderr so stdout carries
//! only the response record.

use tracing_subscriber::EnvFilter;

use crate::CliError;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "FISHCAST_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global log subscriber.
///
/// # Errors
/// Returns [`CliError::Logging`] when a global subscriber is already set.
pub fn init_logging() -> Result<(), CliError> {
    let directives = std::env::var(LOG_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(CliError::Logging)
}

/// Parse filter directives, falling back to `warn` when they are absent or
/// invalid.
pub(crate) fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
