//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ObservabilityConfig};

/// Build the env filter, falling back to `info` when the directive is invalid.
pub fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// Logs go to stderr so stdout stays free for program output. Safe to call
/// multiple times (subsequent calls are no-ops).
pub fn init(config: &ObservabilityConfig) {
    let filter = env_filter(config);

    let installed = match config.format {
        // JSON logs + timestamps, configurable via RUST_LOG.
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok(),
    };

    if installed {
        if let Some(raw) = &config.unrecognized_format {
            ::tracing::warn!(value = %raw, "unrecognized HBNB_LOG_FORMAT; using json");
        }
    }
}
