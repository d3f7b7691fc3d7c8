//! Tracing/logging setup shared by HBnB binaries.

/// Environment-driven settings.
pub mod config;

/// Tracing subscriber installation (filters, formats).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&ObservabilityConfig::from_env());
}
