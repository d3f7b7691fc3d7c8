use core::str::FromStr;

/// Env var holding the tracing filter directives.
pub const FILTER_ENV: &str = "RUST_LOG";

/// Env var selecting the log output format (`json` or `pretty`).
pub const FORMAT_ENV: &str = "HBNB_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
    /// Raw `HBNB_LOG_FORMAT` value when it could not be parsed.
    pub unrecognized_format: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            unrecognized_format: None,
        }
    }
}

impl ObservabilityConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup` (injectable for tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let filter = lookup(FILTER_ENV)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let (format, unrecognized_format) = match lookup(FORMAT_ENV) {
            None => (LogFormat::default(), None),
            Some(raw) => match raw.parse() {
                Ok(format) => (format, None),
                Err(_) => (LogFormat::default(), Some(raw)),
            },
        };

        Self {
            filter,
            format,
            unrecognized_format,
        }
    }
}
