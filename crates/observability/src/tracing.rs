//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log format.
pub const ENV_LOG_FORMAT: &str = "BOOKSTORE_LOG_FORMAT";

/// Output format for log lines.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable single-line output.
    Pretty,
}

impl LogFormat {
    /// `"pretty"` / `"text"` select [`LogFormat::Pretty`]; anything else is JSON.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }

    /// Format from an optional setting; unset means JSON.
    pub fn from_setting(value: Option<&str>) -> Self {
        value.map(Self::parse).unwrap_or_default()
    }

    /// Format from [`ENV_LOG_FORMAT`].
    pub fn from_env() -> Self {
        Self::from_setting(std::env::var(ENV_LOG_FORMAT).ok().as_deref())
    }
}

/// Initialize tracing for the process. Filter comes from `RUST_LOG`, default `info`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_log_format() {
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse(" TEXT "), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Json);
    }

    #[test]
    fn unset_setting_defaults_to_json() {
        assert_eq!(LogFormat::from_setting(None), LogFormat::Json);
        assert_eq!(LogFormat::from_setting(Some("pretty")), LogFormat::Pretty);
    }

    #[test]
    fn init_twice_is_harmless() {
        init(LogFormat::Pretty);
        init(LogFormat::Json);
    }
}
