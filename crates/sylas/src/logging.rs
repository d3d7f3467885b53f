//! Tracing subscriber setup

use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Builds the filter: `RUST_LOG` when set and valid, else the configured
/// directives, else `info`
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    build_filter(from_env.as_deref(), &config.filter)
}

fn build_filter(from_env: Option<&str>, configured: &str) -> EnvFilter {
    if let Some(directives) = from_env {
        match EnvFilter::try_new(directives) {
            Ok(filter) => return filter,
            Err(err) => eprintln!("ignoring invalid {}={:?}: {}", EnvFilter::DEFAULT_ENV, directives, err),
        }
    }

    EnvFilter::try_new(configured).unwrap_or_else(|err| {
        eprintln!("invalid log filter {:?}: {}", configured, err);
        EnvFilter::new("info")
    })
}

/// Installs the global subscriber
///
/// Returns `false` when a global subscriber was already installed; the
/// existing one stays in place.
pub fn init(config: &LoggingConfig) -> bool {
    let filter = env_filter(config);
    let registry = tracing_subscriber::registry();

    let installed = match config.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .with(filter)
            .try_init(),
        LogFormat::Default => registry
            .with(tracing_subscriber::fmt::layer())
            .with(filter)
            .try_init(),
        LogFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().compact())
            .with(filter)
            .try_init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .with(filter)
            .try_init(),
    };

    installed.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_noop() {
        let config = LoggingConfig {
            format: LogFormat::Compact,
            filter: "debug".to_string(),
        };
        // another test binary thread may have won the race; only the second call is certain
        let _ = init(&config);
        assert!(!init(&config));
    }

    #[test]
    fn test_configured_filter_used_without_env() {
        assert_eq!(build_filter(None, "sylas=debug").to_string(), "sylas=debug");
    }

    #[test]
    fn test_env_overrides_configured_filter() {
        assert_eq!(build_filter(Some("warn"), "sylas=debug").to_string(), "warn");
    }

    #[test]
    fn test_invalid_filters_fall_back() {
        assert_eq!(build_filter(Some("sylas=loud"), "debug").to_string(), "debug");
        assert_eq!(build_filter(None, "sylas=loud").to_string(), "info");
        assert_eq!(build_filter(Some("sylas=loud"), "sylas=loud").to_string(), "info");
    }
}
