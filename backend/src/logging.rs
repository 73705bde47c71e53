//! Tracing subscriber setup.
//!
//! - development: full human-readable output with colours
//! - testing: compact, no colours
//! - production: JSON lines
//!
//! `RUST_LOG` takes precedence over `LOG_LEVEL` when set.

use tracing_subscriber::EnvFilter;

use crate::config::{Environment, LoggingConfig};
use crate::error::{ServerError, ServerResult};

/// Install the global subscriber
pub fn init(config: &LoggingConfig) -> ServerResult<()> {
    let filter = env_filter(config);

    let result = match config.environment {
        Environment::Development => tracing::subscriber::set_global_default(
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(true)
                .with_file(config.debug_mode)
                .with_line_number(config.debug_mode)
                .finish(),
        ),
        Environment::Testing => tracing::subscriber::set_global_default(
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .compact()
                .finish(),
        ),
        Environment::Production => tracing::subscriber::set_global_default(
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .json()
                .finish(),
        ),
    };
    result.map_err(|e| ServerError::Logging(e.to_string()))?;

    tracing::info!(
        level = config.level.as_filter(),
        environment = %config.environment,
        debug_mode = config.debug_mode,
        "Logging initialized"
    );
    Ok(())
}

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.as_filter()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_filter_follows_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggingConfig::new(LogLevel::Warning, Environment::Testing);
        assert_eq!(env_filter(&config).max_level_hint(), Some(LevelFilter::WARN));

        let config = LoggingConfig::new(LogLevel::Critical, Environment::Production);
        assert_eq!(env_filter(&config).max_level_hint(), Some(LevelFilter::ERROR));
    }
}
