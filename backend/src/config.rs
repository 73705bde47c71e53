//! Environment configuration.
//!
//! Settings come from process environment variables (a `.env` file is loaded
//! by the binary through `dotenvy`):
//!
//! | Variable    | Meaning                                        | Default       |
//! |-------------|------------------------------------------------|---------------|
//! | `APP_ENV`   | `development`, `testing` or `production`       | `development` |
//! | `PORT`      | Listen port                                    | `5000`        |
//! | `LOG_LEVEL` | `debug`, `info`, `warning`, `error`, `critical`| `info`        |
//! | `DYNO`      | Set by Heroku-style platforms                  | unset         |
//!
//! Loading goes through [`AppConfig::from_lookup`] so tests can supply
//! variables without touching the process environment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::error::{ConfigError, ConfigResult};

pub const DEFAULT_PORT: u16 = 5000;

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Testing,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Testing => "testing",
            Environment::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" => Ok(Environment::Development),
            "testing" => Ok(Environment::Testing),
            "production" => Ok(Environment::Production),
            _ => Err(ConfigError::InvalidEnvironment(s.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Parse `LOG_LEVEL`, falling back to `info` for anything unrecognised
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("debug") => LogLevel::Debug,
            Some("info") => LogLevel::Info,
            Some("warning") | Some("warn") => LogLevel::Warning,
            Some("error") => LogLevel::Error,
            Some("critical") => LogLevel::Critical,
            _ => LogLevel::Info,
        }
    }

    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}

/// Logging settings derived from the environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Enabled only at debug level
    pub debug_mode: bool,
    pub environment: Environment,
}

impl LoggingConfig {
    pub fn new(level: LogLevel, environment: Environment) -> Self {
        Self {
            level,
            debug_mode: level == LogLevel::Debug,
            environment,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub host: String,
    pub port: u16,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("APP_ENV") {
            Some(value) => value.parse()?,
            None => Environment::default(),
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value.clone()))?,
            None => DEFAULT_PORT,
        };

        let on_platform = lookup("DYNO").is_some_and(|v| !v.is_empty());
        let host = host_for_environment(environment, on_platform).to_string();

        let level = LogLevel::parse_or_default(lookup("LOG_LEVEL").as_deref());

        Ok(Self {
            environment,
            host,
            port,
            logging: LoggingConfig::new(level, environment),
        })
    }

    /// `host:port` suitable for `TcpListener::bind`; IPv6 hosts are bracketed
    pub fn bind_address(&self) -> String {
        match self.host.parse::<IpAddr>() {
            Ok(ip) => SocketAddr::new(ip, self.port).to_string(),
            Err(_) => format!("{}:{}", self.host, self.port),
        }
    }
}

/// Interface to bind for an environment.
///
/// Only production deployments (or a hosting platform that routes traffic
/// into the container) listen on every interface; everything else stays on
/// loopback.
pub fn host_for_environment(environment: Environment, on_platform: bool) -> &'static str {
    if on_platform || environment == Environment::Production {
        "0.0.0.0"
    } else {
        "127.0.0.1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> ConfigResult<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert!(!config.logging.debug_mode);
    }

    #[test]
    fn test_environment_parse_is_case_insensitive() {
        assert_eq!("PRODUCTION".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!("Testing".parse::<Environment>(), Ok(Environment::Testing));
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_invalid_environment_is_rejected() {
        assert_eq!(
            load(&[("APP_ENV", "invalid")]),
            Err(ConfigError::InvalidEnvironment("invalid".into()))
        );
    }

    #[test]
    fn test_host_binding() {
        assert_eq!(load(&[("APP_ENV", "development")]).unwrap().host, "127.0.0.1");
        assert_eq!(load(&[("APP_ENV", "testing")]).unwrap().host, "127.0.0.1");
        assert_eq!(load(&[("APP_ENV", "production")]).unwrap().host, "0.0.0.0");
        assert_eq!(load(&[("DYNO", "web.1")]).unwrap().host, "0.0.0.0");
        assert_eq!(load(&[("DYNO", "")]).unwrap().host, "127.0.0.1");
    }

    #[test]
    fn test_port() {
        assert_eq!(load(&[("PORT", "8080")]).unwrap().port, 8080);
        assert_eq!(
            load(&[("PORT", "http")]),
            Err(ConfigError::InvalidPort("http".into()))
        );
        assert!(load(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn test_log_level() {
        let config = load(&[("LOG_LEVEL", "DEBUG")]).unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert!(config.logging.debug_mode);

        assert_eq!(LogLevel::parse_or_default(Some("verbose")), LogLevel::Info);
        assert_eq!(LogLevel::parse_or_default(Some("critical")).as_filter(), "error");
        assert_eq!(LogLevel::parse_or_default(Some("warning")).as_filter(), "warn");
    }

    #[test]
    fn test_bind_address() {
        let config = load(&[("APP_ENV", "production"), ("PORT", "9000")]).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }

    #[test]
    fn test_bind_address_brackets_ipv6() {
        let mut config = load(&[("PORT", "5000")]).unwrap();
        config.host = "::1".to_string();
        assert_eq!(config.bind_address(), "[::1]:5000");

        config.host = "localhost".to_string();
        assert_eq!(config.bind_address(), "localhost:5000");
    }
}
