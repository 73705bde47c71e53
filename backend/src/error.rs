//! Error types for the retrotext service.
//!
//! - [`TransformError`] - Request-level transformation errors
//! - [`ConfigError`] - Environment configuration errors
//! - [`ServerError`] - Top-level server / CLI errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Transformation Errors
// =============================================================================

/// Errors reported back to the caller of a transformation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// The transformation name is not part of the catalog.
    #[error("Unknown transformation: {0}")]
    UnknownTransformation(String),

    /// Text or transformation name was not supplied.
    #[error("Missing text or transformation type")]
    MissingInput,

    /// `seed` was supplied but is not an unsigned 64-bit integer.
    #[error("Invalid seed: {0} (expected an unsigned integer)")]
    InvalidSeed(String),
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while reading configuration from the environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `APP_ENV` holds an unsupported value.
    #[error("Invalid environment: '{0}'. Valid values are: development, testing, production")]
    InvalidEnvironment(String),

    /// `PORT` is not a valid port number.
    #[error("Invalid port: '{0}'")]
    InvalidPort(String),
}

// =============================================================================
// Server Errors (top-level)
// =============================================================================

/// HTTP server and CLI errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Transformation error.
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    /// Socket or stdio failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for transformation operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let err: ServerError = TransformError::UnknownTransformation("pig_latin".into()).into();
        assert!(err.to_string().contains("pig_latin"));

        let err: ServerError = ConfigError::InvalidPort("abc".into()).into();
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_missing_input_message() {
        assert_eq!(
            TransformError::MissingInput.to_string(),
            "Missing text or transformation type"
        );
    }

    #[test]
    fn test_invalid_seed_names_value() {
        let msg = TransformError::InvalidSeed("-1".into()).to_string();
        assert_eq!(msg, "Invalid seed: -1 (expected an unsigned integer)");
    }

    #[test]
    fn test_invalid_environment_lists_valid_values() {
        let msg = ConfigError::InvalidEnvironment("staging".into()).to_string();
        assert!(msg.contains("staging"));
        assert!(msg.contains("production"));
    }
}
