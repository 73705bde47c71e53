//! # Retrotext - 90s internet text effects over HTTP
//!
//! Retrotext serves a fixed catalog of text transformations (alternating
//! case, l33t speak, Morse code, ROT13, zalgo, ...) through a small JSON API.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ POST JSON   │────▶│  Middleware │────▶│ Transformer │────▶│ JSON result │
//! │ text + name │     │ (req. logs) │     │  (catalog)  │     │             │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use retrotext::Transformer;
//!
//! let transformer = Transformer::new();
//! let out = transformer.transform("Hello World", "l33t_speak").unwrap();
//! assert_eq!(out, "H3110 W0r1d");
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Environment configuration
//! - [`logging`] - Tracing subscriber setup
//! - [`transform`] - Catalog and transformation engine
//! - [`api`] - HTTP API server

// Core modules
pub mod config;
pub mod error;
pub mod logging;

// Transformation
pub mod transform;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConfigError, ServerError, TransformError};

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::{AppConfig, Environment, LogLevel, LoggingConfig};

// =============================================================================
// Re-exports - Transformations
// =============================================================================

pub use transform::{transformations_description, Transformation, Transformer, TransformerConfig};

// =============================================================================
// Re-exports - Server
// =============================================================================

pub mod server {
    pub use crate::api::server::*;
}
