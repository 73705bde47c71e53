//! HTTP API module.
//!
//! This module provides the HTTP server, request logging and API types for
//! the retrotext backend.

pub mod logs;
pub mod middleware;
pub mod server;
pub mod types;

pub use logs::*;
pub use server::{router, start_server, SERVICE_NAME};
pub use types::*;
