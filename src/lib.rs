//! Wild Rydes informational HTTP service.
//!
//! Serves three fixed JSON endpoints:
//!
//! ```text
//! GET /         service banner, version and hostname
//! GET /health   unconditional "healthy" with hostname
//! GET /about    static company information
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`host`]: Hostname lookup
//! - [`api`]: HTTP handlers and router
//! - [`metrics`]: Request metrics
//! - [`server`]: Listener binding and serve loop

pub mod api;
pub mod config;
pub mod error;
pub mod host;
pub mod metrics;
pub mod server;

pub use config::Config;
pub use error::{Result, ServiceError};
