//! HTTP API handlers.
//!
//! Response fields are declared in alphabetical order so the serialized
//! JSON keys come out sorted.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::host::resolve_hostname;

/// Company name reported by `/about`.
pub const COMPANY: &str = "Wild Rydes";
/// Short service name reported by `/health`.
pub const HEALTH_SERVICE_NAME: &str = "wild-rydes";
/// Long service name reported by `/`.
pub const SERVICE_NAME: &str = "Wild Rydes Monolithic Application";
/// Application version reported by `/`.
pub const VERSION: &str = "1.0.0";
/// Status reported by `/` and `/health`.
pub const STATUS_HEALTHY: &str = "healthy";

/// Root response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeResponse {
    /// Machine hostname at request time.
    pub hostname: String,
    /// Greeting.
    pub message: &'static str,
    /// Service display name.
    pub service: &'static str,
    /// Always "healthy".
    pub status: &'static str,
    /// Application version.
    pub version: &'static str,
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    /// Machine hostname at request time.
    pub hostname: String,
    /// Service short name.
    pub service: &'static str,
    /// Always "healthy".
    pub status: &'static str,
}

/// About response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutResponse {
    pub company: &'static str,
    pub description: &'static str,
    pub technology: &'static str,
}

impl HomeResponse {
    fn new(hostname: String) -> Self {
        Self {
            hostname,
            message: "Welcome to Wild Rydes!",
            service: SERVICE_NAME,
            status: STATUS_HEALTHY,
            version: VERSION,
        }
    }
}

impl HealthResponse {
    fn new(hostname: String) -> Self {
        Self {
            hostname,
            service: HEALTH_SERVICE_NAME,
            status: STATUS_HEALTHY,
        }
    }
}

impl Default for AboutResponse {
    fn default() -> Self {
        Self {
            company: COMPANY,
            description: "The fastest way to get a ride on a unicorn",
            technology: "ECS Fargate with Python Flask",
        }
    }
}

/// Root handler - service banner with hostname.
pub async fn home() -> impl IntoResponse {
    Json(HomeResponse::new(resolve_hostname()))
}

/// Health check handler - always returns 200, no dependency probing.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::new(resolve_hostname())))
}

/// About handler - static company information.
pub async fn about() -> impl IntoResponse {
    Json(AboutResponse::default())
}
