//! HTTP API route definitions.

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{about, health, home};
use crate::metrics::track_requests;

/// Create the API router.
///
/// Any path other than the three below gets the router's default 404.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/about", get(about))
        .route_layer(middleware::from_fn(track_requests))
        .layer(TraceLayer::new_for_http())
}
