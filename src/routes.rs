//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorturls`             - Create a short link
//! - `GET  /shorturls/{shortcode}` - Statistics
//! - `GET  /health`                - Health check
//! - `GET  /{shortcode}`           - Redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response spans
//! - **Request log** - Request/response records sent to the log sink
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{request_log, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware, without path normalization.
pub fn router(state: AppState) -> Router {
    api::routes::public_routes()
        .layer(middleware::from_fn_with_state(
            state.clone(),
            request_log::layer,
        ))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service.
///
/// Trailing slashes are trimmed before routing, so `/shorturls/abc123/`
/// reaches the statistics handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
