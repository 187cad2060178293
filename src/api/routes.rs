//! API route configuration.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `POST /shorturls`             - Create a short link
/// - `GET  /shorturls/{shortcode}` - Click statistics for a short link
/// - `GET  /health`                - Health check
/// - `GET  /{shortcode}`           - Redirect to the original URL
///
/// Static segments take precedence over `/{shortcode}`, which is why
/// `shorturls` and `health` are reserved shortcodes.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorturls", post(shorten_handler))
        .route("/shorturls/{shortcode}", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/{shortcode}", get(redirect_handler))
}
