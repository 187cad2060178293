//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::infrastructure::logging::Package;
use crate::state::AppState;

/// Retrieves statistics for a shortcode.
///
/// # Endpoint
///
/// `GET /shorturls/{shortcode}`
///
/// # Response
///
/// ```json
/// {
///   "originalUrl": "https://example.com",
///   "created": "2026-01-01T12:00:00.000Z",
///   "expiry": "2026-01-01T12:30:00.000Z",
///   "totalClicks": 1,
///   "clicks": [{ "timestamp": "2026-01-01T12:05:00.000Z", "referer": "direct" }]
/// }
/// ```
///
/// Expired shortcodes keep reporting until a redirect purges them.
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist or is not valid UTF-8.
pub async fn stats_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<StatsResponse>, AppError> {
    let Path(shortcode) = path?;
    let stats = state
        .stats_service
        .get_stats(&shortcode)
        .await
        .inspect_err(|_| {
            state.log_sink.error(
                Package::Controller,
                &format!("Statistics requested for non-existent shortcode: {}", shortcode),
            );
        })?;

    state.log_sink.info(
        Package::Controller,
        &format!("Statistics retrieved for shortcode: {}", shortcode),
    );

    Ok(Json(StatsResponse::from(stats)))
}
