//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::infrastructure::logging::Package;
use crate::state::AppState;

/// Redirects a shortcode to its original URL.
///
/// # Endpoint
///
/// `GET /{shortcode}`
///
/// # Request Flow
///
/// 1. Look up the shortcode, evicting it if it has expired
/// 2. Record a click with the `Referer` header (`"direct"` when absent)
/// 3. Return 302 Found with `Location` set to the original URL
///
/// Steps 1 and 2 are a single atomic store operation.
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist or is not valid UTF-8.
/// Returns 410 Gone if the shortcode has expired; it is purged from the store.
pub async fn redirect_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let Path(shortcode) = path?;
    let referer = headers.get(header::REFERER).and_then(|v| v.to_str().ok());

    match state.link_service.resolve(&shortcode, referer).await {
        Ok(original_url) => {
            state.log_sink.info(
                Package::Controller,
                &format!("Redirecting {} to {}", shortcode, original_url),
            );
            Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]).into_response())
        }
        Err(err) => {
            match &err {
                AppError::NotFound { .. } => state.log_sink.error(
                    Package::Controller,
                    &format!("Shortcode not found: {}", shortcode),
                ),
                AppError::Expired { .. } => state.log_sink.info(
                    Package::Controller,
                    &format!("Expired shortcode accessed: {}", shortcode),
                ),
                _ => state.log_sink.error(
                    Package::Controller,
                    &format!("Redirect failed for {}: {}", shortcode, err),
                ),
            }
            Err(err)
        }
    }
}
