//! Handler for link creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::infrastructure::logging::Package;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "validity": 30,       // optional, minutes
///   "shortcode": "abc123" // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortLink": "http://localhost:3000/abc123",
///   "expiry": "2026-01-01T12:30:00.000Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed, the URL or shortcode is
/// invalid, or the shortcode is already taken.
/// Returns 500 Internal Server Error if no free shortcode could be generated.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload.inspect_err(|rejection| {
        state.log_sink.warn(
            Package::Controller,
            &format!("Rejected create request: {}", rejection.body_text()),
        );
    })?;
    payload.validate()?;

    let result = state
        .link_service
        .create_short_link(payload.url, payload.validity, payload.shortcode)
        .await;

    let record = match result {
        Ok(record) => record,
        Err(err) => {
            match &err {
                AppError::Duplicate { .. } => state
                    .log_sink
                    .error(Package::Controller, "Shortcode already exists in the store"),
                AppError::Internal { .. } => state
                    .log_sink
                    .error(Package::Controller, &format!("Unexpected error: {}", err)),
                _ => state
                    .log_sink
                    .warn(Package::Controller, &format!("Invalid create request: {}", err)),
            }
            return Err(err);
        }
    };

    state.log_sink.info(
        Package::Controller,
        &format!("Created short URL with code: {}", record.code),
    );

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_link: state.link_service.short_link(&record.code),
            expiry: record.valid_until,
        }),
    ))
}
