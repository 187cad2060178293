//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "message": "12 links stored" },
///     "log_sink": { "status": "ok", "message": "Accepting records" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;
    let log_sink_check = check_log_sink(&state);

    let all_healthy = store_check.is_ok() && log_sink_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            store: store_check,
            log_sink: log_sink_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_store(state: &AppState) -> CheckStatus {
    match state.stats_service.count_links().await {
        Ok(count) => CheckStatus::ok(format!("{} links stored", count)),
        Err(e) => CheckStatus::error(format!("Store error: {}", e)),
    }
}

fn check_log_sink(state: &AppState) -> CheckStatus {
    if state.log_sink.is_healthy() {
        CheckStatus::ok("Accepting records")
    } else {
        CheckStatus::error("Log delivery worker stopped")
    }
}
