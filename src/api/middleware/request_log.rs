//! Request logging middleware feeding the application log sink.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::infrastructure::logging::Package;
use crate::state::AppState;

/// Reports every request and its outcome to the log sink.
///
/// # Example Records
///
/// ```text
/// info middleware: Incoming GET request to /abc123
/// info middleware: Request completed in 0ms with status 302
/// ```
///
/// Records are fire-and-forget; a slow or failing collector never delays
/// the response.
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/{shortcode}", get(redirect_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), request_log::layer));
/// ```
pub async fn layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let start = Instant::now();

    state.log_sink.info(
        Package::Middleware,
        &format!("Incoming {} request to {}", req.method(), req.uri().path()),
    );

    let response = next.run(req).await;

    state.log_sink.info(
        Package::Middleware,
        &format!(
            "Request completed in {}ms with status {}",
            start.elapsed().as_millis(),
            response.status().as_u16()
        ),
    );

    response
}
