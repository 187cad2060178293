//! HTTP request/response tracing middleware.

use axum::{
    body::Body,
    http::{Request, header},
};
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

type MakeSpan = fn(&Request<Body>) -> Span;

/// Creates a tracing middleware for HTTP requests.
///
/// **On Request:** opens an `INFO` span with the method, path and referer
/// (`direct` when the header is missing).
///
/// **On Response:** logs status and latency in milliseconds at `INFO`.
///
/// **On Failure:** 5xx responses are additionally logged at `ERROR`.
///
/// # Example Logs
///
/// ```text
/// INFO http{method=GET path=/abc123 referer=direct}: finished processing request latency=0 ms status=302
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeSpan> {
    TraceLayer::new_for_http()
        .make_span_with(make_span as MakeSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn make_span(req: &Request<Body>) -> Span {
    let referer = req
        .headers()
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("direct");

    tracing::info_span!(
        "http",
        method = %req.method(),
        path = %req.uri().path(),
        referer = %referer,
    )
}
