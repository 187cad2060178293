//! HTTP server initialization and runtime setup.
//!
//! Handles store and log sink setup, state wiring, and the Axum server lifecycle.

use crate::application::services::LinkSettings;
use crate::config::Config;
use crate::domain::clock::SystemClock;
use crate::infrastructure::logging::{LogSink, Package, RemoteLogSink, TracingLogSink};
use crate::infrastructure::persistence::InMemoryUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::RandomCodeGenerator;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory URL store
/// - Remote log sink (or local tracing fallback)
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let log_sink = build_log_sink(&config);

    let state = AppState::new(
        Arc::new(InMemoryUrlRepository::new()),
        Arc::new(SystemClock),
        Arc::new(RandomCodeGenerator::new(config.shortcode_length)),
        LinkSettings {
            base_url: config.base_url.clone(),
            default_validity_minutes: config.default_validity_minutes,
        },
        log_sink.clone(),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");
    log_sink.info(Package::Config, &format!("Server running on http://{addr}"));

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Builds the configured log sink.
///
/// A remote sink that cannot be constructed degrades to local tracing output;
/// logging problems never prevent the service from starting.
fn build_log_sink(config: &Config) -> Arc<dyn LogSink> {
    let Some(url) = &config.log_sink_url else {
        tracing::info!("Remote logging disabled (TracingLogSink)");
        return Arc::new(TracingLogSink::new(config.log_stack));
    };

    match RemoteLogSink::spawn(
        url.clone(),
        config.log_stack,
        config.log_queue_capacity,
        Duration::from_secs(config.log_sink_timeout_secs),
    ) {
        Ok(sink) => {
            tracing::info!("Remote logging enabled ({})", url);
            Arc::new(sink)
        }
        Err(e) => {
            tracing::warn!("Failed to start remote log sink: {}. Using TracingLogSink.", e);
            Arc::new(TracingLogSink::new(config.log_stack))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
