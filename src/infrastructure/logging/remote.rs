//! Log sink that ships records to a remote HTTP collector.

use std::time::Duration;

use chrono::Utc;
use reqwest::{Client, StatusCode};
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, warn};

use super::entry::{Level, LogEntry, Package, Stack};
use super::sink::LogSink;

/// Retries after the first failed delivery attempt.
const MAX_RETRIES: usize = 3;
const RETRY_BASE_MILLIS: u64 = 10;
const RETRY_MAX_DELAY: Duration = Duration::from_millis(500);

/// Errors that can occur while delivering a record.
#[derive(Debug, thiserror::Error)]
pub enum LogSinkError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("log delivery failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("log collector returned status {0}")]
    Status(StatusCode),
}

impl LogSinkError {
    /// Transport failures, 5xx and 429 are worth retrying; anything else is not.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status(status) => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            Self::Client(_) => false,
        }
    }
}

/// Fire-and-forget sink backed by a bounded queue and a background worker.
///
/// [`log`](LogSink::log) only enqueues. The worker POSTs each record as JSON,
/// in order, retrying transient failures with exponential backoff. Records
/// that still cannot be delivered, or that arrive while the queue is full,
/// are reported through `tracing` and dropped.
pub struct RemoteLogSink {
    stack: Stack,
    sender: mpsc::Sender<LogEntry>,
}

impl RemoteLogSink {
    /// Starts the delivery worker and returns the sink feeding it.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`LogSinkError::Client`] if the HTTP client cannot be built.
    pub fn spawn(
        endpoint: impl Into<String>,
        stack: Stack,
        queue_capacity: usize,
        timeout: Duration,
    ) -> Result<Self, LogSinkError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(LogSinkError::Client)?;

        let (sender, receiver) = mpsc::channel(queue_capacity);
        tokio::spawn(run_log_worker(receiver, client, endpoint.into()));

        Ok(Self { stack, sender })
    }
}

impl LogSink for RemoteLogSink {
    fn log(&self, level: Level, package: Package, message: &str) {
        let entry = LogEntry::new(Utc::now(), self.stack, level, package, message);

        match self.sender.try_send(entry) {
            Ok(()) => {}
            Err(TrySendError::Full(entry)) => {
                warn!(
                    level = %entry.level,
                    package = %entry.package,
                    "Log queue full, dropping record: {}",
                    entry.message
                );
            }
            Err(TrySendError::Closed(entry)) => {
                warn!(
                    level = %entry.level,
                    package = %entry.package,
                    "Log worker stopped, dropping record: {}",
                    entry.message
                );
            }
        }
    }

    fn is_healthy(&self) -> bool {
        !self.sender.is_closed()
    }
}

/// Drains the queue until every sender is dropped.
async fn run_log_worker(mut receiver: mpsc::Receiver<LogEntry>, client: Client, endpoint: String) {
    debug!("Log delivery worker started for {}", endpoint);

    while let Some(entry) = receiver.recv().await {
        let strategy = ExponentialBackoff::from_millis(RETRY_BASE_MILLIS)
            .max_delay(RETRY_MAX_DELAY)
            .map(jitter)
            .take(MAX_RETRIES);

        let result = RetryIf::start(
            strategy,
            || deliver(&client, &endpoint, &entry),
            LogSinkError::is_transient,
        )
        .await;

        if let Err(e) = result {
            warn!(
                level = %entry.level,
                package = %entry.package,
                "Logging API error: {}. Dropping record: {}",
                e,
                entry.message
            );
        }
    }

    debug!("Log delivery worker stopped");
}

async fn deliver(client: &Client, endpoint: &str, entry: &LogEntry) -> Result<(), LogSinkError> {
    let response = client
        .post(endpoint)
        .json(entry)
        .send()
        .await
        .map_err(LogSinkError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(LogSinkError::Status(status));
    }

    Ok(())
}
