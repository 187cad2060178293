//! Best-effort application log delivery.
//!
//! Provides a [`LogSink`] trait with two implementations:
//! - [`RemoteLogSink`] - Queued delivery of [`LogEntry`] records to an HTTP collector
//! - [`TracingLogSink`] - Local `tracing` output only
//!
//! Handlers receive the sink through application state, never through a global.

mod entry;
mod remote;
mod sink;
mod tracing_sink;

pub use entry::{InvalidLogField, Level, LogEntry, Package, Stack};
pub use remote::{LogSinkError, RemoteLogSink};
pub use sink::LogSink;
pub use tracing_sink::TracingLogSink;
