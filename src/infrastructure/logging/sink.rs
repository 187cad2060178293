//! Log sink trait.

use super::entry::{Level, Package};

/// Destination for application log records.
///
/// Logging is best-effort: implementations must return immediately and must
/// never fail or slow down the caller. Delivery problems are reported on a
/// local fallback channel and otherwise swallowed.
///
/// # Implementations
///
/// - [`crate::infrastructure::logging::RemoteLogSink`] - Queued HTTP delivery to a collector
/// - [`crate::infrastructure::logging::TracingLogSink`] - Local `tracing` output only
pub trait LogSink: Send + Sync {
    /// Records `message` at `level` for `package`.
    fn log(&self, level: Level, package: Package, message: &str);

    /// Whether the sink is still able to accept records.
    ///
    /// Used by the health endpoint.
    fn is_healthy(&self) -> bool {
        true
    }

    fn debug(&self, package: Package, message: &str) {
        self.log(Level::Debug, package, message);
    }

    fn info(&self, package: Package, message: &str) {
        self.log(Level::Info, package, message);
    }

    fn warn(&self, package: Package, message: &str) {
        self.log(Level::Warn, package, message);
    }

    fn error(&self, package: Package, message: &str) {
        self.log(Level::Error, package, message);
    }

    fn fatal(&self, package: Package, message: &str) {
        self.log(Level::Fatal, package, message);
    }
}
