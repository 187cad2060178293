//! Log sink that only writes through `tracing`.

use super::entry::{Level, Package, Stack};
use super::sink::LogSink;

/// A sink that forwards records to the local `tracing` subscriber.
///
/// Used when no remote collector is configured and in tests.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogSink {
    stack: Stack,
}

impl TracingLogSink {
    pub fn new(stack: Stack) -> Self {
        Self { stack }
    }
}

impl Default for TracingLogSink {
    fn default() -> Self {
        Self::new(Stack::Backend)
    }
}

impl LogSink for TracingLogSink {
    fn log(&self, level: Level, package: Package, message: &str) {
        let stack = self.stack.as_str();
        let package = package.as_str();

        match level {
            Level::Debug => tracing::debug!(stack, package, "{}", message),
            Level::Info => tracing::info!(stack, package, "{}", message),
            Level::Warn => tracing::warn!(stack, package, "{}", message),
            Level::Error | Level::Fatal => tracing::error!(stack, package, "{}", message),
        }
    }
}
