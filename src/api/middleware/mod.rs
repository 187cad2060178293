//! HTTP middleware for request processing.
//!
//! - [`tracing`] - Request spans and latency on the local subscriber
//! - [`request_log`] - Request/response records sent to the application log sink

pub mod request_log;
pub mod tracing;
