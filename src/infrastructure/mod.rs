//! Infrastructure layer for storage and external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Storage implementations (in-memory)
//! - [`logging`] - Log sinks (remote collector and local tracing)

pub mod logging;
pub mod persistence;
