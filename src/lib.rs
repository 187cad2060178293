//! # Short URLs
//!
//! A small URL shortening service built with Axum. Clients register a long
//! URL and receive a shortcode; following the short link redirects to the
//! original URL and records a click; a statistics endpoint reports the
//! click history.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, storage trait and clock
//! - **Application Layer** ([`application`]) - Link and statistics services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store and log sinks
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Behaviour
//!
//! - Records live in memory only and are lost on restart
//! - Expiry is lazy: an expired shortcode is purged by the first redirect
//!   that observes it, while statistics stay readable until then
//! - Application log records are shipped best-effort to an optional remote
//!   collector and never affect request outcomes
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:3000"
//! cargo run
//!
//! curl -X POST localhost:3000/shorturls \
//!   -H 'content-type: application/json' \
//!   -d '{"url":"https://example.com","validity":1,"shortcode":"abc123"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, LinkSettings, StatsService};
    pub use crate::domain::clock::{Clock, ManualClock, SystemClock};
    pub use crate::domain::entities::{Click, UrlRecord, UrlStats};
    pub use crate::error::AppError;
    pub use crate::infrastructure::logging::{LogSink, TracingLogSink};
    pub use crate::infrastructure::persistence::InMemoryUrlRepository;
    pub use crate::state::AppState;
}
