//! HTTP request handlers.
//!
//! Each handler translates HTTP input into service calls and service results
//! into responses. Outcomes are reported to the injected log sink.

pub mod health;
pub mod redirect;
pub mod shorten;
pub mod stats;

pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
