//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Timestamps are rendered through [`timestamp`].

pub mod health;
pub mod shorten;
pub mod stats;
pub mod timestamp;
