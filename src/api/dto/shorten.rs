//! DTOs for the link creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::timestamp;

/// Request to shorten a URL.
///
/// ```json
/// { "url": "https://example.com", "validity": 30, "shortcode": "abc123" }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub url: String,

    /// Validity window in minutes (service default when omitted).
    pub validity: Option<u32>,

    /// Optional custom shortcode; empty means "generate one".
    #[validate(length(max = 64))]
    pub shortcode: Option<String>,
}

/// Response for a created link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_link: String,
    #[serde(serialize_with = "timestamp::serialize")]
    pub expiry: DateTime<Utc>,
}
