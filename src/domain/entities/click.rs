//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// Referer recorded when the request carried no `Referer` header.
pub const DIRECT_REFERER: &str = "direct";

/// A click recorded when a shortened link is followed.
#[derive(Debug, Clone, PartialEq)]
pub struct Click {
    pub timestamp: DateTime<Utc>,
    pub referer: String,
}

impl Click {
    /// Creates a click, substituting [`DIRECT_REFERER`] for a missing or empty referer.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let click = Click::new(Utc::now(), None);
    /// assert_eq!(click.referer, "direct");
    /// ```
    pub fn new(timestamp: DateTime<Utc>, referer: Option<&str>) -> Self {
        let referer = referer
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(DIRECT_REFERER)
            .to_string();

        Self { timestamp, referer }
    }
}
