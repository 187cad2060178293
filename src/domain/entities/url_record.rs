//! URL record entity representing one shortened URL.

use chrono::{DateTime, Utc};

use super::click::Click;

/// A shortened URL together with its validity window and click history.
///
/// The store owns every record exclusively. A record is only mutated by
/// appending clicks; `created_at` and `valid_until` never change after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlRecord {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    /// Append-only, oldest first.
    pub clicks: Vec<Click>,
}

impl UrlRecord {
    /// Returns true once `now` has reached the end of the validity window.
    ///
    /// A record created with zero validity is therefore already expired at
    /// its own creation instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.valid_until
    }

    /// Number of recorded redirects.
    pub fn total_clicks(&self) -> usize {
        self.clicks.len()
    }
}

impl From<NewUrlRecord> for UrlRecord {
    fn from(new_record: NewUrlRecord) -> Self {
        Self {
            code: new_record.code,
            original_url: new_record.original_url,
            created_at: new_record.created_at,
            valid_until: new_record.valid_until,
            clicks: Vec::new(),
        }
    }
}

/// Input data for creating a new record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUrlRecord {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
}

/// Read-only statistics view of a record.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlStats {
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub total_clicks: usize,
    pub clicks: Vec<Click>,
}

impl From<&UrlRecord> for UrlStats {
    fn from(record: &UrlRecord) -> Self {
        Self {
            original_url: record.original_url.clone(),
            created_at: record.created_at,
            valid_until: record.valid_until,
            total_clicks: record.total_clicks(),
            clicks: record.clicks.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn new_record(validity: Duration) -> NewUrlRecord {
        let created_at = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        NewUrlRecord {
            code: "abc123".to_string(),
            original_url: "https://example.com".to_string(),
            created_at,
            valid_until: created_at + validity,
        }
    }

    #[test]
    fn test_record_from_new_record_starts_without_clicks() {
        let record = UrlRecord::from(new_record(Duration::minutes(30)));

        assert_eq!(record.code, "abc123");
        assert_eq!(record.original_url, "https://example.com");
        assert!(record.clicks.is_empty());
        assert_eq!(record.total_clicks(), 0);
    }

    #[test]
    fn test_record_is_expired_boundary() {
        let record = UrlRecord::from(new_record(Duration::minutes(1)));

        assert!(!record.is_expired_at(record.created_at));
        assert!(!record.is_expired_at(record.valid_until - Duration::milliseconds(1)));
        assert!(record.is_expired_at(record.valid_until));
        assert!(record.is_expired_at(record.valid_until + Duration::seconds(1)));
    }

    #[test]
    fn test_zero_validity_is_immediately_expired() {
        let record = UrlRecord::from(new_record(Duration::zero()));
        assert!(record.is_expired_at(record.created_at));
    }

    #[test]
    fn test_stats_from_record() {
        let mut record = UrlRecord::from(new_record(Duration::minutes(5)));
        record
            .clicks
            .push(Click::new(record.created_at, Some("https://google.com")));
        record.clicks.push(Click::new(record.created_at, None));

        let stats = UrlStats::from(&record);

        assert_eq!(stats.original_url, "https://example.com");
        assert_eq!(stats.total_clicks, 2);
        assert_eq!(stats.clicks[0].referer, "https://google.com");
        assert_eq!(stats.clicks[1].referer, "direct");
    }
}
