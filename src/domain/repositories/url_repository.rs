//! Repository trait for shortened URL storage.

use crate::domain::entities::{Click, NewUrlRecord, UrlRecord, UrlStats};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Storage interface for shortened URLs keyed by shortcode.
///
/// Implementations must make every read-modify-write on a single shortcode
/// atomic, while operations on different shortcodes should not contend.
///
/// Expiry is lazy: only [`lookup`](Self::lookup) and [`resolve`](Self::resolve)
/// evict expired records. [`stats`](Self::stats) never does.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - sharded in-memory map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record.
    ///
    /// No expiry check is performed: a stale record that has not been
    /// accessed yet still blocks reuse of its shortcode.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Duplicate`] if the shortcode is already present.
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Fetches a record, evicting it if it has expired at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the shortcode is absent.
    /// Returns [`AppError::Expired`] if it was present but expired; the record
    /// is gone from the store afterwards.
    async fn lookup(&self, code: &str, now: DateTime<Utc>) -> Result<UrlRecord, AppError>;

    /// Appends a click to an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the shortcode is absent.
    async fn record_click(&self, code: &str, click: Click) -> Result<(), AppError>;

    /// Looks up a record and appends `click` in one atomic step.
    ///
    /// The click timestamp doubles as the expiry reference time.
    /// Returns the redirect target on success.
    ///
    /// # Errors
    ///
    /// Same as [`lookup`](Self::lookup).
    async fn resolve(&self, code: &str, click: Click) -> Result<String, AppError>;

    /// Returns the statistics view of a record without any expiry eviction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the shortcode is absent.
    async fn stats(&self, code: &str) -> Result<UrlStats, AppError>;

    /// Number of records currently held.
    async fn count(&self) -> Result<usize, AppError>;
}
