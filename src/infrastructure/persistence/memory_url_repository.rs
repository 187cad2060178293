//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;

use crate::domain::entities::{Click, NewUrlRecord, UrlRecord, UrlStats};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Sharded in-memory store of URL records.
///
/// Each shortcode lives in one shard of a [`DashMap`], so read-modify-write
/// sequences on the same shortcode are serialised by the shard lock while
/// different shortcodes generally proceed in parallel. No lock is held across
/// an `.await`.
///
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryUrlRepository {
    records: DashMap<String, UrlRecord>,
}

impl InMemoryUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(code: &str) -> AppError {
    AppError::not_found("Short URL not found", json!({ "shortcode": code }))
}

fn expired(code: &str) -> AppError {
    AppError::expired("Short URL has expired", json!({ "shortcode": code }))
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        match self.records.entry(new_record.code.clone()) {
            Entry::Occupied(_) => Err(AppError::duplicate(
                "Shortcode already exists",
                json!({ "shortcode": new_record.code }),
            )),
            Entry::Vacant(slot) => {
                let record = UrlRecord::from(new_record);
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn lookup(&self, code: &str, now: DateTime<Utc>) -> Result<UrlRecord, AppError> {
        match self.records.entry(code.to_string()) {
            Entry::Vacant(_) => Err(not_found(code)),
            Entry::Occupied(entry) if entry.get().is_expired_at(now) => {
                entry.remove();
                Err(expired(code))
            }
            Entry::Occupied(entry) => Ok(entry.get().clone()),
        }
    }

    async fn record_click(&self, code: &str, click: Click) -> Result<(), AppError> {
        let mut record = self.records.get_mut(code).ok_or_else(|| not_found(code))?;
        record.clicks.push(click);
        Ok(())
    }

    async fn resolve(&self, code: &str, click: Click) -> Result<String, AppError> {
        match self.records.entry(code.to_string()) {
            Entry::Vacant(_) => Err(not_found(code)),
            Entry::Occupied(entry) if entry.get().is_expired_at(click.timestamp) => {
                entry.remove();
                Err(expired(code))
            }
            Entry::Occupied(mut entry) => {
                let record = entry.get_mut();
                record.clicks.push(click);
                Ok(record.original_url.clone())
            }
        }
    }

    async fn stats(&self, code: &str) -> Result<UrlStats, AppError> {
        self.records
            .get(code)
            .map(|record| UrlStats::from(record.value()))
            .ok_or_else(|| not_found(code))
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::sync::Arc;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
    }

    fn new_record(code: &str, validity_minutes: i64) -> NewUrlRecord {
        NewUrlRecord {
            code: code.to_string(),
            original_url: "https://example.com".to_string(),
            created_at: start(),
            valid_until: start() + Duration::minutes(validity_minutes),
        }
    }

    #[tokio::test]
    async fn test_create_then_lookup_returns_record() {
        let repo = InMemoryUrlRepository::new();
        repo.create(new_record("abc123", 30)).await.unwrap();

        let record = repo.lookup("abc123", start()).await.unwrap();

        assert_eq!(record.original_url, "https://example.com");
        assert_eq!(record.valid_until, start() + Duration::minutes(30));
        assert!(record.clicks.is_empty());
    }

    #[tokio::test]
    async fn test_create_duplicate_fails() {
        let repo = InMemoryUrlRepository::new();
        repo.create(new_record("dup", 30)).await.unwrap();

        let result = repo.create(new_record("dup", 60)).await;

        assert!(matches!(result, Err(AppError::Duplicate { .. })));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_stale_record_still_blocks_reuse() {
        let repo = InMemoryUrlRepository::new();
        repo.create(new_record("stale", 0)).await.unwrap();

        let result = repo.create(new_record("stale", 30)).await;

        assert!(matches!(result, Err(AppError::Duplicate { .. })));
    }

    #[tokio::test]
    async fn test_lookup_missing_is_not_found() {
        let repo = InMemoryUrlRepository::new();
        let result = repo.lookup("missing", start()).await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_lookup_expired_evicts_record() {
        let repo = InMemoryUrlRepository::new();
        repo.create(new_record("gone", 1)).await.unwrap();

        let later = start() + Duration::minutes(2);
        let first = repo.lookup("gone", later).await;
        let second = repo.lookup("gone", later).await;

        assert!(matches!(first, Err(AppError::Expired { .. })));
        assert!(matches!(second, Err(AppError::NotFound { .. })));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_zero_validity_expires_on_next_lookup() {
        let repo = InMemoryUrlRepository::new();
        repo.create(new_record("zero", 0)).await.unwrap();

        let result = repo.lookup("zero", start()).await;

        assert!(matches!(result, Err(AppError::Expired { .. })));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_record_click_appends_in_order() {
        let repo = InMemoryUrlRepository::new();
        repo.create(new_record("clicks", 30)).await.unwrap();

        repo.record_click("clicks", Click::new(start(), Some("https://a.example")))
            .await
            .unwrap();
        repo.record_click("clicks", Click::new(start() + Duration::seconds(1), None))
            .await
            .unwrap();

        let stats = repo.stats("clicks").await.unwrap();
        assert_eq!(stats.total_clicks, 2);
        assert_eq!(stats.clicks[0].referer, "https://a.example");
        assert_eq!(stats.clicks[1].referer, "direct");
    }

    #[tokio::test]
    async fn test_record_click_missing_is_not_found() {
        let repo = InMemoryUrlRepository::new();
        let result = repo.record_click("missing", Click::new(start(), None)).await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_resolve_records_click_and_returns_target() {
        let repo = InMemoryUrlRepository::new();
        repo.create(new_record("go", 30)).await.unwrap();

        let target = repo
            .resolve("go", Click::new(start() + Duration::minutes(1), None))
            .await
            .unwrap();

        assert_eq!(target, "https://example.com");
        assert_eq!(repo.stats("go").await.unwrap().total_clicks, 1);
    }

    #[tokio::test]
    async fn test_resolve_expired_evicts_without_click() {
        let repo = InMemoryUrlRepository::new();
        repo.create(new_record("late", 1)).await.unwrap();

        let result = repo
            .resolve("late", Click::new(start() + Duration::minutes(1), None))
            .await;

        assert!(matches!(result, Err(AppError::Expired { .. })));
        assert!(matches!(
            repo.stats("late").await,
            Err(AppError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_stats_does_not_evict_expired_record() {
        let repo = InMemoryUrlRepository::new();
        repo.create(new_record("keep", 0)).await.unwrap();

        let stats = repo.stats("keep").await.unwrap();

        assert_eq!(stats.original_url, "https://example.com");
        assert_eq!(stats.total_clicks, 0);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_resolves_do_not_lose_clicks() {
        let repo = Arc::new(InMemoryUrlRepository::new());
        repo.create(new_record("hot", 30)).await.unwrap();

        let mut handles = Vec::new();
        for i in 0..200 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.resolve("hot", Click::new(start() + Duration::milliseconds(i), None))
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(repo.stats("hot").await.unwrap().total_clicks, 200);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_of_same_code_admit_one() {
        let repo = Arc::new(InMemoryUrlRepository::new());

        let mut handles = Vec::new();
        for _ in 0..50 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.create(new_record("race", 30)).await.is_ok()
            }));
        }

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
    }
}
