//! Click statistics service.

use std::sync::Arc;

use crate::domain::entities::UrlStats;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Service for reading click statistics.
///
/// Statistics never trigger expiry eviction: an expired code that has not
/// been redirected since it expired still reports its data.
pub struct StatsService<R: UrlRepository> {
    repository: Arc<R>,
}

impl<R: UrlRepository> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves statistics for a shortcode.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the shortcode is absent.
    pub async fn get_stats(&self, code: &str) -> Result<UrlStats, AppError> {
        self.repository.stats(code).await
    }

    /// Number of shortcodes currently stored.
    pub async fn count_links(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Click;
    use crate::domain::repositories::MockUrlRepository;
    use chrono::Utc;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_stats_success() {
        let mut repo = MockUrlRepository::new();
        repo.expect_stats()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| {
                let now = Utc::now();
                Ok(UrlStats {
                    original_url: "https://example.com".to_string(),
                    created_at: now,
                    valid_until: now,
                    total_clicks: 1,
                    clicks: vec![Click::new(now, None)],
                })
            });

        let service = StatsService::new(Arc::new(repo));
        let stats = service.get_stats("abc123").await.unwrap();

        assert_eq!(stats.total_clicks, 1);
        assert_eq!(stats.clicks[0].referer, "direct");
    }

    #[tokio::test]
    async fn test_get_stats_not_found() {
        let mut repo = MockUrlRepository::new();
        repo.expect_stats()
            .times(1)
            .returning(|_| Err(AppError::not_found("Short URL not found", json!({}))));

        let service = StatsService::new(Arc::new(repo));
        let result = service.get_stats("missing").await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_count_links() {
        let mut repo = MockUrlRepository::new();
        repo.expect_count().times(1).returning(|| Ok(3));

        let service = StatsService::new(Arc::new(repo));
        assert_eq!(service.count_links().await.unwrap(), 3);
    }
}
