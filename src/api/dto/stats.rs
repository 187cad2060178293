//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::timestamp;
use crate::domain::entities::{Click, UrlStats};

/// Statistics for a shortcode, clicks oldest first.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub original_url: String,
    #[serde(serialize_with = "timestamp::serialize")]
    pub created: DateTime<Utc>,
    #[serde(serialize_with = "timestamp::serialize")]
    pub expiry: DateTime<Utc>,
    pub total_clicks: usize,
    pub clicks: Vec<ClickInfo>,
}

/// Individual click information.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    #[serde(serialize_with = "timestamp::serialize")]
    pub timestamp: DateTime<Utc>,
    pub referer: String,
}

impl From<Click> for ClickInfo {
    fn from(click: Click) -> Self {
        Self {
            timestamp: click.timestamp,
            referer: click.referer,
        }
    }
}

impl From<UrlStats> for StatsResponse {
    fn from(stats: UrlStats) -> Self {
        Self {
            original_url: stats.original_url,
            created: stats.created_at,
            expiry: stats.valid_until,
            total_clicks: stats.total_clicks,
            clicks: stats.clicks.into_iter().map(ClickInfo::from).collect(),
        }
    }
}
