//! Link creation and resolution service.

use std::sync::Arc;

use chrono::{DateTime, Datelike, Duration, Utc};
use serde_json::json;
use tracing::debug;

use crate::domain::clock::Clock;
use crate::domain::entities::{Click, NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, validate_custom_code};
use crate::utils::url_validator::validate_target_url;

/// Generated codes tried before giving up with an internal error.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Last year an RFC 3339 timestamp can carry.
const MAX_EXPIRY_YEAR: i32 = 9999;

/// Tunables for [`LinkService`].
#[derive(Debug, Clone)]
pub struct LinkSettings {
    /// Prefix of every short link, e.g. `http://localhost:3000`.
    pub base_url: String,
    /// Validity window applied when a request does not specify one.
    pub default_validity_minutes: u32,
}

/// Service for creating and resolving shortened links.
///
/// Reads the time from the injected [`Clock`] and draws fresh codes from the
/// injected [`CodeGenerator`].
pub struct LinkService<R: UrlRepository> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
    generator: Arc<dyn CodeGenerator>,
    settings: LinkSettings,
}

impl<R: UrlRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(
        repository: Arc<R>,
        clock: Arc<dyn Clock>,
        generator: Arc<dyn CodeGenerator>,
        settings: LinkSettings,
    ) -> Self {
        Self {
            repository,
            clock,
            generator,
            settings,
        }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `url` - The redirect target (absolute HTTP/HTTPS URL)
    /// - `validity_minutes` - Validity window; the configured default when `None`
    /// - `custom_code` - Requested shortcode; a random one when `None` or empty
    ///
    /// # Code Generation
    ///
    /// Generated codes are inserted directly. A collision with an existing code
    /// triggers another attempt, up to 10 in total.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL, validity or custom code is invalid.
    /// Returns [`AppError::Duplicate`] if the custom code is already taken.
    /// Returns [`AppError::Internal`] if no free code was generated.
    pub async fn create_short_link(
        &self,
        url: String,
        validity_minutes: Option<u32>,
        custom_code: Option<String>,
    ) -> Result<UrlRecord, AppError> {
        let original_url = validate_target_url(&url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let validity = validity_minutes.unwrap_or(self.settings.default_validity_minutes);
        let created_at = self.clock.now();
        let valid_until = created_at
            .checked_add_signed(Duration::minutes(i64::from(validity)))
            .filter(|expiry| expiry.year() <= MAX_EXPIRY_YEAR)
            .ok_or_else(|| {
                AppError::bad_request("Validity is out of range", json!({ "validity": validity }))
            })?;

        match custom_code.filter(|code| !code.is_empty()) {
            Some(code) => {
                validate_custom_code(&code)?;

                self.repository
                    .create(NewUrlRecord {
                        code,
                        original_url,
                        created_at,
                        valid_until,
                    })
                    .await
            }
            None => {
                self.create_with_generated_code(original_url, created_at, valid_until)
                    .await
            }
        }
    }

    /// Resolves a shortcode to its redirect target, recording the click.
    ///
    /// Lookup and click append happen atomically, so concurrent redirects of
    /// the same code never lose a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::Expired`] if the code has expired; it is purged.
    pub async fn resolve(&self, code: &str, referer: Option<&str>) -> Result<String, AppError> {
        let click = Click::new(self.clock.now(), referer);
        self.repository.resolve(code, click).await
    }

    /// Constructs the full short URL for a code.
    pub fn short_link(&self, code: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), code)
    }

    async fn create_with_generated_code(
        &self,
        original_url: String,
        created_at: DateTime<Utc>,
        valid_until: DateTime<Utc>,
    ) -> Result<UrlRecord, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let new_record = NewUrlRecord {
                code: self.generator.generate(),
                original_url: original_url.clone(),
                created_at,
                valid_until,
            };

            match self.repository.create(new_record).await {
                Err(AppError::Duplicate { details, .. }) => {
                    debug!("Generated code collided (attempt {}): {}", attempt, details);
                }
                result => return result,
            }
        }

        Err(AppError::internal(
            "Failed to generate unique shortcode",
            json!({ "reason": "Too many collisions", "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }
}
