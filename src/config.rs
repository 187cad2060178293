//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Prefix of generated short links (default: `http://localhost:3000`)
//! - `DEFAULT_VALIDITY_MINUTES` - Validity when a request omits it (default: 30)
//! - `SHORTCODE_LENGTH` - Length of generated shortcodes (default: 6, range: 4-32)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `LOG_SINK_URL` - Remote log collector endpoint (remote logging disabled if unset)
//! - `LOG_STACK` - Stack reported with each remote record: `backend` or `frontend` (default: `backend`)
//! - `LOG_QUEUE_CAPACITY` - Remote log buffer size (default: 1000, min: 10)
//! - `LOG_SINK_TIMEOUT_SECS` - Per-request timeout for log delivery (default: 5)
//!
//! ## Example
//!
//! ```bash
//! export BASE_URL="https://sho.rt"
//! export LOG_SINK_URL="http://logs.internal:8080/logs"
//! ```

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

use crate::infrastructure::logging::Stack;
use crate::utils::code_generator::DEFAULT_CODE_LENGTH;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Scheme and authority prepended to shortcodes in `shortLink`.
    pub base_url: String,
    pub default_validity_minutes: u32,
    pub shortcode_length: usize,
    pub log_level: String,
    pub log_format: String,

    // ── Remote log sink ─────────────────────────────────────────────────────
    /// Collector endpoint. `None` keeps application records on the local
    /// tracing subscriber only.
    pub log_sink_url: Option<String>,
    pub log_stack: Stack,
    pub log_queue_capacity: usize,
    pub log_sink_timeout_secs: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let default_validity_minutes = parse_var("DEFAULT_VALIDITY_MINUTES", 30)?;
        let shortcode_length = parse_var("SHORTCODE_LENGTH", DEFAULT_CODE_LENGTH)?;

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let log_sink_url = env::var("LOG_SINK_URL").ok().filter(|v| !v.is_empty());
        let log_stack = match env::var("LOG_STACK") {
            Ok(value) => Stack::from_str(&value).context("Failed to parse LOG_STACK")?,
            Err(_) => Stack::Backend,
        };
        let log_queue_capacity = parse_var("LOG_QUEUE_CAPACITY", 1_000)?;
        let log_sink_timeout_secs = parse_var("LOG_SINK_TIMEOUT_SECS", 5)?;

        Ok(Self {
            listen_addr,
            base_url,
            default_validity_minutes,
            shortcode_length,
            log_level,
            log_format,
            log_sink_url,
            log_stack,
            log_queue_capacity,
            log_sink_timeout_secs,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `base_url` or `log_sink_url` is not an HTTP(S) URL
    /// - `shortcode_length` is outside 4-32
    /// - `log_format` is not `text` or `json`
    /// - `log_queue_capacity` is outside 10-1000000
    /// - `log_sink_timeout_secs` is zero
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !is_http_url(&self.base_url) {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if !(4..=32).contains(&self.shortcode_length) {
            anyhow::bail!(
                "SHORTCODE_LENGTH must be between 4 and 32, got {}",
                self.shortcode_length
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if let Some(ref url) = self.log_sink_url
            && !is_http_url(url)
        {
            anyhow::bail!(
                "LOG_SINK_URL must start with 'http://' or 'https://', got '{}'",
                url
            );
        }

        if self.log_queue_capacity < 10 {
            anyhow::bail!(
                "LOG_QUEUE_CAPACITY must be at least 10, got {}",
                self.log_queue_capacity
            );
        }

        if self.log_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "LOG_QUEUE_CAPACITY is too large (max: 1000000), got {}",
                self.log_queue_capacity
            );
        }

        if self.log_sink_timeout_secs == 0 {
            anyhow::bail!("LOG_SINK_TIMEOUT_SECS must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!(
            "  Default validity: {} minutes",
            self.default_validity_minutes
        );
        tracing::info!("  Shortcode length: {}", self.shortcode_length);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        if let Some(ref url) = self.log_sink_url {
            tracing::info!(
                "  Remote logging: {} (stack: {}, queue: {})",
                url,
                self.log_stack,
                self.log_queue_capacity
            );
        } else {
            tracing::info!("  Remote logging: disabled");
        }
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Parses an optional numeric variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got '{}'", name, value)),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            base_url: "http://localhost:3000".to_string(),
            default_validity_minutes: 30,
            shortcode_length: 6,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            log_sink_url: None,
            log_stack: Stack::Backend,
            log_queue_capacity: 1_000,
            log_sink_timeout_secs: 5,
        }
    }

    const VARS: &[&str] = &[
        "LISTEN",
        "BASE_URL",
        "DEFAULT_VALIDITY_MINUTES",
        "SHORTCODE_LENGTH",
        "LOG_FORMAT",
        "LOG_SINK_URL",
        "LOG_STACK",
        "LOG_QUEUE_CAPACITY",
        "LOG_SINK_TIMEOUT_SECS",
    ];

    fn clear_vars() {
        // SAFETY: Tests touching the environment run serially via #[serial]
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:3000".to_string();

        config.base_url = "localhost:3000".to_string();
        assert!(config.validate().is_err());
        config.base_url = "https://sho.rt".to_string();
        assert!(config.validate().is_ok());

        config.shortcode_length = 3;
        assert!(config.validate().is_err());
        config.shortcode_length = 33;
        assert!(config.validate().is_err());
        config.shortcode_length = 6;

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.log_sink_url = Some("ftp://logs".to_string());
        assert!(config.validate().is_err());
        config.log_sink_url = Some("http://logs.internal/logs".to_string());
        assert!(config.validate().is_ok());

        config.log_queue_capacity = 5;
        assert!(config.validate().is_err());
        config.log_queue_capacity = 1_000;

        config.log_sink_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        clear_vars();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.default_validity_minutes, 30);
        assert_eq!(config.shortcode_length, 6);
        assert_eq!(config.log_stack, Stack::Backend);
        assert!(config.log_sink_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_values_from_env() {
        clear_vars();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("BASE_URL", "https://sho.rt");
            env::set_var("DEFAULT_VALIDITY_MINUTES", "90");
            env::set_var("SHORTCODE_LENGTH", "8");
            env::set_var("LOG_SINK_URL", "http://logs.internal/logs");
            env::set_var("LOG_STACK", "FRONTEND");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.base_url, "https://sho.rt");
        assert_eq!(config.default_validity_minutes, 90);
        assert_eq!(config.shortcode_length, 8);
        assert_eq!(
            config.log_sink_url.as_deref(),
            Some("http://logs.internal/logs")
        );
        assert_eq!(config.log_stack, Stack::Frontend);
        assert!(config.log_sink_url.is_some());

        clear_vars();
    }

    #[test]
    #[serial]
    fn test_malformed_number_is_rejected() {
        clear_vars();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DEFAULT_VALIDITY_MINUTES", "soon");
        }

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("DEFAULT_VALIDITY_MINUTES"));

        clear_vars();
    }

    #[test]
    #[serial]
    fn test_invalid_log_stack_is_rejected() {
        clear_vars();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_STACK", "middletier");
        }

        assert!(Config::from_env().is_err());

        clear_vars();
    }

    #[test]
    #[serial]
    fn test_empty_log_sink_url_disables_remote_logging() {
        clear_vars();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_SINK_URL", "");
        }

        let config = Config::from_env().unwrap();
        assert!(config.log_sink_url.is_none());

        clear_vars();
    }
}
