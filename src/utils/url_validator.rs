//! Validation of redirect target URLs.

use url::Url;

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error)]
pub enum TargetUrlError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is an absolute HTTP(S) URL and returns the string to store.
///
/// The URL is stored as submitted so that the redirect target matches what
/// the client sent (`https://example.com` stays without a trailing slash).
/// Only input that could not be sent as a `Location` header (non-ASCII or
/// control characters) is replaced by its percent-encoded serialization.
///
/// # Errors
///
/// Returns [`TargetUrlError::Empty`] for blank input,
/// [`TargetUrlError::InvalidFormat`] for unparsable input,
/// [`TargetUrlError::UnsupportedProtocol`] for schemes such as `javascript:`
/// or `ftp:`, and [`TargetUrlError::MissingHost`] when no host is present.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_target_url("https://example.com").unwrap(), "https://example.com");
/// assert_eq!(validate_target_url("https://example.com/café").unwrap(), "https://example.com/caf%C3%A9");
/// ```
pub fn validate_target_url(input: &str) -> Result<String, TargetUrlError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TargetUrlError::Empty);
    }

    let url = Url::parse(trimmed).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(TargetUrlError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(TargetUrlError::MissingHost);
    }

    let header_safe = trimmed.chars().all(|c| c.is_ascii() && !c.is_ascii_control());
    if header_safe {
        Ok(trimmed.to_string())
    } else {
        Ok(url.to_string())
    }
}
