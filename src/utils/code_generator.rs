//! Short code generation and validation utilities.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

/// Alphabet of generated codes: lowercase letters and digits.
pub const DEFAULT_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated codes unless configured otherwise.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Longest custom code a client may request.
pub const MAX_CUSTOM_CODE_LENGTH: usize = 64;

/// Codes that collide with fixed routes.
const RESERVED_CODES: &[&str] = &["shorturls", "health"];

/// Source of fresh shortcodes.
///
/// Generators do not check the store; the caller retries on collision.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Uniformly random codes over a fixed alphabet.
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    alphabet: &'static [u8],
    length: usize,
}

impl RandomCodeGenerator {
    /// Creates a generator producing `length` characters from [`DEFAULT_ALPHABET`].
    pub fn new(length: usize) -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET,
            length,
        }
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| {
                let idx = rng.random_range(0..self.alphabet.len());
                self.alphabet[idx] as char
            })
            .collect()
    }
}

/// Validates a user-provided custom shortcode.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved route name
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > MAX_CUSTOM_CODE_LENGTH {
        return Err(AppError::bad_request(
            format!("Shortcode must be 1-{MAX_CUSTOM_CODE_LENGTH} characters"),
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Shortcode can only contain letters, digits, hyphens and underscores",
            json!({ "shortcode": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This shortcode is reserved",
            json!({ "shortcode": code }),
        ));
    }

    Ok(())
}
