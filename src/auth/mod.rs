//! Authentication module for the VsesvitAI client.
//!
//! Requests authenticate with an API key sent in the `X-API-KEY` header.
//! The key format check here is also what lets the error mapper tell a bad
//! key apart from a rejected call on a specific resource.

use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;

use crate::errors::VsesvitError;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Default prefix of a well-formed API key.
pub const DEFAULT_KEY_PREFIX: &str = "vsa_";

/// Default total length of a well-formed API key.
pub const DEFAULT_KEY_LENGTH: usize = 30;

/// Expected shape of an API key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyFormat {
    /// Required prefix.
    pub prefix: String,
    /// Required total length, in characters.
    pub length: usize,
}

impl ApiKeyFormat {
    /// Creates a key format.
    pub fn new(prefix: impl Into<String>, length: usize) -> Self {
        Self {
            prefix: prefix.into(),
            length,
        }
    }

    /// True when `key` starts with the prefix and has exactly the expected length.
    pub fn matches(&self, key: &str) -> bool {
        key.starts_with(&self.prefix) && key.chars().count() == self.length
    }
}

impl Default for ApiKeyFormat {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_PREFIX, DEFAULT_KEY_LENGTH)
    }
}

/// Authentication provider trait.
///
/// Implementations of this trait provide authentication credentials
/// for API requests.
pub trait AuthProvider: Send + Sync {
    /// Apply authentication to request headers.
    fn apply_auth(&self, headers: &mut HashMap<String, String>);

    /// The raw key, used for format checks when classifying a 401.
    fn api_key(&self) -> &str;

    /// Validate the credentials.
    fn validate(&self) -> Result<(), VsesvitError>;
}

/// API key authentication provider.
pub struct ApiKeyAuth {
    api_key: SecretString,
    format: ApiKeyFormat,
}

impl ApiKeyAuth {
    /// Creates a new API key authentication provider.
    pub fn new(api_key: SecretString, format: ApiKeyFormat) -> Self {
        Self { api_key, format }
    }

    /// Creates from a string API key with the default key format.
    pub fn from_string(api_key: impl Into<String>) -> Self {
        Self::new(SecretString::new(api_key.into()), ApiKeyFormat::default())
    }

    /// Gets a hint of the API key for debugging (last 4 characters).
    pub fn key_hint(&self) -> String {
        key_hint(self.api_key.expose_secret())
    }
}

impl AuthProvider for ApiKeyAuth {
    fn apply_auth(&self, headers: &mut HashMap<String, String>) {
        headers.insert(
            API_KEY_HEADER.to_string(),
            self.api_key.expose_secret().clone(),
        );
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    fn validate(&self) -> Result<(), VsesvitError> {
        let key = self.api_key.expose_secret();

        if key.is_empty() {
            return Err(VsesvitError::configuration("API key cannot be empty"));
        }

        if !self.format.matches(key) {
            tracing::warn!(
                key_hint = %self.key_hint(),
                prefix = %self.format.prefix,
                length = self.format.length,
                "API key does not match the expected format"
            );
        }

        Ok(())
    }
}

impl std::fmt::Debug for ApiKeyAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyAuth")
            .field("api_key", &"[REDACTED]")
            .field("key_hint", &self.key_hint())
            .field("format", &self.format)
            .finish()
    }
}

/// Last four characters of a key, or `****` for short keys.
pub(crate) fn key_hint(key: &str) -> String {
    let count = key.chars().count();
    if count > 4 {
        let tail: String = key.chars().skip(count - 4).collect();
        format!("...{tail}")
    } else {
        "****".to_string()
    }
}
