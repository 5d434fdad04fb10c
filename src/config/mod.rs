//! Configuration module for the VsesvitAI client.
//!
//! Configuration is read once when the client is built and never mutated
//! afterwards.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

use crate::auth::{key_hint, ApiKeyFormat};
use crate::errors::{VsesvitError, VsesvitResult};

/// Default base URL for the VsesvitAI API.
pub const DEFAULT_BASE_URL: &str = "https://us.vsesvit.ai/api/v1";

/// Resource types the API exposes, in singular form.
pub const SUPPORTED_RESOURCES: &[&str] = &[
    "article",
    "project",
    "landing",
    "knowledge_base",
    "user",
    "author",
    "audience",
    "smart_table",
];

/// Configuration for the VsesvitAI client.
#[derive(Clone)]
pub struct VsesvitConfig {
    /// API key for authentication (stored securely).
    pub(crate) api_key: SecretString,
    /// Base URL for API requests, without a trailing slash.
    pub base_url: String,
    /// Emit diagnostics for every failed response.
    pub debug: bool,
    /// Default request timeout; `None` leaves requests without a deadline.
    pub timeout: Option<Duration>,
    /// Expected API key shape.
    pub key_format: ApiKeyFormat,
}

impl VsesvitConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> VsesvitConfigBuilder {
        VsesvitConfigBuilder::new()
    }

    /// Creates a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `VSESVIT_API_KEY` (required): API key for authentication
    /// - `VSESVIT_BASE_URL` (optional): Custom base URL
    /// - `VSESVIT_DEBUG` (optional): `1`, `true` or `yes` enables debug diagnostics
    /// - `VSESVIT_TIMEOUT` (optional): Request timeout in seconds
    /// - `VSESVIT_API_KEY_PREFIX` (optional): Expected key prefix
    /// - `VSESVIT_API_KEY_LENGTH` (optional): Expected key length
    pub fn from_env() -> VsesvitResult<Self> {
        let api_key = std::env::var("VSESVIT_API_KEY").map_err(|_| {
            VsesvitError::configuration("VSESVIT_API_KEY environment variable not set")
        })?;

        let mut builder = VsesvitConfigBuilder::new().api_key(api_key);

        if let Ok(base_url) = std::env::var("VSESVIT_BASE_URL") {
            builder = builder.base_url(base_url);
        }

        if let Ok(debug) = std::env::var("VSESVIT_DEBUG") {
            builder = builder.debug(matches!(
                debug.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            ));
        }

        if let Some(secs) = parse_env::<u64>("VSESVIT_TIMEOUT") {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let mut format = ApiKeyFormat::default();
        if let Ok(prefix) = std::env::var("VSESVIT_API_KEY_PREFIX") {
            format.prefix = prefix;
        }
        if let Some(length) = parse_env::<usize>("VSESVIT_API_KEY_LENGTH") {
            format.length = length;
        }

        builder.key_format(format).build()
    }

    /// Returns the API key (exposing the secret).
    pub(crate) fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Returns the API key hint (last 4 characters) for debugging.
    pub fn api_key_hint(&self) -> String {
        key_hint(self.api_key.expose_secret())
    }
}

impl std::fmt::Debug for VsesvitConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VsesvitConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("debug", &self.debug)
            .field("timeout", &self.timeout)
            .field("key_format", &self.key_format)
            .finish()
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(variable = name, value = %raw, "Ignoring unparseable environment variable");
            None
        }
    }
}

/// Builder for `VsesvitConfig`.
#[derive(Default)]
pub struct VsesvitConfigBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    debug: bool,
    timeout: Option<Duration>,
    key_format: Option<ApiKeyFormat>,
}

impl VsesvitConfigBuilder {
    /// Creates a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the API key from an environment variable.
    pub fn api_key_from_env(mut self, var_name: &str) -> VsesvitResult<Self> {
        let api_key = std::env::var(var_name).map_err(|_| {
            VsesvitError::configuration(format!("Environment variable {var_name} not set"))
        })?;
        self.api_key = Some(api_key);
        Ok(self)
    }

    /// Sets the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Enables or disables debug diagnostics.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sets the default request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Sets the expected API key format.
    pub fn key_format(mut self, format: ApiKeyFormat) -> Self {
        self.key_format = Some(format);
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> VsesvitResult<VsesvitConfig> {
        let api_key = self
            .api_key
            .ok_or_else(|| VsesvitError::configuration("API key is required"))?;

        if api_key.is_empty() {
            return Err(VsesvitError::configuration("API key cannot be empty"));
        }

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let parsed = Url::parse(&base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(VsesvitError::configuration(format!(
                "Base URL must use http or https, got {}",
                parsed.scheme()
            )));
        }

        Ok(VsesvitConfig {
            api_key: SecretString::new(api_key),
            base_url,
            debug: self.debug,
            timeout: self.timeout,
            key_format: self.key_format.unwrap_or_default(),
        })
    }
}
