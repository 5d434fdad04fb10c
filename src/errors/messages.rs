//! User-facing message templates.
//!
//! Templates take their substitutions through the small helpers below so the
//! wording lives in one place.

/// Message for a rejected or malformed API key.
pub const INVALID_API_KEY: &str = "Invalid API key or credentials";

/// Default validation failure message.
pub const VALIDATION_FAILED: &str = "Validation failed";

/// Rate limit message without a retry hint.
pub const RATE_LIMIT: &str = "API rate limit exceeded";

/// 401 against a known resource: the key is well-formed but the call was rejected.
pub fn resource_access(resource: &str) -> String {
    format!("{resource} doesn't exist or you don't have permission to access it")
}

/// 403 fallback.
pub fn access_denied(resource: &str) -> String {
    format!("Access denied to this {resource}")
}

/// 404 message; the id suffix is appended by the caller.
pub fn resource_not_found(resource: &str) -> String {
    format!("The requested {resource} was not found")
}

/// Suffix appended to rate limit messages when `Retry-After` was usable.
pub fn retry_suffix(seconds: u64) -> String {
    format!(", retry after {seconds} seconds")
}

/// Rate limit message with a retry hint.
pub fn rate_limit_with_retry(seconds: u64) -> String {
    format!("{RATE_LIMIT}{}", retry_suffix(seconds))
}

/// 5xx fallback.
pub fn server_error(status: u16) -> String {
    format!("Server error: HTTP {status}")
}

/// Fallback for any other 4xx status.
pub fn api_error(status: u16) -> String {
    format!("API error: HTTP {status}")
}

/// Last-resort message when the body yields nothing readable.
pub fn http_status_error(status: u16) -> String {
    format!("HTTP {status} error")
}

/// Transport-level failure.
pub fn network(cause: &str) -> String {
    format!("Network error connecting to VsesvitAI API: {cause}")
}
