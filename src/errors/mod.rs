//! Error types for the VsesvitAI client.
//!
//! Every failed API call surfaces as exactly one [`VsesvitError`]. The eight
//! API kinds (authentication, not found, access denied, validation, rate
//! limit, server, network, generic) are produced by the request dispatcher;
//! the remaining variants cover local failures around it.

mod mapper;
pub mod messages;
mod resource;

pub use mapper::{extract_error_info, map_error_response, ErrorInfo};
pub use resource::{parse_resource_info, ResourceDescriptor, DEFAULT_RESOURCE_TYPE};

use serde_json::{Map, Value};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::transport::TransportError;

/// Result type alias for VsesvitAI operations.
pub type VsesvitResult<T> = Result<T, VsesvitError>;

/// Field-level validation messages, keyed by field name in server order.
///
/// Values are either a single message string or a list of them.
pub type FieldErrors = Map<String, Value>;

/// Comprehensive error type for VsesvitAI client operations.
#[derive(Debug, Error)]
pub enum VsesvitError {
    /// The API key is malformed or was rejected.
    #[error("{message}")]
    Authentication {
        /// Human-readable message.
        message: String,
        /// HTTP status code.
        status_code: u16,
        /// Parsed response body.
        response_body: Value,
    },

    /// The addressed resource does not exist.
    #[error("{message}")]
    ResourceNotFound {
        /// Human-readable message.
        message: String,
        /// Resource type derived from the request path.
        resource_type: String,
        /// Resource id derived from the request path.
        resource_id: Option<String>,
        /// HTTP status code.
        status_code: u16,
        /// Parsed response body.
        response_body: Value,
    },

    /// The key is valid but may not touch this resource.
    #[error("{message}")]
    AccessDenied {
        /// Human-readable message.
        message: String,
        /// Resource type derived from the request path.
        resource_type: String,
        /// Resource id derived from the request path.
        resource_id: Option<String>,
        /// HTTP status code.
        status_code: u16,
        /// Parsed response body.
        response_body: Value,
    },

    /// The server rejected the request payload or parameters.
    #[error("{message}")]
    Validation {
        /// Human-readable message including a per-field breakdown.
        message: String,
        /// Field errors as returned under the top-level `errors` key.
        ///
        /// Empty when `errors` is missing or is not an object; the raw value
        /// is still in `response_body`.
        errors: FieldErrors,
        /// HTTP status code.
        status_code: u16,
        /// Parsed response body.
        response_body: Value,
    },

    /// Too many requests.
    #[error("{message}")]
    RateLimit {
        /// Human-readable message.
        message: String,
        /// Seconds to wait, from the `Retry-After` header.
        retry_after: Option<u64>,
        /// HTTP status code.
        status_code: u16,
        /// Parsed response body.
        response_body: Value,
    },

    /// The server failed (5xx).
    #[error("{message}")]
    Server {
        /// Human-readable message.
        message: String,
        /// HTTP status code.
        status_code: u16,
        /// Parsed response body.
        response_body: Value,
    },

    /// No response was received at all.
    #[error("{message}")]
    Network {
        /// Human-readable message embedding the cause.
        message: String,
        /// Underlying transport failure.
        #[source]
        source: TransportError,
    },

    /// Any other failure status.
    #[error("{message}")]
    Generic {
        /// Human-readable message.
        message: String,
        /// HTTP status code.
        status_code: u16,
        /// Parsed response body.
        response_body: Value,
    },

    /// Invalid client configuration.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue.
        message: String,
    },

    /// A request payload could not be encoded as JSON.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message.
        message: String,
    },

    /// Local file I/O failed while uploading or saving a download.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File that was being read or written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Fieldless tag for [`VsesvitError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`VsesvitError::Authentication`].
    Authentication,
    /// See [`VsesvitError::ResourceNotFound`].
    ResourceNotFound,
    /// See [`VsesvitError::AccessDenied`].
    AccessDenied,
    /// See [`VsesvitError::Validation`].
    Validation,
    /// See [`VsesvitError::RateLimit`].
    RateLimit,
    /// See [`VsesvitError::Server`].
    Server,
    /// See [`VsesvitError::Network`].
    Network,
    /// See [`VsesvitError::Generic`].
    Generic,
    /// See [`VsesvitError::Configuration`].
    Configuration,
    /// See [`VsesvitError::Serialization`].
    Serialization,
    /// See [`VsesvitError::Io`].
    Io,
}

impl VsesvitError {
    /// Returns the variant tag.
    pub fn kind(&self) -> ErrorKind {
        match self {
            VsesvitError::Authentication { .. } => ErrorKind::Authentication,
            VsesvitError::ResourceNotFound { .. } => ErrorKind::ResourceNotFound,
            VsesvitError::AccessDenied { .. } => ErrorKind::AccessDenied,
            VsesvitError::Validation { .. } => ErrorKind::Validation,
            VsesvitError::RateLimit { .. } => ErrorKind::RateLimit,
            VsesvitError::Server { .. } => ErrorKind::Server,
            VsesvitError::Network { .. } => ErrorKind::Network,
            VsesvitError::Generic { .. } => ErrorKind::Generic,
            VsesvitError::Configuration { .. } => ErrorKind::Configuration,
            VsesvitError::Serialization { .. } => ErrorKind::Serialization,
            VsesvitError::Io { .. } => ErrorKind::Io,
        }
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> String {
        match self {
            VsesvitError::Authentication { message, .. }
            | VsesvitError::ResourceNotFound { message, .. }
            | VsesvitError::AccessDenied { message, .. }
            | VsesvitError::Validation { message, .. }
            | VsesvitError::RateLimit { message, .. }
            | VsesvitError::Server { message, .. }
            | VsesvitError::Network { message, .. }
            | VsesvitError::Generic { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Returns the HTTP status code, if a response was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            VsesvitError::Authentication { status_code, .. }
            | VsesvitError::ResourceNotFound { status_code, .. }
            | VsesvitError::AccessDenied { status_code, .. }
            | VsesvitError::Validation { status_code, .. }
            | VsesvitError::RateLimit { status_code, .. }
            | VsesvitError::Server { status_code, .. }
            | VsesvitError::Generic { status_code, .. } => Some(*status_code),
            VsesvitError::Network { .. }
            | VsesvitError::Serialization { .. }
            | VsesvitError::Configuration { .. }
            | VsesvitError::Io { .. } => None,
        }
    }

    /// Returns the parsed response body echoed by the server.
    pub fn response_body(&self) -> Option<&Value> {
        match self {
            VsesvitError::Authentication { response_body, .. }
            | VsesvitError::ResourceNotFound { response_body, .. }
            | VsesvitError::AccessDenied { response_body, .. }
            | VsesvitError::Validation { response_body, .. }
            | VsesvitError::RateLimit { response_body, .. }
            | VsesvitError::Server { response_body, .. }
            | VsesvitError::Generic { response_body, .. } => Some(response_body),
            _ => None,
        }
    }

    /// Returns the retry-after duration if the server provided one.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            VsesvitError::RateLimit { retry_after, .. } => retry_after.map(Duration::from_secs),
            _ => None,
        }
    }

    /// Returns true if repeating the same call could succeed.
    ///
    /// Informational only: the client never retries on its own.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            VsesvitError::RateLimit { .. }
                | VsesvitError::Server { .. }
                | VsesvitError::Network { .. }
        )
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        VsesvitError::Configuration {
            message: message.into(),
        }
    }

    /// Creates a network error wrapping a transport failure.
    pub fn network(source: TransportError) -> Self {
        VsesvitError::Network {
            message: messages::network(&source.to_string()),
            source,
        }
    }

    /// Creates a validation error, appending a per-field breakdown to `message`.
    pub fn validation(
        message: impl Into<String>,
        errors: FieldErrors,
        status_code: u16,
        response_body: Value,
    ) -> Self {
        let mut message = message.into();

        if !errors.is_empty() && !message.ends_with(':') {
            message.push(':');
        }

        for (field, error) in &errors {
            match error {
                Value::String(text) => {
                    message.push_str(&format!("\n- {field}: {text}"));
                }
                Value::Array(items) if !items.is_empty() => {
                    let joined = items
                        .iter()
                        .map(|item| match item {
                            Value::String(text) => text.clone(),
                            other => other.to_string(),
                        })
                        .collect::<Vec<_>>()
                        .join(", ");
                    message.push_str(&format!("\n- {field}: {joined}"));
                }
                _ => {}
            }
        }

        VsesvitError::Validation {
            message,
            errors,
            status_code,
            response_body,
        }
    }

    /// Creates a rate limit error, appending the retry hint to `message`.
    pub fn rate_limit(
        message: impl Into<String>,
        retry_after: Option<u64>,
        status_code: u16,
        response_body: Value,
    ) -> Self {
        let mut message = message.into();
        if let Some(seconds) = retry_after {
            message.push_str(&messages::retry_suffix(seconds));
        }

        VsesvitError::RateLimit {
            message,
            retry_after,
            status_code,
            response_body,
        }
    }

    /// Creates an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        VsesvitError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for VsesvitError {
    fn from(err: serde_json::Error) -> Self {
        VsesvitError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for VsesvitError {
    fn from(err: url::ParseError) -> Self {
        VsesvitError::Configuration {
            message: format!("Invalid URL: {err}"),
        }
    }
}
