//! HTTP transport layer for the VsesvitAI client.
//!
//! The dispatcher talks to the network only through [`HttpTransport`], so
//! tests and callers can substitute their own implementation.

mod http;

pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, HttpTransportImpl};

use std::time::Duration;

/// Request body variants.
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// JSON-encoded bytes.
    Json(Vec<u8>),
    /// Multipart form, used for file uploads.
    Multipart(Vec<MultipartPart>),
}

/// A part of a multipart form.
#[derive(Debug, Clone)]
pub enum MultipartPart {
    /// Text field.
    Text {
        /// Field name.
        name: String,
        /// Field value.
        value: String,
    },
    /// File field.
    File {
        /// Field name.
        name: String,
        /// File name.
        filename: String,
        /// Content type.
        content_type: String,
        /// File data.
        data: Vec<u8>,
    },
}

impl MultipartPart {
    /// Returns the form field name.
    pub fn name(&self) -> &str {
        match self {
            MultipartPart::Text { name, .. } | MultipartPart::File { name, .. } => name,
        }
    }
}

/// Failure to obtain any HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection could not be established (refused, DNS, TLS).
    #[error("Connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// The request did not complete in time.
    #[error("Request timed out{}", .timeout.map(|t| format!(" after {t:?}")).unwrap_or_default())]
    Timeout {
        /// Deadline that was exceeded, if known.
        timeout: Option<Duration>,
    },

    /// The request could not be built or sent.
    #[error("Request error: {message}")]
    Request {
        /// Error message.
        message: String,
    },

    /// The response could not be read.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_display() {
        let err = TransportError::Timeout {
            timeout: Some(Duration::from_secs(5)),
        };
        assert_eq!(err.to_string(), "Request timed out after 5s");

        let err = TransportError::Timeout { timeout: None };
        assert_eq!(err.to_string(), "Request timed out");
    }

    #[test]
    fn test_multipart_part_name() {
        let part = MultipartPart::File {
            name: "file".to_string(),
            filename: "table.xlsx".to_string(),
            content_type: "application/octet-stream".to_string(),
            data: vec![1, 2, 3],
        };
        assert_eq!(part.name(), "file");
    }
}
