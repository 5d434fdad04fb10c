//! Request and response shapes accepted by the dispatcher.

use bytes::Bytes;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::time::Duration;

use crate::errors::{VsesvitError, VsesvitResult};
use crate::transport::{HttpMethod, MultipartPart};

/// How a successful response body is returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseDecoding {
    /// Parse the body as JSON; an empty body becomes an empty object.
    #[default]
    Json,
    /// Return the body bytes untouched.
    Raw,
}

/// A single API call, described independently of the transport.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Endpoint path relative to the base URL.
    pub endpoint: String,
    /// Query string parameters, in order.
    pub query: Vec<(String, String)>,
    /// JSON payload.
    pub payload: Option<Value>,
    /// Extra headers; these override the defaults on collision.
    pub headers: HashMap<String, String>,
    /// Multipart file parts; when present they form the request body.
    pub files: Vec<MultipartPart>,
    /// Per-call timeout.
    pub timeout: Option<Duration>,
    /// Response decoding.
    pub decoding: ResponseDecoding,
}

impl ApiRequest {
    /// Creates a request for `endpoint`.
    pub fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            query: Vec::new(),
            payload: None,
            headers: HashMap::new(),
            files: Vec::new(),
            timeout: None,
            decoding: ResponseDecoding::Json,
        }
    }

    /// Creates a GET request.
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, endpoint)
    }

    /// Creates a POST request.
    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, endpoint)
    }

    /// Creates a PUT request.
    pub fn put(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, endpoint)
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Appends several query parameters.
    #[must_use]
    pub fn query_pairs<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Sets the JSON payload.
    #[must_use]
    pub fn payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Adds a multipart part.
    #[must_use]
    pub fn file(mut self, part: MultipartPart) -> Self {
        self.files.push(part);
        self
    }

    /// Sets the per-call timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the body bytes untouched instead of parsing JSON.
    #[must_use]
    pub fn raw(mut self) -> Self {
        self.decoding = ResponseDecoding::Raw;
        self
    }
}

/// A decoded successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Parsed JSON body.
    Json(Value),
    /// Raw body bytes.
    Raw(Bytes),
}

impl ApiResponse {
    /// Returns the JSON value, or an empty object for a raw response with no bytes.
    pub fn into_json(self) -> VsesvitResult<Value> {
        match self {
            ApiResponse::Json(value) => Ok(value),
            ApiResponse::Raw(bytes) if bytes.is_empty() => Ok(Value::Object(Map::new())),
            ApiResponse::Raw(bytes) => Ok(serde_json::from_slice(&bytes)?),
        }
    }

    /// Returns the body bytes; JSON values are re-encoded.
    pub fn into_bytes(self) -> VsesvitResult<Bytes> {
        match self {
            ApiResponse::Raw(bytes) => Ok(bytes),
            ApiResponse::Json(value) => serde_json::to_vec(&value)
                .map(Bytes::from)
                .map_err(VsesvitError::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_builder() {
        let request = ApiRequest::get("smart-tables/4/download")
            .query("format", "csv")
            .header("accept", "application/octet-stream")
            .timeout(Duration::from_secs(10))
            .raw();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.query, vec![("format".to_string(), "csv".to_string())]);
        assert_eq!(request.decoding, ResponseDecoding::Raw);
        assert_eq!(request.timeout, Some(Duration::from_secs(10)));
        assert!(request.payload.is_none());
    }

    #[test]
    fn test_query_pairs_keep_order() {
        let request = ApiRequest::get("articles").query_pairs([("page", "1"), ("limit", "2")]);

        assert_eq!(request.query[0].0, "page");
        assert_eq!(request.query[1].0, "limit");
    }

    #[test]
    fn test_default_decoding_is_json() {
        assert_eq!(ApiRequest::put("articles/1/archive").decoding, ResponseDecoding::Json);
    }

    #[test]
    fn test_response_conversions() {
        let json_response = ApiResponse::Json(json!({"id": 1}));
        assert_eq!(json_response.clone().into_json().unwrap(), json!({"id": 1}));
        assert_eq!(json_response.into_bytes().unwrap(), Bytes::from_static(b"{\"id\":1}"));

        let raw = ApiResponse::Raw(Bytes::from_static(b"PDF..."));
        assert_eq!(raw.clone().into_bytes().unwrap(), Bytes::from_static(b"PDF..."));
        assert!(raw.into_json().is_err());

        assert_eq!(ApiResponse::Raw(Bytes::new()).into_json().unwrap(), json!({}));
    }
}
