//! The single path every API call takes to the network.

use bytes::Bytes;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use super::request::{ApiRequest, ApiResponse, ResponseDecoding};
use crate::auth::{ApiKeyFormat, AuthProvider};
use crate::config::VsesvitConfig;
use crate::errors::{map_error_response, VsesvitError, VsesvitResult};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, RequestBody, TransportError};

/// Header key checked, case-sensitively, before defaulting `accept`.
const ACCEPT: &str = "accept";

/// Sends requests and turns failed responses into typed errors.
///
/// Holds only read-only configuration, so one instance can serve
/// concurrent calls.
pub struct Dispatcher {
    transport: Arc<dyn HttpTransport>,
    auth: Arc<dyn AuthProvider>,
    base_url: String,
    key_format: ApiKeyFormat,
    debug: bool,
    default_timeout: Option<Duration>,
}

impl Dispatcher {
    /// Creates a dispatcher from a configuration.
    pub fn new(
        config: &VsesvitConfig,
        transport: Arc<dyn HttpTransport>,
        auth: Arc<dyn AuthProvider>,
    ) -> Self {
        Self {
            transport,
            auth,
            base_url: config.base_url.clone(),
            key_format: config.key_format.clone(),
            debug: config.debug,
            default_timeout: config.timeout,
        }
    }

    /// Joins the base URL and an endpoint.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Builds request headers: credentials, a JSON `accept` default, then caller overrides.
    fn build_headers(&self, overrides: &HashMap<String, String>) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        self.auth.apply_auth(&mut headers);

        if !overrides.contains_key(ACCEPT) {
            headers.insert(ACCEPT.to_string(), mime::APPLICATION_JSON.to_string());
        }

        headers.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        headers
    }

    fn build_http_request(&self, request: &ApiRequest) -> VsesvitResult<HttpRequest> {
        let body = if !request.files.is_empty() {
            Some(RequestBody::Multipart(request.files.clone()))
        } else if let Some(payload) = &request.payload {
            Some(RequestBody::Json(serde_json::to_vec(payload)?))
        } else {
            None
        };

        Ok(HttpRequest {
            method: request.method,
            url: self.url(&request.endpoint),
            query: request.query.clone(),
            headers: self.build_headers(&request.headers),
            body,
            timeout: request.timeout.or(self.default_timeout),
        })
    }

    /// Sends one request.
    ///
    /// A transport failure becomes [`VsesvitError::Network`]; a status of 400
    /// or above is classified by [`map_error_response`]. No retries.
    #[instrument(skip(self, request), fields(method = %request.method, endpoint = %request.endpoint))]
    pub async fn dispatch(&self, request: ApiRequest) -> VsesvitResult<ApiResponse> {
        let http_request = self.build_http_request(&request)?;

        let response = self.transport.send(http_request).await.map_err(|e| {
            tracing::debug!(error = %e, "Transport failure");
            VsesvitError::network(e)
        })?;

        tracing::debug!(status = response.status, bytes = response.body.len(), "Response received");

        if !response.is_success() {
            return Err(map_error_response(
                &response,
                &request.endpoint,
                self.auth.api_key(),
                &self.key_format,
                self.debug,
            ));
        }

        decode(response, request.decoding)
    }

    /// Sends a request and returns the JSON body.
    pub async fn request_json(&self, request: ApiRequest) -> VsesvitResult<Value> {
        let request = ApiRequest {
            decoding: ResponseDecoding::Json,
            ..request
        };
        self.dispatch(request).await?.into_json()
    }

    /// Sends a request and returns the raw body bytes.
    pub async fn request_raw(&self, request: ApiRequest) -> VsesvitResult<Bytes> {
        self.dispatch(request.raw()).await?.into_bytes()
    }
}

fn decode(response: HttpResponse, decoding: ResponseDecoding) -> VsesvitResult<ApiResponse> {
    match decoding {
        ResponseDecoding::Raw => Ok(ApiResponse::Raw(response.body)),
        ResponseDecoding::Json if response.body.is_empty() => {
            Ok(ApiResponse::Json(Value::Object(Map::new())))
        }
        ResponseDecoding::Json => serde_json::from_slice(&response.body)
            .map(ApiResponse::Json)
            .map_err(|e| {
                VsesvitError::network(TransportError::InvalidResponse {
                    message: format!("Failed to parse response: {e}"),
                })
            }),
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("base_url", &self.base_url)
            .field("debug", &self.debug)
            .field("default_timeout", &self.default_timeout)
            .finish_non_exhaustive()
    }
}
