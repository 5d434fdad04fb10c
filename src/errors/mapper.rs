//! Maps failed HTTP responses to [`VsesvitError`] variants.
//!
//! Classification is driven by the status code. The message shown to the
//! caller comes from the first readable candidate in the body, and the
//! resource named in the message comes from the request path.

use serde_json::{Map, Value};

use super::messages;
use super::resource::{parse_resource_info, ResourceDescriptor};
use super::{FieldErrors, VsesvitError};
use crate::auth::ApiKeyFormat;
use crate::observability::redact;
use crate::transport::HttpResponse;

/// Number of characters of raw body text used as a last-resort message.
const RAW_TEXT_LIMIT: usize = 100;

/// Message and parsed body extracted from an error response.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorInfo {
    /// Best human-readable message; never empty.
    pub message: String,
    /// Parsed JSON body, or an empty object when the body is empty or malformed.
    pub body: Value,
}

type Extractor = fn(&Value) -> Option<String>;

// Tried in order; the first non-empty string wins.
const MESSAGE_EXTRACTORS: [Extractor; 3] = [top_level_message, top_level_error, nested_message];

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn top_level_message(body: &Value) -> Option<String> {
    non_empty_str(body.get("message"))
}

fn top_level_error(body: &Value) -> Option<String> {
    non_empty_str(body.get("error"))
}

fn nested_message(body: &Value) -> Option<String> {
    body.as_object()?
        .values()
        .filter_map(Value::as_object)
        .find_map(|nested| {
            non_empty_str(nested.get("message")).or_else(|| non_empty_str(nested.get("error")))
        })
}

fn truncated_text(response: &HttpResponse) -> Option<String> {
    let text: String = response.text().chars().take(RAW_TEXT_LIMIT).collect();
    (!text.is_empty()).then_some(text)
}

fn parse_body(raw: &[u8]) -> Value {
    if raw.is_empty() {
        return Value::Object(Map::new());
    }
    serde_json::from_slice(raw).unwrap_or_else(|_| Value::Object(Map::new()))
}

/// Extracts the message and parsed body from an error response.
pub fn extract_error_info(response: &HttpResponse) -> ErrorInfo {
    let body = parse_body(&response.body);

    let message = MESSAGE_EXTRACTORS
        .iter()
        .find_map(|extract| extract(&body))
        .or_else(|| truncated_text(response))
        .unwrap_or_else(|| messages::http_status_error(response.status));

    ErrorInfo { message, body }
}

fn prefer(message: String, fallback: impl FnOnce() -> String) -> String {
    if message.is_empty() {
        fallback()
    } else {
        message
    }
}

/// Parses a `Retry-After` value made only of ASCII digits.
fn parse_retry_after(response: &HttpResponse) -> Option<u64> {
    let value = response.header("Retry-After")?;
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Field errors under the top-level `errors` key.
///
/// Only an object yields entries. Any other shape stays visible in
/// `response_body` only.
fn field_errors(body: &Value) -> FieldErrors {
    match body.get("errors") {
        Some(Value::Object(errors)) => errors.clone(),
        Some(other) => {
            tracing::debug!(errors = %other, "Ignoring non-object validation errors");
            FieldErrors::new()
        }
        None => FieldErrors::new(),
    }
}

/// Classifies a failed response (status >= 400) into exactly one error.
///
/// `endpoint` is the request path as the caller passed it and `api_key` the
/// key that was sent. When `debug` is set a diagnostic event is logged; it
/// never changes the result.
pub fn map_error_response(
    response: &HttpResponse,
    endpoint: &str,
    api_key: &str,
    key_format: &ApiKeyFormat,
    debug: bool,
) -> VsesvitError {
    let status_code = response.status;
    let ErrorInfo {
        message,
        body: response_body,
    } = extract_error_info(response);

    if debug {
        tracing::warn!(
            target: "vsesvit_client::debug",
            status = status_code,
            message = %message,
            body = %redact(&response_body.to_string()),
            endpoint,
            headers = ?response.headers,
            "API error response"
        );
    }

    let resource = parse_resource_info(endpoint);

    match status_code {
        401 => map_unauthorized(&resource, api_key, key_format, response_body),
        403 => {
            let resource_type = resource.type_or_default().to_string();
            VsesvitError::AccessDenied {
                message: prefer(message, || messages::access_denied(&resource_type)),
                resource_type,
                resource_id: resource.resource_id,
                status_code,
                response_body,
            }
        }
        404 => {
            // The server text is deliberately not used here.
            let resource_type = resource.type_or_default().to_string();
            let mut message = messages::resource_not_found(&resource_type);
            if let Some(id) = &resource.resource_id {
                message.push_str(&format!(" (ID: {id})"));
            }
            VsesvitError::ResourceNotFound {
                message,
                resource_type,
                resource_id: resource.resource_id,
                status_code,
                response_body,
            }
        }
        400 => {
            let errors = field_errors(&response_body);
            VsesvitError::validation(
                prefer(message, || messages::VALIDATION_FAILED.to_string()),
                errors,
                status_code,
                response_body,
            )
        }
        429 => {
            let retry_after = parse_retry_after(response);
            if message.is_empty() {
                let fallback = retry_after
                    .map_or_else(|| messages::RATE_LIMIT.to_string(), messages::rate_limit_with_retry);
                VsesvitError::RateLimit {
                    message: fallback,
                    retry_after,
                    status_code,
                    response_body,
                }
            } else {
                VsesvitError::rate_limit(message, retry_after, status_code, response_body)
            }
        }
        500.. => VsesvitError::Server {
            message: prefer(message, || messages::server_error(status_code)),
            status_code,
            response_body,
        },
        _ => VsesvitError::Generic {
            message: prefer(message, || messages::api_error(status_code)),
            status_code,
            response_body,
        },
    }
}

fn map_unauthorized(
    resource: &ResourceDescriptor,
    api_key: &str,
    key_format: &ApiKeyFormat,
    response_body: Value,
) -> VsesvitError {
    let status_code = 401;

    if key_format.matches(api_key) && resource.is_known_with_id() {
        let resource_type = resource.type_or_default().to_string();
        return VsesvitError::AccessDenied {
            message: messages::resource_access(&resource_type),
            resource_type,
            resource_id: resource.resource_id.clone(),
            status_code,
            response_body,
        };
    }

    VsesvitError::Authentication {
        message: messages::INVALID_API_KEY.to_string(),
        status_code,
        response_body,
    }
}
