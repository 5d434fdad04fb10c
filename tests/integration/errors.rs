//! Integration tests for error classification.

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use vsesvit_client::{ErrorKind, VsesvitClient, VsesvitError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

async fn mount(server: &wiremock::MockServer, http_method: &str, route: &str, response: ResponseTemplate) {
    Mock::given(method(http_method))
        .and(path(route))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_401_with_malformed_key() {
    let mock_server = setup_mock_server().await;
    mount(
        &mock_server,
        "GET",
        "/articles/11505",
        ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthorized"})),
    )
    .await;

    let client = client_with_key(&mock_server, "vsa_tooshort");
    let error = client.articles().get(11505).await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Authentication);
    assert_eq!(error.to_string(), "Invalid API key or credentials");
    assert_eq!(error.status_code(), Some(401));
}

#[tokio::test]
async fn test_401_with_valid_key_on_known_resource() {
    let mock_server = setup_mock_server().await;
    mount(
        &mock_server,
        "GET",
        "/articles/11505",
        ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthorized"})),
    )
    .await;

    let client = client_for(&mock_server);
    let error = client.articles().get(11505).await.unwrap_err();

    match error {
        VsesvitError::AccessDenied {
            message,
            resource_type,
            resource_id,
            status_code,
            ..
        } => {
            assert_eq!(
                message,
                "article doesn't exist or you don't have permission to access it"
            );
            assert_eq!(resource_type, "article");
            assert_eq!(resource_id.as_deref(), Some("11505"));
            assert_eq!(status_code, 401);
        }
        other => panic!("Expected AccessDenied, got {other:?}"),
    }
}

#[tokio::test]
async fn test_403_uses_server_message() {
    let mock_server = setup_mock_server().await;
    mount(
        &mock_server,
        "PUT",
        "/landings/12/archive",
        ResponseTemplate::new(403).set_body_json(json!({"error": "Plan does not include landings"})),
    )
    .await;

    let client = client_for(&mock_server);
    let error = client.landings().archive(12).await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::AccessDenied);
    assert_eq!(error.to_string(), "Plan does not include landings");
    assert_eq!(
        error.response_body(),
        Some(&json!({"error": "Plan does not include landings"}))
    );
}

#[tokio::test]
async fn test_404_uses_template() {
    let mock_server = setup_mock_server().await;
    mount(
        &mock_server,
        "GET",
        "/articles/99999",
        ResponseTemplate::new(404).set_body_json(json!({"message": "Article not found in database"})),
    )
    .await;

    let client = client_for(&mock_server);
    let error = client.articles().get(99999).await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::ResourceNotFound);
    assert_eq!(
        error.to_string(),
        "The requested article was not found (ID: 99999)"
    );
}

#[tokio::test]
async fn test_400_lists_field_errors() {
    let mock_server = setup_mock_server().await;
    mount(
        &mock_server,
        "POST",
        "/articles/create",
        ResponseTemplate::new(400).set_body_json(json!({
            "message": "Validation failed",
            "errors": {
                "name": "Name is required",
                "language": ["Invalid language code"]
            }
        })),
    )
    .await;

    let client = client_for(&mock_server);
    let error = client.articles().create(json!({})).await.unwrap_err();

    assert_eq!(
        error.to_string(),
        "Validation failed:\n- name: Name is required\n- language: Invalid language code"
    );
    match error {
        VsesvitError::Validation { errors, .. } => assert_eq!(errors.len(), 2),
        other => panic!("Expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn test_429_with_retry_after() {
    let mock_server = setup_mock_server().await;
    mount(
        &mock_server,
        "GET",
        "/projects",
        ResponseTemplate::new(429)
            .insert_header("Retry-After", "30")
            .set_body_json(json!({"message": "Too many requests"})),
    )
    .await;

    let client = client_for(&mock_server);
    let error = client
        .projects()
        .list(vsesvit_client::ListQuery::new())
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::RateLimit);
    assert_eq!(error.to_string(), "Too many requests, retry after 30 seconds");
    assert_eq!(error.retry_after(), Some(std::time::Duration::from_secs(30)));
}

#[tokio::test]
async fn test_5xx_with_plain_text_body() {
    let mock_server = setup_mock_server().await;
    let long_text = "x".repeat(250);
    mount(
        &mock_server,
        "GET",
        "/user/me",
        ResponseTemplate::new(502).set_body_string(long_text),
    )
    .await;

    let client = client_for(&mock_server);
    let error = client.user().me().await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Server);
    assert_eq!(error.message().chars().count(), 100);
    assert_eq!(error.response_body(), Some(&json!({})));
}

#[tokio::test]
async fn test_other_4xx_is_generic() {
    let mock_server = setup_mock_server().await;
    mount(
        &mock_server,
        "GET",
        "/authors/5",
        ResponseTemplate::new(409).set_body_json(json!({"detail": {"message": "Conflict on author"}})),
    )
    .await;

    let client = client_for(&mock_server);
    let error = client.authors().get(5).await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Generic);
    assert_eq!(error.to_string(), "Conflict on author");
    assert_eq!(error.status_code(), Some(409));
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let client = VsesvitClient::builder()
        .api_key(VALID_KEY)
        .base_url(format!("http://{address}/api/v1"))
        .timeout_secs(5)
        .build()
        .unwrap();

    let error = client.user().me().await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Network);
    assert!(error
        .to_string()
        .starts_with("Network error connecting to VsesvitAI API: "));
    assert_eq!(error.status_code(), None);
    assert!(std::error::Error::source(&error).is_some());
}

#[tokio::test]
async fn test_malformed_success_body_is_network_error() {
    let mock_server = setup_mock_server().await;
    mount(
        &mock_server,
        "GET",
        "/user/me",
        ResponseTemplate::new(200).set_body_string("<html>ok</html>"),
    )
    .await;

    let client = client_for(&mock_server);
    let error = client.user().me().await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Network);
    assert_eq!(error.status_code(), None);
    assert!(error
        .to_string()
        .starts_with("Network error connecting to VsesvitAI API: Invalid response: "));
}
