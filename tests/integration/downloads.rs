//! Integration tests for binary downloads.

use super::*;
use vsesvit_client::ErrorKind;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_article_download_returns_exact_bytes() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/articles/11505/download/pdf"))
        .and(header("accept", "application/octet-stream"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"PDF...".to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let bytes = client.articles().download(11505, "pdf").await.unwrap();

    assert_eq!(bytes.as_ref(), b"PDF...");
}

#[tokio::test]
async fn test_article_download_to_path() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/articles/11505/download/pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"PDF...".to_vec()))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("article.pdf");

    let client = client_for(&mock_server);
    let saved = client
        .articles()
        .download_to(11505, "pdf", &target)
        .await
        .unwrap();

    assert_eq!(saved, target);
    assert_eq!(std::fs::read(&target).unwrap(), b"PDF...");
}

#[tokio::test]
async fn test_binary_bytes_survive_untouched() {
    let mock_server = setup_mock_server().await;
    let payload: Vec<u8> = (0..=255).collect();

    Mock::given(method("GET"))
        .and(path("/landings/3/download"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let bytes = client.landings().download(3).await.unwrap();

    assert_eq!(bytes.to_vec(), payload);
}

#[tokio::test]
async fn test_smart_table_download_default_format() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/smart-tables/4/download"))
        .and(query_param("format", "xlsx"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"XLSX".to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let bytes = client.smart_tables().download(4, None).await.unwrap();

    assert_eq!(bytes.as_ref(), b"XLSX");
}

#[tokio::test]
async fn test_smart_table_download_empty_format_sends_no_query() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/smart-tables/4/download"))
        .and(query_param_is_missing("format"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"DEFAULT".to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("table.bin");

    client
        .smart_tables()
        .download_to(4, Some(""), &target)
        .await
        .unwrap();

    assert_eq!(std::fs::read(&target).unwrap(), b"DEFAULT");
}

#[tokio::test]
async fn test_failed_download_is_classified() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/articles/99999/download/pdf"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = client.articles().download(99999, "pdf").await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::ResourceNotFound);
    assert_eq!(
        error.to_string(),
        "The requested article was not found (ID: 99999)"
    );
}
