//! Integration tests for JSON resource calls.

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use vsesvit_client::{CreateProjectRequest, CreateSmartTableRequest, ListQuery, UploadFile};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_list_returns_body_unchanged() {
    let mock_server = setup_mock_server().await;
    let body = json!({
        "data": [{"id": 11505, "title": "First"}, {"id": 11506, "title": "Second"}],
        "total": 2,
        "page": 1
    });

    Mock::given(method("GET"))
        .and(path("/articles"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "2"))
        .and(header("X-API-KEY", VALID_KEY))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client
        .articles()
        .list(ListQuery::new().page(1).limit(2))
        .await
        .unwrap();

    assert_eq!(result, body);
}

#[tokio::test]
async fn test_empty_success_body_is_empty_object() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("PUT"))
        .and(path("/projects/42/archive"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.projects().archive(42).await.unwrap();

    assert_eq!(result, json!({}));
}

#[tokio::test]
async fn test_create_project_posts_json() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/projects/create"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"name": "Blog", "description": "Company blog"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 3})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let created = client
        .projects()
        .create(CreateProjectRequest::new("Blog", "Company blog"))
        .await
        .unwrap();

    assert_eq!(created, json!({"id": 3}));
}

#[tokio::test]
async fn test_upload_then_create_smart_table() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/smart-tables/upload-file"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 501})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/smart-tables/create"))
        .and(body_json(json!({
            "projectId": 7,
            "name": "Products",
            "brief": "Write descriptions",
            "inputAssetId": 501
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 9})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let file = UploadFile::from_bytes("products.csv", b"sku,name\n1,Widget\n".to_vec()).unwrap();
    let uploaded = client.smart_tables().upload(file).await.unwrap();
    let asset_id = uploaded["id"].as_u64().unwrap();

    let table = client
        .smart_tables()
        .create(CreateSmartTableRequest::new(7, "Products", "Write descriptions", asset_id))
        .await
        .unwrap();

    assert_eq!(table, json!({"id": 9}));

    let requests = mock_server.received_requests().await.unwrap();
    let upload = &requests[0];
    let content_type = upload
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data"));
    let body = String::from_utf8_lossy(&upload.body);
    assert!(body.contains("name=\"file\""));
    assert!(body.contains("filename=\"products.csv\""));
    assert!(body.contains("1,Widget"));
}

#[tokio::test]
async fn test_user_me_and_referrals() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/user/me"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 1, "balance": 120.5})),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/user/referrals"))
        .and(query_param("search", "ann"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [], "total": 0})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let me = client.user().me().await.unwrap();
    assert_eq!(me["balance"], json!(120.5));

    let referrals = client
        .user()
        .referrals(ListQuery::new().search("ann"))
        .await
        .unwrap();
    assert_eq!(referrals["total"], json!(0));
}
