//! Current user service.

use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

use crate::client::{ApiRequest, Dispatcher};
use crate::errors::VsesvitResult;
use crate::types::ListQuery;

/// The account the API key belongs to.
#[derive(Debug, Clone)]
pub struct UserService {
    dispatcher: Arc<Dispatcher>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Profile of the current user, including balance.
    #[instrument(skip(self))]
    pub async fn me(&self) -> VsesvitResult<Value> {
        self.dispatcher.request_json(ApiRequest::get("user/me")).await
    }

    /// Users who signed up with the current user's referral code.
    #[instrument(skip_all)]
    pub async fn referrals(&self, query: ListQuery) -> VsesvitResult<Value> {
        let request = ApiRequest::get("user/referrals").query_pairs(query.into_pairs());
        self.dispatcher.request_json(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::services::test_support::setup;
    use serde_json::json;

    #[tokio::test]
    async fn test_me() {
        let (transport, dispatcher) = setup();
        transport.queue_json(&json!({"id": 1, "email": "user@example.com"}));

        let me = UserService::new(dispatcher).me().await.unwrap();

        assert_eq!(me["email"], json!("user@example.com"));
        assert!(transport.last_request().unwrap().url.ends_with("/user/me"));
    }

    #[tokio::test]
    async fn test_referrals_query() {
        let (transport, dispatcher) = setup();
        transport.queue_json(&json!({"data": [], "total": 0}));

        UserService::new(dispatcher)
            .referrals(ListQuery::new().offset(10).limit(5))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert!(request.url.ends_with("/user/referrals"));
        assert_eq!(request.query.len(), 2);
    }

    #[tokio::test]
    async fn test_denied_without_body_names_user_resource() {
        let (transport, dispatcher) = setup();
        transport.queue(crate::mocks::MockResponse::empty(403));

        let error = UserService::new(dispatcher).me().await.unwrap_err();

        assert_eq!(error.kind(), ErrorKind::AccessDenied);
        assert_eq!(error.to_string(), "HTTP 403 error");
        match error {
            crate::VsesvitError::AccessDenied { resource_type, .. } => assert_eq!(resource_type, "user"),
            other => panic!("Expected AccessDenied, got {other:?}"),
        }
    }
}
