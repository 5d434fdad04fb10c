//! Landings service.

use bytes::Bytes;
use serde_json::Value;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::instrument;

use super::resource::{save, ResourceService};
use crate::client::{ApiRequest, Dispatcher};
use crate::errors::VsesvitResult;
use crate::types::ListQuery;

/// Landing pages.
#[derive(Debug, Clone)]
pub struct LandingsService {
    resource: ResourceService,
}

impl LandingsService {
    /// Creates a new landings service.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            resource: ResourceService::new(dispatcher, "landings"),
        }
    }

    /// Lists landings.
    pub async fn list(&self, query: ListQuery) -> VsesvitResult<Value> {
        self.resource.list(query).await
    }

    /// Gets one landing.
    pub async fn get(&self, id: impl Display) -> VsesvitResult<Value> {
        self.resource.get(id).await
    }

    /// Creates a landing from a free-form payload.
    pub async fn create(&self, payload: Value) -> VsesvitResult<Value> {
        self.resource.create(payload).await
    }

    /// Archives a landing.
    pub async fn archive(&self, id: impl Display) -> VsesvitResult<Value> {
        self.resource.archive(id).await
    }

    /// Restores an archived landing.
    pub async fn unarchive(&self, id: impl Display) -> VsesvitResult<Value> {
        self.resource.unarchive(id).await
    }

    /// Downloads the landing archive.
    #[instrument(skip_all, fields(id = %id))]
    pub async fn download(&self, id: impl Display) -> VsesvitResult<Bytes> {
        let endpoint = self.resource.item(&id, "/download");
        self.resource.fetch_binary(ApiRequest::get(endpoint)).await
    }

    /// Downloads the landing archive and writes it to `path`.
    pub async fn download_to(
        &self,
        id: impl Display,
        path: impl AsRef<Path>,
    ) -> VsesvitResult<PathBuf> {
        let bytes = self.download(id).await?;
        save(&bytes, path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockResponse;
    use crate::services::test_support::setup;

    #[tokio::test]
    async fn test_download() {
        let (transport, dispatcher) = setup();
        let service = LandingsService::new(dispatcher);
        transport.queue(MockResponse::bytes(200, b"PK\x03\x04"));

        let bytes = service.download(12).await.unwrap();

        assert_eq!(bytes.as_ref(), b"PK\x03\x04");
        let request = transport.last_request().unwrap();
        assert!(request.url.ends_with("/landings/12/download"));
        assert!(request.query.is_empty());
    }
}
