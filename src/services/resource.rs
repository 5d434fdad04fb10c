//! Operations shared by every collection resource.

use bytes::Bytes;
use serde_json::Value;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::instrument;

use crate::client::{ApiRequest, Dispatcher};
use crate::errors::{VsesvitError, VsesvitResult};
use crate::types::ListQuery;

/// `accept` value for binary downloads.
pub(crate) const OCTET_STREAM: &str = "application/octet-stream";

/// List, get, create, archive and unarchive for one plural path
/// (`articles`, `knowledge-bases`, ...).
#[derive(Debug, Clone)]
pub struct ResourceService {
    dispatcher: Arc<Dispatcher>,
    path: &'static str,
}

impl ResourceService {
    /// Creates a service rooted at `path`.
    pub fn new(dispatcher: Arc<Dispatcher>, path: &'static str) -> Self {
        Self { dispatcher, path }
    }

    /// The plural path this service addresses.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// `GET <path>` with query parameters.
    #[instrument(skip_all, fields(resource = self.path))]
    pub async fn list(&self, query: ListQuery) -> VsesvitResult<Value> {
        let request = ApiRequest::get(self.path).query_pairs(query.into_pairs());
        self.dispatcher.request_json(request).await
    }

    /// `GET <path>/{id}`.
    #[instrument(skip_all, fields(resource = self.path, id = %id))]
    pub async fn get(&self, id: impl Display) -> VsesvitResult<Value> {
        self.dispatcher
            .request_json(ApiRequest::get(self.item(&id, "")))
            .await
    }

    /// `POST <path>/create` with a JSON payload.
    #[instrument(skip_all, fields(resource = self.path))]
    pub async fn create(&self, payload: Value) -> VsesvitResult<Value> {
        let request = ApiRequest::post(format!("{}/create", self.path)).payload(payload);
        self.dispatcher.request_json(request).await
    }

    /// `PUT <path>/{id}/archive`.
    #[instrument(skip_all, fields(resource = self.path, id = %id))]
    pub async fn archive(&self, id: impl Display) -> VsesvitResult<Value> {
        self.dispatcher
            .request_json(ApiRequest::put(self.item(&id, "/archive")))
            .await
    }

    /// `PUT <path>/{id}/unarchive`.
    #[instrument(skip_all, fields(resource = self.path, id = %id))]
    pub async fn unarchive(&self, id: impl Display) -> VsesvitResult<Value> {
        self.dispatcher
            .request_json(ApiRequest::put(self.item(&id, "/unarchive")))
            .await
    }

    pub(crate) fn item(&self, id: &dyn Display, suffix: &str) -> String {
        format!("{}/{id}{suffix}", self.path)
    }

    pub(crate) fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Sends a GET for binary content and returns the bytes untouched.
    pub(crate) async fn fetch_binary(&self, request: ApiRequest) -> VsesvitResult<Bytes> {
        self.dispatcher
            .request_raw(request.header("accept", OCTET_STREAM))
            .await
    }
}

/// Writes downloaded bytes to `path` and returns it.
pub(crate) async fn save(bytes: &[u8], path: impl AsRef<Path>) -> VsesvitResult<PathBuf> {
    let path = path.as_ref().to_path_buf();
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|e| VsesvitError::io(&path, e))?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Download saved");
    Ok(path)
}
