//! Articles service.

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

/// Articles: listing, creation, archiving and export.
#[derive(Debug, Clone)]
pub struct ArticlesService {
    resource: ResourceService,
}

impl ArticlesService {
    /// Creates a new articles service.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            resource: ResourceService::new(dispatcher, "articles"),
        }
    }

    /// Lists articles.
    pub async fn list(&self, query: ListQuery) -> VsesvitResult<Value> {
        self.resource.list(query).await
    }

    /// Gets one article.
    pub async fn get(&self, id: impl Display) -> VsesvitResult<Value> {
        self.resource.get(id).await
    }

    /// Creates an article from a free-form payload.
    pub async fn create(&self, payload: Value) -> VsesvitResult<Value> {
        self.resource.create(payload).await
    }

    /// Archives an article.
    pub async fn archive(&self, id: impl Display) -> VsesvitResult<Value> {
        self.resource.archive(id).await
    }

    /// Restores an archived article.
    pub async fn unarchive(&self, id: impl Display) -> VsesvitResult<Value> {
        self.resource.unarchive(id).await
    }

    /// Downloads an article rendered as `format` (`pdf`, `docx`, ...).
    #[instrument(skip_all, fields(id = %id, format = %format))]
    pub async fn download(&self, id: impl Display, format: &str) -> VsesvitResult<Bytes> {
        let endpoint = self.resource.item(&id, &format!("/download/{format}"));
        self.resource.fetch_binary(ApiRequest::get(endpoint)).await
    }

    /// Downloads an article and writes it to `path`.
    pub async fn download_to(
        &self,
        id: impl Display,
        format: &str,
        path: impl AsRef<Path>,
    ) -> VsesvitResult<PathBuf> {
        let bytes = self.download(id, format).await?;
        save(&bytes, path).await
    }
}
