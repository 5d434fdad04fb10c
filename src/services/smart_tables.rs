//! Smart tables service.
//!
//! A smart table is created in two steps: upload the input spreadsheet, then
//! create the table referencing the returned asset id.

use bytes::Bytes;
use serde_json::Value;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::instrument;

use super::resource::{save, ResourceService};
use crate::client::{ApiRequest, Dispatcher};
use crate::errors::VsesvitResult;
use crate::types::{CreateSmartTableRequest, ListQuery, UploadFile};

/// Format used when a download does not name one.
pub const DEFAULT_DOWNLOAD_FORMAT: &str = "xlsx";

/// Smart tables.
#[derive(Debug, Clone)]
pub struct SmartTablesService {
    resource: ResourceService,
}

impl SmartTablesService {
    /// Creates a new smart tables service.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            resource: ResourceService::new(dispatcher, "smart-tables"),
        }
    }

    /// Lists smart tables.
    pub async fn list(&self, query: ListQuery) -> VsesvitResult<Value> {
        self.resource.list(query).await
    }

    /// Gets one smart table.
    pub async fn get(&self, id: impl Display) -> VsesvitResult<Value> {
        self.resource.get(id).await
    }

    /// Creates a smart table from an uploaded asset.
    pub async fn create(&self, request: CreateSmartTableRequest) -> VsesvitResult<Value> {
        self.resource.create(serde_json::to_value(&request)?).await
    }

    /// Archives a smart table.
    pub async fn archive(&self, id: impl Display) -> VsesvitResult<Value> {
        self.resource.archive(id).await
    }

    /// Restores an archived smart table.
    pub async fn unarchive(&self, id: impl Display) -> VsesvitResult<Value> {
        self.resource.unarchive(id).await
    }

    /// Uploads an input file; the response carries the asset id for [`Self::create`].
    #[instrument(skip_all, fields(filename = %file.filename(), bytes = file.len()))]
    pub async fn upload(&self, file: UploadFile) -> VsesvitResult<Value> {
        let request = ApiRequest::post("smart-tables/upload-file").file(file.into_part());
        self.resource.dispatcher().request_json(request).await
    }

    /// Downloads a smart table.
    ///
    /// `None` selects [`DEFAULT_DOWNLOAD_FORMAT`]; an empty format sends no
    /// `format` parameter and leaves the choice to the server.
    #[instrument(skip_all, fields(id = %id))]
    pub async fn download(&self, id: impl Display, format: Option<&str>) -> VsesvitResult<Bytes> {
        let mut request = ApiRequest::get(self.resource.item(&id, "/download"));

        let format = format.unwrap_or(DEFAULT_DOWNLOAD_FORMAT);
        if !format.is_empty() {
            request = request.query("format", format);
        }

        self.resource.fetch_binary(request).await
    }

    /// Downloads a smart table and writes it to `path`.
    pub async fn download_to(
        &self,
        id: impl Display,
        format: Option<&str>,
        path: impl AsRef<Path>,
    ) -> VsesvitResult<PathBuf> {
        let bytes = self.download(id, format).await?;
        save(&bytes, path).await
    }
}
