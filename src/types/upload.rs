//! File payloads for multipart uploads.

use std::path::Path;

use crate::errors::{VsesvitError, VsesvitResult};
use crate::transport::MultipartPart;

/// Multipart field the API expects uploads under.
pub(crate) const UPLOAD_FIELD: &str = "file";

const XLSX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const XLS: &str = "application/vnd.ms-excel";

/// A named file to upload.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadFile {
    filename: String,
    content_type: String,
    data: Vec<u8>,
}

impl UploadFile {
    /// Reads a file from disk, naming the upload after the file.
    pub async fn from_path(path: impl AsRef<Path>) -> VsesvitResult<Self> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                VsesvitError::configuration(format!(
                    "Upload path has no file name: {}",
                    path.display()
                ))
            })?;

        let data = tokio::fs::read(path)
            .await
            .map_err(|e| VsesvitError::io(path, e))?;

        Self::from_bytes(filename, data)
    }

    /// Wraps in-memory bytes. The name is required and must not be empty.
    pub fn from_bytes(filename: impl Into<String>, data: impl Into<Vec<u8>>) -> VsesvitResult<Self> {
        let filename = filename.into();
        if filename.trim().is_empty() {
            return Err(VsesvitError::configuration(
                "A file name is required when uploading raw bytes",
            ));
        }

        Ok(Self {
            content_type: content_type_for(&filename),
            filename,
            data: data.into(),
        })
    }

    /// Overrides the detected content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// File name sent with the upload.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Content type sent with the upload.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true for a zero-byte file.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub(crate) fn into_part(self) -> MultipartPart {
        MultipartPart::File {
            name: UPLOAD_FIELD.to_string(),
            filename: self.filename,
            content_type: self.content_type,
            data: self.data,
        }
    }
}

impl std::fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadFile")
            .field("filename", &self.filename)
            .field("content_type", &self.content_type)
            .field("len", &self.data.len())
            .finish()
    }
}

fn content_type_for(filename: &str) -> String {
    let extension = Path::new(filename)
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());

    match extension.as_deref() {
        Some("xlsx") => XLSX.to_string(),
        Some("xls") => XLS.to_string(),
        Some("csv") => mime::TEXT_CSV.to_string(),
        _ => mime::APPLICATION_OCTET_STREAM.to_string(),
    }
}
