//! Smart table creation payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST smart-tables/create`.
///
/// `input_asset_id` is the id returned by an upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSmartTableRequest {
    /// Project the table belongs to.
    pub project_id: u64,
    /// Table title.
    pub name: String,
    /// Instructions for generation.
    pub brief: String,
    /// Uploaded input file.
    pub input_asset_id: u64,
    /// Quality level, e.g. `premium` or `standard`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    /// Number of rows to process; 0 means all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_rows: Option<u64>,
    /// Number of rows to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_rows: Option<u64>,
    /// Column definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<Value>>,
    /// Additional fields sent alongside.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateSmartTableRequest {
    /// Creates a request with the required fields.
    pub fn new(
        project_id: u64,
        name: impl Into<String>,
        brief: impl Into<String>,
        input_asset_id: u64,
    ) -> Self {
        Self {
            project_id,
            name: name.into(),
            brief: brief.into(),
            input_asset_id,
            quality: None,
            limit_rows: None,
            offset_rows: None,
            columns: None,
            extra: Map::new(),
        }
    }

    /// Sets the quality level.
    #[must_use]
    pub fn quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = Some(quality.into());
        self
    }

    /// Sets how many rows to process.
    #[must_use]
    pub fn limit_rows(mut self, rows: u64) -> Self {
        self.limit_rows = Some(rows);
        self
    }

    /// Sets how many rows to skip.
    #[must_use]
    pub fn offset_rows(mut self, rows: u64) -> Self {
        self.offset_rows = Some(rows);
        self
    }

    /// Sets the column definitions.
    #[must_use]
    pub fn columns(mut self, columns: Vec<Value>) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Adds an extra field.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_required_fields_only() {
        let request = CreateSmartTableRequest::new(7, "Products", "Write descriptions", 99);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "projectId": 7,
                "name": "Products",
                "brief": "Write descriptions",
                "inputAssetId": 99
            })
        );
    }

    #[test]
    fn test_optional_fields_are_camel_case() {
        let request = CreateSmartTableRequest::new(7, "Products", "Brief", 99)
            .quality("premium")
            .limit_rows(0)
            .offset_rows(5)
            .columns(vec![json!({"name": "Description"})])
            .with("language", "uk");

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["quality"], json!("premium"));
        assert_eq!(value["limitRows"], json!(0));
        assert_eq!(value["offsetRows"], json!(5));
        assert_eq!(value["columns"], json!([{"name": "Description"}]));
        assert_eq!(value["language"], json!("uk"));
    }
}
