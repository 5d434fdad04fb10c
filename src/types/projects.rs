//! Project creation payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST projects/create`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    /// Project name.
    pub name: String,
    /// Detailed description of the project.
    pub description: String,
    /// Additional fields sent alongside; these win over the named fields on collision.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateProjectRequest {
    /// Creates a request with the two required fields.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            extra: Map::new(),
        }
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
    fn test_serializes_flat() {
        let request = CreateProjectRequest::new("Blog", "Company blog").with("language", "en");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"name": "Blog", "description": "Company blog", "language": "en"})
        );
    }

    #[test]
    fn test_extra_overrides_named_field() {
        let request = CreateProjectRequest::new("Blog", "Company blog").with("name", "Renamed");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["name"], json!("Renamed"));
        assert_eq!(value.as_object().map(Map::len), Some(2));
    }
}
