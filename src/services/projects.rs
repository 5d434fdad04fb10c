//! Projects service.

use serde_json::Value;
use std::fmt::Display;
use std::sync::Arc;

use super::resource::ResourceService;
use crate::client::Dispatcher;
use crate::errors::VsesvitResult;
use crate::types::{CreateProjectRequest, ListQuery};

/// Projects group articles, landings and smart tables.
#[derive(Debug, Clone)]
pub struct ProjectsService {
    resource: ResourceService,
}

impl ProjectsService {
    /// Creates a new projects service.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            resource: ResourceService::new(dispatcher, "projects"),
        }
    }

    /// Lists projects.
    pub async fn list(&self, query: ListQuery) -> VsesvitResult<Value> {
        self.resource.list(query).await
    }

    /// Gets one project.
    pub async fn get(&self, id: impl Display) -> VsesvitResult<Value> {
        self.resource.get(id).await
    }

    /// Creates a project.
    pub async fn create(&self, request: CreateProjectRequest) -> VsesvitResult<Value> {
        self.resource.create(serde_json::to_value(&request)?).await
    }

    /// Archives a project.
    pub async fn archive(&self, id: impl Display) -> VsesvitResult<Value> {
        self.resource.archive(id).await
    }

    /// Restores an archived project.
    pub async fn unarchive(&self, id: impl Display) -> VsesvitResult<Value> {
        self.resource.unarchive(id).await
    }
}
