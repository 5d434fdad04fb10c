//! Service implementations for the VsesvitAI API.
//!
//! Each service shapes one resource's calls and hands them to the shared
//! dispatcher. Services hold no state besides the dispatcher.

mod articles;
mod landings;
mod projects;
mod resource;
mod smart_tables;
mod users;

pub use articles::ArticlesService;
pub use landings::LandingsService;
pub use projects::ProjectsService;
pub use resource::ResourceService;
pub use smart_tables::{SmartTablesService, DEFAULT_DOWNLOAD_FORMAT};
pub use users::UserService;

/// Knowledge bases support the shared collection operations only.
pub type KnowledgeBasesService = ResourceService;
/// Authors support the shared collection operations only.
pub type AuthorsService = ResourceService;
/// Audiences support the shared collection operations only.
pub type AudiencesService = ResourceService;

#[cfg(test)]
pub(crate) mod test_support {
    use serde_json::Value;
    use std::sync::Arc;

    use crate::client::Dispatcher;
    use crate::config::VsesvitConfig;
    use crate::mocks::{MockAuth, MockTransport};
    use crate::transport::{HttpRequest, HttpTransport, RequestBody};

    pub(crate) const TEST_KEY: &str = "vsa_abcdefghijklmnopqrstuvwxyz";

    pub(crate) fn setup() -> (Arc<MockTransport>, Arc<Dispatcher>) {
        let config = VsesvitConfig::builder()
            .api_key(TEST_KEY)
            .base_url("https://test.vsesvit.ai/api/v1")
            .build()
            .unwrap();
        let transport = Arc::new(MockTransport::new());
        let dispatcher = Dispatcher::new(
            &config,
            Arc::clone(&transport) as Arc<dyn HttpTransport>,
            Arc::new(MockAuth::new(TEST_KEY)),
        );
        (transport, Arc::new(dispatcher))
    }

    pub(crate) fn sent_json(request: &HttpRequest) -> Value {
        match &request.body {
            Some(RequestBody::Json(bytes)) => serde_json::from_slice(bytes).unwrap(),
            other => panic!("Expected JSON body, got {other:?}"),
        }
    }
}
