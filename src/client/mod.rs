//! VsesvitAI API client.
//!
//! Provides the main client interface and the dispatcher every service
//! call goes through.

mod dispatch;
mod request;

pub use dispatch::Dispatcher;
pub use request::{ApiRequest, ApiResponse, ResponseDecoding};

use std::sync::Arc;
use std::time::Duration;

use crate::auth::{ApiKeyAuth, ApiKeyFormat, AuthProvider};
use crate::config::{VsesvitConfig, VsesvitConfigBuilder};
use crate::errors::{VsesvitError, VsesvitResult};
use crate::services::{
    ArticlesService, AudiencesService, AuthorsService, KnowledgeBasesService, LandingsService,
    ProjectsService, ResourceService, SmartTablesService, UserService,
};
use crate::transport::{HttpTransport, HttpTransportImpl};

/// The main VsesvitAI client.
///
/// Cheap to share behind an `Arc`; every method takes `&self`.
///
/// # Example
///
/// ```rust,no_run
/// use vsesvit_client::{ListQuery, VsesvitClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = VsesvitClient::builder()
///         .api_key("vsa_your_api_key_goes_here_xx")
///         .build()?;
///
///     let articles = client.articles().list(ListQuery::new().page(1).limit(2)).await?;
///     println!("{articles}");
///     Ok(())
/// }
/// ```
pub struct VsesvitClient {
    config: VsesvitConfig,
    dispatcher: Arc<Dispatcher>,
    articles: ArticlesService,
    projects: ProjectsService,
    landings: LandingsService,
    knowledge_bases: KnowledgeBasesService,
    smart_tables: SmartTablesService,
    authors: AuthorsService,
    audiences: AudiencesService,
    user: UserService,
}

impl VsesvitClient {
    /// Creates a new client builder.
    pub fn builder() -> VsesvitClientBuilder {
        VsesvitClientBuilder::new()
    }

    /// Creates a client from environment variables.
    ///
    /// See [`VsesvitConfig::from_env`] for the variables read.
    pub fn from_env() -> VsesvitResult<Self> {
        let config = VsesvitConfig::from_env()?;
        VsesvitClientBuilder::from_config(config).build()
    }

    /// Creates a client from an API key with default settings.
    pub fn from_api_key(api_key: impl Into<String>) -> VsesvitResult<Self> {
        VsesvitClientBuilder::new().api_key(api_key).build()
    }

    /// Returns the articles service.
    pub fn articles(&self) -> &ArticlesService {
        &self.articles
    }

    /// Returns the projects service.
    pub fn projects(&self) -> &ProjectsService {
        &self.projects
    }

    /// Returns the landings service.
    pub fn landings(&self) -> &LandingsService {
        &self.landings
    }

    /// Returns the knowledge bases service.
    pub fn knowledge_bases(&self) -> &KnowledgeBasesService {
        &self.knowledge_bases
    }

    /// Returns the smart tables service.
    pub fn smart_tables(&self) -> &SmartTablesService {
        &self.smart_tables
    }

    /// Returns the authors service.
    pub fn authors(&self) -> &AuthorsService {
        &self.authors
    }

    /// Returns the audiences service.
    pub fn audiences(&self) -> &AudiencesService {
        &self.audiences
    }

    /// Returns the current user service.
    pub fn user(&self) -> &UserService {
        &self.user
    }

    /// Returns the configuration.
    pub fn config(&self) -> &VsesvitConfig {
        &self.config
    }

    /// Sends an arbitrary request through the dispatcher.
    ///
    /// For endpoints the services do not cover yet.
    pub async fn request(&self, request: ApiRequest) -> VsesvitResult<ApiResponse> {
        self.dispatcher.dispatch(request).await
    }
}

impl std::fmt::Debug for VsesvitClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VsesvitClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builder for the VsesvitAI client.
pub struct VsesvitClientBuilder {
    config_builder: VsesvitConfigBuilder,
    transport: Option<Arc<dyn HttpTransport>>,
    auth: Option<Arc<dyn AuthProvider>>,
}

impl VsesvitClientBuilder {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            config_builder: VsesvitConfigBuilder::new(),
            transport: None,
            auth: None,
        }
    }

    /// Creates a builder from an existing configuration.
    pub fn from_config(config: VsesvitConfig) -> Self {
        let mut config_builder = VsesvitConfigBuilder::new()
            .api_key(config.api_key())
            .base_url(&config.base_url)
            .debug(config.debug)
            .key_format(config.key_format.clone());
        if let Some(timeout) = config.timeout {
            config_builder = config_builder.timeout(timeout);
        }

        Self {
            config_builder,
            transport: None,
            auth: None,
        }
    }

    /// Sets the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.api_key(api_key);
        self
    }

    /// Sets the API key from an environment variable.
    pub fn api_key_from_env(mut self, var_name: &str) -> VsesvitResult<Self> {
        self.config_builder = self.config_builder.api_key_from_env(var_name)?;
        Ok(self)
    }

    /// Sets the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.base_url(base_url);
        self
    }

    /// Enables debug diagnostics for failed responses.
    pub fn debug(mut self, debug: bool) -> Self {
        self.config_builder = self.config_builder.debug(debug);
        self
    }

    /// Sets the default request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    /// Sets the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config_builder = self.config_builder.timeout_secs(secs);
        self
    }

    /// Sets the expected API key format.
    pub fn key_format(mut self, format: ApiKeyFormat) -> Self {
        self.config_builder = self.config_builder.key_format(format);
        self
    }

    /// Sets a custom transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Sets a custom auth provider.
    pub fn auth(mut self, auth: Arc<dyn AuthProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Builds the client.
    pub fn build(self) -> VsesvitResult<VsesvitClient> {
        let config = self.config_builder.build()?;

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(t) => t,
            None => Arc::new(
                HttpTransportImpl::new(config.timeout)
                    .map_err(|e| VsesvitError::configuration(e.to_string()))?,
            ),
        };

        let auth: Arc<dyn AuthProvider> = match self.auth {
            Some(a) => a,
            None => Arc::new(ApiKeyAuth::new(
                config.api_key.clone(),
                config.key_format.clone(),
            )),
        };
        auth.validate()?;

        let dispatcher = Arc::new(Dispatcher::new(&config, transport, auth));
        let service = |path: &'static str| ResourceService::new(Arc::clone(&dispatcher), path);

        tracing::debug!(base_url = %config.base_url, key_hint = %config.api_key_hint(), "Client created");

        Ok(VsesvitClient {
            articles: ArticlesService::new(Arc::clone(&dispatcher)),
            projects: ProjectsService::new(Arc::clone(&dispatcher)),
            landings: LandingsService::new(Arc::clone(&dispatcher)),
            knowledge_bases: service("knowledge-bases"),
            smart_tables: SmartTablesService::new(Arc::clone(&dispatcher)),
            authors: service("authors"),
            audiences: service("audiences"),
            user: UserService::new(Arc::clone(&dispatcher)),
            config,
            dispatcher,
        })
    }
}

impl Default for VsesvitClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
