//! Integration tests against a local mock HTTP server.

mod downloads;
mod errors;
mod resources;

use vsesvit_client::VsesvitClient;
use wiremock::MockServer;

/// A key that passes the default format check.
pub const VALID_KEY: &str = "vsa_abcdefghijklmnopqrstuvwxyz";

/// Starts a mock server.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Builds a client pointed at `server` using the real HTTP transport.
pub fn client_for(server: &MockServer) -> VsesvitClient {
    client_with_key(server, VALID_KEY)
}

/// Builds a client with a specific API key.
#[allow(clippy::expect_used)]
pub fn client_with_key(server: &MockServer, api_key: &str) -> VsesvitClient {
    VsesvitClient::builder()
        .api_key(api_key)
        .base_url(server.uri())
        .build()
        .expect("Failed to build client")
}
