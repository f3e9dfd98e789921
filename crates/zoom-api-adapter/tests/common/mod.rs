/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for zoom-api-adapter tests

use std::sync::Arc;

use wiremock::MockServer;
use zoom_api_adapter::{ClientConfig, TokenSigner, ZoomClient};

#[allow(dead_code)]
pub const TEST_API_KEY: &str = "k";
#[allow(dead_code)]
pub const TEST_API_SECRET: &str = "s";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with the given signer
pub fn client_with_signer(server: &MockServer, signer: Arc<dyn TokenSigner>) -> ZoomClient {
    ZoomClient::with_signer(&server.uri(), signer, ClientConfig::default()).expect("client init")
}

/// Bearer tokens seen by the server, in arrival order
#[allow(dead_code)]
pub async fn received_bearer_tokens(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter_map(|request| request.headers.get("authorization"))
        .filter_map(|value| value.to_str().ok())
        .map(|value| value.trim_start_matches("Bearer ").to_string())
        .collect()
}

/// Meeting body used by most pipeline tests
#[allow(dead_code)]
pub fn sync_meeting_json() -> &'static str {
    r#"{"id":123,"topic":"Sync"}"#
}
