//! Mock Parsera HTTP server backed by wiremock.

use serde_json::Value;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use parsera_client::{ParseraClient, ParseraConfig, API_KEY_HEADER};

/// API key the mock server expects
pub const TEST_API_KEY: &str = "test-api-key";

/// Parsera API stand-in serving both hosts from one base URL
pub struct MockParseraServer {
    server: MockServer,
}

impl MockParseraServer {
    /// Start a server on a random local port
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL of the server
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Underlying wiremock server, for custom mounts
    pub fn inner(&self) -> &MockServer {
        &self.server
    }

    /// Client configuration pointing both hosts at this server
    pub fn config(&self) -> ParseraConfig {
        ParseraConfig::with_api_key(TEST_API_KEY).with_base_url(self.uri())
    }

    /// Client configured for this server
    pub fn client(&self) -> ParseraClient {
        match ParseraClient::new(self.config()) {
            Ok(client) => client,
            Err(e) => panic!("mock server config rejected: {}", e),
        }
    }

    /// Answer `method path` carrying the test key with a JSON body
    pub async fn mount_json(&self, http_method: &str, route: &str, status: u16, body: Value) {
        Mock::given(method(http_method))
            .and(path(route))
            .and(header(API_KEY_HEADER, TEST_API_KEY))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer `method path` with a raw text body
    pub async fn mount_text(&self, http_method: &str, route: &str, status: u16, body: &str) {
        Mock::given(method(http_method))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of every request received so far, in arrival order
    pub async fn received_bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|request| serde_json::from_slice(&request.body).ok())
            .collect()
    }

    /// Paths of every request received so far, in arrival order
    pub async fn received_paths(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| request.url.path().to_string())
            .collect()
    }
}
