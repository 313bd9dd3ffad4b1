use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Method};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use parsera_core::{HttpMethod, ParseraError, ParseraResult, PreparedRequest};

use crate::config::ParseraConfig;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Decoded response of a successful call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Body decoded as JSON; non-JSON bodies become a JSON string
    pub body: Value,
}

/// Outbound seam used by the node
#[async_trait]
pub trait ParseraApi: Send + Sync {
    /// Send a prepared request and decode its response
    async fn execute(&self, request: &PreparedRequest) -> ParseraResult<ApiResponse>;

    /// Verify that the configured credentials are accepted
    async fn test_credentials(&self) -> ParseraResult<()> {
        self.execute(&PreparedRequest::credential_test()).await.map(|_| ())
    }
}

/// reqwest-backed Parsera client
#[derive(Debug, Clone)]
pub struct ParseraClient {
    config: ParseraConfig,
    client: Client,
}

impl ParseraClient {
    /// Creates a client for the given configuration
    pub fn new(config: ParseraConfig) -> ParseraResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| ParseraError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Creates a client from environment variables
    pub fn from_env() -> ParseraResult<Self> {
        Self::new(ParseraConfig::load()?)
    }

    /// Active configuration
    pub fn config(&self) -> &ParseraConfig {
        &self.config
    }

    /// Full URL for a prepared request
    pub fn url_for(&self, request: &PreparedRequest) -> String {
        format!(
            "{}{}",
            self.config.base_url(request.endpoint.host),
            request.endpoint.path
        )
    }

    /// Maps a transport error to a ParseraError
    fn map_http_error(error: reqwest::Error) -> ParseraError {
        if error.is_timeout() {
            ParseraError::Request(format!("Request timeout: {}", error))
        } else if error.is_connect() {
            ParseraError::Request(format!("Connection error: {}", error))
        } else {
            ParseraError::Request(format!("HTTP error: {}", error))
        }
    }
}

#[async_trait]
impl ParseraApi for ParseraClient {
    #[instrument(skip(self, request), fields(method = request.endpoint.method.as_str(), path = request.endpoint.path))]
    async fn execute(&self, request: &PreparedRequest) -> ParseraResult<ApiResponse> {
        let url = self.url_for(request);
        let method = match request.endpoint.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };

        debug!("Sending Parsera request to {}", url);

        let mut builder = self
            .client
            .request(method, &url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(header::ACCEPT, "application/json");
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(Self::map_http_error)?;
        let status = response.status();
        let text = response.text().await.map_err(Self::map_http_error)?;

        if !status.is_success() {
            warn!("Parsera request failed with status {}", status);
            return Err(ParseraError::Api {
                status: status.as_u16(),
                message: error_message(&text, status.canonical_reason()),
            });
        }

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text))
        };

        debug!("Parsera request completed with status {}", status);

        Ok(ApiResponse {
            status: status.as_u16(),
            body,
        })
    }
}

/// Pull a readable message out of an error response body
fn error_message(body: &str, reason: Option<&str>) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        ["message", "detail", "error"]
            .iter()
            .find_map(|key| match value.get(*key) {
                Some(Value::String(message)) => Some(message.clone()),
                Some(Value::Null) | None => None,
                Some(other) => Some(other.to_string()),
            })
    });

    match from_json {
        Some(message) => message,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => reason.unwrap_or("Unknown error").to_string(),
    }
}
