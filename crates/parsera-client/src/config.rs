//! Configuration for the Parsera client
//!
//! Values come from serde defaults, overridden by environment variables or
//! read from a JSON document.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::warn;

use parsera_core::{ApiHost, ParseraError, ParseraResult};

/// Client configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ParseraConfig {
    /// API key sent as `X-API-KEY`
    #[serde(default)]
    pub api_key: String,

    /// Base URL of the extractor host
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Base URL of the agents host
    #[serde(default = "default_agents_url")]
    pub agents_url: String,

    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://api.parsera.org/v1".to_string()
}

fn default_agents_url() -> String {
    "https://agents.parsera.org/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    300
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for ParseraConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
            agents_url: default_agents_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl fmt::Debug for ParseraConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseraConfig")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("agents_url", &self.agents_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl ParseraConfig {
    /// Configuration with the given key and default endpoints
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Point both hosts at one base URL, as mock servers do
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.api_url = base_url.clone();
        self.agents_url = base_url;
        self
    }

    /// Load configuration from environment variables
    pub fn load() -> ParseraResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> ParseraResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(api_key) = lookup("PARSERA_API_KEY") {
            config.api_key = api_key.trim().to_string();
        }

        if let Some(api_url) = lookup("PARSERA_API_URL") {
            config.api_url = api_url;
        }

        if let Some(agents_url) = lookup("PARSERA_AGENTS_URL") {
            config.agents_url = agents_url;
        }

        if let Some(timeout) = lookup("PARSERA_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) => config.timeout_secs = secs,
                Err(_) => warn!("Invalid PARSERA_TIMEOUT_SECS value: {}", timeout),
            }
        }

        if let Some(timeout) = lookup("PARSERA_CONNECT_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) => config.connect_timeout_secs = secs,
                Err(_) => warn!("Invalid PARSERA_CONNECT_TIMEOUT_SECS value: {}", timeout),
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON document; missing fields take their defaults
    pub fn from_json(text: &str) -> ParseraResult<Self> {
        let config: Self = serde_json::from_str(text).map_err(|e| {
            ParseraError::Configuration(format!("Invalid Parsera configuration: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check required fields
    pub fn validate(&self) -> ParseraResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(ParseraError::Configuration(
                "PARSERA_API_KEY is required".to_string(),
            ));
        }
        for (name, url) in [("api_url", &self.api_url), ("agents_url", &self.agents_url)] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ParseraError::Configuration(format!(
                    "{} must be an http(s) URL, got '{}'",
                    name, url
                )));
            }
        }
        Ok(())
    }

    /// Base URL for a host, without a trailing slash
    pub fn base_url(&self, host: ApiHost) -> &str {
        let url = match host {
            ApiHost::Extractor => &self.api_url,
            ApiHost::Agents => &self.agents_url,
        };
        url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ParseraConfig::from_lookup(lookup(&[("PARSERA_API_KEY", "key")])).unwrap();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.base_url(ApiHost::Extractor), "https://api.parsera.org/v1");
        assert_eq!(config.base_url(ApiHost::Agents), "https://agents.parsera.org/v1");
        assert_eq!(config.timeout_secs, 300);
    }

    #[test]
    fn test_missing_api_key() {
        let err = ParseraConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ParseraError::Configuration(_)));
    }

    #[test]
    fn test_overrides_and_invalid_numbers() {
        let config = ParseraConfig::from_lookup(lookup(&[
            ("PARSERA_API_KEY", "key"),
            ("PARSERA_API_URL", "http://localhost:8080/v1/"),
            ("PARSERA_TIMEOUT_SECS", "abc"),
            ("PARSERA_CONNECT_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.base_url(ApiHost::Extractor), "http://localhost:8080/v1");
        assert_eq!(config.timeout_secs, 300);
        assert_eq!(config.connect_timeout_secs, 3);
    }

    #[test]
    fn test_rejects_non_http_urls() {
        let err = ParseraConfig::from_lookup(lookup(&[
            ("PARSERA_API_KEY", "key"),
            ("PARSERA_AGENTS_URL", "ftp://agents"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("agents_url"));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = ParseraConfig::from_json(r#"{"api_key": "key", "timeout_secs": 60}"#).unwrap();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.connect_timeout_secs, 10);
        assert_eq!(config.base_url(ApiHost::Agents), "https://agents.parsera.org/v1");
    }

    #[test]
    fn test_from_json_rejects_bad_documents() {
        assert!(matches!(
            ParseraConfig::from_json("{"),
            Err(ParseraError::Configuration(_))
        ));
        assert!(matches!(
            ParseraConfig::from_json("{}"),
            Err(ParseraError::Configuration(_))
        ));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = ParseraConfig::with_api_key("secret-key");
        assert!(!format!("{:?}", config).contains("secret-key"));
    }
}
