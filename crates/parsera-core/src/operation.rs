//! Static dispatch table from (resource, operation) to endpoint

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseraError, ParseraResult};
use crate::scraper::{ScraperKind, ScraperRef};

/// API host an endpoint lives on. The client maps each host to a base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiHost {
    /// `https://api.parsera.org/v1` by default
    Extractor,
    /// `https://agents.parsera.org/v1` by default
    Agents,
}

/// HTTP method used by an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
}

impl HttpMethod {
    /// Method name as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// Target of one outbound call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    /// HTTP method
    pub method: HttpMethod,
    /// Host whose base URL the path is appended to
    pub host: ApiHost,
    /// Path relative to the base URL
    pub path: &'static str,
}

impl Endpoint {
    /// `POST /extract`
    pub const EXTRACT: Endpoint = Endpoint::post(ApiHost::Extractor, "/extract");
    /// `POST /parse`
    pub const PARSE: Endpoint = Endpoint::post(ApiHost::Extractor, "/parse");
    /// `POST /scrape` on the agents host
    pub const AGENT_SCRAPE: Endpoint = Endpoint::post(ApiHost::Agents, "/scrape");
    /// `POST /scrapers/run` on the extractor host
    pub const TEMPLATE_RUN: Endpoint = Endpoint::post(ApiHost::Extractor, "/scrapers/run");
    /// `GET /list` on the agents host, used to verify credentials
    pub const CREDENTIAL_TEST: Endpoint = Endpoint {
        method: HttpMethod::Get,
        host: ApiHost::Agents,
        path: "/list",
    };

    const fn post(host: ApiHost, path: &'static str) -> Self {
        Self {
            method: HttpMethod::Post,
            host,
            path,
        }
    }

    /// Endpoint that runs the given scraper
    pub fn for_scraper(scraper: &ScraperRef) -> Self {
        match scraper.kind {
            ScraperKind::Scraper => Endpoint::AGENT_SCRAPE,
            ScraperKind::Template => Endpoint::TEMPLATE_RUN,
        }
    }
}

/// Top-level resource selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    /// Inline-schema extraction
    Extractor,
    /// Pre-configured scrapers
    Agent,
}

impl Resource {
    /// Parameter value for this resource
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Extractor => "extractor",
            Resource::Agent => "agent",
        }
    }
}

impl FromStr for Resource {
    type Err = ParseraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "extractor" => Ok(Resource::Extractor),
            "agent" => Ok(Resource::Agent),
            other => Err(ParseraError::Internal(format!("Unknown resource '{}'.", other))),
        }
    }
}

/// Operation kind, one per request-body entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Extract from a live URL
    #[serde(rename = "extractUrl")]
    ExtractUrl,
    /// Extract from supplied HTML or text
    #[serde(rename = "parseHtml")]
    ParseHtml,
    /// Run a pre-configured scraper
    #[serde(rename = "agentScrape")]
    AgentScrape,
}

impl Operation {
    /// Every operation, in display order
    pub const ALL: [Operation; 3] = [
        Operation::ExtractUrl,
        Operation::ParseHtml,
        Operation::AgentScrape,
    ];

    /// Look up an operation by its (resource, operation) parameter pair
    pub fn resolve(resource: &str, operation: &str) -> ParseraResult<Self> {
        let resource: Resource = resource.parse()?;
        let operation: Operation = operation.parse()?;
        if operation.resource() != resource {
            return Err(ParseraError::Internal(format!(
                "Operation '{}' is not available for resource '{}'.",
                operation,
                resource.as_str()
            )));
        }
        Ok(operation)
    }

    /// Parameter value for this operation
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::ExtractUrl => "extractUrl",
            Operation::ParseHtml => "parseHtml",
            Operation::AgentScrape => "agentScrape",
        }
    }

    /// Resource this operation belongs to
    pub fn resource(&self) -> Resource {
        match self {
            Operation::ExtractUrl | Operation::ParseHtml => Resource::Extractor,
            Operation::AgentScrape => Resource::Agent,
        }
    }

    /// Endpoint used unless the builder overrides it
    pub fn default_endpoint(&self) -> Endpoint {
        match self {
            Operation::ExtractUrl => Endpoint::EXTRACT,
            Operation::ParseHtml => Endpoint::PARSE,
            Operation::AgentScrape => Endpoint::AGENT_SCRAPE,
        }
    }

    /// Body template keys the caller pre-fills from parameters, paired with
    /// the parameter each one is read from.
    ///
    /// The scraper identifier is not templated; it travels as a [`ScraperRef`].
    pub fn template_fields(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Operation::ExtractUrl => &[("url", "url"), ("mode", "mode"), ("proxy_country", "proxyCountry")],
            Operation::ParseHtml => &[("content", "content"), ("mode", "mode")],
            Operation::AgentScrape => &[("url", "url"), ("proxy_country", "proxyCountry")],
        }
    }

    /// Whether this operation takes an attribute schema and prompt
    pub fn uses_attributes(&self) -> bool {
        matches!(self, Operation::ExtractUrl | Operation::ParseHtml)
    }

    /// Whether this operation forwards cookies
    pub fn uses_cookies(&self) -> bool {
        matches!(self, Operation::ExtractUrl | Operation::AgentScrape)
    }
}

impl FromStr for Operation {
    type Err = ParseraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| ParseraError::Internal(format!("Unknown operation '{}'.", s)))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_table() {
        assert_eq!(Operation::resolve("extractor", "extractUrl").unwrap(), Operation::ExtractUrl);
        assert_eq!(Operation::resolve("extractor", "parseHtml").unwrap(), Operation::ParseHtml);
        assert_eq!(Operation::resolve("agent", "agentScrape").unwrap(), Operation::AgentScrape);
    }

    #[test]
    fn test_resolve_rejects_mismatched_pairs() {
        let err = Operation::resolve("agent", "extractUrl").unwrap_err();
        assert!(matches!(err, ParseraError::Internal(_)));
        assert!(matches!(Operation::resolve("crawler", "extractUrl"), Err(ParseraError::Internal(_))));
        assert!(matches!(Operation::resolve("extractor", "crawl"), Err(ParseraError::Internal(_))));
    }

    #[test]
    fn test_default_endpoints() {
        assert_eq!(Operation::ExtractUrl.default_endpoint().path, "/extract");
        assert_eq!(Operation::ParseHtml.default_endpoint().path, "/parse");
        let scrape = Operation::AgentScrape.default_endpoint();
        assert_eq!((scrape.host, scrape.path), (ApiHost::Agents, "/scrape"));
    }

    #[test]
    fn test_scraper_endpoints() {
        let agent = ScraperRef::scraper("abc").unwrap();
        let template = ScraperRef::template("abc").unwrap();
        assert_eq!(Endpoint::for_scraper(&agent), Endpoint::AGENT_SCRAPE);
        assert_eq!(Endpoint::for_scraper(&template).path, "/scrapers/run");
        assert_eq!(Endpoint::for_scraper(&template).host, ApiHost::Extractor);
    }

    #[test]
    fn test_operation_capabilities() {
        assert!(Operation::ExtractUrl.uses_attributes() && Operation::ExtractUrl.uses_cookies());
        assert!(Operation::ParseHtml.uses_attributes() && !Operation::ParseHtml.uses_cookies());
        assert!(!Operation::AgentScrape.uses_attributes() && Operation::AgentScrape.uses_cookies());
    }
}
