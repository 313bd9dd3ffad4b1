//! Request body assembly
//!
//! Each operation kind has one entry point. It takes the body template the
//! caller pre-filled from parameters (`url`, `mode`, `proxy_country`,
//! `content`, ...) plus the free-form inputs that need validation, and returns
//! a [`PreparedRequest`] or the first validation failure. Nothing is returned
//! for a partially valid input.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::attributes::{AttributeMap, AttributeSchema};
use crate::cookies::{parse_cookies, CookieList};
use crate::error::{ParseraError, ParseraResult};
use crate::operation::{Endpoint, Operation};
use crate::scraper::{ScraperKind, ScraperRef};

/// Provenance marker the API expects in every body
pub const SOURCE_TAG: &str = "n8n";

/// Fields pre-filled by the caller before validation
pub type BodyTemplate = Map<String, Value>;

/// Inputs that are validated and merged into the template
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyInputs {
    /// Free-text instructions, merged when non-blank
    pub prompt: Option<String>,
    /// Attribute schema for extract/parse operations
    pub attributes: Option<AttributeSchema>,
    /// Raw cookies parameter
    pub cookies: Option<String>,
    /// Scraper to run for scrape operations
    pub scraper: Option<ScraperRef>,
}

/// Finished outbound body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RequestBody(Map<String, Value>);

impl RequestBody {
    /// Look up a field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the field is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Borrow the underlying object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Convert into a JSON value
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// A body together with the endpoint it must be sent to
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    /// Target endpoint
    pub endpoint: Endpoint,
    /// Body to send; `None` for bodiless requests
    pub body: Option<RequestBody>,
}

impl PreparedRequest {
    /// The credential check request
    pub fn credential_test() -> Self {
        Self {
            endpoint: Endpoint::CREDENTIAL_TEST,
            body: None,
        }
    }
}

/// Accumulates named fields over a template and produces one [`RequestBody`]
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct RequestBodyBuilder {
    template: Map<String, Value>,
    removed: Vec<&'static str>,
    fields: Vec<(&'static str, Value)>,
}

impl RequestBodyBuilder {
    /// Start from a caller-supplied template
    pub fn from_template(template: BodyTemplate) -> Self {
        Self {
            template,
            ..Self::default()
        }
    }

    /// Set a field, replacing any earlier value for the same key
    pub fn field(mut self, key: &'static str, value: impl Into<Value>) -> Self {
        self.removed.retain(|removed| *removed != key);
        self.fields.retain(|(existing, _)| *existing != key);
        self.fields.push((key, value.into()));
        self
    }

    /// Drop a field, whether it came from the template or an earlier call
    pub fn without(mut self, key: &'static str) -> Self {
        self.fields.retain(|(existing, _)| *existing != key);
        if !self.removed.contains(&key) {
            self.removed.push(key);
        }
        self
    }

    /// Stamp the provenance marker
    pub fn source(self) -> Self {
        self.field("source", SOURCE_TAG)
    }

    /// Merge a trimmed prompt when it is non-blank
    pub fn prompt(self, prompt: Option<&str>) -> Self {
        match prompt.map(str::trim).filter(|p| !p.is_empty()) {
            Some(prompt) => self.field("prompt", prompt),
            None => self,
        }
    }

    /// Merge the attribute map
    pub fn attributes(self, attributes: &AttributeMap) -> ParseraResult<Self> {
        let value = serde_json::to_value(attributes)?;
        Ok(self.field("attributes", value))
    }

    /// Merge cookies, writing `null` when there are none
    pub fn cookies(self, cookies: CookieList) -> Self {
        let value = cookies.map(Value::Array).unwrap_or(Value::Null);
        self.field("cookies", value)
    }

    /// Produce the final body
    pub fn build(self) -> RequestBody {
        let mut body = self.template;
        for key in &self.removed {
            body.remove(*key);
        }
        for (key, value) in self.fields {
            body.insert(key.to_string(), value);
        }
        RequestBody(body)
    }
}

/// Prepare the request for any operation
pub fn prepare_request(
    operation: Operation,
    template: BodyTemplate,
    inputs: &BodyInputs,
) -> ParseraResult<PreparedRequest> {
    debug!(operation = %operation, "Preparing Parsera request body");
    match operation {
        Operation::ExtractUrl => prepare_extract(template, inputs),
        Operation::ParseHtml => prepare_parse(template, inputs),
        Operation::AgentScrape => {
            let scraper = inputs.scraper.as_ref().ok_or_else(|| {
                ParseraError::validation("Agent Name is required for Agent Scrape operation.")
            })?;
            prepare_scrape(template, scraper, inputs)
        }
    }
}

/// Check the template scalars an operation cannot run without.
///
/// Runs before the attribute schema is resolved so a missing URL or content
/// is reported first.
pub fn check_template(operation: Operation, template: &BodyTemplate) -> ParseraResult<()> {
    match operation {
        Operation::ExtractUrl => required_string(template, "url", "URL is required.").map(drop),
        Operation::ParseHtml => {
            required_string(template, "content", "Content is required for Parse HTML.").map(drop)
        }
        Operation::AgentScrape => Ok(()),
    }
}

/// `POST /extract`: `{url, mode, proxy_country, attributes, cookies, prompt?, source}`
pub fn prepare_extract(template: BodyTemplate, inputs: &BodyInputs) -> ParseraResult<PreparedRequest> {
    let url = required_string(&template, "url", "URL is required.")?;
    let attributes = required_attributes(inputs.attributes.as_ref())?;
    let cookies = parse_cookies(inputs.cookies.as_deref())?;

    let body = RequestBodyBuilder::from_template(template)
        .source()
        .prompt(inputs.prompt.as_deref())
        .field("url", url)
        .attributes(&attributes)?
        .cookies(cookies)
        .build();

    Ok(PreparedRequest {
        endpoint: Endpoint::EXTRACT,
        body: Some(body),
    })
}

/// `POST /parse`: `{content, mode, attributes, prompt?, source}`, never cookies
pub fn prepare_parse(template: BodyTemplate, inputs: &BodyInputs) -> ParseraResult<PreparedRequest> {
    let content = required_string(&template, "content", "Content is required for Parse HTML.")?;
    let attributes = required_attributes(inputs.attributes.as_ref())?;

    let body = RequestBodyBuilder::from_template(template)
        .source()
        .prompt(inputs.prompt.as_deref())
        .field("content", content)
        .attributes(&attributes)?
        .build();

    Ok(PreparedRequest {
        endpoint: Endpoint::PARSE,
        body: Some(body),
    })
}

/// Run a pre-configured scraper.
///
/// Agents go to `POST {agents}/scrape` with `name` and a required `url`.
/// Templates go to `POST {extractor}/scrapers/run` with `template_id` and an
/// optional `url`.
pub fn prepare_scrape(
    template: BodyTemplate,
    scraper: &ScraperRef,
    inputs: &BodyInputs,
) -> ParseraResult<PreparedRequest> {
    let id = scraper.id.trim();
    if id.is_empty() {
        return Err(ParseraError::validation(
            "Agent Name is required for Agent Scrape operation.",
        ));
    }

    let url = match scraper.kind {
        ScraperKind::Scraper => Some(required_string(
            &template,
            "url",
            "URL is required for Agent Scrape operation.",
        )?),
        ScraperKind::Template => optional_string(&template, "url"),
    };
    let cookies = parse_cookies(inputs.cookies.as_deref())?;

    let builder = RequestBodyBuilder::from_template(template).source();
    let builder = match scraper.kind {
        ScraperKind::Scraper => builder.field("name", id).without("template_id"),
        ScraperKind::Template => builder.field("template_id", id).without("name"),
    };
    let builder = match url {
        Some(url) => builder.field("url", url),
        None => builder.without("url"),
    };

    Ok(PreparedRequest {
        endpoint: Endpoint::for_scraper(scraper),
        body: Some(builder.cookies(cookies).build()),
    })
}

fn required_string(template: &BodyTemplate, key: &str, message: &str) -> ParseraResult<String> {
    optional_string(template, key).ok_or_else(|| ParseraError::validation(message))
}

fn optional_string(template: &BodyTemplate, key: &str) -> Option<String> {
    template
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn required_attributes(schema: Option<&AttributeSchema>) -> ParseraResult<AttributeMap> {
    let attributes = match schema {
        Some(schema) => schema.parse()?,
        None => AttributeMap::new(),
    };
    if attributes.is_empty() {
        return Err(ParseraError::validation("At least one attribute is required."));
    }
    Ok(attributes)
}
