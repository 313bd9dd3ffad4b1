//! Identifiers for server-side scraper configurations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseraError, ParseraResult};

const SCRAPER_PREFIX: &str = "scraper:";
const TEMPLATE_PREFIX: &str = "template:";

/// Which kind of pre-configured scraper an identifier refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScraperKind {
    /// A named agent, run on the agents host
    Scraper,
    /// A saved template, run on the extractor host
    Template,
}

impl ScraperKind {
    /// Parameter value for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ScraperKind::Scraper => "scraper",
            ScraperKind::Template => "template",
        }
    }
}

impl FromStr for ScraperKind {
    type Err = ParseraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scraper" => Ok(ScraperKind::Scraper),
            "template" => Ok(ScraperKind::Template),
            other => Err(ParseraError::Internal(format!(
                "Unhandled scraper kind '{}'.",
                other
            ))),
        }
    }
}

/// A scraper identifier with an explicit kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScraperRef {
    /// Scraper kind
    pub kind: ScraperKind,
    /// Trimmed, non-empty identifier
    pub id: String,
}

impl ScraperRef {
    /// Build a reference, trimming the id and rejecting blanks
    pub fn new(kind: ScraperKind, id: &str) -> ParseraResult<Self> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ParseraError::validation(
                "Agent Name is required for Agent Scrape operation.",
            ));
        }
        Ok(Self {
            kind,
            id: id.to_string(),
        })
    }

    /// Reference to a named agent
    pub fn scraper(id: &str) -> ParseraResult<Self> {
        Self::new(ScraperKind::Scraper, id)
    }

    /// Reference to a saved template
    pub fn template(id: &str) -> ParseraResult<Self> {
        Self::new(ScraperKind::Template, id)
    }
}

/// Parses the single-string form: `scraper:<id>` is an agent; `template:<id>`
/// and unprefixed identifiers are templates.
impl FromStr for ScraperRef {
    type Err = ParseraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(id) = s.strip_prefix(SCRAPER_PREFIX) {
            ScraperRef::scraper(id)
        } else if let Some(id) = s.strip_prefix(TEMPLATE_PREFIX) {
            ScraperRef::template(id)
        } else {
            ScraperRef::template(s)
        }
    }
}

impl fmt::Display for ScraperRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.as_str(), self.id)
    }
}
