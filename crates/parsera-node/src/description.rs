//! Declarative node metadata
//!
//! The runtime renders the node's form from this description and resolves
//! parameter defaults through it.

use serde::Serialize;
use serde_json::{json, Value};
use std::sync::OnceLock;

use parsera_core::operation::{Operation, Resource};
use parsera_core::proxy::{DEFAULT_PROXY_COUNTRY, PROXY_COUNTRIES};

use parsera_client::API_KEY_HEADER;

/// Attribute types the API understands
pub const ATTRIBUTE_FIELD_TYPES: &[(&str, &str, &str)] = &[
    ("Any", "any", "Any data type"),
    ("Boolean", "bool", "True or false"),
    ("Integer", "integer", "Whole number"),
    ("List", "list", "An array of values"),
    ("Number", "number", "Number with decimals"),
    ("Object", "object", "A key-value map"),
    ("String", "string", "Text value"),
];

/// Extraction modes
pub const EXTRACTION_MODES: &[(&str, &str, &str)] = &[
    ("Standard", "standard", "Balanced speed and accuracy"),
    ("Precision", "precision", "Extract data hidden inside HTML structures"),
];

/// One selectable option
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionValue {
    /// Display name
    pub name: String,
    /// Value stored in the parameter
    pub value: String,
    /// Help text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl OptionValue {
    fn new(name: &str, value: &str, description: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            description: description.map(str::to_string),
        }
    }
}

/// Parameter widget kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterKind {
    /// Free text
    String,
    /// Single choice
    Options,
    /// JSON editor
    Json,
    /// Repeated group of sub-fields
    FixedCollection,
}

/// One node parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescription {
    /// Parameter name used for lookups
    pub name: String,
    /// Label shown to the user
    pub display_name: String,
    /// Widget kind
    pub kind: ParameterKind,
    /// Default value
    pub default: Value,
    /// Whether the user must supply a value
    pub required: bool,
    /// Help text
    pub description: String,
    /// Choices for `Options` parameters, or sub-fields for collections
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionValue>,
    /// Operations the parameter is shown for; empty means all
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub show_for: Vec<Operation>,
    /// The default is an editor example and never a runtime value
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub placeholder_only: bool,
}

impl ParameterDescription {
    fn new(name: &str, display_name: &str, kind: ParameterKind, default: Value) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            kind,
            default,
            required: false,
            description: String::new(),
            options: Vec::new(),
            show_for: Vec::new(),
            placeholder_only: false,
        }
    }

    fn placeholder_only(mut self) -> Self {
        self.placeholder_only = true;
        self
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn describe(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    fn options(mut self, options: Vec<OptionValue>) -> Self {
        self.options = options;
        self
    }

    fn show_for(mut self, operations: &[Operation]) -> Self {
        self.show_for = operations.to_vec();
        self
    }

    /// Whether the parameter applies to an operation
    pub fn applies_to(&self, operation: Operation) -> bool {
        self.show_for.is_empty() || self.show_for.contains(&operation)
    }
}

/// One operation entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationDescription {
    /// Operation
    pub operation: Operation,
    /// Resource it belongs to
    pub resource: Resource,
    /// Display name
    pub name: String,
    /// Help text
    pub description: String,
}

/// Credential the node requires
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialDescription {
    /// Credential type name
    pub name: String,
    /// Header the key is injected into
    pub header: String,
    /// Documentation link
    pub documentation_url: String,
}

/// Full node description
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    /// Node type name
    pub name: String,
    /// Display name
    pub display_name: String,
    /// Help text
    pub description: String,
    /// Description version
    pub version: u32,
    /// Required credential
    pub credential: CredentialDescription,
    /// Resources, in display order
    pub resources: Vec<OptionValue>,
    /// Operations, in display order
    pub operations: Vec<OperationDescription>,
    /// Parameters, in display order
    pub parameters: Vec<ParameterDescription>,
}

impl NodeDescription {
    /// Look up a parameter by name
    pub fn parameter(&self, name: &str) -> Option<&ParameterDescription> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Default value of a parameter
    pub fn default_for(&self, name: &str) -> Option<&Value> {
        self.parameter(name).map(|p| &p.default)
    }

    /// Value an unset parameter resolves to at run time
    pub fn runtime_default(&self, name: &str) -> Option<&Value> {
        self.parameter(name)
            .filter(|p| !p.placeholder_only)
            .map(|p| &p.default)
            .filter(|v| !v.is_null())
    }

    /// Parameters shown for an operation
    pub fn parameters_for(&self, operation: Operation) -> impl Iterator<Item = &ParameterDescription> {
        self.parameters.iter().filter(move |p| p.applies_to(operation))
    }
}

/// The Parsera node description, built once
pub fn describe() -> &'static NodeDescription {
    static DESCRIPTION: OnceLock<NodeDescription> = OnceLock::new();
    DESCRIPTION.get_or_init(build_description)
}

fn build_description() -> NodeDescription {
    use Operation::{AgentScrape, ExtractUrl, ParseHtml};
    use ParameterKind::*;

    let options = |entries: &[(&str, &str, &str)]| {
        entries
            .iter()
            .map(|(name, value, description)| OptionValue::new(name, value, Some(*description)))
            .collect::<Vec<_>>()
    };

    let parameters = vec![
        ParameterDescription::new("resource", "Resource", Options, json!("extractor")).options(vec![
            OptionValue::new("Extractor", Resource::Extractor.as_str(), None),
            OptionValue::new("Agent Scrape", Resource::Agent.as_str(), None),
        ]),
        ParameterDescription::new("operation", "Operation", Options, json!("extractUrl")).options(
            Operation::ALL
                .iter()
                .map(|op| OptionValue::new(operation_name(*op), op.as_str(), Some(operation_help(*op))))
                .collect(),
        ),
        ParameterDescription::new("scraperKind", "Scraper Kind", Options, Value::Null)
            .describe("Whether the identifier names an agent or a saved template. When unset, a 'scraper:' prefix selects an agent and anything else a template.")
            .options(vec![
                OptionValue::new("Agent", "scraper", None),
                OptionValue::new("Template", "template", None),
            ])
            .show_for(&[AgentScrape]),
        ParameterDescription::new("agentName", "Agent Name", String, json!(""))
            .required()
            .describe("Name of the agent to use for scraping")
            .show_for(&[AgentScrape]),
        ParameterDescription::new("url", "URL", String, json!(""))
            .required()
            .describe("URL of the webpage to extract data from")
            .show_for(&[ExtractUrl, AgentScrape]),
        ParameterDescription::new("content", "Content", String, json!(""))
            .required()
            .describe("Raw HTML or text content to extract data from")
            .show_for(&[ParseHtml]),
        ParameterDescription::new("prompt", "Prompt (Optional)", String, json!(""))
            .describe("Use to provide context and general instructions")
            .show_for(&[ExtractUrl, ParseHtml]),
        ParameterDescription::new("attributesInputMode", "Attributes Input Mode", Options, json!("fields"))
            .describe("Select how to define attributes. \"JSON\" is often preferred for AI tool integration or complex schemas.")
            .options(vec![
                OptionValue::new("Fields", "fields", Some("Define using individual fields")),
                OptionValue::new("JSON", "json", Some("Define as a single JSON object")),
            ])
            .show_for(&[ExtractUrl, ParseHtml]),
        ParameterDescription::new(
            "attributesFields",
            "Attributes",
            FixedCollection,
            json!({ "fieldValues": [{ "fieldName": "", "fieldType": "any", "fieldDescription": "" }] }),
        )
        .describe("Define data fields to extract. Each attribute requires a Field Name and Type. Description is optional.")
        .placeholder_only()
        .options(options(ATTRIBUTE_FIELD_TYPES))
        .show_for(&[ExtractUrl, ParseHtml]),
        ParameterDescription::new(
            "attributesJson",
            "Attributes (JSON)",
            Json,
            json!("{\n  \"example_attribute_name\": {\n    \"description\": \"Optional: Natural language description of what data to extract.\",\n    \"type\": \"string\"\n  }\n}"),
        )
        .describe("Define attributes as a JSON object. Each key is a field name, and its value is an object like: {\"description\": \"details...\", \"type\": \"string\"}. Description is optional.")
        .placeholder_only()
        .show_for(&[ExtractUrl, ParseHtml]),
        ParameterDescription::new("mode", "Mode", Options, json!("standard"))
            .describe("Extraction mode. \"Precision\" may yield better results for data hidden deeper in HTML.")
            .options(options(EXTRACTION_MODES))
            .show_for(&[ExtractUrl, ParseHtml]),
        ParameterDescription::new("proxyCountry", "Proxy Country", Options, json!(DEFAULT_PROXY_COUNTRY))
            .describe("Route request through a proxy in the selected country to access geo-specific content")
            .options(
                PROXY_COUNTRIES
                    .iter()
                    .map(|country| OptionValue::new(country.name, country.value, None))
                    .collect(),
            )
            .show_for(&[ExtractUrl, AgentScrape]),
        ParameterDescription::new("cookies", "Cookies", Json, json!("[]"))
            .describe("Optional. Provide cookies as a JSON array of objects, e.g. [{\"name\": \"session\", \"value\": \"abc\", \"domain\": \".example.com\"}].")
            .show_for(&[ExtractUrl, AgentScrape]),
    ];

    NodeDescription {
        name: "parsera".to_string(),
        display_name: "Parsera".to_string(),
        description: "Scrape data from websites using the Parsera API".to_string(),
        version: 1,
        credential: CredentialDescription {
            name: "parseraApi".to_string(),
            header: API_KEY_HEADER.to_string(),
            documentation_url: "https://docs.parsera.org/api/getting-started/".to_string(),
        },
        resources: vec![
            OptionValue::new("Extractor", Resource::Extractor.as_str(), None),
            OptionValue::new("Agent Scrape", Resource::Agent.as_str(), None),
        ],
        operations: Operation::ALL
            .iter()
            .map(|op| OperationDescription {
                operation: *op,
                resource: op.resource(),
                name: operation_name(*op).to_string(),
                description: operation_help(*op).to_string(),
            })
            .collect(),
        parameters,
    }
}

fn operation_name(operation: Operation) -> &'static str {
    match operation {
        Operation::ExtractUrl => "Extract From URL",
        Operation::ParseHtml => "Parse HTML",
        Operation::AgentScrape => "Agent Scrape",
    }
}

fn operation_help(operation: Operation) -> &'static str {
    match operation {
        Operation::ExtractUrl => "Extract data from a webpage using URL",
        Operation::ParseHtml => "Parse data from the raw HTML input",
        Operation::AgentScrape => "Scrape webpage with pre-configured agent",
    }
}
