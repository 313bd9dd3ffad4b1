//! Parameter sets and response envelopes used across tests.

use serde_json::{json, Value};

/// Parameters for an `extractUrl` call with one fixed-field attribute
pub fn extract_url_parameters(url: &str) -> Vec<(&'static str, Value)> {
    vec![
        ("resource", json!("extractor")),
        ("operation", json!("extractUrl")),
        ("url", json!(url)),
        ("attributesInputMode", json!("fields")),
        (
            "attributesFields",
            json!({
                "fieldValues": [
                    {"fieldName": "title", "fieldType": "string", "fieldDescription": "Article title"}
                ]
            }),
        ),
    ]
}

/// Parameters for a `parseHtml` call with a JSON attribute schema
pub fn parse_html_parameters(content: &str) -> Vec<(&'static str, Value)> {
    vec![
        ("resource", json!("extractor")),
        ("operation", json!("parseHtml")),
        ("content", json!(content)),
        ("attributesInputMode", json!("json")),
        ("attributesJson", json!(r#"{"price": {"type": "number", "description": "Price"}}"#)),
    ]
}

/// Parameters for an `agentScrape` call
pub fn agent_scrape_parameters(agent_name: &str, url: &str) -> Vec<(&'static str, Value)> {
    vec![
        ("resource", json!("agent")),
        ("operation", json!("agentScrape")),
        ("agentName", json!(agent_name)),
        ("url", json!(url)),
    ]
}

/// Response envelope with a `data` array
pub fn data_array_envelope() -> Value {
    json!({
        "data": [
            {"title": "First"},
            {"title": "Second"}
        ]
    })
}
