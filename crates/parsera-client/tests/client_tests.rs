use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

use parsera_client::{ParseraApi, ParseraClient, ParseraConfig};
use parsera_core::{
    prepare_request, AttributeSchema, BodyInputs, BodyTemplate, Operation, ParseraError, ScraperRef,
};
use parsera_test_utils::{MockParseraServer, TEST_API_KEY};

fn extract_request() -> parsera_core::PreparedRequest {
    let mut template = BodyTemplate::new();
    template.insert("url".to_string(), json!("https://example.com"));
    template.insert("mode".to_string(), json!("standard"));
    let inputs = BodyInputs {
        attributes: Some(AttributeSchema::Json(json!({"title": {"type": "string"}}))),
        ..Default::default()
    };
    prepare_request(Operation::ExtractUrl, template, &inputs).unwrap()
}

#[tokio::test]
async fn test_extract_sends_key_and_body() {
    let server = MockParseraServer::start().await;
    server
        .mount_json("POST", "/extract", 200, json!({"data": [{"title": "Hello"}]}))
        .await;

    let response = server.client().execute(&extract_request()).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!({"data": [{"title": "Hello"}]}));

    let bodies = server.received_bodies().await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["source"], "n8n");
    assert_eq!(bodies[0]["url"], "https://example.com");
    assert_eq!(bodies[0]["attributes"], json!({"title": {"type": "string", "description": ""}}));
}

#[tokio::test]
async fn test_wrong_key_is_not_matched() {
    let server = MockParseraServer::start().await;
    server.mount_json("POST", "/extract", 200, json!({"data": []})).await;

    let client = ParseraClient::new(ParseraConfig::with_api_key("other-key").with_base_url(server.uri())).unwrap();
    let err = client.execute(&extract_request()).await.unwrap_err();

    assert!(matches!(err, ParseraError::Api { status: 404, .. }));
}

#[tokio::test]
async fn test_non_success_maps_to_api_error() {
    let server = MockParseraServer::start().await;
    server
        .mount_json("POST", "/extract", 401, json!({"message": "Invalid API key"}))
        .await;

    let err = server.client().execute(&extract_request()).await.unwrap_err();

    assert_eq!(
        err,
        ParseraError::Api {
            status: 401,
            message: "Invalid API key".to_string()
        }
    );
    assert_eq!(err.to_string(), "Parsera API error (401): Invalid API key");
}

#[tokio::test]
async fn test_non_json_body_becomes_string() {
    let server = MockParseraServer::start().await;
    server.mount_text("POST", "/extract", 200, "plain text").await;

    let response = server.client().execute(&extract_request()).await.unwrap();

    assert_eq!(response.body, json!("plain text"));
}

#[tokio::test]
async fn test_credential_check_uses_list() {
    let server = MockParseraServer::start().await;
    Mock::given(method("GET"))
        .and(path("/list"))
        .and(header("X-API-KEY", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(server.inner())
        .await;

    server.client().test_credentials().await.unwrap();
}

#[tokio::test]
async fn test_template_scrape_goes_to_scrapers_run() {
    let server = MockParseraServer::start().await;
    server
        .mount_json("POST", "/scrapers/run", 200, json!({"data": {"ok": true}}))
        .await;

    let inputs = BodyInputs {
        scraper: Some("template:tpl-1".parse::<ScraperRef>().unwrap()),
        ..Default::default()
    };
    let request = prepare_request(Operation::AgentScrape, BodyTemplate::new(), &inputs).unwrap();
    server.client().execute(&request).await.unwrap();

    assert_eq!(server.received_paths().await, vec!["/scrapers/run".to_string()]);
    let bodies = server.received_bodies().await;
    assert_eq!(bodies[0]["template_id"], "tpl-1");
    assert!(bodies[0].get("name").is_none());
}

#[tokio::test]
async fn test_connection_failure_maps_to_request_error() {
    let client = ParseraClient::new(ParseraConfig::with_api_key("key").with_base_url("http://127.0.0.1:1")).unwrap();

    let err = client.execute(&extract_request()).await.unwrap_err();

    assert!(matches!(err, ParseraError::Request(_)));
}
