//! Typed reads of node parameters for the current item

use serde_json::Value;

use parsera_core::{
    AttributeInputMode, AttributeSchema, BodyInputs, BodyTemplate, Operation, ParseraError,
    ParseraResult, ScraperKind, ScraperRef,
};

use crate::description::describe;
use crate::runtime::NodeExecutionContext;

/// Reads parameters through the execution context, applying declared defaults
pub struct ParameterReader<'a> {
    ctx: &'a dyn NodeExecutionContext,
}

impl<'a> ParameterReader<'a> {
    /// Create a reader over a context
    pub fn new(ctx: &'a dyn NodeExecutionContext) -> Self {
        Self { ctx }
    }

    /// Raw parameter value.
    ///
    /// Unset parameters fall back to the description default unless that
    /// default is only an editor example.
    pub async fn value(&self, name: &str) -> ParseraResult<Option<Value>> {
        if let Some(value) = self.ctx.get_parameter(name).await? {
            return Ok(Some(value));
        }
        Ok(describe().runtime_default(name).cloned())
    }

    /// String parameter; any other JSON type is rejected
    pub async fn string(&self, name: &str) -> ParseraResult<Option<String>> {
        match self.value(name).await? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(ParseraError::validation(format!(
                "Parameter '{}' must be a string. Received: {}.",
                name,
                parsera_core::types::json_kind(&other)
            ))),
        }
    }

    /// String parameter that must be present
    pub async fn required_string(&self, name: &str) -> ParseraResult<String> {
        self.string(name)
            .await?
            .ok_or_else(|| ParseraError::Internal(format!("Parameter '{}' is not set.", name)))
    }

    /// Resolve the operation from `resource` and `operation`
    pub async fn operation(&self) -> ParseraResult<Operation> {
        let resource = self.required_string("resource").await?;
        let operation = self.required_string("operation").await?;
        Operation::resolve(&resource, &operation)
    }

    /// Pre-fill the body template keys of an operation
    pub async fn template(&self, operation: Operation) -> ParseraResult<BodyTemplate> {
        let mut template = BodyTemplate::new();
        for (key, parameter) in operation.template_fields() {
            if let Some(value) = self.value(parameter).await? {
                template.insert((*key).to_string(), value);
            }
        }
        Ok(template)
    }

    /// Attribute schema in whichever input mode is selected
    pub async fn attribute_schema(&self) -> ParseraResult<AttributeSchema> {
        let mode = match self.string("attributesInputMode").await? {
            Some(mode) => mode.parse()?,
            None => AttributeInputMode::default(),
        };

        match mode {
            AttributeInputMode::Fields => {
                let collection = self.value("attributesFields").await?;
                AttributeSchema::from_fields_parameter(collection.as_ref())
            }
            AttributeInputMode::Json => Ok(AttributeSchema::Json(
                self.value("attributesJson").await?.unwrap_or(Value::Null),
            )),
        }
    }

    /// Raw cookies text; structured values are re-serialized for the parser
    pub async fn cookies(&self) -> ParseraResult<Option<String>> {
        match self.value("cookies").await? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Ok(Some(serde_json::to_string(&other)?)),
        }
    }

    /// Scraper to run, honoring an explicit `scraperKind` over the id prefix
    pub async fn scraper(&self) -> ParseraResult<ScraperRef> {
        let name = self.string("agentName").await?.unwrap_or_default();
        let kind = self
            .string("scraperKind")
            .await?
            .filter(|kind| !kind.trim().is_empty());

        match kind {
            Some(kind) => ScraperRef::new(kind.trim().parse::<ScraperKind>()?, &name),
            None => name.parse(),
        }
    }

    /// Validated inputs an operation needs besides its template
    pub async fn body_inputs(&self, operation: Operation) -> ParseraResult<BodyInputs> {
        let mut inputs = BodyInputs::default();
        if operation.uses_attributes() {
            inputs.prompt = self.string("prompt").await?;
            inputs.attributes = Some(self.attribute_schema().await?);
        }
        if operation.uses_cookies() {
            inputs.cookies = self.cookies().await?;
        }
        if operation == Operation::AgentScrape {
            inputs.scraper = Some(self.scraper().await?);
        }
        Ok(inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{LogLevel, NodeExecutionContextBase};
    use async_trait::async_trait;
    use parsera_core::ExecutionRecord;
    use serde_json::json;
    use std::collections::HashMap;

    #[derive(Default)]
    struct StaticContext {
        parameters: HashMap<&'static str, Value>,
    }

    impl StaticContext {
        fn with(mut self, name: &'static str, value: Value) -> Self {
            self.parameters.insert(name, value);
            self
        }
    }

    impl NodeExecutionContextBase for StaticContext {
        fn log(&self, _level: tracing::Level, _message: &str) {}
    }

    #[async_trait]
    impl NodeExecutionContext for StaticContext {
        fn item_index(&self) -> usize {
            0
        }

        async fn get_parameter(&self, name: &str) -> ParseraResult<Option<Value>> {
            Ok(self.parameters.get(name).cloned())
        }

        async fn get_input_items(&self) -> ParseraResult<Vec<ExecutionRecord>> {
            Ok(Vec::new())
        }

        async fn set_output(&self, _output: &str, _records: Vec<ExecutionRecord>) -> ParseraResult<()> {
            Ok(())
        }

        async fn log(&self, _level: LogLevel, _message: &str) -> ParseraResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_defaults_apply_when_unset() {
        let ctx = StaticContext::default();
        let reader = ParameterReader::new(&ctx);

        assert_eq!(reader.string("mode").await.unwrap().as_deref(), Some("standard"));
        assert_eq!(reader.cookies().await.unwrap().as_deref(), Some("[]"));
        assert_eq!(reader.value("attributesFields").await.unwrap(), None);
        assert_eq!(reader.value("agentName").await.unwrap(), Some(json!("")));
        assert_eq!(reader.value("scraperKind").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_template_for_extract() {
        let ctx = StaticContext::default()
            .with("url", json!("https://example.com"))
            .with("proxyCountry", json!("Germany"));
        let template = ParameterReader::new(&ctx).template(Operation::ExtractUrl).await.unwrap();

        assert_eq!(
            Value::Object(template),
            json!({"url": "https://example.com", "mode": "standard", "proxy_country": "Germany"})
        );
    }

    #[tokio::test]
    async fn test_unset_json_attributes_have_no_default() {
        let ctx = StaticContext::default().with("attributesInputMode", json!("json"));
        let schema = ParameterReader::new(&ctx).attribute_schema().await.unwrap();

        assert_eq!(schema, AttributeSchema::Json(Value::Null));
        assert!(schema.parse().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_string_parameter_rejected() {
        let ctx = StaticContext::default().with("prompt", json!(5));
        let err = ParameterReader::new(&ctx).string("prompt").await.unwrap_err();
        assert_eq!(
            err,
            ParseraError::validation("Parameter 'prompt' must be a string. Received: number.")
        );
    }

    #[tokio::test]
    async fn test_unknown_input_mode_is_internal() {
        let ctx = StaticContext::default().with("attributesInputMode", json!("yaml"));
        let err = ParameterReader::new(&ctx).attribute_schema().await.unwrap_err();
        assert!(matches!(err, ParseraError::Internal(_)));
    }

    #[tokio::test]
    async fn test_json_mode_reads_raw_value() {
        let ctx = StaticContext::default()
            .with("attributesInputMode", json!("json"))
            .with("attributesJson", json!({"a": {"type": "string"}}));
        let schema = ParameterReader::new(&ctx).attribute_schema().await.unwrap();
        assert_eq!(schema, AttributeSchema::Json(json!({"a": {"type": "string"}})));
    }

    #[tokio::test]
    async fn test_structured_cookies_are_serialized() {
        let ctx = StaticContext::default().with("cookies", json!([{"name": "a"}]));
        let cookies = ParameterReader::new(&ctx).cookies().await.unwrap();
        assert_eq!(cookies.as_deref(), Some(r#"[{"name":"a"}]"#));
    }

    #[tokio::test]
    async fn test_scraper_resolution() {
        let reader_for = |name: &str, kind: Option<&str>| {
            let mut ctx = StaticContext::default().with("agentName", json!(name));
            if let Some(kind) = kind {
                ctx = ctx.with("scraperKind", json!(kind));
            }
            ctx
        };

        let ctx = reader_for(" scraper:abc ", None);
        assert_eq!(ParameterReader::new(&ctx).scraper().await.unwrap(), ScraperRef::scraper("abc").unwrap());

        let ctx = reader_for("abc", None);
        assert_eq!(ParameterReader::new(&ctx).scraper().await.unwrap(), ScraperRef::template("abc").unwrap());

        let ctx = reader_for("abc", Some("scraper"));
        assert_eq!(ParameterReader::new(&ctx).scraper().await.unwrap(), ScraperRef::scraper("abc").unwrap());

        let ctx = reader_for("", None);
        let err = ParameterReader::new(&ctx).scraper().await.unwrap_err();
        assert_eq!(err, ParseraError::validation("Agent Name is required for Agent Scrape operation."));
    }

    #[tokio::test]
    async fn test_body_inputs_follow_operation() {
        let ctx = StaticContext::default()
            .with("agentName", json!("scraper:abc"))
            .with("prompt", json!("ignored"));
        let inputs = ParameterReader::new(&ctx).body_inputs(Operation::AgentScrape).await.unwrap();

        assert!(inputs.prompt.is_none());
        assert!(inputs.attributes.is_none());
        assert_eq!(inputs.cookies.as_deref(), Some("[]"));
        assert!(inputs.scraper.is_some());
    }
}
