//! In-memory implementation of the node execution context.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use parsera_core::{ExecutionRecord, ParseraResult};
use parsera_node::{LogLevel, NodeExecutionContext, NodeExecutionContextBase};

/// Context with fixed parameters that captures outputs and log lines
#[derive(Debug, Default)]
pub struct MockNodeContext {
    item_index: usize,
    parameters: HashMap<String, Value>,
    input_items: Vec<ExecutionRecord>,
    outputs: Mutex<HashMap<String, Vec<ExecutionRecord>>>,
    logs: Mutex<Vec<(LogLevel, String)>>,
}

impl MockNodeContext {
    /// Empty context for item 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter
    pub fn with_parameter(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.to_string(), value.into());
        self
    }

    /// Set several parameters
    pub fn with_parameters<'a>(mut self, parameters: impl IntoIterator<Item = (&'a str, Value)>) -> Self {
        for (name, value) in parameters {
            self.parameters.insert(name.to_string(), value);
        }
        self
    }

    /// Set the item index
    pub fn with_item_index(mut self, index: usize) -> Self {
        self.item_index = index;
        self
    }

    /// Set the input items
    pub fn with_input_items(mut self, items: Vec<Value>) -> Self {
        self.input_items = items.into_iter().map(ExecutionRecord::new).collect();
        self
    }

    /// Wrap into the shared form executors take
    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Records written to an output
    pub async fn output(&self, name: &str) -> Option<Vec<ExecutionRecord>> {
        self.outputs.lock().await.get(name).cloned()
    }

    /// JSON of the records written to an output
    pub async fn output_values(&self, name: &str) -> Vec<Value> {
        self.output(name)
            .await
            .unwrap_or_default()
            .into_iter()
            .map(ExecutionRecord::into_value)
            .collect()
    }

    /// Log lines reported through the async `log`
    pub async fn logs(&self) -> Vec<(LogLevel, String)> {
        self.logs.lock().await.clone()
    }
}

impl NodeExecutionContextBase for MockNodeContext {
    fn log(&self, level: tracing::Level, message: &str) {
        tracing::debug!(?level, "{}", message);
    }
}

#[async_trait]
impl NodeExecutionContext for MockNodeContext {
    fn item_index(&self) -> usize {
        self.item_index
    }

    async fn get_parameter(&self, name: &str) -> ParseraResult<Option<Value>> {
        Ok(self.parameters.get(name).cloned())
    }

    async fn get_input_items(&self) -> ParseraResult<Vec<ExecutionRecord>> {
        Ok(self.input_items.clone())
    }

    async fn set_output(&self, output: &str, records: Vec<ExecutionRecord>) -> ParseraResult<()> {
        self.outputs.lock().await.insert(output.to_string(), records);
        Ok(())
    }

    async fn log(&self, level: LogLevel, message: &str) -> ParseraResult<()> {
        self.logs.lock().await.push((level, message.to_string()));
        Ok(())
    }
}
