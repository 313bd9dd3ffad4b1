use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use parsera_client::{ParseraApi, ParseraClient};
use parsera_core::{
    check_template, prepare_request, unpack_response_data, ParseraResult, PreparedRequest,
};

use crate::parameters::ParameterReader;
use crate::runtime::{
    ExecutionResult, LogLevel, NodeExecutionContext, NodeExecutionContextBase, NodeExecutor,
    NodeExecutorBase, MAIN_OUTPUT,
};

/// Node type name the factory registers
pub const NODE_TYPE: &str = "Parsera";

/// Calls the Parsera API once per item and emits the unwrapped records
pub struct ParseraNode {
    api: Arc<dyn ParseraApi>,
}

impl ParseraNode {
    /// Create a node over any API implementation
    pub fn new(api: Arc<dyn ParseraApi>) -> Self {
        Self { api }
    }

    /// Create a node backed by a client configured from the environment
    pub fn from_env() -> ParseraResult<Self> {
        Ok(Self::new(Arc::new(ParseraClient::from_env()?)))
    }

    /// Build the outbound request for the context's item without sending it
    pub async fn prepare(&self, ctx: &dyn NodeExecutionContext) -> ParseraResult<PreparedRequest> {
        let reader = ParameterReader::new(ctx);
        let operation = reader.operation().await?;
        let template = reader.template(operation).await?;
        check_template(operation, &template)?;
        let inputs = reader.body_inputs(operation).await?;
        prepare_request(operation, template, &inputs)
    }

    /// Verify the API credentials
    pub async fn test_credentials(&self) -> ParseraResult<()> {
        self.api.test_credentials().await
    }

    /// Prepare, send, unwrap and emit; returns the number of records written
    pub async fn run(&self, ctx: &dyn NodeExecutionContext) -> ParseraResult<usize> {
        let request = self.prepare(ctx).await?;
        info!(
            item = ctx.item_index(),
            path = request.endpoint.path,
            "Calling Parsera"
        );

        let response = self.api.execute(&request).await?;
        let items = ctx.get_input_items().await?;
        let records = unpack_response_data(response.body, items);
        let count = records.len();

        ctx.set_output(MAIN_OUTPUT, records).await?;
        Ok(count)
    }
}

impl NodeExecutorBase for ParseraNode {
    fn node_type(&self) -> &str {
        NODE_TYPE
    }
}

#[async_trait]
impl NodeExecutor for ParseraNode {
    async fn execute(&self, ctx: Arc<dyn NodeExecutionContext>) -> ExecutionResult {
        let index = ctx.item_index();

        match self.run(ctx.as_ref()).await {
            Ok(count) => {
                report(&ctx, LogLevel::Debug, &format!("Item {} produced {} record(s)", index, count)).await;
                ExecutionResult::Success
            }
            Err(e) => {
                let e = e.with_item_index(index);
                report(&ctx, LogLevel::Error, &format!("Item {}: {}", index, e)).await;
                ExecutionResult::Failure(e)
            }
        }
    }
}

/// Send a message to both the tracing subscriber and the host log
async fn report(ctx: &Arc<dyn NodeExecutionContext>, level: LogLevel, message: &str) {
    NodeExecutionContextBase::log(ctx, level.into(), message);
    let _ = NodeExecutionContext::log(ctx.as_ref(), level, message).await;
}
