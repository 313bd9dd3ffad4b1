//!
//! Parsera Node - flow-platform node for the Parsera scraping API
//!
//! The node reads its parameters through a [`NodeExecutionContext`], builds
//! one request with `parsera-core`, sends it through a [`ParseraApi`] and
//! writes the unwrapped records to its `main` output.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Declarative node metadata
pub mod description;

/// The Parsera node executor
pub mod node;

/// Parameter access
pub mod parameters;

/// Runtime contract
pub mod runtime;

pub use description::{describe, NodeDescription, ParameterDescription, ParameterKind};
pub use node::{ParseraNode, NODE_TYPE};
pub use parameters::ParameterReader;
pub use runtime::{
    ExecutionResult, LogLevel, NodeExecutionContext, NodeExecutionContextBase, NodeExecutor,
    NodeExecutorBase, MAIN_OUTPUT,
};

pub use parsera_client::{ParseraApi, ParseraClient, ParseraConfig};
pub use parsera_core::{ParseraError, ParseraResult};

/// Node factory
pub mod factory {
    use std::sync::Arc;

    use parsera_client::ParseraApi;
    use parsera_core::{ParseraError, ParseraResult};

    use crate::node::{ParseraNode, NODE_TYPE};
    use crate::runtime::NodeExecutor;

    /// Create a node executor by type name
    pub fn create_node(node_type: &str, api: Arc<dyn ParseraApi>) -> ParseraResult<Box<dyn NodeExecutor>> {
        match node_type {
            NODE_TYPE | "AiScraper" => Ok(Box::new(ParseraNode::new(api))),
            _ => Err(ParseraError::Internal(format!("Unknown node type: {}", node_type))),
        }
    }
}

/// Initialize tracing for the node host
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_line_number(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::create_node;
    use async_trait::async_trait;
    use parsera_client::ApiResponse;
    use parsera_core::PreparedRequest;
    use std::sync::Arc;

    struct NoopApi;

    #[async_trait]
    impl ParseraApi for NoopApi {
        async fn execute(&self, _request: &PreparedRequest) -> ParseraResult<ApiResponse> {
            Ok(ApiResponse { status: 200, body: serde_json::Value::Null })
        }
    }

    #[test]
    fn test_create_node() {
        let node = create_node("Parsera", Arc::new(NoopApi)).unwrap();
        assert_eq!(node.node_type(), "Parsera");
        assert!(create_node("AiScraper", Arc::new(NoopApi)).is_ok());

        let err = create_node("HttpCall", Arc::new(NoopApi)).err().unwrap();
        assert!(matches!(err, ParseraError::Internal(_)));
    }

    #[test]
    fn test_init_tracing_is_repeatable() {
        init_tracing();
        init_tracing();
    }
}
