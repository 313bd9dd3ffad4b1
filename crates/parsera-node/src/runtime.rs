//! Contract between the flow runtime and the nodes it executes

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use parsera_core::{ExecutionRecord, ParseraError, ParseraResult};

/// Name of the node's single output
pub const MAIN_OUTPUT: &str = "main";

/// Result of node execution for one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    /// Execution completed and outputs were written
    Success,
    /// Execution failed; nothing was written
    Failure(ParseraError),
}

/// Severity of a message a node reports to its host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Per-step detail
    Trace,
    /// Diagnostics
    Debug,
    /// Normal progress
    Info,
    /// Recoverable problems
    Warn,
    /// Item failures
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Non-async base trait for node executors
/// This trait is object-safe and used as a marker trait
pub trait NodeExecutorBase: Send + Sync {
    /// Get the node type name
    fn node_type(&self) -> &str;
}

/// A node that the runtime invokes once per item
#[async_trait]
pub trait NodeExecutor: NodeExecutorBase {
    /// Execute the node for the context's current item
    async fn execute(&self, ctx: Arc<dyn NodeExecutionContext>) -> ExecutionResult;
}

/// Non-async base trait for the execution context
pub trait NodeExecutionContextBase: Send + Sync {
    /// Log information with the specified level
    fn log(&self, level: tracing::Level, message: &str);
}

impl NodeExecutionContextBase for Arc<dyn NodeExecutionContext> {
    fn log(&self, level: tracing::Level, message: &str) {
        match level {
            tracing::Level::ERROR => tracing::error!("{}", message),
            tracing::Level::WARN => tracing::warn!("{}", message),
            tracing::Level::INFO => tracing::info!("{}", message),
            tracing::Level::DEBUG => tracing::debug!("{}", message),
            tracing::Level::TRACE => tracing::trace!("{}", message),
        }
    }
}

/// Per-item view of the runtime given to a node.
///
/// Calls for different items may run concurrently; each context only sees its
/// own item.
#[async_trait]
pub trait NodeExecutionContext: NodeExecutionContextBase {
    /// Position of the current item in the batch
    fn item_index(&self) -> usize;

    /// Resolved value of a node parameter, `None` when unset
    async fn get_parameter(&self, name: &str) -> ParseraResult<Option<Value>>;

    /// Records the node received for this item
    async fn get_input_items(&self) -> ParseraResult<Vec<ExecutionRecord>>;

    /// Hand the produced records to a named output
    async fn set_output(&self, output: &str, records: Vec<ExecutionRecord>) -> ParseraResult<()>;

    /// Log message with specified log level
    async fn log(&self, level: LogLevel, message: &str) -> ParseraResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_maps_to_tracing() {
        assert_eq!(tracing::Level::from(LogLevel::Trace), tracing::Level::TRACE);
        assert_eq!(tracing::Level::from(LogLevel::Debug), tracing::Level::DEBUG);
        assert_eq!(tracing::Level::from(LogLevel::Info), tracing::Level::INFO);
        assert_eq!(tracing::Level::from(LogLevel::Warn), tracing::Level::WARN);
        assert_eq!(tracing::Level::from(LogLevel::Error), tracing::Level::ERROR);
    }
}
