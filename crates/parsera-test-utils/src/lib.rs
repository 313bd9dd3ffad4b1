//! Testing utilities for the Parsera crates.
//!
//! Provides an in-memory node execution context, a mockall mock of the
//! `ParseraApi` seam, a wiremock-backed Parsera server and parameter fixtures.

pub mod context;
pub mod fixtures;
pub mod mocks;
pub mod server;

/// Re-export commonly used types for convenience
pub use mockall;

pub use context::MockNodeContext;
pub use mocks::MockParseraApi;
pub use server::{MockParseraServer, TEST_API_KEY};
