//!
//! Parsera Client - HTTP access to the Parsera APIs
//!
//! Sends the requests prepared by `parsera-core`, injecting the API key as the
//! `X-API-KEY` header on every call.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// HTTP client and the `ParseraApi` seam
pub mod client;

/// Client configuration
pub mod config;

pub use client::{ApiResponse, ParseraApi, ParseraClient, API_KEY_HEADER};
pub use config::ParseraConfig;
