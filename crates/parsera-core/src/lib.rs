//!
//! Parsera Core - request building and response unwrapping for the Parsera API
//!
//! This crate holds the logic that runs around one outbound Parsera call:
//! normalizing attribute schemas and cookies, assembling the request body
//! for each operation, and unwrapping the response envelope into records.
//! It performs no I/O.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Attribute schema parsing
pub mod attributes;

/// Request body assembly
pub mod body;

/// Cookie parameter parsing
pub mod cookies;

/// Error types
pub mod error;

/// Operation dispatch table
pub mod operation;

/// Proxy country catalogue
pub mod proxy;

/// Response envelope unwrapping
pub mod response;

/// Scraper identifiers
pub mod scraper;

/// Shared value types
pub mod types;

// Re-export key types
pub use attributes::{AttributeDefinition, AttributeInputMode, AttributeMap, AttributeSchema};
pub use body::{check_template, prepare_request, BodyInputs, BodyTemplate, PreparedRequest, RequestBody, RequestBodyBuilder};
pub use cookies::{parse_cookies, CookieList};
pub use error::{ParseraError, ParseraResult};
pub use operation::{ApiHost, Endpoint, HttpMethod, Operation, Resource};
pub use response::unpack_response_data;
pub use scraper::{ScraperKind, ScraperRef};
pub use types::ExecutionRecord;
