use serde_json::Value;

use crate::error::{ParseraError, ParseraResult};

/// Validated cookies: `None` when absent or empty, otherwise the parsed elements
pub type CookieList = Option<Vec<Value>>;

/// Parse the raw cookies parameter.
///
/// Elements are opaque to us; the API interprets them as HTTP cookies.
pub fn parse_cookies(raw: Option<&str>) -> ParseraResult<CookieList> {
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(None),
    };

    let parsed: Value = serde_json::from_str(raw).map_err(|e| {
        ParseraError::validation(format!("Invalid JSON in Cookies field: {}", e))
    })?;

    match parsed {
        Value::Array(cookies) if cookies.is_empty() => Ok(None),
        Value::Array(cookies) => Ok(Some(cookies)),
        _ => Err(ParseraError::validation("Cookies field must be a JSON array.")),
    }
}
