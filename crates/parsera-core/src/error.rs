use thiserror::Error;

/// Error type shared by every Parsera crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseraError {
    /// User input is malformed or incomplete
    #[error("{message}")]
    Validation {
        /// Message surfaced verbatim to the user
        message: String,
        /// Position of the item being processed, when known
        item_index: Option<usize>,
    },

    /// Exhaustiveness violation in the calling configuration
    #[error("Internal error: {0}")]
    Internal(String),

    /// Missing or invalid client configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Transport failure talking to the API
    #[error("Request error: {0}")]
    Request(String),

    /// The API answered with a non-success status
    #[error("Parsera API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message extracted from the response body
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result alias used throughout the Parsera crates
pub type ParseraResult<T> = Result<T, ParseraError>;

impl ParseraError {
    /// Build a validation error without item context
    pub fn validation(message: impl Into<String>) -> Self {
        ParseraError::Validation {
            message: message.into(),
            item_index: None,
        }
    }

    /// Attach the positional item index to a validation error.
    ///
    /// Other variants are returned unchanged. An index that is already set is kept.
    pub fn with_item_index(self, index: usize) -> Self {
        match self {
            ParseraError::Validation {
                message,
                item_index,
            } => ParseraError::Validation {
                message,
                item_index: item_index.or(Some(index)),
            },
            other => other,
        }
    }

    /// Whether this error was caused by user input
    pub fn is_validation(&self) -> bool {
        matches!(self, ParseraError::Validation { .. })
    }

    /// Item index carried by a validation error
    pub fn item_index(&self) -> Option<usize> {
        match self {
            ParseraError::Validation { item_index, .. } => *item_index,
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ParseraError {
    fn from(err: serde_json::Error) -> Self {
        ParseraError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let errors = vec![
            (ParseraError::validation("URL is required."), "URL is required."),
            (ParseraError::Internal("bad mode".to_string()), "Internal error: bad mode"),
            (ParseraError::Configuration("no key".to_string()), "Configuration error: no key"),
            (ParseraError::Request("timeout".to_string()), "Request error: timeout"),
            (
                ParseraError::Api { status: 401, message: "Unauthorized".to_string() },
                "Parsera API error (401): Unauthorized",
            ),
            (ParseraError::Serialization("eof".to_string()), "Serialization error: eof"),
        ];

        for (error, expected_msg) in errors {
            assert_eq!(error.to_string(), expected_msg);
        }
    }

    #[test]
    fn test_with_item_index_only_touches_validation() {
        let err = ParseraError::validation("Empty Field Name at index 0.").with_item_index(3);
        assert_eq!(err.item_index(), Some(3));
        assert!(err.is_validation());

        let internal = ParseraError::Internal("x".to_string()).with_item_index(3);
        assert_eq!(internal.item_index(), None);
    }

    #[test]
    fn test_with_item_index_keeps_existing_index() {
        let err = ParseraError::validation("x").with_item_index(1).with_item_index(7);
        assert_eq!(err.item_index(), Some(1));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error: ParseraError = json_error.into();

        match error {
            ParseraError::Serialization(msg) => assert!(msg.contains("expected value")),
            _ => panic!("Expected Serialization variant"),
        }
    }
}
