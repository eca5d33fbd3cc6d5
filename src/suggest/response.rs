//! Suggestion response parsing and error types

use serde::Deserialize;
use thiserror::Error;

/// Errors from a single suggestion lookup
///
/// None of these reach the user: the controller drops `Superseded` silently
/// and turns everything else into an empty dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestError {
    /// Connection, TLS, or timeout failure
    #[error("Network error: {0}")]
    Transport(String),

    /// Response body was not the expected JSON document
    #[error("Invalid response body: {0}")]
    Body(String),

    /// A newer request replaced this one before it finished
    #[error("Request superseded")]
    Superseded,
}

#[derive(Debug, Deserialize)]
struct SuggestionBody {
    #[serde(default)]
    books: Option<Vec<String>>,
}

/// Parse a `{"books": [...]}` response body
///
/// A missing or `null` `books` field is an empty list. Anything that is not a
/// JSON object with a string array there is a [`SuggestError::Body`].
pub fn parse_suggestions(body: &str) -> Result<Vec<String>, SuggestError> {
    serde_json::from_str::<SuggestionBody>(body)
        .map(|parsed| parsed.books.unwrap_or_default())
        .map_err(|e| SuggestError::Body(e.to_string()))
}
