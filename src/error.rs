use thiserror::Error;

/// Startup errors for bookfind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookfindError {
    #[error(
        "No suggestion endpoint configured.\n\nPass --endpoint <URL> or set [suggest] endpoint in the config file."
    )]
    MissingEndpoint,

    #[error("Invalid suggestion endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Invalid config {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
