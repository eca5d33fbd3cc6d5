// Configuration type definitions

use serde::Deserialize;

/// Default per-request timeout for suggestion lookups
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Suggestion endpoint configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestConfig {
    /// Address of the suggestion endpoint, e.g. `http://127.0.0.1:5000/api/books`
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Timeout for a single lookup; a timed-out lookup clears the dropdown
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            endpoint: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub suggest: SuggestConfig,
}
