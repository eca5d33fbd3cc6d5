//! Async HTTP client for the suggestion endpoint
//!
//! Issues `GET <endpoint>?q=<query>&limit=10` and races the request against a
//! [`CancellationToken`] so a superseded lookup stops doing work immediately.

use std::time::Duration;

use reqwest::Url;
use tokio_util::sync::CancellationToken;

use super::SUGGESTION_LIMIT;
use super::response::{SuggestError, parse_suggestions};

/// Client for the suggestion endpoint
#[derive(Debug, Clone)]
pub struct SuggestClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl SuggestClient {
    /// Create a client for `endpoint` with a per-request timeout
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, SuggestError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SuggestError::Transport(e.to_string()))?;
        Ok(Self { http, endpoint })
    }

    /// The configured endpoint
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build the lookup URL for `query`
    ///
    /// Other query pairs on the endpoint are preserved. Any `q` or `limit`
    /// already there is replaced, so the request carries exactly one of each.
    pub fn request_url(&self, query: &str) -> Url {
        let kept: Vec<(String, String)> = self
            .endpoint
            .query_pairs()
            .into_owned()
            .filter(|(key, _)| key != "q" && key != "limit")
            .collect();

        let mut url = self.endpoint.clone();
        url.set_query(None);
        url.query_pairs_mut()
            .extend_pairs(kept)
            .append_pair("q", query)
            .append_pair("limit", &SUGGESTION_LIMIT.to_string());
        url
    }

    /// Fetch suggestions for `query`
    ///
    /// Returns [`SuggestError::Superseded`] if `cancel` fires before the
    /// response is complete, including when it is already cancelled on entry
    /// (no request is sent in that case). A non-success status is an empty
    /// list, not an error.
    pub async fn fetch_suggestions(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<String>, SuggestError> {
        if cancel.is_cancelled() {
            return Err(SuggestError::Superseded);
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(SuggestError::Superseded),
            result = self.lookup(query) => result,
        }
    }

    async fn lookup(&self, query: &str) -> Result<Vec<String>, SuggestError> {
        let url = self.request_url(query);
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| SuggestError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("Suggestion endpoint returned {}, treating as empty", status);
            return Ok(Vec::new());
        }

        let body = response
            .text()
            .await
            .map_err(|e| SuggestError::Transport(e.to_string()))?;
        parse_suggestions(&body)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
