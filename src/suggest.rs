//! Request coordination for suggestion lookups
//!
//! The UI thread owns a [`SuggestState`] and a [`Debouncer`]. Lookups run on
//! a background worker ([`spawn_worker`]) that talks to the endpoint through
//! a [`SuggestClient`]. Every request carries a `request_id`; superseded
//! requests are cancelled in the worker and any response that still slips
//! through is discarded by id on arrival.

pub mod client;
pub mod debouncer;
pub mod response;
pub mod suggest_state;
pub mod worker;

pub use client::SuggestClient;
pub use debouncer::Debouncer;
pub use response::{SuggestError, parse_suggestions};
pub use suggest_state::{SuggestOutcome, SuggestRequest, SuggestResponse, SuggestState};
pub use worker::spawn_worker;

/// Minimum trimmed query length (in characters) that triggers a lookup
pub const MIN_QUERY_CHARS: usize = 2;

/// Number of suggestions requested from the endpoint
pub const SUGGESTION_LIMIT: usize = 10;

/// Quiet period after the last keystroke before a lookup is issued
pub const DEBOUNCE_MS: u64 = 180;

/// Trim the raw input and apply the minimum length guard
///
/// Returns `None` for queries too short to look up.
pub fn search_query(raw: &str) -> Option<&str> {
    let query = raw.trim();
    if query.chars().count() < MIN_QUERY_CHARS {
        None
    } else {
        Some(query)
    }
}
