//! UI-side request coordination
//!
//! Tracks the single live request and filters worker responses so only the
//! most recently issued request can reach the dropdown.

use std::sync::mpsc::{Receiver, TryRecvError};

use tokio::sync::mpsc::UnboundedSender;

use super::response::SuggestError;

/// Request messages sent to the suggestion worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestRequest {
    /// Look up suggestions for a query
    Query {
        query: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
    },
    /// Cancel the request with the given ID
    Cancel { request_id: u64 },
}

/// Response messages received from the suggestion worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestResponse {
    /// The lookup finished (possibly with an empty list)
    Suggestions { books: Vec<String>, request_id: u64 },
    /// The lookup failed for a reason other than cancellation
    Failed { error: SuggestError, request_id: u64 },
    /// The lookup was cancelled before it finished
    Cancelled { request_id: u64 },
}

/// What the controller should do with a fresh response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestOutcome {
    /// Render this list (an empty list clears the dropdown)
    Loaded(Vec<String>),
    /// Clear the dropdown
    Failed(SuggestError),
}

/// Request coordinator state owned by the UI thread
#[derive(Debug, Default)]
pub struct SuggestState {
    request_tx: Option<UnboundedSender<SuggestRequest>>,
    response_rx: Option<Receiver<SuggestResponse>>,
    /// Incremented for every request; never reused
    request_id: u64,
    /// The one request whose response may still be applied
    in_flight_request_id: Option<u64>,
}

impl SuggestState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<SuggestRequest>,
        response_rx: Receiver<SuggestResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    pub fn has_in_flight_request(&self) -> bool {
        self.in_flight_request_id.is_some()
    }

    /// Issue a lookup for `query`
    ///
    /// Any in-flight request is cancelled first, so at most one request is
    /// outstanding. Returns false if there is no worker to send to.
    pub fn send_request(&mut self, query: String) -> bool {
        if self.request_tx.is_none() {
            return false;
        }

        self.cancel_in_flight_request();

        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;

        if let Some(ref tx) = self.request_tx
            && tx.send(SuggestRequest::Query { query, request_id }).is_ok()
        {
            self.in_flight_request_id = Some(request_id);
            log::debug!("Sent suggestion request {}", request_id);
            return true;
        }
        false
    }

    /// Cancel the in-flight request, if any
    ///
    /// Whatever the worker still sends for it is discarded on arrival.
    pub fn cancel_in_flight_request(&mut self) -> bool {
        let Some(request_id) = self.in_flight_request_id.take() else {
            return false;
        };

        if let Some(ref tx) = self.request_tx
            && tx.send(SuggestRequest::Cancel { request_id }).is_ok()
        {
            log::debug!("Sent cancel for request {}", request_id);
            return true;
        }
        false
    }

    /// Drain worker responses and return the outcome for the live request
    ///
    /// Stale responses and cancellation acknowledgements are dropped.
    pub fn poll_response(&mut self) -> Option<SuggestOutcome> {
        loop {
            let response = match self.response_rx.as_ref()?.try_recv() {
                Ok(response) => response,
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    self.response_rx = None;
                    return self.in_flight_request_id.take().map(|request_id| {
                        log::debug!("Worker gone while request {} was in flight", request_id);
                        SuggestOutcome::Failed(SuggestError::Transport(
                            "suggestion worker stopped".to_string(),
                        ))
                    });
                }
            };

            match response {
                SuggestResponse::Cancelled { request_id } => {
                    log::debug!("Request {} cancelled", request_id);
                }
                SuggestResponse::Suggestions { books, request_id } => {
                    if self.take_if_live(request_id) {
                        return Some(SuggestOutcome::Loaded(books));
                    }
                    log::debug!("Discarding stale suggestions for request {}", request_id);
                }
                SuggestResponse::Failed { error, request_id } => {
                    if self.take_if_live(request_id) {
                        log::debug!("Request {} failed: {}", request_id, error);
                        return Some(SuggestOutcome::Failed(error));
                    }
                    log::debug!("Discarding stale failure for request {}", request_id);
                }
            }
        }
    }

    fn take_if_live(&mut self, request_id: u64) -> bool {
        if self.in_flight_request_id == Some(request_id) {
            self.in_flight_request_id = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[path = "suggest_state_tests.rs"]
mod suggest_state_tests;
