//! Suggestion Worker Thread
//!
//! Runs lookups on a background thread so the UI never blocks on I/O.
//! The thread hosts a current-thread tokio runtime: requests arrive over an
//! unbounded channel, each lookup runs as its own task with a
//! [`CancellationToken`], and results go back to the UI thread over a std
//! channel that the event loop drains without blocking.

use std::sync::mpsc::Sender;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use super::client::SuggestClient;
use super::response::SuggestError;
use super::suggest_state::{SuggestRequest, SuggestResponse};

/// Spawn the suggestion worker thread
///
/// The thread exits once every request sender has been dropped.
pub fn spawn_worker(
    client: SuggestClient,
    request_rx: UnboundedReceiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                log::error!("Failed to start suggestion runtime: {}", e);
                return;
            }
        };
        runtime.block_on(worker_loop(client, request_rx, response_tx));
    })
}

/// The request currently being looked up
struct ActiveRequest {
    request_id: u64,
    token: CancellationToken,
}

/// Main worker loop - processes requests until the channel is closed
async fn worker_loop(
    client: SuggestClient,
    mut request_rx: UnboundedReceiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) {
    let mut active: Option<ActiveRequest> = None;

    while let Some(request) = request_rx.recv().await {
        match request {
            SuggestRequest::Query { query, request_id } => {
                // Only one lookup may be live at a time
                if let Some(previous) = active.take() {
                    previous.token.cancel();
                }

                let token = CancellationToken::new();
                active = Some(ActiveRequest {
                    request_id,
                    token: token.clone(),
                });

                tokio::spawn(run_lookup(
                    client.clone(),
                    query,
                    request_id,
                    token,
                    response_tx.clone(),
                ));
            }
            SuggestRequest::Cancel { request_id } => match active.take() {
                Some(current) if current.request_id == request_id => {
                    current.token.cancel();
                    log::debug!("Cancelled request {}", request_id);
                }
                other => {
                    active = other;
                    log::debug!("Ignoring cancel for request {} (not active)", request_id);
                }
            },
        }
    }

    if let Some(current) = active {
        current.token.cancel();
    }
    log::debug!("Suggestion worker shutting down");
}

/// Run one lookup and report its outcome
async fn run_lookup(
    client: SuggestClient,
    query: String,
    request_id: u64,
    token: CancellationToken,
    response_tx: Sender<SuggestResponse>,
) {
    let response = match client.fetch_suggestions(&query, &token).await {
        Ok(books) => SuggestResponse::Suggestions { books, request_id },
        Err(SuggestError::Superseded) => SuggestResponse::Cancelled { request_id },
        Err(error) => SuggestResponse::Failed { error, request_id },
    };

    // The UI may already be gone during shutdown
    let _ = response_tx.send(response);
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
