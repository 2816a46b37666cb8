//! Search worker thread
//!
//! Handles actor-search requests in a background thread so the UI never
//! blocks on the network. Receives requests via channel, performs the HTTP
//! call on a current-thread tokio runtime, and sends replies back tagged with
//! the request's sequence token.

use std::sync::mpsc::{Receiver, Sender};

use tokio_util::sync::CancellationToken;

use super::client::SearchClient;
use crate::actor::Actor;

/// Request sent to the search worker
#[derive(Debug)]
pub struct SearchRequest {
    pub query: String,
    pub limit: u16,
    /// Sequence token used to filter stale replies
    pub request_id: u64,
    /// Cancels the HTTP call when a newer request supersedes this one
    pub cancel_token: CancellationToken,
}

/// Reply sent back from the search worker
#[derive(Debug)]
pub enum SearchReply {
    Results {
        actors: Vec<Actor>,
        request_id: u64,
    },
    Error {
        message: String,
        request_id: u64,
    },
    Cancelled {
        request_id: u64,
    },
}

/// Spawn the search worker thread.
///
/// The thread owns a current-thread tokio runtime and processes requests
/// until the request channel closes, racing each HTTP call against its
/// cancellation token.
pub fn spawn_worker(host: &str, request_rx: Receiver<SearchRequest>, reply_tx: Sender<SearchReply>) {
    let client = SearchClient::new(host);

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime");

        rt.block_on(worker_loop(client, request_rx, reply_tx));
    });
}

/// Process requests until the channel is closed.
///
/// Blocking `recv()` is fine here since we're in a dedicated thread.
async fn worker_loop(
    client: SearchClient,
    request_rx: Receiver<SearchRequest>,
    reply_tx: Sender<SearchReply>,
) {
    while let Ok(request) = request_rx.recv() {
        handle_search(&client, request, &reply_tx).await;
    }
}

async fn handle_search(
    client: &SearchClient,
    request: SearchRequest,
    reply_tx: &Sender<SearchReply>,
) {
    let SearchRequest {
        query,
        limit,
        request_id,
        cancel_token,
    } = request;

    // Superseded before we even started
    if cancel_token.is_cancelled() {
        let _ = reply_tx.send(SearchReply::Cancelled { request_id });
        return;
    }

    let reply = tokio::select! {
        biased;

        _ = cancel_token.cancelled() => {
            #[cfg(debug_assertions)]
            log::debug!("Request {} cancelled mid-flight", request_id);
            SearchReply::Cancelled { request_id }
        }

        result = client.search(&query, limit) => match result {
            Ok(actors) => SearchReply::Results { actors, request_id },
            Err(e) => SearchReply::Error {
                message: e.to_string(),
                request_id,
            },
        }
    };

    let _ = reply_tx.send(reply);
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
