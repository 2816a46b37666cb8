//! Request sequencing and reply application
//!
//! The UI-thread half of the suggestion source. Issues requests tagged with a
//! monotonically increasing sequence token, cancels the superseded in-flight
//! request, and applies only replies whose token matches the latest issued
//! request - a slow stale response can never overwrite fresher state.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use tokio_util::sync::CancellationToken;

use super::worker::{SearchReply, SearchRequest};
use crate::typeahead::TypeaheadState;

pub struct SourceState {
    rows: u16,
    request_tx: Option<Sender<SearchRequest>>,
    reply_rx: Option<Receiver<SearchReply>>,
    /// Latest issued sequence token; replies with any other token are stale
    request_id: u64,
    in_flight: Option<(u64, CancellationToken)>,
    disconnected: bool,
}

impl SourceState {
    pub fn new(rows: u16) -> Self {
        Self {
            rows,
            request_tx: None,
            reply_rx: None,
            request_id: 0,
            in_flight: None,
            disconnected: false,
        }
    }

    /// Wire up the worker channels (kept separate from `new` so tests can
    /// drive the state without a worker thread)
    pub fn set_channels(&mut self, request_tx: Sender<SearchRequest>, reply_rx: Receiver<SearchReply>) {
        self.request_tx = Some(request_tx);
        self.reply_rx = Some(reply_rx);
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    pub fn has_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Issue a search for a non-empty query.
    ///
    /// Cancels the previous in-flight request and bumps the sequence token,
    /// so whichever reply resolves for an older request gets discarded.
    pub fn begin_search(&mut self, query: &str) {
        self.cancel_in_flight();
        self.request_id = self.request_id.wrapping_add(1);

        let Some(tx) = &self.request_tx else {
            return;
        };

        let cancel_token = CancellationToken::new();
        let request = SearchRequest {
            query: query.to_string(),
            limit: self.rows,
            request_id: self.request_id,
            cancel_token: cancel_token.clone(),
        };

        if tx.send(request).is_err() {
            log::error!("Search worker is gone; request dropped");
            self.disconnected = true;
            return;
        }

        self.in_flight = Some((self.request_id, cancel_token));
    }

    pub fn cancel_in_flight(&mut self) {
        if let Some((_, token)) = self.in_flight.take() {
            token.cancel();
        }
    }

    /// Drain the reply channel, applying fresh replies to the typeahead.
    /// Returns true if anything changed.
    pub fn poll_replies(&mut self, typeahead: &mut TypeaheadState) -> bool {
        let Some(rx) = &self.reply_rx else {
            return false;
        };

        let mut replies = Vec::new();
        let mut disconnected = false;
        loop {
            match rx.try_recv() {
                Ok(reply) => replies.push(reply),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        let had_replies = !replies.is_empty();
        for reply in replies {
            self.apply_reply(reply, typeahead);
        }

        if disconnected {
            self.reply_rx = None;
            self.disconnected = true;
            log::error!("Search worker disconnected unexpectedly");
        }

        had_replies || disconnected
    }

    /// One-shot disconnect flag so the app can surface a single warning
    pub fn take_disconnected(&mut self) -> bool {
        std::mem::take(&mut self.disconnected)
    }

    fn apply_reply(&mut self, reply: SearchReply, typeahead: &mut TypeaheadState) {
        match reply {
            SearchReply::Results { actors, request_id } => {
                if request_id != self.request_id {
                    #[cfg(debug_assertions)]
                    log::debug!(
                        "Ignoring stale results from request {} (current: {})",
                        request_id,
                        self.request_id
                    );
                    return;
                }
                self.in_flight = None;
                typeahead.replace_actors(actors);
            }
            SearchReply::Error { message, request_id } => {
                if request_id != self.request_id {
                    return;
                }
                // No UI affordance for a fetch failure - degrade to no results
                log::warn!("Search failed: {}", message);
                self.in_flight = None;
                typeahead.replace_actors(Vec::new());
            }
            SearchReply::Cancelled { request_id } => {
                if self
                    .in_flight
                    .as_ref()
                    .is_some_and(|(id, _)| *id == request_id)
                {
                    self.in_flight = None;
                }
            }
        }
    }
}
