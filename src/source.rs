//! Suggestion source
//!
//! The remote collaborator that turns a query string into a bounded, ordered
//! list of actors. A dedicated worker thread owns the HTTP client and a tokio
//! runtime; the UI thread sends requests over a channel and polls replies
//! each tick. Every request carries a sequence token so stale replies from
//! slow responses never overwrite fresher state.

mod client;
mod source_state;
pub mod worker;


pub use client::{SearchClient, SourceError, endpoint_url};
pub use source_state::SourceState;
pub use worker::{SearchReply, SearchRequest, spawn_worker};
