//! Actor-search HTTP client
//!
//! One GET per query against the typeahead search endpoint, JSON response
//! decoded into actors. Uses reqwest with rustls; cancellation is handled by
//! the worker racing the request against a CancellationToken.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::actor::Actor;

/// XRPC path of the typeahead search endpoint
pub const SEARCH_PATH: &str = "/xrpc/app.bsky.actor.searchActorsTypeahead";

/// Errors from a suggestion fetch; all of them degrade to "no suggestions"
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Wire shape of the endpoint's response body
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    actors: Vec<Actor>,
}

#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    endpoint: String,
}

impl SearchClient {
    pub fn new(host: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint_url(host),
        }
    }

    /// Fetch up to `limit` actors matching `query`
    pub async fn search(&self, query: &str, limit: u16) -> Result<Vec<Actor>, SourceError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query), ("limit", &limit.to_string())])
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let code = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SourceError::Api { code, message });
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        Ok(sanitize_actors(body.actors, limit))
    }
}

/// Endpoint URL for a host, tolerating a trailing slash
pub fn endpoint_url(host: &str) -> String {
    format!("{}{}", host.trim_end_matches('/'), SEARCH_PATH)
}

/// Drop malformed entries and enforce the row bound even when the server
/// over-returns
fn sanitize_actors(actors: Vec<Actor>, limit: u16) -> Vec<Actor> {
    actors
        .into_iter()
        .filter(|a| a.is_well_formed())
        .take(limit as usize)
        .collect()
}
