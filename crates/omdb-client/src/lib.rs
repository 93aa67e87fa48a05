//! Search client for the OMDb movie database API.
//!
//! This crate provides the one outbound integration of the workspace: a thin
//! HTTP client that turns a query string into a list of normalized
//! [`MovieSummary`] records. It handles:
//! - Building the provider request (API key + URL-encoded query)
//! - Deserializing the provider's JSON envelope
//! - Projecting provider records into the domain shape
//! - Collapsing transport and parse failures into one public error
//!
//! The provider reports "no matches" by omitting the `Search` field from the
//! envelope rather than with an HTTP error status, so the status code is not
//! consulted and an absent list maps to an empty result.

use search_core::MovieSummary;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error};

/// Public OMDb endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.omdbapi.com/";

/// Demo API key used when none is configured.
pub const DEFAULT_API_KEY: &str = "507010ff";

/// Errors that can occur when searching the movie provider.
///
/// Transport and parse failures are deliberately indistinguishable here: the
/// user-visible contract is a single generic failure. The underlying cause
/// is logged at the failure site before being discarded.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("an error occurred while searching for movies")]
    SearchFailed,
}

/// The provider's search response envelope.
///
/// A successful response carries the matches under `Search`; responses for
/// queries with no matches (and in-band provider errors) omit the field.
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(rename = "Search")]
    search: Option<Vec<ProviderMovie>>,
}

/// One raw provider record, with the provider's field casing.
#[derive(Debug, Deserialize)]
struct ProviderMovie {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Poster")]
    poster: String,
}

/// Client for the OMDb search API.
///
/// Wraps a [`reqwest::Client`] with the endpoint and API key, and exposes a
/// single high-level [`search`](MovieClient::search) operation.
#[derive(Debug, Clone)]
pub struct MovieClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl MovieClient {
    /// Create a client against the public OMDb endpoint.
    ///
    /// # Arguments
    /// * `api_key` - OMDb API key sent with every request
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, api_key)
    }

    /// Create a client against a custom endpoint (used by tests and for
    /// self-hosted mirrors).
    pub fn with_endpoint(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Search the provider for movies matching `query`.
    ///
    /// # Arguments
    /// * `query` - Raw search text; URL encoding is handled here
    ///
    /// # Returns
    /// The normalized matches, or an empty Vec when the query is empty or the
    /// provider reports no matches.
    ///
    /// An empty query returns immediately without a network call; this is a
    /// distinct outcome from a failed search.
    pub async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, SearchError> {
        if query.is_empty() {
            debug!("Skipping provider call for empty query");
            return Ok(Vec::new());
        }

        debug!("Searching provider for {:?}", query);
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("apikey", self.api_key.as_str()), ("s", query)])
            .send()
            .await
            .map_err(|e| {
                error!("Transport error while searching for {:?}: {}", query, e);
                SearchError::SearchFailed
            })?;

        let envelope: SearchEnvelope = response.json().await.map_err(|e| {
            error!("Malformed provider response for {:?}: {}", query, e);
            SearchError::SearchFailed
        })?;

        let movies = map_envelope(envelope);
        debug!("Provider returned {} matches for {:?}", movies.len(), query);
        Ok(movies)
    }

    /// Get the endpoint this client sends requests to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Project the provider envelope into domain records.
///
/// An envelope without a `Search` field yields an empty Vec, not an error.
fn map_envelope(envelope: SearchEnvelope) -> Vec<MovieSummary> {
    envelope
        .search
        .unwrap_or_default()
        .into_iter()
        .map(|movie| MovieSummary {
            id: movie.imdb_id,
            title: movie.title,
            year: movie.year,
            poster_url: movie.poster,
        })
        .collect()
}
