//! Core trait for the search boundary.
//!
//! The controller talks to the movie provider through this trait rather than
//! the concrete HTTP client, so tests can substitute a scripted client.

use async_trait::async_trait;
use omdb_client::SearchError;
use search_core::MovieSummary;

/// Anything that can resolve a query into movie summaries.
///
/// `Send + Sync` allows implementations to be driven from async contexts.
/// The error type is the client's single generic failure; implementations
/// are expected to log the underlying cause themselves.
#[async_trait]
pub trait MovieSearch: Send + Sync {
    /// Search for movies matching `query`.
    ///
    /// An empty query must resolve to an empty result without error.
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, SearchError>;
}

#[async_trait]
impl MovieSearch for omdb_client::MovieClient {
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, SearchError> {
        omdb_client::MovieClient::search(self, query).await
    }
}
