//! Core domain types for movie search.
//!
//! This module defines the normalized movie record used throughout the
//! system. The search provider returns records with its own field names and
//! casing; everything above the client layer works with these types instead,
//! so the provider's shape never leaks past the client.

use serde::{Deserialize, Serialize};

/// A normalized movie search result.
///
/// One entry of the result set displayed to the user. All fields are plain
/// strings because the provider reports them that way ("Year" can be a range
/// like "2001-2003" for series, "Poster" can be the literal "N/A").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Provider-assigned identifier (e.g., "tt0499549")
    pub id: String,
    /// Display title
    pub title: String,
    /// Release year as reported by the provider
    pub year: String,
    /// Poster image URL, or "N/A" when the provider has none
    pub poster_url: String,
}

impl MovieSummary {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        year: impl Into<String>,
        poster_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year: year.into(),
            poster_url: poster_url.into(),
        }
    }
}
