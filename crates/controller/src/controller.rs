//! # Search Controller
//!
//! This module coordinates the interactive search pipeline:
//! 1. A text change updates the raw query and re-runs validation synchronously
//! 2. The debouncer coalesces the burst of changes into one trailing query
//! 3. The debounced (or explicitly submitted) query goes to the movie client
//! 4. A successful search replaces the result set wholesale
//! 5. A failed search records the error and keeps the previous results
//! 6. The visible list is derived from the result set and the sort flag
//!
//! The controller is the single owner of all interactive state. Every
//! mutation goes through its own methods, so there is no locking; the only
//! suspension point is the awaited client call.

use std::borrow::Cow;
use std::time::Duration;

use search_core::{MovieSummary, QueryValidator, ValidationError};
use omdb_client::SearchError;
use tracing::{debug, info, warn};

use crate::debounce::SearchDebouncer;
use crate::traits::MovieSearch;

/// Interactive search state machine.
///
/// Owns the query text, validation state, loading flag, sort flag, and the
/// current result set, and wires user events to the validator, the debouncer,
/// and the movie client.
pub struct SearchController {
    client: Box<dyn MovieSearch>,
    validator: QueryValidator,
    debouncer: SearchDebouncer,

    query: String,
    validation_error: Option<ValidationError>,
    search_error: Option<SearchError>,
    movies: Vec<MovieSummary>,
    loading: bool,
    sort_by_title: bool,

    /// Most recently issued query; consecutive identical submissions are
    /// absorbed here instead of hitting the network twice.
    last_issued_query: Option<String>,
    /// Monotone stamp for issued searches. A completion whose stamp is no
    /// longer the latest is discarded, so a slow early request can never
    /// overwrite the result of a later one.
    request_seq: u64,
}

impl SearchController {
    /// Create a controller with the default 300ms debounce window.
    ///
    /// # Arguments
    /// * `client` - Any [`MovieSearch`] implementation; production code passes
    ///   an `omdb_client::MovieClient`
    pub fn new(client: impl MovieSearch + 'static) -> Self {
        Self::with_debounce_delay(client, crate::debounce::DEFAULT_DEBOUNCE_DELAY)
    }

    /// Create a controller with a custom debounce window (used by tests).
    pub fn with_debounce_delay(client: impl MovieSearch + 'static, delay: Duration) -> Self {
        Self {
            client: Box::new(client),
            validator: QueryValidator::new(),
            debouncer: SearchDebouncer::with_delay(delay),
            query: String::new(),
            validation_error: None,
            search_error: None,
            movies: Vec::new(),
            loading: false,
            sort_by_title: false,
            last_issued_query: None,
            request_seq: 0,
        }
    }

    // ------------------------------------------------------------------
    // Event handlers
    // ------------------------------------------------------------------

    /// Handle a change of the search text.
    ///
    /// Updates the raw query and its validation synchronously so the UI can
    /// reflect both immediately, then schedules the debounced search. No
    /// network call happens here.
    pub fn on_text_change(&mut self, text: &str) {
        self.query = text.to_string();
        self.validation_error = self.validator.validate(text);
        self.debouncer.schedule(text.to_string());
        debug!(
            "Text changed to {:?} (validation: {:?})",
            text, self.validation_error
        );
    }

    /// Drive the debouncer; must be called periodically by the event loop.
    ///
    /// # Returns
    /// `true` when a debounced search fired on this tick.
    pub async fn tick(&mut self) -> bool {
        let Some(query) = self.debouncer.poll_ready() else {
            return false;
        };
        self.perform_search(&query).await;
        true
    }

    /// Handle an explicit submit (enter key / search button).
    ///
    /// Bypasses the debounce and searches for whatever the query currently
    /// holds, even if it is empty or invalid; validation only drives the
    /// error banner, it does not gate submission. A still-pending debounce
    /// for the same text is left alone, the duplicate-query guard absorbs
    /// its echo.
    pub async fn submit(&mut self) {
        let query = self.query.clone();
        self.perform_search(&query).await;
    }

    /// Flip the alphabetical sort flag. View-only; triggers no search.
    pub fn toggle_sort(&mut self) {
        self.sort_by_title = !self.sort_by_title;
        debug!("Sort by title: {}", self.sort_by_title);
    }

    /// Issue a search for `query` unless it duplicates the last issued one.
    pub async fn perform_search(&mut self, query: &str) {
        let Some(seq) = self.begin_search(query) else {
            return;
        };
        let result = self.client.search(query).await;
        self.apply_search_result(seq, result);
    }

    // ------------------------------------------------------------------
    // Search bookkeeping
    // ------------------------------------------------------------------

    /// Record that a search is being issued.
    ///
    /// Returns the sequence stamp for this request, or `None` when the query
    /// equals the last issued one (e.g., a debounce firing right after an
    /// explicit submit with the same text).
    fn begin_search(&mut self, query: &str) -> Option<u64> {
        if self.last_issued_query.as_deref() == Some(query) {
            debug!("Skipping duplicate search for {:?}", query);
            return None;
        }

        info!("Searching for {:?}", query);
        self.loading = true;
        self.search_error = None;
        self.last_issued_query = Some(query.to_string());
        self.request_seq += 1;
        Some(self.request_seq)
    }

    /// Fold a search completion back into the state.
    ///
    /// Completions carrying a stale sequence stamp are dropped: the newer
    /// in-flight request owns the loading flag and the result set. On failure
    /// the previous results stay visible under the error banner.
    fn apply_search_result(
        &mut self,
        seq: u64,
        result: Result<Vec<MovieSummary>, SearchError>,
    ) {
        if seq != self.request_seq {
            debug!(
                "Discarding stale search completion (seq {} < {})",
                seq, self.request_seq
            );
            return;
        }

        self.loading = false;
        match result {
            Ok(movies) => {
                info!("Search returned {} movies", movies.len());
                self.movies = movies;
            }
            Err(err) => {
                warn!("Search failed: {}", err);
                self.search_error = Some(err);
            }
        }
    }

    // ------------------------------------------------------------------
    // Rendering boundary
    // ------------------------------------------------------------------

    /// The current result set, in provider order.
    pub fn movies(&self) -> &[MovieSummary] {
        &self.movies
    }

    /// The list to display: borrowed in provider order, or an owned copy
    /// sorted by title (case-insensitive) when the sort flag is set.
    ///
    /// Pure function of the result set and the sort flag; the underlying
    /// result set is never reordered.
    pub fn visible_movies(&self) -> Cow<'_, [MovieSummary]> {
        if !self.sort_by_title {
            return Cow::Borrowed(self.movies.as_slice());
        }

        let mut sorted = self.movies.clone();
        sorted.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        Cow::Owned(sorted)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn sort_enabled(&self) -> bool {
        self.sort_by_title
    }

    pub fn validation_error(&self) -> Option<ValidationError> {
        self.validation_error
    }

    pub fn search_error(&self) -> Option<&SearchError> {
        self.search_error.as_ref()
    }

    /// Whether a debounced search is scheduled but has not fired yet.
    pub fn has_pending_search(&self) -> bool {
        self.debouncer.has_pending()
    }

    /// The single user-visible error slot.
    ///
    /// Exactly one message is shown at a time; a validation error takes
    /// priority over a search failure.
    pub fn error_message(&self) -> Option<String> {
        if let Some(validation_error) = self.validation_error {
            return Some(validation_error.to_string());
        }
        self.search_error.as_ref().map(|err| err.to_string())
    }
}
