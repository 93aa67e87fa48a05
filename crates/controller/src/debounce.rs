//! Trailing-edge debounce for search input.
//!
//! Coalesces bursts of text changes into one search after a quiet window.
//! The debouncer is poll-driven: scheduling a query records it together with
//! the time of the last input, and the owning event loop polls until the
//! quiet window has elapsed. One debouncer is constructed per controller
//! lifetime, so rescheduling always cancels the previous pending query
//! instead of racing a stale timer.

use std::time::{Duration, Instant};

/// Quiet window applied to live typing.
pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Coalesces scheduled queries into one trailing search per quiet window.
#[derive(Debug)]
pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<String>,
    last_input: Option<Instant>,
}

impl SearchDebouncer {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_DEBOUNCE_DELAY)
    }

    /// Create a debouncer with a custom quiet window (used by tests).
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            last_input: None,
        }
    }

    /// Record `query` as the pending search and restart the quiet window.
    ///
    /// Any previously pending query is replaced; only the last query
    /// scheduled before the window elapses will ever be returned.
    pub fn schedule(&mut self, query: String) {
        self.pending = Some(query);
        self.last_input = Some(Instant::now());
    }

    /// Take the pending query if the quiet window has elapsed.
    ///
    /// Returns `None` while the window is still open or when nothing is
    /// pending. Taking the query clears the pending state.
    pub fn poll_ready(&mut self) -> Option<String> {
        match self.last_input {
            Some(last_input) if last_input.elapsed() >= self.delay => {
                self.last_input = None;
                self.pending.take()
            }
            _ => None,
        }
    }

    /// Drop any pending query without firing it.
    pub fn clear(&mut self) {
        self.pending = None;
        self.last_input = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending query becomes ready, if any.
    pub fn remaining_delay(&self) -> Option<Duration> {
        let last_input = self.last_input?;
        Some(self.delay.saturating_sub(last_input.elapsed()))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_debouncer_defaults() {
        let debouncer = SearchDebouncer::new();
        assert_eq!(debouncer.delay(), DEFAULT_DEBOUNCE_DELAY);
        assert!(!debouncer.has_pending());
        assert!(debouncer.remaining_delay().is_none());
    }

    #[test]
    fn test_poll_with_nothing_pending_returns_none() {
        let mut debouncer = SearchDebouncer::new();
        assert!(debouncer.poll_ready().is_none());
    }

    #[test]
    fn test_poll_before_window_elapses_returns_none() {
        // Generous window so the poll below happens well inside it
        let mut debouncer = SearchDebouncer::with_delay(Duration::from_millis(200));
        debouncer.schedule("avatar".to_string());

        assert!(debouncer.poll_ready().is_none());
        assert!(debouncer.has_pending());
    }

    #[test]
    fn test_poll_after_window_yields_query_once() {
        let mut debouncer = SearchDebouncer::with_delay(Duration::from_millis(10));
        debouncer.schedule("avatar".to_string());

        thread::sleep(Duration::from_millis(30));

        assert_eq!(debouncer.poll_ready(), Some("avatar".to_string()));
        assert!(!debouncer.has_pending());
        assert!(debouncer.poll_ready().is_none());
    }

    #[test]
    fn test_reschedule_replaces_pending_query() {
        let mut debouncer = SearchDebouncer::with_delay(Duration::from_millis(10));
        debouncer.schedule("a".to_string());
        debouncer.schedule("av".to_string());
        debouncer.schedule("avatar".to_string());

        thread::sleep(Duration::from_millis(30));

        // Only the last scheduled query survives the burst
        assert_eq!(debouncer.poll_ready(), Some("avatar".to_string()));
        assert!(debouncer.poll_ready().is_none());
    }

    #[test]
    fn test_clear_drops_pending_query() {
        let mut debouncer = SearchDebouncer::with_delay(Duration::from_millis(10));
        debouncer.schedule("avatar".to_string());
        debouncer.clear();

        thread::sleep(Duration::from_millis(30));

        assert!(debouncer.poll_ready().is_none());
    }

    #[test]
    fn test_remaining_delay_counts_down() {
        let mut debouncer = SearchDebouncer::with_delay(Duration::from_millis(200));
        debouncer.schedule("avatar".to_string());

        let remaining = debouncer.remaining_delay().expect("window should be open");
        assert!(remaining <= Duration::from_millis(200));

        thread::sleep(Duration::from_millis(220));
        assert_eq!(debouncer.remaining_delay(), Some(Duration::ZERO));
    }
}
