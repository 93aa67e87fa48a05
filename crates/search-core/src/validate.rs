//! Query validation.
//!
//! Classifies the raw search text before any network call is attempted.
//! Validation is purely local: it never triggers a search, and its result is
//! only used to drive the error banner.
//!
//! Rules, evaluated in order, first match wins:
//! 1. First-ever evaluation with an empty query: suppressed (the user has
//!    not typed anything yet, so no error is shown)
//! 2. Empty query -> [`ValidationError::EmptyQuery`]
//! 3. All-digit query -> [`ValidationError::NumericQuery`]
//! 4. Fewer than 3 characters -> [`ValidationError::TooShort`]
//! 5. Otherwise valid

use thiserror::Error;

/// Why a query failed validation.
///
/// The `#[error(...)]` messages are the user-facing banner text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("cannot search for an empty movie title")]
    EmptyQuery,

    #[error("cannot search for a movie using a number")]
    NumericQuery,

    #[error("the search must be at least 3 characters long")]
    TooShort,
}

/// Stateful query validator.
///
/// Carries a single piece of state: whether it has been evaluated before.
/// The very first evaluation with an empty query is suppressed so the error
/// banner does not flash before the user has interacted at all. The flag is
/// consumed by the first evaluation regardless of its outcome.
#[derive(Debug)]
pub struct QueryValidator {
    first_evaluation: bool,
}

impl QueryValidator {
    pub fn new() -> Self {
        Self {
            first_evaluation: true,
        }
    }

    /// Classify `query`, returning `None` when it is searchable.
    pub fn validate(&mut self, query: &str) -> Option<ValidationError> {
        let first = self.first_evaluation;
        self.first_evaluation = false;

        if first && query.is_empty() {
            return None;
        }

        if query.is_empty() {
            return Some(ValidationError::EmptyQuery);
        }

        if query.chars().all(|c| c.is_ascii_digit()) {
            return Some(ValidationError::NumericQuery);
        }

        if query.chars().count() < 3 {
            return Some(ValidationError::TooShort);
        }

        None
    }
}

impl Default for QueryValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A validator with the first-evaluation suppression already consumed.
    fn warmed_up() -> QueryValidator {
        let mut validator = QueryValidator::new();
        validator.validate("");
        validator
    }

    #[test]
    fn test_first_empty_evaluation_is_suppressed() {
        let mut validator = QueryValidator::new();
        assert_eq!(validator.validate(""), None);
    }

    #[test]
    fn test_empty_query_errors_after_first_evaluation() {
        let mut validator = warmed_up();
        assert_eq!(validator.validate(""), Some(ValidationError::EmptyQuery));
    }

    #[test]
    fn test_suppression_applies_only_once() {
        let mut validator = QueryValidator::new();
        assert_eq!(validator.validate(""), None);
        assert_eq!(validator.validate(""), Some(ValidationError::EmptyQuery));
        assert_eq!(validator.validate(""), Some(ValidationError::EmptyQuery));
    }

    #[test]
    fn test_first_evaluation_with_text_is_not_suppressed() {
        // Suppression only covers the startup case where the query is empty
        let mut validator = QueryValidator::new();
        assert_eq!(validator.validate("ab"), Some(ValidationError::TooShort));
    }

    #[test]
    fn test_all_digit_queries_are_numeric() {
        let mut validator = warmed_up();
        for query in ["1", "42", "2009", "000", "999999999999"] {
            assert_eq!(
                validator.validate(query),
                Some(ValidationError::NumericQuery),
                "query {:?} should classify as numeric",
                query
            );
        }
    }

    #[test]
    fn test_numeric_takes_priority_over_too_short() {
        // "42" is both all digits and shorter than 3 chars; numeric wins
        let mut validator = warmed_up();
        assert_eq!(validator.validate("42"), Some(ValidationError::NumericQuery));
    }

    #[test]
    fn test_short_queries_are_too_short() {
        let mut validator = warmed_up();
        for query in ["a", "av", "4x", "é!"] {
            assert_eq!(
                validator.validate(query),
                Some(ValidationError::TooShort),
                "query {:?} should classify as too short",
                query
            );
        }
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // "día" is 4 bytes but 3 chars, so it is long enough
        let mut validator = warmed_up();
        assert_eq!(validator.validate("día"), None);
    }

    #[test]
    fn test_valid_queries_pass() {
        let mut validator = warmed_up();
        for query in ["avatar", "the matrix", "2001: a space odyssey", "her"] {
            assert_eq!(validator.validate(query), None, "query {:?} should be valid", query);
        }
    }

    #[test]
    fn test_whitespace_only_query_of_three_chars_passes() {
        // Known gap: whitespace is never trimmed, so three spaces pass
        // every rule
        let mut validator = warmed_up();
        assert_eq!(validator.validate("   "), None);
    }

    #[test]
    fn test_mixed_digits_and_letters_are_not_numeric() {
        let mut validator = warmed_up();
        assert_eq!(validator.validate("300b"), None);
        assert_eq!(validator.validate("se7en"), None);
    }
}
