//! # Search Core Crate
//!
//! Domain types and query validation for the movie search pipeline.
//!
//! ## Main Components
//!
//! - **types**: The normalized [`MovieSummary`] record
//! - **validate**: [`QueryValidator`] and [`ValidationError`]
//!
//! ## Example Usage
//!
//! ```
//! use search_core::{QueryValidator, ValidationError};
//!
//! let mut validator = QueryValidator::new();
//!
//! // The startup evaluation with an empty query shows no error
//! assert_eq!(validator.validate(""), None);
//!
//! // After that, normal classification applies
//! assert_eq!(validator.validate("av"), Some(ValidationError::TooShort));
//! assert_eq!(validator.validate("avatar"), None);
//! ```
//!
//! This crate is the leaf of the workspace: it knows nothing about HTTP,
//! debouncing, or the controller that drives searches.

// Public modules
pub mod types;
pub mod validate;

// Re-export commonly used types for convenience
pub use types::MovieSummary;
pub use validate::{QueryValidator, ValidationError};
