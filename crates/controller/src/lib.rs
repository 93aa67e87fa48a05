//! Interactive search controller: wires the query validator, the trailing
//! debouncer, and the movie client into a single owner of UI state.

pub mod controller;
pub mod debounce;
pub mod traits;

pub use controller::SearchController;
pub use debounce::{DEFAULT_DEBOUNCE_DELAY, SearchDebouncer};
pub use traits::MovieSearch;
