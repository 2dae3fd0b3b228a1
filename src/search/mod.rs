//! Query execution and the interactive session layer.
//!
//! [`engine::QueryEngine`] owns the corpus snapshot and its index and
//! answers one query at a time: tokenize, exact lookup, prefix
//! fallback, rank, cap, classify, render. [`session::SearchSession`]
//! wraps it for interactive use — debounced keystrokes, submit bypass,
//! and the not-ready engine slot.

pub mod engine;
pub mod results;
pub mod session;

pub use engine::{QueryEngine, QueryOutcome, MIN_QUERY_CHARS};
pub use results::{QueryHit, SearchResults, MAX_RESULTS};
pub use session::{EngineSlot, SearchSession, SearchState, DEFAULT_DEBOUNCE};
