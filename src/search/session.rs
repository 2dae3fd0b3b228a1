//! The interactive session layer: debounce, states, readiness.
//!
//! A session re-enters the query lifecycle on every keystroke:
//! `Idle -> Pending -> {Success, Empty, Error}`, then back to idle
//! awaiting the next input. Debouncing is a single-slot pending timer —
//! each new keystroke aborts the previous scheduled search before
//! scheduling its own, so at most one search is ever in flight and only
//! the latest query text executes. Explicit submission bypasses the
//! timer but runs the identical pipeline.
//!
//! The engine lives behind a shared slot that is filled once the
//! one-time index build completes; queries that arrive earlier are
//! answered with an "index not ready" error state instead of being
//! silently dropped.

use std::sync::Arc;
use std::time::Duration;

use log::warn;
use parking_lot::RwLock;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::search::engine::{QueryEngine, QueryOutcome, MIN_QUERY_CHARS};
use crate::search::results::SearchResults;

/// Quiet period before a pending search executes.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Shared slot holding the engine once its build completes.
pub type EngineSlot = Arc<RwLock<Option<QueryEngine>>>;

/// Observable state of the search UI for one query lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    /// No query, or query too short; display nothing.
    Idle,
    /// A search is scheduled behind the debounce timer.
    Pending,
    /// Terminal: matches found.
    Success(SearchResults),
    /// Terminal: nothing matched; shown with dedicated copy.
    Empty,
    /// Terminal: a failure rendered inline; the session stays usable.
    Error(String),
}

/// A debounced interactive search session.
///
/// States are delivered in order over an unbounded channel; the caller
/// renders each one as it arrives. Requires a tokio runtime for the
/// scheduled (debounced) path.
pub struct SearchSession {
    engine: EngineSlot,
    debounce: Duration,
    pending: Option<JoinHandle<()>>,
    tx: UnboundedSender<SearchState>,
}

impl std::fmt::Debug for SearchSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSession")
            .field("debounce", &self.debounce)
            .field("pending", &self.pending.is_some())
            .finish()
    }
}

impl SearchSession {
    /// Create a session over the given engine slot.
    pub fn new(engine: EngineSlot, debounce: Duration) -> (Self, UnboundedReceiver<SearchState>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            SearchSession {
                engine,
                debounce,
                pending: None,
                tx,
            },
            rx,
        )
    }

    /// Handle a keystroke: cancel any pending search and schedule a new
    /// one for the current text after the quiet period.
    pub fn input(&mut self, text: &str) {
        self.cancel_pending();

        let query = text.trim().to_string();
        if query.chars().count() < MIN_QUERY_CHARS {
            self.send(SearchState::Idle);
            return;
        }

        self.send(SearchState::Pending);

        let engine = Arc::clone(&self.engine);
        let tx = self.tx.clone();
        let delay = self.debounce;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(run_query(&engine, &query));
        }));
    }

    /// Handle explicit submission: bypass the debounce timer, run the
    /// same pipeline immediately.
    pub fn submit(&mut self, text: &str) {
        self.cancel_pending();

        let query = text.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            self.send(SearchState::Idle);
            return;
        }

        let state = run_query(&self.engine, query);
        self.send(state);
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    fn send(&self, state: SearchState) {
        if self.tx.send(state).is_err() {
            warn!("search state receiver dropped");
        }
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

/// Run one query against the shared slot, folding every failure into a
/// displayable state. Nothing panics across this boundary.
fn run_query(engine: &EngineSlot, query: &str) -> SearchState {
    let guard = engine.read();
    match guard.as_ref() {
        None => SearchState::Error(crate::error::ApothecaryError::IndexNotReady.to_string()),
        Some(engine) => match engine.execute(query) {
            Ok(QueryOutcome::Idle) => SearchState::Idle,
            Ok(QueryOutcome::Success(results)) => SearchState::Success(results),
            Ok(QueryOutcome::Empty) => SearchState::Empty,
            Err(error) => SearchState::Error(error.to_string()),
        },
    }
}
