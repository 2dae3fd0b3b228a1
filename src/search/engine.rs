//! The query engine: lookup, scoring, fallback, classification.

use ahash::AHashMap;
use log::debug;

use crate::analysis::query_terms;
use crate::corpus::document::{DocKind, Document};
use crate::error::{ApothecaryError, Result};
use crate::index::inverted::{InvertedIndex, Posting};
use crate::index::IndexBuilder;
use crate::render::display::{render_post, render_substance};
use crate::render::highlight::Highlighter;
use crate::search::results::{rank, SearchResults, MAX_RESULTS};

/// Queries shorter than this (after trimming) suppress search entirely.
pub const MIN_QUERY_CHARS: usize = 2;

/// Terminal outcome of a single query.
///
/// `Empty` is a first-class outcome with its own display copy, not an
/// error; execution failures travel through `Result` and are rendered
/// by the session layer.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// Query was absent or too short; display nothing.
    Idle,
    /// At least one document matched.
    Success(SearchResults),
    /// Nothing matched, even via prefix fallback.
    Empty,
}

/// Owns the corpus snapshot and its index; answers one query at a time.
///
/// Construction builds the index in a single blocking pass. After that
/// the engine is immutable and shareable — the query path only reads.
#[derive(Debug)]
pub struct QueryEngine {
    documents: Vec<Document>,
    index: InvertedIndex,
    highlighter: Highlighter,
}

impl QueryEngine {
    /// Build an engine over the given corpus.
    pub fn new(documents: Vec<Document>) -> Result<Self> {
        Self::with_highlighter(documents, Highlighter::default())
    }

    /// Build an engine with a custom highlighter.
    pub fn with_highlighter(documents: Vec<Document>, highlighter: Highlighter) -> Result<Self> {
        let index = IndexBuilder::new().build(&documents)?;
        Ok(QueryEngine {
            documents,
            index,
            highlighter,
        })
    }

    /// Execute one query through the full pipeline.
    ///
    /// Trims, tokenizes, scores exact matches, falls back to prefix
    /// matching when nothing matched exactly, ranks, caps, classifies,
    /// and renders. Never panics across the interactive boundary —
    /// internal failures surface as [`ApothecaryError::Query`].
    pub fn execute(&self, raw_query: &str) -> Result<QueryOutcome> {
        let query = raw_query.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            return Ok(QueryOutcome::Idle);
        }

        if self.index.doc_count() as usize != self.documents.len() {
            return Err(ApothecaryError::query(format!(
                "index covers {} documents but corpus holds {}",
                self.index.doc_count(),
                self.documents.len()
            )));
        }

        let terms = query_terms(query);
        let mut scores: AHashMap<u32, f32> = AHashMap::new();

        for term in &terms {
            score_postings(self.index.postings(term), &mut scores);
        }

        if scores.is_empty() {
            debug!("no exact matches for {query:?}, trying prefix fallback");
            for term in &terms {
                for (_, postings) in self.index.prefix(term) {
                    score_postings(postings, &mut scores);
                }
            }
        }

        if scores.is_empty() {
            return Ok(QueryOutcome::Empty);
        }

        let hits = rank(scores);
        let total_hits = hits.len();
        let truncated = total_hits > MAX_RESULTS;

        let mut results = SearchResults {
            substances: Vec::new(),
            posts: Vec::new(),
            truncated,
            total_hits,
        };

        for hit in hits.into_iter().take(MAX_RESULTS) {
            // A hit that no longer joins to a document is stale index
            // state; drop it silently.
            let Some(document) = self.documents.get(hit.doc as usize) else {
                continue;
            };
            match document.kind {
                DocKind::Substance => results.substances.push(render_substance(
                    document,
                    query,
                    &terms,
                    &self.highlighter,
                )),
                DocKind::Post => {
                    results
                        .posts
                        .push(render_post(document, &terms, &self.highlighter))
                }
            }
        }

        Ok(QueryOutcome::Success(results))
    }

    /// The corpus snapshot this engine serves.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// The underlying index (stats, diagnostics).
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }
}

/// Accumulate boosted term-frequency contributions per document.
///
/// Exact and fallback passes share one score map, so a document can
/// never appear twice in the merged result set.
fn score_postings(postings: &[Posting], scores: &mut AHashMap<u32, f32>) {
    for posting in postings {
        *scores.entry(posting.doc).or_insert(0.0) += posting.freq as f32 * posting.field.boost();
    }
}
