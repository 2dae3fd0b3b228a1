//! The inverted index structure.

use std::collections::BTreeMap;
use std::ops::Bound;

use serde::{Deserialize, Serialize};

use crate::index::field::FieldKind;

/// One posting: a term occurred `freq` times in `field` of the document
/// with corpus ordinal `doc`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    /// Ordinal of the document in corpus order. Ordinals, not corpus
    /// ids, key the postings so that tie-breaking by insertion order is
    /// stable and cheap.
    pub doc: u32,
    /// The field the term occurred in.
    pub field: FieldKind,
    /// Term frequency within that field.
    pub freq: u32,
}

/// Mapping from term to the documents and fields containing it.
///
/// Terms live in a `BTreeMap` so that iteration is deterministic and
/// prefix fallback is a range scan. Postings for a term are ordered by
/// (doc, field); the builder inserts them in that order and the
/// structure is never mutated after build.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct InvertedIndex {
    terms: BTreeMap<String, Vec<Posting>>,
    doc_count: u32,
    posting_count: u64,
}

impl InvertedIndex {
    /// Create an empty index. Only [`crate::index::IndexBuilder`]
    /// populates it.
    pub(crate) fn new(doc_count: u32) -> Self {
        InvertedIndex {
            terms: BTreeMap::new(),
            doc_count,
            posting_count: 0,
        }
    }

    /// Append a posting for a term.
    pub(crate) fn push(&mut self, term: String, posting: Posting) {
        self.terms.entry(term).or_default().push(posting);
        self.posting_count += 1;
    }

    /// Exact-term lookup. Unknown terms yield an empty slice.
    pub fn postings(&self, term: &str) -> &[Posting] {
        self.terms.get(term).map_or(&[], Vec::as_slice)
    }

    /// Prefix (wildcard) lookup: every indexed term starting with
    /// `prefix`, with its postings, in term order.
    pub fn prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a [Posting])> {
        self.terms
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(term, _)| term.starts_with(prefix))
            .map(|(term, postings)| (term.as_str(), postings.as_slice()))
    }

    /// Number of documents the index was built over.
    pub fn doc_count(&self) -> u32 {
        self.doc_count
    }

    /// Number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Total number of postings.
    pub fn posting_count(&self) -> u64 {
        self.posting_count
    }

    /// Whether the index holds no terms at all.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
