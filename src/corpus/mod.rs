//! Corpus loading and normalization.
//!
//! The corpus is produced by the site build as a single JSON array of
//! [`Document`] records and consumed read-only. This module owns the
//! document model, the loader with its validation rules, and the
//! normalization helpers the site build calls while assembling each
//! document ([`normalize::extract_alternative_names`],
//! [`normalize::truncate`]).

pub mod document;
pub mod loader;
pub mod normalize;

pub use document::{DocKind, Document, DocumentBuilder};
pub use loader::{load_corpus, load_corpus_from_reader, validate};
pub use normalize::{extract_alternative_names, truncate, CONTENT_TRUNCATE_CHARS};
