//! # Apothecary
//!
//! Embedded full-text search for the Apothecary content site.
//!
//! The corpus mixes two kinds of documents — substance profiles and
//! archived forum/media posts — and is searched interactively as the
//! user types. The crate covers the whole pipeline:
//!
//! - Corpus normalization (alternative-name extraction, content
//!   truncation) used by the site build while assembling documents
//! - A single-pass, in-memory inverted index with per-field boosts
//! - A query engine with exact lookup, prefix fallback, and ranked,
//!   kind-partitioned results
//! - Highlighted, truncation-safe display rendering
//! - A debounced interactive session layer
//!
//! The index is built once at initialization and is immutable
//! afterwards; only the query path runs repeatedly.

pub mod analysis;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod index;
pub mod render;
pub mod search;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
