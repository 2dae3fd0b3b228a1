//! In-memory inverted index with per-field boosts.
//!
//! The index is built in a single pass over the corpus at feature
//! initialization and is immutable afterwards — the corpus is rebuilt
//! wholesale on each site build, so there are no update or delete
//! operations. Re-indexing the same corpus is deterministic: identical
//! input produces identical index contents, and posting order is stable
//! so display-order tie-breaking never drifts between builds.

pub mod builder;
pub mod field;
pub mod inverted;

pub use builder::IndexBuilder;
pub use field::FieldKind;
pub use inverted::{InvertedIndex, Posting};
