//! Result rendering: highlighting and display entries.
//!
//! Produces the display form of ranked results — emphasis-wrapped match
//! text and word-boundary-safe snippets. Rendering never feeds back
//! into scoring; it runs on the already-ranked, already-capped result
//! set.

pub mod display;
pub mod highlight;

pub use display::{
    render_post, render_substance, truncate_words, PostEntry, SubstanceEntry,
    DESCRIPTION_SNIPPET_CHARS, UNKNOWN_LEGAL_STATUS,
};
pub use highlight::{HighlightConfig, Highlighter};
