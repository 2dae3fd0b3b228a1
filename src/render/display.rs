//! Display entries for classified search results.

use std::borrow::Cow;

use serde::Serialize;

use crate::corpus::document::Document;
use crate::render::highlight::Highlighter;

/// Character cap for post description snippets.
pub const DESCRIPTION_SNIPPET_CHARS: usize = 120;

/// Display copy for substances with no recorded legal status.
pub const UNKNOWN_LEGAL_STATUS: &str = "Unknown legal status";

/// How many alternative names the fallback context line shows.
const ALSO_KNOWN_AS_FALLBACK: usize = 3;

/// Rendered display form of a substance result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubstanceEntry {
    /// Highlighted title.
    pub title: String,
    /// Chemical name, when the profile records one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chemical_name: Option<String>,
    /// Category label.
    pub category: String,
    /// Legal status line, defaulted when absent.
    pub legal_status: String,
    /// The "also known as" context line.
    pub also_known_as: Vec<String>,
    /// Navigation destination.
    pub url: String,
}

/// Rendered display form of a post result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostEntry {
    /// Highlighted title.
    pub title: String,
    /// Category label.
    pub category: String,
    /// Post author.
    pub author: String,
    /// Highlighted, word-boundary-truncated description.
    pub description: String,
    /// Archive destination.
    pub archive_link: String,
}

/// Render a substance document for display.
///
/// The "also known as" line shows the alternative names that
/// case-insensitively contain the whole query string, highlighted; when
/// none match, the first three known names are shown unhighlighted as
/// fallback context.
pub fn render_substance(
    document: &Document,
    query: &str,
    terms: &[String],
    highlighter: &Highlighter,
) -> SubstanceEntry {
    SubstanceEntry {
        title: highlighter.highlight_terms(&document.title, terms),
        chemical_name: if document.chemical_name.is_empty() {
            None
        } else {
            Some(document.chemical_name.clone())
        },
        category: document.category.clone(),
        legal_status: if document.legal_status.is_empty() {
            UNKNOWN_LEGAL_STATUS.to_string()
        } else {
            document.legal_status.clone()
        },
        also_known_as: also_known_as(&document.alternative_names, query, terms, highlighter),
        url: document.url.clone(),
    }
}

/// Render a post document for display.
pub fn render_post(document: &Document, terms: &[String], highlighter: &Highlighter) -> PostEntry {
    let snippet = truncate_words(&document.description, DESCRIPTION_SNIPPET_CHARS);
    PostEntry {
        title: highlighter.highlight_terms(&document.title, terms),
        category: document.category.clone(),
        author: document.author.clone(),
        description: highlighter.highlight_terms(&snippet, terms),
        archive_link: document.archive_link.clone(),
    }
}

fn also_known_as(
    names: &[String],
    query: &str,
    terms: &[String],
    highlighter: &Highlighter,
) -> Vec<String> {
    let needle = query.trim().to_lowercase();

    let matching: Vec<&String> = if needle.is_empty() {
        Vec::new()
    } else {
        names
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .collect()
    };

    if matching.is_empty() {
        names.iter().take(ALSO_KNOWN_AS_FALLBACK).cloned().collect()
    } else {
        matching
            .into_iter()
            .map(|name| highlighter.highlight_terms(name, terms))
            .collect()
    }
}

/// Truncate text to at most `max` characters without splitting a word.
///
/// Text at or under the cap is returned borrowed and unchanged. Over
/// the cap, the text is cut at the boundary, any trailing partial word
/// is dropped, and an ellipsis is appended. A single unbroken word
/// longer than the cap is cut hard rather than dropped entirely.
pub fn truncate_words(text: &str, max: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max) {
        None => Cow::Borrowed(text),
        Some((boundary, next)) => {
            let head = &text[..boundary];
            let cut = if next.is_whitespace() {
                head.trim_end()
            } else {
                match head.rfind(char::is_whitespace) {
                    Some(space) => head[..space].trim_end(),
                    None => head,
                }
            };
            Cow::Owned(format!("{cut}…"))
        }
    }
}
