//! Normalization helpers used while assembling corpus documents.
//!
//! The site build renders each page to HTML first, then calls into this
//! module to pull indexable structure back out of the markup. The
//! extraction here is a best-effort pattern scanner, not a markup
//! parser: malformed or partial HTML yields fewer (or no) names, never
//! an error.

use std::borrow::Cow;
use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

/// Character cap applied to the `content` field before serialization.
pub const CONTENT_TRUNCATE_CHARS: usize = 5000;

/// Class marker on the container that holds the alternative-names list.
const ALT_NAMES_MARKER: &str = "alternative-names";

/// Separator glyphs that list markup sometimes leaks as their own items.
const SEPARATOR_GLYPHS: [char; 7] = ['•', '·', '-', '–', '—', '→', ','];

/// Decorative pictographs stripped from heading-derived names.
const DECORATIVE_PICTOGRAPHS: [char; 8] = ['🧪', '💊', '🍄', '🌿', '⚗', '🔬', '✨', '🧿'];

lazy_static! {
    static ref LIST_ITEM: Regex = Regex::new(r"(?is)<li[^>]*>(.*?)</li>").unwrap();
    static ref HEADING: Regex = Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").unwrap();
    static ref INNER_TAG: Regex = Regex::new(r"(?s)<[^>]*>").unwrap();
}

/// Extract a substance's alternative names from its rendered page.
///
/// Scans the list items inside the block marked `alternative-names`,
/// strips nested markup, and filters out separator glyphs and heading
/// noise that malformed extraction would otherwise leak. Survivors are
/// deduplicated (first occurrence wins). When the block is missing or
/// empty, falls back to the page's `<h1>` heading with decorative
/// pictographs stripped.
///
/// # Examples
///
/// ```
/// use apothecary::corpus::extract_alternative_names;
///
/// let html = r#"<div class="alternative-names"><ul>
///   <li>Molly</li><li>•</li><li><b>Ecstasy</b></li>
/// </ul></div>"#;
/// assert_eq!(extract_alternative_names(html), vec!["Molly", "Ecstasy"]);
///
/// assert!(extract_alternative_names("").is_empty());
/// ```
pub fn extract_alternative_names(html: &str) -> Vec<String> {
    if html.is_empty() {
        return Vec::new();
    }

    let mut names = Vec::new();
    let mut seen = HashSet::new();

    if let Some(start) = html.find(ALT_NAMES_MARKER) {
        let block = &html[start..];
        // Scan only up to the list's closing tag; an unterminated list
        // scans to the end of input.
        let end = block.find("</ul>").unwrap_or(block.len());

        for capture in LIST_ITEM.captures_iter(&block[..end]) {
            let raw = capture.get(1).map_or("", |m| m.as_str());
            let text = INNER_TAG.replace_all(raw, "").trim().to_string();
            if is_plausible_name(&text) && seen.insert(text.clone()) {
                names.push(text);
            }
        }
    }

    if names.is_empty() {
        if let Some(heading) = heading_name(html) {
            names.push(heading);
        }
    }

    names
}

/// Filter out extraction noise: empty strings, bare separator glyphs,
/// and text that carries heading or raw-markup leakage.
fn is_plausible_name(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    let mut chars = text.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if SEPARATOR_GLYPHS.contains(&c) {
            return false;
        }
    }

    !(text.contains("category")
        || text.contains("Names")
        || text.contains("H4")
        || text.contains('<')
        || text.contains('>'))
}

/// Derive a single name from the page's top-level heading.
fn heading_name(html: &str) -> Option<String> {
    let capture = HEADING.captures(html)?;
    let raw = capture.get(1)?.as_str();
    let text = INNER_TAG.replace_all(raw, "");
    let name = text
        .trim_matches(|c: char| c.is_whitespace() || DECORATIVE_PICTOGRAPHS.contains(&c))
        .to_string();

    if name.is_empty() { None } else { Some(name) }
}

/// Truncate text to at most `max` characters, appending an ellipsis.
///
/// Character-based, so multi-byte text is never split mid-codepoint.
/// Total and idempotent: text at or under the cap is returned borrowed
/// and unchanged, and re-truncating truncated output is a no-op.
///
/// # Examples
///
/// ```
/// use apothecary::corpus::truncate;
///
/// assert_eq!(truncate("short", 10), "short");
/// assert_eq!(truncate("abcdef", 3), "abc…");
/// ```
pub fn truncate(text: &str, max: usize) -> Cow<'_, str> {
    if text.chars().count() <= max {
        return Cow::Borrowed(text);
    }

    let cut: String = text.chars().take(max).collect();
    Cow::Owned(format!("{cut}…"))
}
