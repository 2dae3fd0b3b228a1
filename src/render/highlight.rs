//! Query-term highlighting for display text.

use regex::Regex;

/// Configuration for text highlighting.
#[derive(Debug, Clone)]
pub struct HighlightConfig {
    /// HTML tag to wrap highlighted terms (e.g., "mark", "em").
    pub tag: String,
    /// CSS class to add to highlight tags.
    pub css_class: Option<String>,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            tag: "mark".to_string(),
            css_class: None,
        }
    }
}

impl HighlightConfig {
    /// Create a new highlight configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTML tag for highlighting.
    pub fn tag(mut self, tag: String) -> Self {
        self.tag = tag;
        self
    }

    /// Set the CSS class for highlight tags.
    pub fn css_class(mut self, css_class: String) -> Self {
        self.css_class = Some(css_class);
        self
    }

    /// Build the opening HTML tag.
    pub fn opening_tag(&self) -> String {
        if let Some(ref css_class) = self.css_class {
            format!("<{} class=\"{}\">", self.tag, css_class)
        } else {
            format!("<{}>", self.tag)
        }
    }

    /// Build the closing HTML tag.
    pub fn closing_tag(&self) -> String {
        format!("</{}>", self.tag)
    }
}

/// Wraps query-term occurrences in display text with emphasis markers.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    config: HighlightConfig,
}

impl Highlighter {
    /// Create a new highlighter.
    pub fn new(config: HighlightConfig) -> Self {
        Highlighter { config }
    }

    /// Highlight every occurrence of each term in the text.
    ///
    /// Matching is case-insensitive and applies at every occurrence,
    /// not just word boundaries. Terms of one character or less are
    /// skipped to avoid over-matching. Terms compose: each is applied
    /// independently over the already-marked text, longest first.
    pub fn highlight_terms(&self, text: &str, terms: &[String]) -> String {
        let mut result = text.to_string();

        let mut sorted_terms: Vec<&str> = terms
            .iter()
            .map(String::as_str)
            .filter(|term| term.chars().count() > 1)
            .collect();
        sorted_terms.sort_by_key(|term| std::cmp::Reverse(term.len()));

        for term in sorted_terms {
            let pattern = format!("(?i){}", regex::escape(term));
            if let Ok(regex) = Regex::new(&pattern) {
                result = regex
                    .replace_all(&result, |caps: &regex::Captures| {
                        format!(
                            "{}{}{}",
                            self.config.opening_tag(),
                            &caps[0],
                            self.config.closing_tag()
                        )
                    })
                    .to_string();
            }
        }

        result
    }
}
