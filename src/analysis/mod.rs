//! Text analysis for indexing and querying.
//!
//! The corpus is English-only markup-stripped text, so the pipeline is
//! deliberately small: whitespace tokenization followed by case folding.
//! Both the index builder and the query engine run their text through
//! [`StandardAnalyzer`] so that indexed terms and query terms always
//! agree.
//!
//! # Examples
//!
//! ```
//! use apothecary::analysis::StandardAnalyzer;
//!
//! let analyzer = StandardAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("Sass  Sally").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "sass");
//! assert_eq!(tokens[1].position, 1);
//! ```

use crate::error::Result;

/// A token produced by tokenization.
///
/// Carries the text content and its 0-based position in the token
/// stream. Offsets into the source text are not tracked: highlighting
/// works on display text via pattern matching, not index offsets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The text content of the token.
    pub text: String,
    /// The position of the token in the stream (0-based).
    pub position: usize,
}

impl Token {
    /// Create a new token.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }
}

/// Type alias for a boxed iterator of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer.
    fn name(&self) -> &'static str;
}

/// A tokenizer that splits text on whitespace.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .split_whitespace()
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();
        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

/// The analyzer used for both indexing and query parsing.
///
/// Splits on whitespace and lowercases every token.
pub struct StandardAnalyzer {
    tokenizer: Box<dyn Tokenizer>,
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

impl StandardAnalyzer {
    /// Create a new standard analyzer.
    pub fn new() -> Self {
        StandardAnalyzer {
            tokenizer: Box::new(WhitespaceTokenizer::new()),
        }
    }

    /// Create an analyzer with a custom tokenizer.
    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>) -> Self {
        StandardAnalyzer { tokenizer }
    }

    /// Analyze text into a stream of lowercased tokens.
    pub fn analyze(&self, text: &str) -> Result<TokenStream> {
        let tokens = self.tokenizer.tokenize(text)?;
        Ok(Box::new(tokens.map(|mut token| {
            token.text = token.text.to_lowercase();
            token
        })))
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a raw query into lowercased search terms.
///
/// The query is trimmed and split on whitespace. Every term is kept for
/// lookup; display-side highlighting applies its own minimum-length
/// filter (see [`crate::render::Highlighter`]).
pub fn query_terms(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(|term| term.to_lowercase())
        .collect()
}
