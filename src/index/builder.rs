//! Single-pass index construction.

use ahash::AHashMap;
use log::debug;

use crate::analysis::StandardAnalyzer;
use crate::corpus::document::Document;
use crate::corpus::validate;
use crate::error::Result;
use crate::index::field::FieldKind;
use crate::index::inverted::{InvertedIndex, Posting};

/// Builds the inverted index from the full document sequence.
///
/// Consumes the corpus exactly once, before any query is served. A
/// corpus that fails validation fails the whole build; documents with
/// missing optional fields are indexed with their empty-string defaults
/// rather than dropped.
pub struct IndexBuilder {
    analyzer: StandardAnalyzer,
}

impl std::fmt::Debug for IndexBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexBuilder")
            .field("analyzer", &self.analyzer)
            .finish()
    }
}

impl IndexBuilder {
    /// Create a builder with the standard analyzer.
    pub fn new() -> Self {
        IndexBuilder {
            analyzer: StandardAnalyzer::new(),
        }
    }

    /// Create a builder with a custom analyzer.
    pub fn with_analyzer(analyzer: StandardAnalyzer) -> Self {
        IndexBuilder { analyzer }
    }

    /// Build the index over the given documents.
    ///
    /// Deterministic: the same corpus always produces identical index
    /// contents. Postings for each term are appended in (document,
    /// field) walk order, so their order is stable without a final
    /// sort.
    pub fn build(&self, documents: &[Document]) -> Result<InvertedIndex> {
        validate(documents)?;

        let mut index = InvertedIndex::new(documents.len() as u32);

        for (ordinal, document) in documents.iter().enumerate() {
            for field in FieldKind::ALL {
                let text = document.field_text(field);
                if text.is_empty() {
                    continue;
                }

                let mut freqs: AHashMap<String, u32> = AHashMap::new();
                for token in self.analyzer.analyze(text)? {
                    *freqs.entry(token.text).or_insert(0) += 1;
                }

                for (term, freq) in freqs {
                    index.push(
                        term,
                        Posting {
                            doc: ordinal as u32,
                            field,
                            freq,
                        },
                    );
                }
            }
        }

        debug!(
            "built index: {} documents, {} terms, {} postings",
            index.doc_count(),
            index.term_count(),
            index.posting_count()
        );
        Ok(index)
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::document::DocKind;

    fn corpus() -> Vec<Document> {
        vec![
            Document::builder("mdma", DocKind::Substance)
                .title("MDMA")
                .alternative_names(["Molly", "Ecstasy", "Mandy"])
                .category("Empathogens")
                .content("MDMA is a synthetic empathogen.")
                .build(),
            Document::builder("17", DocKind::Post)
                .title("Festival season report")
                .author("anon")
                .content("someone handed me mdma at the gate")
                .build(),
        ]
    }

    #[test]
    fn test_indexes_flattened_names() {
        let index = IndexBuilder::new().build(&corpus()).unwrap();
        let postings = index.postings("molly");

        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].field, FieldKind::AlternativeNames);
        assert_eq!(postings[0].doc, 0);
    }

    #[test]
    fn test_terms_are_lowercased() {
        let index = IndexBuilder::new().build(&corpus()).unwrap();

        assert!(!index.postings("mdma").is_empty());
        assert!(index.postings("MDMA").is_empty());
    }

    #[test]
    fn test_term_frequency_per_field() {
        let docs = vec![
            Document::builder("x", DocKind::Post)
                .content("echo echo echo")
                .build(),
        ];
        let index = IndexBuilder::new().build(&docs).unwrap();
        let postings = index.postings("echo");

        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].freq, 3);
    }

    #[test]
    fn test_partial_documents_still_indexed() {
        let docs = vec![Document::builder("bare", DocKind::Post).build()];
        let index = IndexBuilder::new().build(&docs).unwrap();

        assert_eq!(index.doc_count(), 1);
        assert!(index.is_empty());
    }

    #[test]
    fn test_invalid_corpus_fails_whole_build() {
        let docs = vec![
            Document::builder("dup", DocKind::Post).build(),
            Document::builder("dup", DocKind::Post).build(),
        ];
        assert!(IndexBuilder::new().build(&docs).is_err());
    }

    #[test]
    fn test_build_is_deterministic() {
        let docs = corpus();
        let first = IndexBuilder::new().build(&docs).unwrap();
        let second = IndexBuilder::new().build(&docs).unwrap();

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
