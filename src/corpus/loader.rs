//! Corpus loading and validation.
//!
//! The corpus is a JSON array of [`Document`] records produced by the
//! site build. A corpus that cannot be read, parsed, or validated fails
//! as a whole — no partial index is ever served from a broken corpus.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use ahash::AHashSet;
use log::{debug, info};

use crate::corpus::document::Document;
use crate::error::{ApothecaryError, Result};

/// Load and validate the corpus from a JSON file.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<Document>> {
    let path = path.as_ref();
    debug!("loading corpus from {}", path.display());

    let file = File::open(path).map_err(|e| {
        ApothecaryError::corpus(format!("failed to open corpus file {}: {e}", path.display()))
    })?;

    let documents = load_corpus_from_reader(BufReader::new(file))?;
    info!(
        "loaded corpus: {} documents from {}",
        documents.len(),
        path.display()
    );
    Ok(documents)
}

/// Load and validate the corpus from any reader.
pub fn load_corpus_from_reader<R: Read>(reader: R) -> Result<Vec<Document>> {
    let mut documents: Vec<Document> = serde_json::from_reader(reader)
        .map_err(|e| ApothecaryError::corpus(format!("failed to parse corpus: {e}")))?;

    for document in &mut documents {
        document.normalize();
    }

    validate(&documents)?;
    Ok(documents)
}

/// Validate the corpus invariants: every id non-empty and unique.
pub fn validate(documents: &[Document]) -> Result<()> {
    let mut seen = AHashSet::with_capacity(documents.len());

    for document in documents {
        if document.id.is_empty() {
            return Err(ApothecaryError::corpus("document with empty id"));
        }
        if !seen.insert(document.id.as_str()) {
            return Err(ApothecaryError::corpus(format!(
                "duplicate document id: {}",
                document.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::corpus::document::DocKind;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": "mdma", "kind": "substance", "title": "MDMA",
                  "alternativeNames": ["Molly", "Ecstasy"]}},
                {{"id": "17", "kind": "post", "title": "Harm reduction basics"}}
            ]"#
        )
        .unwrap();

        let documents = load_corpus(file.path()).unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].kind, DocKind::Substance);
        // The loader derives the indexed name form.
        assert_eq!(documents[0].alternative_names_text, "Molly Ecstasy");
    }

    #[test]
    fn test_missing_file_is_corpus_error() {
        let error = load_corpus("/nonexistent/search.json").unwrap_err();
        match error {
            ApothecaryError::Corpus(msg) => assert!(msg.contains("failed to open")),
            other => panic!("expected corpus error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_is_corpus_error() {
        let error = load_corpus_from_reader("{not json".as_bytes()).unwrap_err();
        assert!(matches!(error, ApothecaryError::Corpus(_)));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = r#"[
            {"id": "a", "kind": "post"},
            {"id": "a", "kind": "substance"}
        ]"#;
        let error = load_corpus_from_reader(json.as_bytes()).unwrap_err();
        match error {
            ApothecaryError::Corpus(msg) => assert!(msg.contains("duplicate")),
            other => panic!("expected corpus error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_id_rejected() {
        let json = r#"[{"id": "", "kind": "post"}]"#;
        assert!(load_corpus_from_reader(json.as_bytes()).is_err());
    }

    #[test]
    fn test_empty_corpus_is_valid() {
        let documents = load_corpus_from_reader("[]".as_bytes()).unwrap();
        assert!(documents.is_empty());
    }
}
