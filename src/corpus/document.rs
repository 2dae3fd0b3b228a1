//! Document structure for the searchable corpus.

use serde::{Deserialize, Serialize};

use crate::index::field::FieldKind;

/// The kind of a corpus document.
///
/// Determines which weighted field set applies at index time and which
/// display template (and result group) is used at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocKind {
    /// A substance profile page.
    Substance,
    /// An archived forum or media post.
    Post,
}

/// A document represents a single indexable unit.
///
/// Every text field defaults to the empty string when absent from the
/// serialized corpus, so index construction has a uniform contract: no
/// field is ever missing at index time. Partial documents are indexed
/// with those defaults rather than dropped.
///
/// Alternative names carry a dual representation: `alternative_names`
/// is the ordered display form (insertion order preserved for the
/// "also known as" line), `alternative_names_text` is the space-joined
/// indexed form. The two are explicit fields — the structured form is
/// never mutated into the flat one. [`Document::normalize`] derives the
/// flat form when the corpus does not already carry it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Stable unique identifier, assigned at corpus build time. The
    /// sole join key between index hits and source records.
    pub id: String,

    /// Document kind.
    pub kind: DocKind,

    /// Page title.
    #[serde(default)]
    pub title: String,

    /// Post author (empty for substances).
    #[serde(default)]
    pub author: String,

    /// Short description or summary.
    #[serde(default)]
    pub description: String,

    /// Category label.
    #[serde(default)]
    pub category: String,

    /// Free-text tag list.
    #[serde(default)]
    pub tags: String,

    /// Full rendered-page text content.
    #[serde(default)]
    pub content: String,

    /// IUPAC or common chemical name (substances only).
    #[serde(default)]
    pub chemical_name: String,

    /// Legal status line (substances only).
    #[serde(default)]
    pub legal_status: String,

    /// Alternative names in display order (substances only).
    #[serde(default)]
    pub alternative_names: Vec<String>,

    /// Space-joined alternative names, the form inserted into the
    /// index. Derived by [`Document::normalize`] when absent.
    #[serde(default)]
    pub alternative_names_text: String,

    /// Destination for result navigation.
    #[serde(default)]
    pub url: String,

    /// Archive destination for post results.
    #[serde(default)]
    pub archive_link: String,
}

impl Document {
    /// Create a builder for constructing documents.
    pub fn builder<S: Into<String>>(id: S, kind: DocKind) -> DocumentBuilder {
        DocumentBuilder::new(id, kind)
    }

    /// Derive the flattened alternative-names form when it is missing.
    ///
    /// Called once at corpus load. Idempotent: a corpus that already
    /// carries `alternative_names_text` is left untouched.
    pub fn normalize(&mut self) {
        if self.alternative_names_text.is_empty() && !self.alternative_names.is_empty() {
            self.alternative_names_text = self.alternative_names.join(" ");
        }
    }

    /// The text indexed for the given field.
    pub fn field_text(&self, field: FieldKind) -> &str {
        match field {
            FieldKind::AlternativeNames => &self.alternative_names_text,
            FieldKind::Title => &self.title,
            FieldKind::Tags => &self.tags,
            FieldKind::ChemicalName => &self.chemical_name,
            FieldKind::Author => &self.author,
            FieldKind::Description => &self.description,
            FieldKind::Category => &self.category,
            FieldKind::LegalStatus => &self.legal_status,
            FieldKind::Content => &self.content,
        }
    }
}

/// A builder for constructing documents in a fluent manner.
///
/// Used by the site build while assembling the corpus and by tests.
#[derive(Debug)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Create a new builder with the two required fields.
    pub fn new<S: Into<String>>(id: S, kind: DocKind) -> Self {
        DocumentBuilder {
            document: Document {
                id: id.into(),
                kind,
                title: String::new(),
                author: String::new(),
                description: String::new(),
                category: String::new(),
                tags: String::new(),
                content: String::new(),
                chemical_name: String::new(),
                legal_status: String::new(),
                alternative_names: Vec::new(),
                alternative_names_text: String::new(),
                url: String::new(),
                archive_link: String::new(),
            },
        }
    }

    /// Set the title.
    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.document.title = title.into();
        self
    }

    /// Set the author.
    pub fn author<S: Into<String>>(mut self, author: S) -> Self {
        self.document.author = author.into();
        self
    }

    /// Set the description.
    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.document.description = description.into();
        self
    }

    /// Set the category.
    pub fn category<S: Into<String>>(mut self, category: S) -> Self {
        self.document.category = category.into();
        self
    }

    /// Set the tag list.
    pub fn tags<S: Into<String>>(mut self, tags: S) -> Self {
        self.document.tags = tags.into();
        self
    }

    /// Set the page content.
    pub fn content<S: Into<String>>(mut self, content: S) -> Self {
        self.document.content = content.into();
        self
    }

    /// Set the chemical name.
    pub fn chemical_name<S: Into<String>>(mut self, chemical_name: S) -> Self {
        self.document.chemical_name = chemical_name.into();
        self
    }

    /// Set the legal status.
    pub fn legal_status<S: Into<String>>(mut self, legal_status: S) -> Self {
        self.document.legal_status = legal_status.into();
        self
    }

    /// Set the alternative names (display order).
    pub fn alternative_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.document.alternative_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the navigation URL.
    pub fn url<S: Into<String>>(mut self, url: S) -> Self {
        self.document.url = url.into();
        self
    }

    /// Set the archive link.
    pub fn archive_link<S: Into<String>>(mut self, archive_link: S) -> Self {
        self.document.archive_link = archive_link.into();
        self
    }

    /// Build the final document, deriving the indexed name form.
    pub fn build(mut self) -> Document {
        self.document.normalize();
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let doc = Document::builder("mdma", DocKind::Substance).build();

        assert_eq!(doc.id, "mdma");
        assert_eq!(doc.kind, DocKind::Substance);
        assert_eq!(doc.title, "");
        assert_eq!(doc.content, "");
        assert!(doc.alternative_names.is_empty());
    }

    #[test]
    fn test_normalize_joins_names() {
        let doc = Document::builder("mdma", DocKind::Substance)
            .alternative_names(["Molly", "Ecstasy", "Mandy"])
            .build();

        assert_eq!(doc.alternative_names_text, "Molly Ecstasy Mandy");
        // Display form is untouched by normalization.
        assert_eq!(doc.alternative_names, vec!["Molly", "Ecstasy", "Mandy"]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut doc = Document::builder("mdma", DocKind::Substance)
            .alternative_names(["Molly"])
            .build();

        let before = doc.alternative_names_text.clone();
        doc.normalize();
        assert_eq!(doc.alternative_names_text, before);
    }

    #[test]
    fn test_serde_camel_case() {
        let json = r#"{
            "id": "42",
            "kind": "post",
            "title": "Trip report",
            "archiveLink": "https://archive.example/42"
        }"#;

        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.kind, DocKind::Post);
        assert_eq!(doc.archive_link, "https://archive.example/42");
        // Absent fields default to empty, never None.
        assert_eq!(doc.author, "");
        assert_eq!(doc.legal_status, "");
    }

    #[test]
    fn test_field_text_uses_flattened_names() {
        let doc = Document::builder("mdma", DocKind::Substance)
            .alternative_names(["Molly", "Ecstasy"])
            .build();

        assert_eq!(doc.field_text(FieldKind::AlternativeNames), "Molly Ecstasy");
    }
}
