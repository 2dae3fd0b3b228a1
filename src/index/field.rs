//! Indexed fields and their relevance boosts.

use serde::{Deserialize, Serialize};

/// The indexed fields of a corpus document.
///
/// The corpus shape is closed, so fields are a fixed enum rather than a
/// dynamic schema. Every document carries all nine fields (empty-string
/// defaults), which keeps index construction total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Flattened alternative names (substances).
    AlternativeNames,
    /// Page title.
    Title,
    /// Free-text tag list.
    Tags,
    /// Chemical name (substances).
    ChemicalName,
    /// Post author.
    Author,
    /// Short description.
    Description,
    /// Category label.
    Category,
    /// Legal status line (substances).
    LegalStatus,
    /// Full page text.
    Content,
}

impl FieldKind {
    /// All indexed fields, in the order the builder walks them.
    pub const ALL: [FieldKind; 9] = [
        FieldKind::AlternativeNames,
        FieldKind::Title,
        FieldKind::Tags,
        FieldKind::ChemicalName,
        FieldKind::Author,
        FieldKind::Description,
        FieldKind::Category,
        FieldKind::LegalStatus,
        FieldKind::Content,
    ];

    /// The static relevance boost for this field. Higher means more
    /// influence on ranking; content is the baseline.
    pub fn boost(self) -> f32 {
        match self {
            FieldKind::AlternativeNames => 15.0,
            FieldKind::Title => 10.0,
            FieldKind::Tags => 8.0,
            FieldKind::ChemicalName => 8.0,
            FieldKind::Author => 5.0,
            FieldKind::Description => 3.0,
            FieldKind::Category => 2.0,
            FieldKind::LegalStatus => 1.0,
            FieldKind::Content => 1.0,
        }
    }

    /// Field name as it appears in serialized corpora and stats output.
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::AlternativeNames => "alternative_names",
            FieldKind::Title => "title",
            FieldKind::Tags => "tags",
            FieldKind::ChemicalName => "chemical_name",
            FieldKind::Author => "author",
            FieldKind::Description => "description",
            FieldKind::Category => "category",
            FieldKind::LegalStatus => "legal_status",
            FieldKind::Content => "content",
        }
    }
}
