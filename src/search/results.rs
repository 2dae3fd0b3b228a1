//! Ranked hits and the classified result set.

use ahash::AHashMap;
use serde::Serialize;

use crate::render::display::{PostEntry, SubstanceEntry};

/// Maximum number of results displayed per query.
pub const MAX_RESULTS: usize = 10;

/// One ranked hit: a document ordinal with its relevance score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryHit {
    /// Corpus ordinal of the matched document.
    pub doc: u32,
    /// Summed boosted term-frequency score.
    pub score: f32,
}

/// Rank accumulated scores into an ordered hit list.
///
/// Orders by score descending; ties break by corpus ordinal ascending
/// so display order is stable across identical builds.
pub fn rank(scores: AHashMap<u32, f32>) -> Vec<QueryHit> {
    let mut hits: Vec<QueryHit> = scores
        .into_iter()
        .map(|(doc, score)| QueryHit { doc, score })
        .collect();

    hits.sort_unstable_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.doc.cmp(&b.doc))
    });
    hits
}

/// The classified, display-ready result set for one query.
///
/// Groups preserve relative rank order; substances render before posts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    /// Substance-profile results, rank order.
    pub substances: Vec<SubstanceEntry>,
    /// Post results, rank order.
    pub posts: Vec<PostEntry>,
    /// Whether matches beyond [`MAX_RESULTS`] were dropped.
    pub truncated: bool,
    /// Total number of matching documents before the cap.
    pub total_hits: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_orders_by_score_then_ordinal() {
        let mut scores = AHashMap::new();
        scores.insert(3u32, 5.0f32);
        scores.insert(1, 12.0);
        scores.insert(2, 5.0);

        let hits = rank(scores);
        let docs: Vec<u32> = hits.iter().map(|h| h.doc).collect();
        assert_eq!(docs, vec![1, 2, 3]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(AHashMap::new()).is_empty());
    }
}
