use crate::document::DocumentStore;
use crate::ranking::ScoredDocument;
use serde::Serialize;

/// Display record for the widget's dropdown: no scoring data, just what
/// the UI renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub title: String,
    pub excerpt: String,
    pub url: String,
}

/// Raw ranked entry for programmatic consumers, keyed by the external
/// document id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    pub doc_id: String,
    pub score: f64,
}

/// Join ranked arena ids back through the store into display records.
/// Pure mapping; order is preserved from the ranking.
pub fn format_hits(store: &DocumentStore, ranked: &[ScoredDocument]) -> Vec<SearchHit> {
    ranked
        .iter()
        .filter_map(|scored| store.get(scored.doc))
        .map(|doc| SearchHit {
            title: doc.title.clone(),
            excerpt: doc.excerpt.clone(),
            url: doc.url.clone(),
        })
        .collect()
}

/// Map ranked arena ids to external ids with their scores.
pub fn ranked_results(store: &DocumentStore, ranked: &[ScoredDocument]) -> Vec<RankedResult> {
    ranked
        .iter()
        .filter_map(|scored| {
            store.get(scored.doc).map(|doc| RankedResult {
                doc_id: doc.id.clone(),
                score: scored.score,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RawDocument;

    #[test]
    fn test_format_joins_store_in_rank_order() {
        let store = DocumentStore::load(vec![
            RawDocument::new("a", "First", "/a.html").with_excerpt("one"),
            RawDocument::new("b", "Second", "/b.html").with_excerpt("two"),
        ])
        .unwrap();

        let ranked = vec![
            ScoredDocument { doc: 1, score: 2.0 },
            ScoredDocument { doc: 0, score: 1.0 },
        ];

        let hits = format_hits(&store, &ranked);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Second");
        assert_eq!(hits[0].url, "/b.html");
        assert_eq!(hits[1].excerpt, "one");

        let raw = ranked_results(&store, &ranked);
        assert_eq!(raw[0].doc_id, "b");
        assert_eq!(raw[0].score, 2.0);
        assert_eq!(raw[1].doc_id, "a");
    }
}
