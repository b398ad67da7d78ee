use crate::config::{FieldWeights, MatchMode};
use crate::document::{DocId, Field};
use crate::index::InvertedIndex;
use std::collections::HashMap;

/// Field-weighted tf-idf scorer.
///
/// score(doc) = sum over matched terms of
///   tf(term, doc, field) * weight(field) * idf(term) / sqrt(doc_length)
/// with idf(term) = ln(1 + total_documents / documents_containing_term).
///
/// Monotonic in term frequency, decreasing in document frequency, and
/// identical for documents with identical content.
pub struct TfIdf {
    weights: FieldWeights,
}

impl TfIdf {
    pub fn new(weights: FieldWeights) -> Self {
        Self { weights }
    }

    /// Smoothed inverse document frequency: rarer terms score higher.
    pub fn idf(&self, index: &InvertedIndex, term: &str) -> f64 {
        let doc_freq = index.doc_frequency(term) as f64;
        if doc_freq == 0.0 {
            0.0
        } else {
            (1.0 + index.total_documents() as f64 / doc_freq).ln()
        }
    }

    pub fn field_weight(&self, field: Field) -> f64 {
        self.weights.get(field)
    }
}

/// Ranked search result, still in arena-id form.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDocument {
    pub doc: DocId,
    pub score: f64,
}

/// Score and order candidates for a set of deduplicated query terms.
///
/// `MatchMode::Any` keeps documents matching at least one term;
/// `MatchMode::All` keeps only documents matching every term. Output is
/// sorted by score descending with ties broken by feed order, so
/// repeated calls with identical inputs return identical orderings.
pub fn rank_documents(
    query_terms: &[String],
    index: &InvertedIndex,
    weights: &FieldWeights,
    match_mode: MatchMode,
) -> Vec<ScoredDocument> {
    let scorer = TfIdf::new(*weights);
    let mut scores: HashMap<DocId, f64> = HashMap::new();
    let mut matched_terms: HashMap<DocId, usize> = HashMap::new();

    for term in query_terms {
        let Some(list) = index.posting_list(term) else {
            continue;
        };
        let idf = scorer.idf(index, term);
        let mut last: Option<DocId> = None;
        for posting in &list.postings {
            let contribution =
                posting.term_frequency as f64 * scorer.field_weight(posting.field) * idf;
            *scores.entry(posting.doc).or_insert(0.0) += contribution;
            // postings are ordered by doc, so one bump per (term, doc)
            if last != Some(posting.doc) {
                *matched_terms.entry(posting.doc).or_insert(0) += 1;
                last = Some(posting.doc);
            }
        }
    }

    let required = match match_mode {
        MatchMode::Any => 1,
        MatchMode::All => query_terms.len(),
    };

    let mut ranked: Vec<ScoredDocument> = scores
        .into_iter()
        .filter(|(doc, _)| matched_terms.get(doc).copied().unwrap_or(0) >= required)
        .map(|(doc, score)| ScoredDocument {
            doc,
            score: score / (index.doc_length(doc).max(1) as f64).sqrt(),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.doc.cmp(&b.doc))
    });

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::document::{DocumentStore, RawDocument};
    use crate::tokenizer::Tokenizer;

    fn index_from(records: Vec<RawDocument>) -> InvertedIndex {
        let store = DocumentStore::load(records).unwrap();
        let tokenizer = Tokenizer::from_config(&SearchConfig::default());
        InvertedIndex::build(&store, &tokenizer)
    }

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_title_match_outranks_excerpt_match() {
        // same term frequency and document length, only the field differs
        let index = index_from(vec![
            RawDocument::new("a", "rust intro", "/a.html").with_excerpt("filler words"),
            RawDocument::new("b", "other intro", "/b.html").with_excerpt("rust words"),
        ]);

        let weights = FieldWeights::default();
        let ranked = rank_documents(&terms(&["rust"]), &index, &weights, MatchMode::Any);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].doc, 0, "title match should rank first");
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn test_idf_rarer_terms_score_higher() {
        // "alpha" appears in one doc, "beta" in both; same field, tf, length
        let index = index_from(vec![
            RawDocument::new("a", "x", "/a.html").with_excerpt("alpha beta"),
            RawDocument::new("b", "y", "/b.html").with_excerpt("beta gamma"),
        ]);

        let weights = FieldWeights::default();
        let rare = rank_documents(&terms(&["alpha"]), &index, &weights, MatchMode::Any);
        let common = rank_documents(&terms(&["beta"]), &index, &weights, MatchMode::Any);

        let rare_on_a = rare.iter().find(|s| s.doc == 0).unwrap().score;
        let common_on_a = common.iter().find(|s| s.doc == 0).unwrap().score;
        assert!(rare_on_a > common_on_a);
    }

    #[test]
    fn test_score_monotonic_in_term_frequency() {
        let index = index_from(vec![
            RawDocument::new("a", "x", "/a.html").with_excerpt("heap heap"),
            RawDocument::new("b", "y", "/b.html").with_excerpt("heap stack"),
        ]);

        let ranked = rank_documents(&terms(&["heap"]), &index, &FieldWeights::default(), MatchMode::Any);
        assert_eq!(ranked[0].doc, 0);
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn test_identical_documents_score_identically() {
        let index = index_from(vec![
            RawDocument::new("a", "same title", "/a.html").with_excerpt("same body"),
            RawDocument::new("b", "same title", "/b.html").with_excerpt("same body"),
        ]);

        let ranked = rank_documents(&terms(&["same"]), &index, &FieldWeights::default(), MatchMode::Any);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].score, ranked[1].score);
        // stable tie-break: feed order
        assert_eq!(ranked[0].doc, 0);
        assert_eq!(ranked[1].doc, 1);
    }

    #[test]
    fn test_match_mode_all_requires_every_term() {
        let index = index_from(vec![
            RawDocument::new("a", "x", "/a.html").with_excerpt("column store"),
            RawDocument::new("b", "y", "/b.html").with_excerpt("column layout"),
        ]);

        let weights = FieldWeights::default();
        let any = rank_documents(&terms(&["column", "store"]), &index, &weights, MatchMode::Any);
        let all = rank_documents(&terms(&["column", "store"]), &index, &weights, MatchMode::All);

        assert_eq!(any.len(), 2);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].doc, 0);
    }

    #[test]
    fn test_match_mode_all_with_unknown_term_matches_nothing() {
        let index = index_from(vec![
            RawDocument::new("a", "x", "/a.html").with_excerpt("column store"),
        ]);

        let ranked = rank_documents(
            &terms(&["column", "nonexistent"]),
            &index,
            &FieldWeights::default(),
            MatchMode::All,
        );
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_unmatched_terms_yield_empty() {
        let index = index_from(vec![
            RawDocument::new("a", "x", "/a.html").with_excerpt("column store"),
        ]);

        let ranked = rank_documents(&terms(&["zzz"]), &index, &FieldWeights::default(), MatchMode::Any);
        assert!(ranked.is_empty());
    }
}
