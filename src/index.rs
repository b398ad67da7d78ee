use crate::document::{DocId, DocumentStore, Field};
use crate::error::Result;
use crate::tokenizer::Tokenizer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One term occurrence record: which document, which field, how often.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub doc: DocId,
    pub field: Field,
    pub term_frequency: u32,
}

/// All postings for one term, ordered by (doc, field) with at most one
/// entry per (doc, field) pair, plus the distinct-document count used
/// for idf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingList {
    pub doc_frequency: u32,
    pub postings: Vec<Posting>,
}

/// Inverted index: term -> postings, plus the per-document length table
/// used for score normalization. Built once from a store, read-only
/// afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvertedIndex {
    terms: HashMap<String, PostingList>,
    doc_lengths: Vec<u32>,
    doc_count: u32,
}

impl InvertedIndex {
    /// Build from a fully materialized store.
    ///
    /// Documents are visited in feed order and fields in their fixed
    /// order, so posting lists come out ordered by (doc, field) and the
    /// aggregates are independent of map iteration order: rebuilding
    /// from an unchanged store scores identically for any query.
    pub fn build(store: &DocumentStore, tokenizer: &Tokenizer) -> Self {
        let mut terms: HashMap<String, PostingList> = HashMap::new();
        let mut doc_lengths = vec![0u32; store.len()];

        for (position, document) in store.documents().iter().enumerate() {
            let doc = position as DocId;
            for field in Field::ALL {
                let frequencies = tokenizer.analyze_with_frequencies(&document.field_text(field));
                doc_lengths[position] += frequencies.values().sum::<u32>();
                for (term, term_frequency) in frequencies {
                    terms.entry(term).or_default().postings.push(Posting {
                        doc,
                        field,
                        term_frequency,
                    });
                }
            }
        }

        for list in terms.values_mut() {
            list.doc_frequency = distinct_documents(&list.postings);
        }

        Self {
            terms,
            doc_lengths,
            doc_count: store.len() as u32,
        }
    }

    /// Postings for a term, if any document contains it.
    pub fn posting_list(&self, term: &str) -> Option<&PostingList> {
        self.terms.get(term)
    }

    /// Number of distinct documents containing a term (for idf).
    pub fn doc_frequency(&self, term: &str) -> u32 {
        self.terms.get(term).map_or(0, |list| list.doc_frequency)
    }

    /// Total term count across all fields of one document.
    pub fn doc_length(&self, doc: DocId) -> u32 {
        self.doc_lengths.get(doc as usize).copied().unwrap_or(0)
    }

    pub fn total_documents(&self) -> u32 {
        self.doc_count
    }

    pub fn distinct_terms(&self) -> usize {
        self.terms.len()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            total_documents: self.doc_count as usize,
            distinct_terms: self.terms.len(),
            avg_postings_per_term: if self.terms.is_empty() {
                0.0
            } else {
                self.terms.values().map(|l| l.postings.len()).sum::<usize>() as f64
                    / self.terms.len() as f64
            },
        }
    }

    /// Serialize the index for faster cold start. The snapshot
    /// round-trips to an index producing identical query results.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

fn distinct_documents(postings: &[Posting]) -> u32 {
    let mut count = 0;
    let mut last: Option<DocId> = None;
    for posting in postings {
        if last != Some(posting.doc) {
            count += 1;
            last = Some(posting.doc);
        }
    }
    count
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStats {
    pub total_documents: usize,
    pub distinct_terms: usize,
    pub avg_postings_per_term: f64,
}
