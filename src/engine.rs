use crate::config::{MatchMode, SearchConfig};
use crate::document::{DocumentStore, RawDocument};
use crate::error::Result;
use crate::index::{IndexStats, InvertedIndex};
use crate::ranking::rank_documents;
use crate::results::{format_hits, ranked_results, RankedResult, SearchHit};
use crate::tokenizer::Tokenizer;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

/// Per-query overrides; unset fields fall back to the engine's config.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub match_mode: Option<MatchMode>,
    pub limit: Option<usize>,
}

/// Search result: display hits for the widget plus the raw ranked list
/// for programmatic consumers. `total` counts candidates before the
/// result limit is applied.
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub hits: Vec<SearchHit>,
    pub ranked: Vec<RankedResult>,
    pub total: usize,
}

impl SearchResults {
    fn empty() -> Self {
        Self {
            hits: Vec::new(),
            ranked: Vec::new(),
            total: 0,
        }
    }
}

/// Store and index built together from one feed; replaced as a unit so
/// in-flight queries keep reading a consistent pair.
struct IndexState {
    store: DocumentStore,
    index: InvertedIndex,
}

/// Main search engine.
///
/// Holds the one tokenizer configuration shared by build and query —
/// mismatched tokenization between the two silently breaks recall, so
/// there is exactly one `Tokenizer` per engine. The index is immutable
/// after a build; [`SearchEngine::load`] replaces it atomically, and a
/// failed load leaves the previous index untouched.
pub struct SearchEngine {
    config: SearchConfig,
    tokenizer: Tokenizer,
    state: RwLock<Option<Arc<IndexState>>>,
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SearchEngine {
    /// Create an engine with a validated configuration. Configuration
    /// errors surface here, before any build.
    pub fn with_config(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let tokenizer = Tokenizer::from_config(&config);
        Ok(Self {
            config,
            tokenizer,
            state: RwLock::new(None),
        })
    }

    /// Ingest a document-store feed and build a fresh index.
    ///
    /// The build runs to completion against the new feed, then swaps in
    /// as a whole. On validation failure the old index stays visible;
    /// no partial index is ever queryable.
    pub fn load(&self, records: Vec<RawDocument>) -> Result<()> {
        let store = DocumentStore::load(records)?;
        let index = InvertedIndex::build(&store, &self.tokenizer);
        info!(
            documents = store.len(),
            terms = index.distinct_terms(),
            "index rebuilt"
        );
        *self.state.write().unwrap() = Some(Arc::new(IndexState { store, index }));
        Ok(())
    }

    /// Whether a build has completed. Callers gate the widget on this
    /// before issuing queries.
    pub fn is_ready(&self) -> bool {
        self.state.read().unwrap().is_some()
    }

    /// Search with the engine's configured match mode and limit.
    pub fn search(&self, query: &str) -> SearchResults {
        self.search_with(query, &QueryOptions::default())
    }

    /// Search with per-query overrides.
    ///
    /// Pure function of (query, index): repeated calls with identical
    /// inputs return identical ordered results. Empty or whitespace-only
    /// queries and queries against a not-yet-loaded engine return empty
    /// results, never an error.
    pub fn search_with(&self, query: &str, options: &QueryOptions) -> SearchResults {
        let Some(state) = self.state.read().unwrap().clone() else {
            return SearchResults::empty();
        };

        let mut terms = self.tokenizer.analyze(query);
        let mut seen = HashSet::new();
        terms.retain(|t| seen.insert(t.clone()));
        if terms.is_empty() {
            return SearchResults::empty();
        }

        let match_mode = options.match_mode.unwrap_or(self.config.match_mode);
        let mut ranked = rank_documents(&terms, &state.index, &self.config.field_weights, match_mode);
        let total = ranked.len();
        debug!(query, candidates = total, "query evaluated");

        if let Some(limit) = options.limit.or(self.config.result_limit) {
            ranked.truncate(limit);
        }

        SearchResults {
            hits: format_hits(&state.store, &ranked),
            ranked: ranked_results(&state.store, &ranked),
            total,
        }
    }

    pub fn document_count(&self) -> usize {
        self.state
            .read()
            .unwrap()
            .as_ref()
            .map_or(0, |state| state.store.len())
    }

    pub fn stats(&self) -> Option<IndexStats> {
        self.state
            .read()
            .unwrap()
            .as_ref()
            .map(|state| state.index.stats())
    }
}
