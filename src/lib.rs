// Re-export main components
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod index;
pub mod ranking;
pub mod results;
pub mod tokenizer;

// Re-export commonly used types
pub use config::{FieldWeights, MatchMode, SearchConfig, Stemming};
pub use document::{DocId, Document, DocumentStore, Field, RawDocument};
pub use engine::{QueryOptions, SearchEngine, SearchResults};
pub use error::{Result, SearchError};
pub use index::InvertedIndex;
pub use results::{RankedResult, SearchHit};
pub use tokenizer::Tokenizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
