use crate::document::Field;
use crate::error::{Result, SearchError};
use std::collections::HashSet;
use std::str::FromStr;

/// How query terms combine into the candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Documents matching at least one query term are candidates.
    #[default]
    Any,
    /// Documents must match every query term.
    All,
}

impl FromStr for MatchMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "any" => Ok(MatchMode::Any),
            "all" => Ok(MatchMode::All),
            other => Err(SearchError::UnknownMatchMode {
                mode: other.to_string(),
            }),
        }
    }
}

/// Stemming hook applied as the last tokenizer stage.
///
/// Identity by default: the feed carries technical vocabulary ("wsl",
/// "cpp") that English stemming would mangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stemming {
    #[default]
    Identity,
    /// English Snowball stemmer.
    English,
}

/// Per-field scoring weights, all required to be positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldWeights {
    pub title: f64,
    pub excerpt: f64,
    pub tags: f64,
    pub categories: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: 10.0,
            excerpt: 1.0,
            tags: 5.0,
            categories: 3.0,
        }
    }
}

impl FieldWeights {
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Title => self.title,
            Field::Excerpt => self.excerpt,
            Field::Tags => self.tags,
            Field::Categories => self.categories,
        }
    }
}

/// Search configuration shared by index build and query evaluation.
///
/// One config produces the one tokenizer both sides use; constructing a
/// second tokenizer with different settings silently breaks recall, so
/// the engine never does.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub field_weights: FieldWeights,
    pub min_token_length: usize,
    pub stop_words: HashSet<String>,
    pub stemming: Stemming,
    pub match_mode: MatchMode,
    pub result_limit: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            field_weights: FieldWeights::default(),
            // 1 keeps single-letter queries ("c" from "C++") searchable
            min_token_length: 1,
            stop_words: HashSet::new(),
            stemming: Stemming::default(),
            match_mode: MatchMode::default(),
            result_limit: None,
        }
    }
}

impl SearchConfig {
    /// Validate before any build; configuration errors never reach the
    /// index builder.
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("title", self.field_weights.title),
            ("excerpt", self.field_weights.excerpt),
            ("tags", self.field_weights.tags),
            ("categories", self.field_weights.categories),
        ];
        for (field, value) in weights {
            if !(value > 0.0) {
                return Err(SearchError::InvalidFieldWeight { field, value });
            }
        }
        if self.min_token_length == 0 {
            return Err(SearchError::InvalidMinTokenLength);
        }
        Ok(())
    }
}

/// Stop-word presets. None are applied unless opted into via
/// [`SearchConfig::stop_words`].
pub mod stop_words {
    use std::collections::HashSet;

    lazy_static::lazy_static! {
        static ref ENGLISH: HashSet<&'static str> = {
            [
                "a", "about", "above", "after", "again", "against", "all", "am", "an", "and",
                "any", "are", "aren't", "as", "at", "be", "because", "been", "before", "being",
                "below", "between", "both", "but", "by", "can't", "cannot", "could", "couldn't",
                "did", "didn't", "do", "does", "doesn't", "doing", "don't", "down", "during",
                "each", "few", "for", "from", "further", "had", "hadn't", "has", "hasn't",
                "have", "haven't", "having", "he", "he'd", "he'll", "he's", "her", "here",
                "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "i",
                "i'd", "i'll", "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's",
                "its", "itself", "let's", "me", "more", "most", "mustn't", "my", "myself",
                "no", "nor", "not", "of", "off", "on", "once", "only", "or", "other", "ought",
                "our", "ours", "ourselves", "out", "over", "own", "same", "shan't", "she",
                "she'd", "she'll", "she's", "should", "shouldn't", "so", "some", "such",
                "than", "that", "that's", "the", "their", "theirs", "them", "themselves",
                "then", "there", "there's", "these", "they", "they'd", "they'll", "they're",
                "they've", "this", "those", "through", "to", "too", "under", "until", "up",
                "very", "was", "wasn't", "we", "we'd", "we'll", "we're", "we've", "were",
                "weren't", "what", "what's", "when", "when's", "where", "where's", "which",
                "while", "who", "who's", "whom", "why", "why's", "with", "won't", "would",
                "wouldn't", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
                "yourself", "yourselves",
            ]
            .iter()
            .copied()
            .collect()
        };
    }

    /// Common English stop words.
    pub fn english() -> HashSet<String> {
        ENGLISH.iter().map(|w| w.to_string()).collect()
    }
}
