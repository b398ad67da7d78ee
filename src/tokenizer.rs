use crate::config::{SearchConfig, Stemming};
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::{HashMap, HashSet};

/// Normalization pipeline shared by index build and query evaluation.
///
/// Splitting rule: a token is a maximal run of alphanumeric characters;
/// every other character is a separator. "Pointers & References" yields
/// ["pointers", "references"]; "C++" yields ["c"]. The rule is a pure
/// function of the input, so tokenizing a fixed string is reproducible.
pub struct Tokenizer {
    min_token_length: usize,
    stop_words: HashSet<String>,
    stemmer: Option<Stemmer>,
}

impl Tokenizer {
    pub fn from_config(config: &SearchConfig) -> Self {
        let stemmer = match config.stemming {
            Stemming::Identity => None,
            Stemming::English => Some(Stemmer::create(Algorithm::English)),
        };
        Self {
            min_token_length: config.min_token_length,
            stop_words: config.stop_words.clone(),
            stemmer,
        }
    }

    /// Split text into raw tokens on non-alphanumeric boundaries
    fn split(&self, text: &str) -> Vec<String> {
        text.chars()
            .fold(vec![String::new()], |mut tokens, c| {
                if c.is_alphanumeric() {
                    if let Some(last) = tokens.last_mut() {
                        last.push(c);
                    }
                } else if tokens.last().map_or(false, |s| !s.is_empty()) {
                    tokens.push(String::new());
                }
                tokens
            })
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Convert tokens to lowercase
    fn lowercase_filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.into_iter().map(|t| t.to_lowercase()).collect()
    }

    /// Drop tokens below the minimum length or on the stop-word set
    fn stopword_filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|t| t.chars().count() >= self.min_token_length)
            .filter(|t| !self.stop_words.contains(t))
            .collect()
    }

    /// Apply the configured stemming hook (identity when unset)
    fn stemmer_filter(&self, tokens: Vec<String>) -> Vec<String> {
        match &self.stemmer {
            Some(stemmer) => tokens
                .into_iter()
                .map(|t| stemmer.stem(&t).to_string())
                .collect(),
            None => tokens,
        }
    }

    /// Full analysis pipeline: split, lowercase, filter, stem.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let tokens = self.split(text);
        let tokens = self.lowercase_filter(tokens);
        let tokens = self.stopword_filter(tokens);
        self.stemmer_filter(tokens)
    }

    /// Analyze and count term frequencies (for indexing).
    pub fn analyze_with_frequencies(&self, text: &str) -> HashMap<String, u32> {
        let mut frequencies = HashMap::new();
        for token in self.analyze(text) {
            *frequencies.entry(token).or_insert(0) += 1;
        }
        frequencies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::stop_words;

    fn default_tokenizer() -> Tokenizer {
        Tokenizer::from_config(&SearchConfig::default())
    }

    #[test]
    fn test_split_on_non_alphanumeric() {
        let tokenizer = default_tokenizer();
        assert_eq!(
            tokenizer.analyze("Pointers & References"),
            vec!["pointers", "references"]
        );
    }

    #[test]
    fn test_punctuated_technical_terms() {
        let tokenizer = default_tokenizer();
        assert_eq!(tokenizer.analyze("C++"), vec!["c"]);
        assert_eq!(tokenizer.analyze("Column Store (SoA)"), vec!["column", "store", "soa"]);
        assert_eq!(tokenizer.analyze("WSL1 vs WSL2"), vec!["wsl1", "vs", "wsl2"]);
    }

    #[test]
    fn test_determinism() {
        let tokenizer = default_tokenizer();
        let text = "Crypto L2 Analysis: Part 1 - Column Store Architecture";
        assert_eq!(tokenizer.analyze(text), tokenizer.analyze(text));
    }

    #[test]
    fn test_whitespace_only_yields_nothing() {
        let tokenizer = default_tokenizer();
        assert!(tokenizer.analyze("   \t\n").is_empty());
        assert!(tokenizer.analyze("").is_empty());
    }

    #[test]
    fn test_min_token_length_filter() {
        let config = SearchConfig {
            min_token_length: 3,
            ..Default::default()
        };
        let tokenizer = Tokenizer::from_config(&config);
        assert_eq!(tokenizer.analyze("a to the heap"), vec!["the", "heap"]);
    }

    #[test]
    fn test_stop_words_empty_by_default() {
        let tokenizer = default_tokenizer();
        assert_eq!(tokenizer.analyze("the heap"), vec!["the", "heap"]);
    }

    #[test]
    fn test_english_stop_word_preset() {
        let config = SearchConfig {
            stop_words: stop_words::english(),
            ..Default::default()
        };
        let tokenizer = Tokenizer::from_config(&config);
        assert_eq!(tokenizer.analyze("the quick brown fox"), vec!["quick", "brown", "fox"]);
    }

    #[test]
    fn test_stemming_opt_in() {
        let config = SearchConfig {
            stemming: Stemming::English,
            ..Default::default()
        };
        let stemming = Tokenizer::from_config(&config);
        assert_eq!(stemming.analyze("running pointers"), vec!["run", "pointer"]);

        // identity by default
        let identity = default_tokenizer();
        assert_eq!(identity.analyze("running pointers"), vec!["running", "pointers"]);
    }

    #[test]
    fn test_analyze_with_frequencies() {
        let tokenizer = default_tokenizer();
        let frequencies = tokenizer.analyze_with_frequencies("store store soa");
        assert_eq!(frequencies.get("store"), Some(&2));
        assert_eq!(frequencies.get("soa"), Some(&1));
    }
}
