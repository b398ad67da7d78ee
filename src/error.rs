use thiserror::Error;

/// Result type alias for search operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors surfaced by ingestion, configuration, and snapshot handling.
///
/// Query evaluation never errors: an empty or unmatched query yields an
/// empty result list.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("duplicate document id '{id}' in feed")]
    DuplicateDocument { id: String },

    #[error("document at feed position {position} has an empty id")]
    MissingId { position: usize },

    #[error("document '{id}' has an empty url")]
    MissingUrl { id: String },

    #[error("field weight for '{field}' must be positive, got {value}")]
    InvalidFieldWeight { field: &'static str, value: f64 },

    #[error("minimum token length must be at least 1")]
    InvalidMinTokenLength,

    #[error("unknown match mode '{mode}' (expected \"any\" or \"all\")")]
    UnknownMatchMode { mode: String },

    #[error("index snapshot decode failed: {0}")]
    Snapshot(#[from] bincode::Error),
}

impl SearchError {
    /// Ingestion-time error: the feed itself is malformed.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SearchError::DuplicateDocument { .. }
                | SearchError::MissingId { .. }
                | SearchError::MissingUrl { .. }
        )
    }

    /// Configuration error: rejected before any build runs.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SearchError::InvalidFieldWeight { .. }
                | SearchError::InvalidMinTokenLength
                | SearchError::UnknownMatchMode { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_names_offending_id() {
        let err = SearchError::DuplicateDocument {
            id: "posts/cpp".to_string(),
        };
        assert!(err.to_string().contains("posts/cpp"));
        assert!(err.is_validation());
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_weight_error_is_configuration() {
        let err = SearchError::InvalidFieldWeight {
            field: "title",
            value: -1.0,
        };
        assert!(err.is_configuration());
        assert!(!err.is_validation());
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_unknown_match_mode_message() {
        let err = SearchError::UnknownMatchMode {
            mode: "fuzzy".to_string(),
        };
        assert!(err.to_string().contains("fuzzy"));
    }
}
