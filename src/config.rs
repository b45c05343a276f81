//! Defaults and runtime configuration for the matcher.

use serde::Deserialize;

use crate::error::{MatchError, Result};
use crate::vectorizer::token::StopWords;

/// Maximum number of terms kept in the vocabulary.
///
/// When more candidate terms exist, the most frequent ones survive
/// (ties broken by lexical order).
pub const DEFAULT_MAX_VOCABULARY_SIZE: usize = 10_000;

/// Number of distinct labels returned by a query when the caller does not ask
/// for a specific count.
pub const DEFAULT_TOP_N: usize = 5;

/// Separator between individual posts inside one corpus record.
pub const MULTI_POST_DELIMITER: &str = "|||";

/// Default CSV column holding the label.
pub const DEFAULT_LABEL_COLUMN: &str = "type";

/// Default CSV column holding the document text.
pub const DEFAULT_TEXT_COLUMN: &str = "posts";

/// Matcher configuration.
///
/// Every field has a default, so a partial TOML/JSON document deserializes
/// into a complete config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Vocabulary cap applied at build time.
    pub max_vocabulary_size: usize,
    /// Terms discarded before vocabulary selection and at query time.
    pub stop_words: StopWords,
    /// Result count used by `find_similar_default`.
    pub top_n: usize,
    /// Reject queries that contain no vocabulary term with `EmptyQuery`
    /// instead of scoring them as a zero vector.
    pub reject_unknown_queries: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_vocabulary_size: DEFAULT_MAX_VOCABULARY_SIZE,
            stop_words: StopWords::english(),
            top_n: DEFAULT_TOP_N,
            reject_unknown_queries: false,
        }
    }
}

impl MatcherConfig {
    pub fn with_max_vocabulary_size(mut self, size: usize) -> Self {
        self.max_vocabulary_size = size;
        self
    }

    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_reject_unknown_queries(mut self, reject: bool) -> Self {
        self.reject_unknown_queries = reject;
        self
    }

    /// Check the values that cannot be validated by the type system.
    pub fn validate(&self) -> Result<()> {
        if self.max_vocabulary_size == 0 {
            return Err(MatchError::invalid_argument(
                "max_vocabulary_size must be at least 1",
            ));
        }
        if self.top_n == 0 {
            return Err(MatchError::invalid_argument("top_n must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = MatcherConfig::default();
        assert_eq!(config.max_vocabulary_size, 10_000);
        assert_eq!(config.top_n, 5);
        assert!(!config.reject_unknown_queries);
        assert!(config.stop_words.contains("the"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_values_are_rejected() {
        let config = MatcherConfig::default().with_top_n(0);
        assert!(matches!(config.validate(), Err(MatchError::InvalidArgument(_))));

        let config = MatcherConfig::default().with_max_vocabulary_size(0);
        assert!(matches!(config.validate(), Err(MatchError::InvalidArgument(_))));
    }
}
