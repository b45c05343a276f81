//! Error types for the label matcher.
//!
//! Every fallible operation returns [`MatchError`]. The first three variants are
//! raised by the retrieval core; the rest come from the CSV corpus loader.

use std::io;

use thiserror::Error;

/// The error type for building a model, querying it, and loading a corpus.
#[derive(Error, Debug)]
pub enum MatchError {
    /// `build` was called on a corpus without documents.
    /// No model is produced.
    #[error("corpus is empty: at least one document is required to build a model")]
    EmptyCorpus,

    /// The query is empty or whitespace-only after normalization,
    /// or (in strict mode) contains no vocabulary term.
    #[error("query is empty")]
    EmptyQuery,

    /// An argument is out of its valid range, e.g. `top_n == 0`.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O failure while reading a corpus.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed CSV input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV header does not contain the requested column.
    #[error("missing column: {0}")]
    MissingColumn(String),
}

/// Result type alias for operations that may fail with [`MatchError`].
pub type Result<T> = std::result::Result<T, MatchError>;

impl MatchError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        MatchError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = MatchError::invalid_argument("top_n must be at least 1");
        assert_eq!(error.to_string(), "invalid argument: top_n must be at least 1");
        assert_eq!(MatchError::EmptyQuery.to_string(), "query is empty");
        assert_eq!(
            MatchError::MissingColumn("posts".into()).to_string(),
            "missing column: posts"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "corpus.csv");
        let error = MatchError::from(io_error);
        assert!(matches!(error, MatchError::Io(_)));
    }
}
