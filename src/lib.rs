/// This crate matches free text against a labeled corpus using a TF-IDF vector space.
pub mod config;
pub mod error;
pub mod loader;
pub mod matcher;
pub mod metadata;
pub mod utils;
pub mod vectorizer;

/// Vector Space Model
/// The frozen TF-IDF index at the heart of this crate.
/// It is built once from a `Corpus` and then only read.
///
/// Internally, it holds:
/// - The vocabulary (term -> dimension, document frequency, idf)
/// - One unit-length sparse TF-IDF vector per document
/// - The label of every document
///
/// `VectorSpaceModel<N, E>` has the following generic parameters:
/// - `N`: Vector weight type (f32, f64)
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTFIDFEngine)
///
/// # Thread Safety
/// The model has no interior mutability and no `&mut self` method after
/// build, so it can be shared across threads behind an `Arc`.
pub use vectorizer::VectorSpaceModel;

/// Corpus
/// Ordered arena of labeled documents.
/// Each `Document` gets a stable index in arrival order, used as the tie-break
/// between equally scored documents.
pub use vectorizer::corpus::{Corpus, CorpusRecord, Document};

/// TF IDF Calculation Engine Trait
/// Defines the term frequency and inverse document frequency weights.
///
/// A default implementation, `DefaultTFIDFEngine`, uses raw term counts and
/// smoothed idf `ln((1 + n) / (1 + df)) + 1`.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Tokenizer and stop words
/// Word-boundary tokenizer (runs of at least two word characters) with a
/// configurable stop word set. `StopWords::english()` is the default.
pub use vectorizer::token::{StopWords, Tokenizer};

/// Ranking and result structures
/// - `Ranking`: every document scored against a query, best first
/// - `RankedEntry`: one document's index, label and score
/// - `ResultSet`: the ranking collapsed to the top N distinct labels
pub use vectorizer::evaluate::scoring::{RankedEntry, Ranking};
pub use vectorizer::evaluate::select::{select_top_distinct, ResultSet};

/// Query entry points
/// `find_similar` answers a query against an explicit model;
/// `LabelMatcher` shares a hot-swappable model between threads.
pub use matcher::{find_similar, LabelMatcher};

pub use config::MatcherConfig;
pub use error::{MatchError, Result};
pub use metadata::{LabelInfo, LabelMetadata, MbtiMetadata};
pub use utils::normalizer::normalize;
