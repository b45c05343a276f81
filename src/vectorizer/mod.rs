pub mod corpus;
pub mod evaluate;
pub mod term;
pub mod tfidf;
pub mod token;
pub mod vocabulary;

use std::{marker::PhantomData, sync::Arc, time::Instant};

use num::Float;
use rayon::prelude::*;

use crate::{
    config::MatcherConfig,
    error::{MatchError, Result},
    utils::{
        math::vector::ZeroSpVec,
        normalizer::{is_blank, normalize},
    },
    vectorizer::{
        corpus::Corpus,
        term::TermFrequency,
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
        token::{StopWords, Tokenizer},
        vocabulary::{CorpusStats, Vocabulary},
    },
};

/// Frozen TF-IDF index over a corpus.
///
/// Built once by [`VectorSpaceModel::build`] and read-only afterwards: there
/// is no method taking `&mut self`. Queries borrow it from any number of
/// threads; a rebuild produces a new instance.
///
/// `VectorSpaceModel<N, E>` has the following generic parameters:
/// - `N`: storage type of vector weights (`f32` or `f64`)
/// - `E`: TF-IDF weighting engine (e.g. `DefaultTFIDFEngine`)
#[derive(Debug)]
pub struct VectorSpaceModel<N = f32, E = DefaultTFIDFEngine>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine,
{
    vocabulary: Vocabulary,
    tokenizer: Tokenizer,
    /// Unit-length document vectors, aligned to `Document::index`
    documents: Vec<DocumentVector<N>>,
    /// Document labels, aligned to `Document::index`
    labels: Vec<Arc<str>>,
    /// Candidate terms dropped by the vocabulary cap
    truncated_terms: usize,
    _marker: PhantomData<fn() -> E>,
}

/// TF-IDF vector of one corpus document
#[derive(Debug, Clone)]
pub struct DocumentVector<N = f32>
where
    N: Float,
{
    /// L2-normalized weights; empty when `magnitude == 0`
    pub tfidf_vec: ZeroSpVec<N>,
    /// Number of (non stop word) terms in the document
    pub term_sum: u64,
    /// Length of the weight vector before normalization
    pub magnitude: f64,
}

/// Query text projected into a model's vector space
#[derive(Debug, Clone)]
pub struct QueryVector<N = f32>
where
    N: Float,
{
    /// L2-normalized weights; empty when no vocabulary term matched
    pub tfidf_vec: ZeroSpVec<N>,
    /// Distinct query terms found in the vocabulary
    pub known_terms: usize,
    /// Distinct query terms outside the vocabulary (ignored for scoring)
    pub unknown_terms: usize,
}

impl<N> QueryVector<N>
where
    N: Float,
{
    /// True when the query carries no weight at all and every document
    /// will score 0 against it.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.tfidf_vec.nnz() == 0
    }
}

impl<N, E> VectorSpaceModel<N, E>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine,
{
    /// Build the index.
    ///
    /// Every document is normalized and tokenized in parallel, document
    /// frequencies are reduced across shards, the vocabulary is selected and
    /// weighted, then each document becomes a unit TF-IDF vector.
    ///
    /// # Errors
    /// - `EmptyCorpus` when `corpus` has no document
    /// - `InvalidArgument` when `max_vocabulary_size == 0`
    pub fn build(corpus: &Corpus, max_vocabulary_size: usize, stop_words: StopWords) -> Result<Self> {
        if corpus.is_empty() {
            return Err(MatchError::EmptyCorpus);
        }
        if max_vocabulary_size == 0 {
            return Err(MatchError::invalid_argument(
                "max_vocabulary_size must be at least 1",
            ));
        }
        let start = Instant::now();
        let tokenizer = Tokenizer::new(stop_words);

        let freqs: Vec<TermFrequency> = corpus
            .documents()
            .par_iter()
            .map(|doc| tokenizer.term_frequency(&normalize(&doc.raw_text)))
            .collect();

        let stats = freqs
            .par_iter()
            .fold(CorpusStats::new, |mut stats, freq| {
                stats.add_document(freq);
                stats
            })
            .reduce(CorpusStats::new, CorpusStats::merge);

        let candidate_terms = stats.term_num();
        let (vocabulary, truncated_terms) = Vocabulary::select::<E>(&stats, max_vocabulary_size);
        if truncated_terms > 0 {
            tracing::warn!(
                candidate_terms,
                kept = vocabulary.len(),
                truncated_terms,
                "vocabulary capped; least frequent terms dropped"
            );
        }

        let documents: Vec<DocumentVector<N>> = freqs
            .par_iter()
            .map(|freq| {
                let (mut tfidf_vec, _) = Self::weigh(&vocabulary, freq);
                let magnitude = tfidf_vec.normalize_l2();
                tfidf_vec.shrink_to_fit();
                DocumentVector {
                    tfidf_vec,
                    term_sum: freq.term_sum(),
                    magnitude,
                }
            })
            .collect();

        let empty_documents = documents.iter().filter(|doc| doc.magnitude == 0.0).count();
        if empty_documents > 0 {
            tracing::debug!(empty_documents, "documents without vocabulary terms will always score 0");
        }

        let labels = corpus.iter().map(|doc| Arc::clone(&doc.label)).collect();

        tracing::info!(
            documents = corpus.len(),
            labels = corpus.label_num(),
            vocabulary = vocabulary.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "vector space model built"
        );

        Ok(Self {
            vocabulary,
            tokenizer,
            documents,
            labels,
            truncated_terms,
            _marker: PhantomData,
        })
    }

    /// Build with the vocabulary cap and stop words of `config`.
    pub fn build_with_config(corpus: &Corpus, config: &MatcherConfig) -> Result<Self> {
        Self::build(corpus, config.max_vocabulary_size, config.stop_words.clone())
    }

    /// Project `text` into the model's vector space.
    ///
    /// Unknown terms are counted but carry no weight; the vocabulary and idf
    /// table are never touched. A text made only of unknown terms (or stop
    /// words) yields a zero vector.
    ///
    /// # Errors
    /// `EmptyQuery` when the normalized text is empty or whitespace-only.
    pub fn project(&self, text: &str) -> Result<QueryVector<N>> {
        let normalized = normalize(text);
        if is_blank(&normalized) {
            return Err(MatchError::EmptyQuery);
        }
        let freq = self.tokenizer.term_frequency(&normalized);
        let (mut tfidf_vec, known_terms) = Self::weigh(&self.vocabulary, &freq);
        tfidf_vec.normalize_l2();
        Ok(QueryVector {
            tfidf_vec,
            known_terms,
            unknown_terms: freq.term_num() - known_terms,
        })
    }

    /// Raw TF x IDF vector of `freq` restricted to `vocabulary`,
    /// with the number of distinct terms that matched.
    fn weigh(vocabulary: &Vocabulary, freq: &TermFrequency) -> (ZeroSpVec<N>, usize) {
        let term_sum = freq.term_sum();
        let pairs: Vec<(u32, N)> = freq
            .iter()
            .filter_map(|(term, count)| {
                vocabulary.get_full(term).map(|(dim, entry)| {
                    let weight = E::tf(count, term_sum) * entry.idf;
                    (dim as u32, num::cast::<f64, N>(weight).unwrap_or_else(N::zero))
                })
            })
            .collect();
        let known = pairs.len();
        (ZeroSpVec::from_pairs(vocabulary.len(), pairs), known)
    }

    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[inline]
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Number of indexed documents
    #[inline]
    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn document(&self, index: usize) -> Option<&DocumentVector<N>> {
        self.documents.get(index)
    }

    #[inline]
    pub fn documents(&self) -> &[DocumentVector<N>] {
        &self.documents
    }

    #[inline]
    pub fn label(&self, index: usize) -> Option<&Arc<str>> {
        self.labels.get(index)
    }

    /// idf weight of `term`, `None` outside the vocabulary
    #[inline]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|entry| entry.idf)
    }

    #[inline]
    pub fn truncated_terms(&self) -> usize {
        self.truncated_terms
    }
}
