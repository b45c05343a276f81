use std::collections::HashMap;

use ahash::RandomState;
use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    utils::sort::count_desc_term_asc,
    vectorizer::{term::TermFrequency, tfidf::TFIDFEngine},
};

/// Per-term counts gathered over the whole corpus during build.
///
/// Built per shard with [`CorpusStats::add_document`] and combined with
/// [`CorpusStats::merge`], so document counting can run in parallel.
#[derive(Debug, Clone, Default)]
pub struct CorpusStats {
    /// term -> (document frequency, total occurrences)
    term_stats: HashMap<Box<str>, (u64, u64), RandomState>,
    doc_num: u64,
}

impl CorpusStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one document's terms.
    pub fn add_document(&mut self, freq: &TermFrequency) {
        self.doc_num += 1;
        for (term, count) in freq.iter() {
            match self.term_stats.get_mut(term) {
                Some((df, total)) => {
                    *df += 1;
                    *total += count;
                }
                None => {
                    self.term_stats.insert(term.into(), (1, count));
                }
            }
        }
    }

    /// Combine two shards.
    pub fn merge(mut self, other: CorpusStats) -> CorpusStats {
        self.doc_num += other.doc_num;
        for (term, (df, total)) in other.term_stats {
            let entry = self.term_stats.entry(term).or_insert((0, 0));
            entry.0 += df;
            entry.1 += total;
        }
        self
    }

    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Number of distinct candidate terms
    pub fn term_num(&self) -> usize {
        self.term_stats.len()
    }

    pub fn document_frequency(&self, term: &str) -> u64 {
        self.term_stats.get(term).map_or(0, |(df, _)| *df)
    }
}

/// One vocabulary entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VocabularyTerm {
    /// Number of corpus documents containing the term
    pub document_frequency: u64,
    /// Total occurrences across the corpus (the selection key)
    pub corpus_frequency: u64,
    pub idf: f64,
}

/// Frozen term -> dimension table.
///
/// Dimensions are assigned in lexical order of the retained terms.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Vocabulary {
    terms: IndexMap<Box<str>, VocabularyTerm>,
}

impl Vocabulary {
    /// Pick at most `max_size` terms from `stats` and weigh them with `E`.
    ///
    /// Candidates are ranked by corpus frequency (descending), ties by the
    /// term's byte order (ascending). Terms are unique, so the kept slice is
    /// fully determined by the corpus and the cap.
    ///
    /// Returns the vocabulary and the number of candidates cut off.
    pub fn select<E: TFIDFEngine>(stats: &CorpusStats, max_size: usize) -> (Self, usize) {
        let mut candidates: Vec<(&str, u64, u64)> = stats
            .term_stats
            .iter()
            .map(|(term, &(df, total))| (&**term, df, total))
            .collect();
        let truncated = candidates.len().saturating_sub(max_size);
        if truncated > 0 {
            candidates.sort_unstable_by(|a, b| count_desc_term_asc((a.2, a.0), (b.2, b.0)));
            candidates.truncate(max_size);
        }
        candidates.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let terms = candidates
            .into_iter()
            .map(|(term, df, total)| {
                (
                    Box::from(term),
                    VocabularyTerm {
                        document_frequency: df,
                        corpus_frequency: total,
                        idf: E::idf(stats.doc_num, df),
                    },
                )
            })
            .collect();
        (Self { terms }, truncated)
    }

    /// Dimension and entry of `term`
    #[inline]
    pub fn get_full(&self, term: &str) -> Option<(usize, &VocabularyTerm)> {
        self.terms.get_full(term).map(|(dim, _, entry)| (dim, entry))
    }

    #[inline]
    pub fn get(&self, term: &str) -> Option<&VocabularyTerm> {
        self.terms.get(term)
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Term at dimension `dim`
    #[inline]
    pub fn term(&self, dim: usize) -> Option<&str> {
        self.terms.get_index(dim).map(|(term, _)| &**term)
    }

    /// Iterate `(term, entry)` in dimension order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VocabularyTerm)> + '_ {
        self.terms.iter().map(|(term, entry)| (&**term, entry))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
