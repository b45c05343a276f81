use std::{fmt::Debug, sync::Arc};

use num::Float;
use rayon::prelude::*;
use serde::Serialize;

use crate::{
    error::Result,
    utils::sort::score_desc_index_asc,
    vectorizer::{tfidf::TFIDFEngine, QueryVector, VectorSpaceModel},
};

/// One scored document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub document_index: usize,
    pub label: Arc<str>,
    /// Cosine similarity, within `[0, 1]`
    pub score: f64,
}

/// Full ranking of a query against every indexed document.
///
/// One entry per document, duplicate labels and zero scores included,
/// sorted by descending score with ascending document index breaking ties.
#[derive(Clone, PartialEq)]
pub struct Ranking {
    pub list: Vec<RankedEntry>,
}

impl Ranking {
    /// Sort `list` into ranking order.
    pub fn new(mut list: Vec<RankedEntry>) -> Self {
        list.sort_by(|a, b| {
            score_desc_index_asc((a.score, a.document_index), (b.score, b.document_index))
        });
        Ranking { list }
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
        self.list.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl Debug for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            writeln!(f, "Ranking [")?;
            for entry in &self.list {
                writeln!(
                    f,
                    "    #{} {:?}: {:.6}",
                    entry.document_index, entry.label, entry.score
                )?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl<N, E> VectorSpaceModel<N, E>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine,
{
    /// Score `query` against every document.
    ///
    /// Both sides are unit vectors, so cosine similarity is the sparse dot
    /// product. A zero vector on either side scores exactly 0.
    /// Rounding may push a dot product slightly outside `[0, 1]`; scores are
    /// clamped back.
    pub fn rank(&self, query: &QueryVector<N>) -> Ranking {
        let list: Vec<RankedEntry> = self
            .documents
            .par_iter()
            .zip(self.labels.par_iter())
            .enumerate()
            .map(|(document_index, (doc, label))| {
                let score = if query.is_zero() || doc.tfidf_vec.nnz() == 0 {
                    0.0
                } else {
                    query.tfidf_vec.dot(&doc.tfidf_vec).clamp(0.0, 1.0)
                };
                RankedEntry {
                    document_index,
                    label: Arc::clone(label),
                    score,
                }
            })
            .collect();
        Ranking::new(list)
    }

    /// Project `text` and rank it in one call.
    pub fn similarity(&self, text: &str) -> Result<Ranking> {
        let query = self.project(text)?;
        Ok(self.rank(&query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::{corpus::Corpus, token::StopWords};

    fn model() -> VectorSpaceModel {
        let corpus: Corpus = vec![
            ("A", "dogs and cats"),
            ("B", "dogs only"),
            ("A", "unrelated text about cars"),
        ]
        .into_iter()
        .collect();
        VectorSpaceModel::build(&corpus, 10_000, StopWords::english()).unwrap()
    }

    #[test]
    fn covers_every_document_in_score_order() {
        let model = model();
        let ranking = model.similarity("dogs").unwrap();
        assert_eq!(ranking.len(), 3);
        let order: Vec<usize> = ranking.iter().map(|e| e.document_index).collect();
        assert_eq!(order, vec![1, 0, 2]);
        assert!((ranking.list[0].score - 1.0).abs() < 1e-6);
        assert!(ranking.list[1].score > 0.0 && ranking.list[1].score < 1.0);
        assert_eq!(ranking.list[2].score, 0.0);
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        let model = model();
        for text in ["dogs", "cats cars", "dogs dogs dogs text", "unrelated text about cars", "zzz"] {
            for entry in model.similarity(text).unwrap().iter() {
                assert!((0.0..=1.0).contains(&entry.score), "{text}: {}", entry.score);
                assert!(!entry.score.is_nan());
            }
        }
    }

    #[test]
    fn zero_query_scores_zero_and_keeps_index_order() {
        let model = model();
        let ranking = model.similarity("zebras").unwrap();
        let order: Vec<usize> = ranking.iter().map(|e| e.document_index).collect();
        assert_eq!(order, vec![0, 1, 2]);
        assert!(ranking.iter().all(|e| e.score == 0.0));
    }

    #[test]
    fn ties_break_by_document_index() {
        let corpus: Corpus = vec![("X", "identical phrasing"), ("Y", "different content"), ("Z", "identical phrasing")]
            .into_iter()
            .collect();
        let model: VectorSpaceModel =
            VectorSpaceModel::build(&corpus, 100, StopWords::english()).unwrap();
        let ranking = model.similarity("identical phrasing").unwrap();
        let order: Vec<usize> = ranking.iter().map(|e| e.document_index).collect();
        assert_eq!(order, vec![0, 2, 1]);
        assert_eq!(ranking.list[0].score, ranking.list[1].score);
    }

    #[test]
    fn self_match_tops_its_label() {
        let model = model();
        let ranking = model.similarity("unrelated text about cars").unwrap();
        assert_eq!(ranking.list[0].document_index, 2);
        assert_eq!(&*ranking.list[0].label, "A");
        assert!((ranking.list[0].score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn ranking_is_deterministic() {
        let model = model();
        let a = model.similarity("dogs cats").unwrap();
        let b = model.similarity("dogs cats").unwrap();
        assert_eq!(a, b);
        assert_eq!(format!("{:#?}", a), format!("{:#?}", b));
    }
}
