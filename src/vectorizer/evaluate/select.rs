use std::{collections::HashSet, fmt};

use ahash::RandomState;
use serde::Serialize;

use crate::{
    error::{MatchError, Result},
    vectorizer::evaluate::scoring::{RankedEntry, Ranking},
};

/// Final answer to a query: at most N entries, one per label, best first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSet {
    entries: Vec<RankedEntry>,
}

impl ResultSet {
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
        self.entries.iter()
    }

    #[inline]
    pub fn first(&self) -> Option<&RankedEntry> {
        self.entries.first()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| &*entry.label)
    }

    pub fn into_entries(self) -> Vec<RankedEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a RankedEntry;
    type IntoIter = std::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, entry) in self.entries.iter().enumerate() {
            writeln!(f, "{}. {} ({:.4})", rank + 1, entry.label, entry.score)?;
        }
        Ok(())
    }
}

/// Collapse a ranking to its first `n` distinct labels.
///
/// The ranking is already sorted, so the first entry seen for a label is
/// that label's best document and nothing else needs to be searched.
/// Fewer than `n` distinct labels simply yields a shorter result.
///
/// # Errors
/// `InvalidArgument` when `n == 0`.
pub fn select_top_distinct(ranking: &[RankedEntry], n: usize) -> Result<ResultSet> {
    if n < 1 {
        return Err(MatchError::invalid_argument("top_n must be at least 1"));
    }
    let mut seen: HashSet<&str, RandomState> = HashSet::with_hasher(RandomState::new());
    let mut entries = Vec::with_capacity(n.min(ranking.len()));
    for entry in ranking {
        if seen.insert(&*entry.label) {
            entries.push(entry.clone());
            if entries.len() == n {
                break;
            }
        }
    }
    Ok(ResultSet { entries })
}

impl Ranking {
    /// See [`select_top_distinct`].
    pub fn select_top_distinct(&self, n: usize) -> Result<ResultSet> {
        select_top_distinct(&self.list, n)
    }
}
