use std::collections::HashMap;

use ahash::RandomState;

/// TermFrequency struct
/// Counts how many times each term occurs in one document.
///
/// # Examples
/// ```
/// use tf_idf_label_matcher::vectorizer::term::TermFrequency;
/// let mut term_freq = TermFrequency::new();
/// term_freq.add_term("term1");
/// term_freq.add_term("term2");
/// term_freq.add_term("term1");
///
/// assert_eq!(term_freq.term_count("term1"), 2);
/// assert_eq!(term_freq.term_sum(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TermFrequency {
    term_count: HashMap<Box<str>, u64, RandomState>,
    total_term_count: u64,
}

impl TermFrequency {
    /// Create a new TermFrequency
    pub fn new() -> Self {
        TermFrequency {
            term_count: HashMap::with_hasher(RandomState::new()),
            total_term_count: 0,
        }
    }

    /// Add a term
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        match self.term_count.get_mut(term) {
            Some(count) => *count += 1,
            None => {
                self.term_count.insert(term.into(), 1);
            }
        }
        self.total_term_count += 1;
        self
    }

    /// Add multiple terms
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// Occurrences of `term`, 0 when absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Total number of terms added
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    /// Iterate `(term, count)` in unspecified order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.term_count.iter().map(|(term, &count)| (&**term, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_totals() {
        let mut freq = TermFrequency::new();
        freq.add_terms(&["rust", "fast", "rust"]).add_term("safe");
        assert_eq!(freq.term_count("rust"), 2);
        assert_eq!(freq.term_count("missing"), 0);
        assert_eq!(freq.term_sum(), 4);
        assert_eq!(freq.term_num(), 3);

        let mut items: Vec<(&str, u64)> = freq.iter().collect();
        items.sort();
        assert_eq!(items, vec![("fast", 1), ("rust", 2), ("safe", 1)]);
    }

    #[test]
    fn empty_frequency() {
        let freq = TermFrequency::new();
        assert!(freq.is_empty());
        assert_eq!(freq.term_sum(), 0);
    }
}
