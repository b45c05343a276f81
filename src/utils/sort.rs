use std::cmp::Ordering;

/// Ranking order: higher score first, then lower document index.
///
/// Scores are compared with `total_cmp`, so the order is total and stable
/// across runs whatever the underlying storage iteration order was.
#[inline(always)]
pub fn score_desc_index_asc(a: (f64, usize), b: (f64, usize)) -> Ordering {
    b.0.total_cmp(&a.0).then_with(|| a.1.cmp(&b.1))
}

/// Vocabulary order: higher corpus frequency first, then lexical (byte) order
/// of the term.
///
/// Terms are unique within a vocabulary, so this never reports `Equal` for
/// two distinct candidates and truncation at any cap is reproducible.
#[inline(always)]
pub fn count_desc_term_asc(a: (u64, &str), b: (u64, &str)) -> Ordering {
    b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1))
}
