/// TF-IDF weighting strategy.
///
/// Plugged into `VectorSpaceModel<N, E>`; the same engine weighs corpus
/// documents at build time and queries at projection time.
pub trait TFIDFEngine {
    /// Term frequency weight of a term occurring `count` times in a
    /// document of `term_sum` terms.
    fn tf(count: u64, term_sum: u64) -> f64;

    /// Inverse document frequency of a term found in `doc_freq` of
    /// `doc_num` documents.
    fn idf(doc_num: u64, doc_freq: u64) -> f64;
}

/// Default engine
/// - tf: raw occurrence count
/// - idf: smoothed, `ln((1 + n) / (1 + df)) + 1`
///
/// The `+ 1` keeps terms present in every document from vanishing, and the
/// smoothing behaves as if one extra document contained every term, so idf is
/// always `>= 1` and finite.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl TFIDFEngine for DefaultTFIDFEngine {
    #[inline]
    fn tf(count: u64, _term_sum: u64) -> f64 {
        count as f64
    }

    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothed_idf_values() {
        // term in every document
        assert!((DefaultTFIDFEngine::idf(3, 3) - 1.0).abs() < 1e-12);
        // term in one of three documents
        let expected = (4.0_f64 / 2.0).ln() + 1.0;
        assert!((DefaultTFIDFEngine::idf(3, 1) - expected).abs() < 1e-12);
        // rarer terms weigh more
        assert!(DefaultTFIDFEngine::idf(10, 1) > DefaultTFIDFEngine::idf(10, 5));
    }

    #[test]
    fn tf_is_raw_count() {
        assert_eq!(DefaultTFIDFEngine::tf(3, 100), 3.0);
        assert_eq!(DefaultTFIDFEngine::tf(0, 100), 0.0);
    }
}
