use std::cmp::Ordering;

use num::Float;

use super::ZeroSpVec;

impl<N> ZeroSpVec<N>
where
    N: Float + Into<f64>,
{
    /// Sparse dot product
    /// Only dimensions present in both vectors contribute,
    /// found with a single merge walk over the sorted indices.
    ///
    /// Accumulates in `f64` whatever `N` is.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );

        let mut a_it = self.raw_iter();
        let mut b_it = other.raw_iter();
        let mut a_next = a_it.next();
        let mut b_next = b_it.next();
        let mut sum = 0_f64;
        while let (Some((ia, va)), Some((ib, vb))) = (a_next, b_next) {
            match ia.cmp(&ib) {
                Ordering::Equal => {
                    let va: f64 = (*va).into();
                    let vb: f64 = (*vb).into();
                    sum += va * vb;
                    a_next = a_it.next();
                    b_next = b_it.next();
                }
                Ordering::Less => a_next = a_it.next(),
                Ordering::Greater => b_next = b_it.next(),
            }
        }
        sum
    }

    /// Euclidean (L2) norm
    #[inline]
    pub fn norm(&self) -> f64 {
        self.raw_iter()
            .map(|(_, v)| {
                let v: f64 = (*v).into();
                v * v
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Scale the vector to unit length in place and return the norm it had.
    ///
    /// A vector of zero (or non-finite) magnitude is cleared instead, so it
    /// scores 0 against everything rather than producing NaN.
    pub fn normalize_l2(&mut self) -> f64 {
        let norm = self.norm();
        if norm == 0.0 || !norm.is_finite() {
            self.clear();
            return 0.0;
        }
        let inv = 1.0 / norm;
        for val in self.vals_mut() {
            let scaled = (*val).into() * inv;
            *val = num::cast::<f64, N>(scaled).unwrap_or_else(N::zero);
        }
        norm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn dot_uses_only_shared_dimensions() {
        let a: ZeroSpVec<f64> = ZeroSpVec::from_pairs(6, vec![(0, 1.0), (2, 2.0), (5, 3.0)]);
        let b: ZeroSpVec<f64> = ZeroSpVec::from_pairs(6, vec![(1, 4.0), (2, 0.5), (5, 2.0)]);
        assert!(approx(a.dot(&b), 2.0 * 0.5 + 3.0 * 2.0));
        assert!(approx(b.dot(&a), a.dot(&b)));
    }

    #[test]
    fn dot_with_empty_is_zero() {
        let a: ZeroSpVec<f32> = ZeroSpVec::from_pairs(3, vec![(0, 1.0)]);
        let b: ZeroSpVec<f32> = ZeroSpVec::zeros(3);
        assert_eq!(a.dot(&b), 0.0);
    }

    #[test]
    fn normalize_produces_unit_length() {
        let mut a: ZeroSpVec<f32> = ZeroSpVec::from_pairs(4, vec![(0, 3.0), (3, 4.0)]);
        let norm = a.normalize_l2();
        assert!(approx(norm, 5.0));
        assert!(approx(a.norm(), 1.0));
        assert!(approx(a.dot(&a), 1.0));
        assert!(approx((*a.get(0).unwrap()).into(), 0.6));
    }

    #[test]
    fn normalize_zero_vector_stays_empty() {
        let mut a: ZeroSpVec<f64> = ZeroSpVec::zeros(4);
        assert_eq!(a.normalize_l2(), 0.0);
        assert_eq!(a.nnz(), 0);
        assert_eq!(a.len(), 4);
    }
}
