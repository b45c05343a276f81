pub mod math;

use std::fmt::{self, Debug};

use num::Num;

/// ZeroSpVec is a sparse vector that treats zero elements as absent.
/// It keeps `inds` and `vals` side by side:
/// `inds` holds the dimension of each non-zero element,
/// `vals` holds its value.
///
/// Elements are guaranteed to be sorted by ascending `inds`, which lets two
/// vectors be combined with a single merge walk.
#[derive(Clone, PartialEq)]
pub struct ZeroSpVec<N = f32>
where
    N: Num,
{
    inds: Vec<u32>,
    vals: Vec<N>,
    len: usize,
}

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    /// Empty vector of dimension 0
    #[inline]
    pub fn new() -> Self {
        ZeroSpVec {
            inds: Vec::new(),
            vals: Vec::new(),
            len: 0,
        }
    }

    /// All-zero vector of dimension `len`
    #[inline]
    pub fn zeros(len: usize) -> Self {
        ZeroSpVec {
            inds: Vec::new(),
            vals: Vec::new(),
            len,
        }
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        ZeroSpVec {
            inds: Vec::with_capacity(cap),
            vals: Vec::with_capacity(cap),
            len: 0,
        }
    }

    /// Build a vector of dimension `len` from `(dimension, value)` pairs
    /// in any order.
    /// Zero values and dimensions `>= len` are dropped.
    /// Pairs sharing a dimension are summed.
    pub fn from_pairs<I>(len: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (u32, N)>,
    {
        let mut pairs: Vec<(u32, N)> = pairs
            .into_iter()
            .filter(|(ind, val)| (*ind as usize) < len && !val.is_zero())
            .collect();
        pairs.sort_unstable_by_key(|(ind, _)| *ind);

        let mut vec = Self::with_capacity(pairs.len());
        vec.len = len;
        for (ind, val) in pairs {
            match vec.inds.last() {
                Some(&last) if last == ind => {
                    if let Some(acc) = vec.vals.last_mut() {
                        *acc = *acc + val;
                    }
                }
                _ => {
                    vec.inds.push(ind);
                    vec.vals.push(val);
                }
            }
        }
        vec
    }

    /// Append one dense element, growing the dimension by 1.
    /// Zero is not stored.
    #[inline]
    pub fn push(&mut self, elem: N) {
        if !elem.is_zero() {
            self.inds.push(self.len as u32);
            self.vals.push(elem);
        }
        self.len += 1;
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&N> {
        if index >= self.len {
            return None;
        }
        match self.inds.binary_search(&(index as u32)) {
            Ok(pos) => self.vals.get(pos),
            Err(_) => None,
        }
    }

    /// Iterate over non-zero elements as `(dimension, value)` in ascending order
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, &N)> + '_ {
        self.inds
            .iter()
            .map(|&ind| ind as usize)
            .zip(self.vals.iter())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Dimension of the vector
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of non-zero elements
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    /// Drop every stored element, keeping the dimension.
    #[inline]
    pub fn clear(&mut self) {
        self.inds.clear();
        self.vals.clear();
    }

    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.inds.shrink_to_fit();
        self.vals.shrink_to_fit();
    }

    #[inline]
    fn vals_mut(&mut self) -> &mut [N] {
        &mut self.vals
    }
}

impl<N> Default for ZeroSpVec<N>
where
    N: Num + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Debug for ZeroSpVec<N>
where
    N: Num + Copy + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "ZeroSpVec(len: {}, nnz: {}) [", self.len, self.nnz())?;
            for (ind, val) in self.raw_iter() {
                writeln!(f, "    {}: {:?}", ind, val)?;
            }
            write!(f, "]")
        } else {
            f.debug_map().entries(self.raw_iter()).finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_skips_zero_elements() {
        let mut vec: ZeroSpVec<f32> = ZeroSpVec::new();
        vec.push(0.0);
        vec.push(1.5);
        vec.push(0.0);
        vec.push(2.0);
        assert_eq!(vec.len(), 4);
        assert_eq!(vec.nnz(), 2);
        assert_eq!(vec.get(1), Some(&1.5));
        assert_eq!(vec.get(0), None);
        assert_eq!(vec.get(4), None);
    }

    #[test]
    fn from_pairs_sorts_merges_and_bounds() {
        let vec: ZeroSpVec<f64> =
            ZeroSpVec::from_pairs(5, vec![(3, 1.0), (1, 2.0), (3, 0.5), (9, 7.0), (2, 0.0)]);
        let items: Vec<(usize, f64)> = vec.raw_iter().map(|(i, v)| (i, *v)).collect();
        assert_eq!(items, vec![(1, 2.0), (3, 1.5)]);
        assert_eq!(vec.len(), 5);
    }

    #[test]
    fn zeros_has_dimension_but_no_elements() {
        let vec: ZeroSpVec<f32> = ZeroSpVec::zeros(10);
        assert_eq!(vec.len(), 10);
        assert_eq!(vec.nnz(), 0);
        assert!(vec.raw_iter().next().is_none());
    }
}
