use std::fmt;

use bitvec::{prelude::*, slice::IterOnes};

/// A set of elements `0..n`, one bit per possible element.
///
/// Iteration is always in ascending order, and equality and hashing only look
/// at which elements are present, so a `BitSet` can identify a subset, e.g. as
/// a hash map key.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BitSet(BitVec);

impl BitSet {
    /// An empty set which can hold `0..n`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        BitSet(bitvec![0; n])
    }

    /// The set containing every element of `0..n`.
    #[must_use]
    pub fn full(n: usize) -> Self {
        BitSet(bitvec![1; n])
    }

    pub fn contains(&self, i: usize) -> bool {
        self.0[i]
    }

    /// Returns `true` if `i` was not already in the set.
    pub fn insert(&mut self, i: usize) -> bool {
        !self.0.replace(i, true)
    }

    /// Returns `true` if `i` was in the set.
    pub fn remove(&mut self, i: usize) -> bool {
        self.0.replace(i, false)
    }

    /// Number of elements in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.0.not_any()
    }

    pub fn union_with(&mut self, other: &BitSet) {
        debug_assert!(self.0.len() == other.0.len());
        self.0 |= other.0.as_bitslice();
    }

    pub fn intersect_with(&mut self, other: &BitSet) {
        debug_assert!(self.0.len() == other.0.len());
        self.0 &= other.0.as_bitslice();
    }

    pub fn is_disjoint(&self, other: &BitSet) -> bool {
        debug_assert!(self.0.len() == other.0.len());
        self.0.iter_ones().all(|i| !other.0[i])
    }

    /// Iterate over the elements in ascending order.
    pub fn iter(&self) -> IterOnes<'_, usize, Lsb0> {
        self.0.iter_ones()
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<usize> for BitSet {
    /// Collects into a set of `0..n`, where `n` is one past the largest element.
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let items: Vec<usize> = iter.into_iter().collect();
        let n = items.iter().max().map_or(0, |&m| m + 1);
        let mut set = BitSet::new(n);
        for i in items {
            set.insert(i);
        }
        set
    }
}

impl<'a> IntoIterator for &'a BitSet {
    type Item = usize;
    type IntoIter = IterOnes<'a, usize, Lsb0>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
