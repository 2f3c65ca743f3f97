use crate::{is_permutation, tarjan::find_cycle, BitSet, Order, OrderError};

mod bit_matrix;
mod restriction;

pub(crate) use bit_matrix::BitMatrix;
pub use restriction::{Removed, Restriction};

/// A strict partial order on the elements `0..elements()`.
///
/// The relation is always transitively closed: if `a < b` and `b < c` are
/// recorded then so is `a < c`. Constructors reject anything that isn't a
/// strict partial order, and the only mutation, [`PartialOrder::set`], keeps
/// the closure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialOrder {
    // above.get(a, b) is `true` if a < b
    above: BitMatrix,
    // below.get(b, a) is `true` if a < b
    below: BitMatrix,
}

fn check(matrix: &BitMatrix) -> Result<(), OrderError> {
    if let Some(a) = (0..matrix.dim).find(|&a| matrix.get(a, a)) {
        return Err(OrderError::Reflexive(a));
    }
    if let Some(cycle) = find_cycle(matrix) {
        return Err(OrderError::Cycle(cycle));
    }
    if let Some((a, b, c)) = matrix.intransitive_triple() {
        return Err(OrderError::NotTransitive { a, b, c });
    }
    Ok(())
}

fn relation_matrix(elements: usize, pairs: &[(usize, usize)]) -> Result<BitMatrix, OrderError> {
    let mut matrix = BitMatrix::new(elements);
    for &(a, b) in pairs {
        for element in [a, b] {
            if element >= elements {
                return Err(OrderError::OutOfRange { element, elements });
            }
        }
        if a == b {
            return Err(OrderError::Reflexive(a));
        }
        matrix.set(a, b);
    }
    Ok(matrix)
}

impl PartialOrder {
    pub(crate) fn valid(&self) -> bool {
        check(&self.above).is_ok() && self.below == self.above.transpose()
    }

    fn from_matrix(above: BitMatrix) -> Self {
        let below = above.transpose();
        let po = Self { above, below };
        debug_assert!(po.valid());
        po
    }

    /// `n` elements without any relations.
    pub fn antichain(n: usize) -> Self {
        Self { above: BitMatrix::new(n), below: BitMatrix::new(n) }
    }

    /// The total order where `order[i] < order[j]` for every `i < j`.
    /// `order` has to be a permutation of `0..order.len()`.
    pub fn chain(order: &[usize]) -> Result<Self, OrderError> {
        if !is_permutation(order) {
            return Err(OrderError::NotPermutation);
        }
        let mut matrix = BitMatrix::new(order.len());
        for (i, &a) in order.iter().enumerate() {
            for &b in &order[i + 1..] {
                matrix.set(a, b);
            }
        }
        Ok(Self::from_matrix(matrix))
    }

    /// An order where `a < b` for every `(a, b)` in `pairs`, and nothing else.
    ///
    /// The pairs have to already be transitively closed, otherwise
    /// [`OrderError::NotTransitive`] is returned. Use
    /// [`PartialOrder::from_relations`] to compute the closure instead.
    pub fn from_pairs(elements: usize, pairs: &[(usize, usize)]) -> Result<Self, OrderError> {
        let matrix = relation_matrix(elements, pairs)?;
        check(&matrix)?;
        Ok(Self::from_matrix(matrix))
    }

    /// The smallest order where `a < b` for every `(a, b)` in `pairs`.
    pub fn from_relations(elements: usize, pairs: &[(usize, usize)]) -> Result<Self, OrderError> {
        let mut matrix = relation_matrix(elements, pairs)?;
        if let Some(cycle) = find_cycle(&matrix) {
            return Err(OrderError::Cycle(cycle));
        }
        matrix.close_transitively();
        Ok(Self::from_matrix(matrix))
    }

    /// The order of dimension at most 2 realized by two total orders: `a < b`
    /// if and only if `a` comes before `b` in both `first` and `second`.
    pub fn from_realizer(first: &[usize], second: &[usize]) -> Result<Self, OrderError> {
        Self::combine(&Self::chain(first)?, &Self::chain(second)?)
    }

    /// The intersection of two orders on the same elements.
    pub fn combine(po1: &Self, po2: &Self) -> Result<Self, OrderError> {
        let mut po3 = po1.clone();
        po3.and_mut(po2)?;
        Ok(po3)
    }

    /// Keep only the relations which are also in `other`.
    pub fn and_mut(&mut self, other: &Self) -> Result<(), OrderError> {
        if self.elements() != other.elements() {
            return Err(OrderError::ElementMismatch {
                left: self.elements(),
                right: other.elements(),
            });
        }
        self.above.and_mut(&other.above);
        self.below.and_mut(&other.below);
        debug_assert!(self.valid());
        Ok(())
    }

    /// `p` and `q` side by side with no relations between them. The elements
    /// of `q` are shifted to come after those of `p`.
    #[must_use]
    pub fn disjoint_union(p: &Self, q: &Self) -> Self {
        Self { above: p.above.block_diagonal(&q.above), below: p.below.block_diagonal(&q.below) }
    }

    /// Returns true if and only if `a < b`.
    #[must_use]
    pub fn lt(&self, a: usize, b: usize) -> bool {
        assert!(a < self.elements() && b < self.elements());
        self.above.get(a, b)
    }

    /// Returns true if `a < b` or `b < a`.
    #[must_use]
    pub fn comparable(&self, a: usize, b: usize) -> bool {
        self.lt(a, b) || self.lt(b, a)
    }

    /// Every `b` with `a < b`.
    pub fn successors(&self, a: usize) -> &BitSet {
        self.above.row(a)
    }

    /// Every `a` with `a < b`.
    pub fn predecessors(&self, b: usize) -> &BitSet {
        self.below.row(b)
    }

    /// Every element comparable to `a`.
    pub fn neighbourhood(&self, a: usize) -> BitSet {
        let mut out = self.successors(a).clone();
        out.union_with(self.predecessors(a));
        out
    }

    /// Number of pairs `a < b`.
    pub fn comparabilities(&self) -> usize {
        self.above.count()
    }

    /// Set `i < j` and any transitive relations.
    pub fn set(&mut self, i: usize, j: usize) -> Result<(), OrderError> {
        let elements = self.elements();
        for element in [i, j] {
            if element >= elements {
                return Err(OrderError::OutOfRange { element, elements });
            }
        }
        if i == j {
            return Err(OrderError::Reflexive(i));
        }
        if self.lt(j, i) {
            return Err(OrderError::Cycle(vec![i.min(j), i.max(j)]));
        }
        // Already done?
        if self.lt(i, j) {
            return Ok(());
        }

        // Everything at or below `i` is now below everything at or above `j`.
        let mut lower = self.predecessors(i).clone();
        lower.insert(i);
        let mut upper = self.successors(j).clone();
        upper.insert(j);
        for p in &lower {
            self.above.or_row_with(p, &upper);
        }
        for s in &upper {
            self.below.or_row_with(s, &lower);
        }
        debug_assert!(self.valid());
        Ok(())
    }

    /// Set `chain[0] < chain[1] < ...` and any transitive relations.
    pub fn add_chain(&mut self, chain: &[usize]) -> Result<(), OrderError> {
        for w in chain.windows(2) {
            self.set(w[0], w[1])?;
        }
        Ok(())
    }

    /// A view of the whole order, from which elements can be removed.
    pub fn restrict(&self) -> Restriction<'_> {
        Restriction::new(self)
    }

    /// Returns true if `order` lists every element once, and never lists an
    /// element before a smaller one.
    pub fn is_linear_extension(&self, order: &[usize]) -> bool {
        if order.len() != self.elements() || !is_permutation(order) {
            return false;
        }
        order.iter().enumerate().all(|(i, &b)| order[i + 1..].iter().all(|&a| !self.lt(a, b)))
    }
}

impl Order for PartialOrder {
    fn elements(&self) -> usize {
        self.above.dim
    }

    fn len(&self) -> usize {
        self.above.dim
    }

    fn to_partial(self) -> PartialOrder {
        self
    }
}
