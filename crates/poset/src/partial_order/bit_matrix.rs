use crate::BitSet;

/// Square boolean matrix where row `i` is stored as the set of columns `j`
/// with `(i, j)` set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct BitMatrix {
    pub(crate) dim: usize,
    rows: Vec<BitSet>,
}

impl BitMatrix {
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self { dim, rows: vec![BitSet::new(dim); dim] }
    }

    pub fn get(&self, i: usize, j: usize) -> bool {
        self.rows[i].contains(j)
    }

    pub fn set(&mut self, i: usize, j: usize) {
        self.rows[i].insert(j);
    }

    pub fn row(&self, i: usize) -> &BitSet {
        &self.rows[i]
    }

    /// `row(dst) |= row(src)`
    pub fn or_row(&mut self, dst: usize, src: usize) {
        if dst == src {
            return;
        }
        let source = self.rows[src].clone();
        self.rows[dst].union_with(&source);
    }

    pub fn or_row_with(&mut self, dst: usize, other: &BitSet) {
        self.rows[dst].union_with(other);
    }

    pub fn and_mut(&mut self, other: &Self) {
        assert!(self.dim == other.dim);
        for (a, b) in self.rows.iter_mut().zip(&other.rows) {
            a.intersect_with(b);
        }
    }

    /// The transpose, `(j, i)` is set if and only if `(i, j)` is.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut t = BitMatrix::new(self.dim);
        for (i, row) in self.rows.iter().enumerate() {
            for j in row {
                t.set(j, i);
            }
        }
        t
    }

    /// Place `other` as a block after the current one, without any entries
    /// between the two blocks.
    #[must_use]
    pub fn block_diagonal(&self, other: &Self) -> Self {
        let dim = self.dim + other.dim;
        let mut out = BitMatrix::new(dim);
        for i in 0..self.dim {
            for j in self.row(i) {
                out.set(i, j);
            }
        }
        for i in 0..other.dim {
            for j in other.row(i) {
                out.set(self.dim + i, self.dim + j);
            }
        }
        out
    }

    /// Number of set entries.
    pub fn count(&self) -> usize {
        self.rows.iter().map(BitSet::len).sum()
    }

    /// Warshall's algorithm, one row union per pair.
    pub fn close_transitively(&mut self) {
        for k in 0..self.dim {
            for i in 0..self.dim {
                if self.get(i, k) {
                    self.or_row(i, k);
                }
            }
        }
    }

    /// Find `(a, b, c)` with `(a, b)` and `(b, c)` set but not `(a, c)`.
    pub fn intransitive_triple(&self) -> Option<(usize, usize, usize)> {
        for a in 0..self.dim {
            for b in self.row(a) {
                if let Some(c) = self.row(b).iter().find(|&c| !self.get(a, c)) {
                    return Some((a, b, c));
                }
            }
        }
        None
    }
}
