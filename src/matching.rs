//! Maximal matchings in the comparability graph of an order, and in the
//! bipartite graphs built from it during refinement.

use poset::{BitSet, Order, PartialOrder};

/// Two comparable elements, stored with `low < high`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pair {
    pub low: usize,
    pub high: usize,
}

impl Pair {
    /// The pair `{a, b}`, oriented by `order`. `None` if `a` and `b` are
    /// incomparable.
    pub fn new(order: &PartialOrder, a: usize, b: usize) -> Option<Self> {
        if order.lt(a, b) {
            Some(Pair { low: a, high: b })
        } else if order.lt(b, a) {
            Some(Pair { low: b, high: a })
        } else {
            None
        }
    }

    /// `x` is comparable to one of the two elements.
    pub fn touches(&self, order: &PartialOrder, x: usize) -> bool {
        order.comparable(x, self.low) || order.comparable(x, self.high)
    }

    /// `low < x < high`
    pub fn separated_by(&self, order: &PartialOrder, x: usize) -> bool {
        order.lt(self.low, x) && order.lt(x, self.high)
    }
}

/// A set of disjoint pairs of comparable elements.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Matching {
    pub(crate) pairs: Vec<Pair>,
}

impl Matching {
    /// A matching from unordered pairs. `None` if some pair is incomparable or
    /// two pairs share an element.
    pub fn from_pairs(order: &PartialOrder, pairs: &[(usize, usize)]) -> Option<Self> {
        let mut seen = BitSet::new(order.elements());
        let mut out = Vec::with_capacity(pairs.len());
        for &(a, b) in pairs {
            let pair = Pair::new(order, a, b)?;
            if !seen.insert(pair.low) || !seen.insert(pair.high) {
                return None;
            }
            out.push(pair);
        }
        Some(Matching { pairs: out })
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Every element of `0..elements` which is not in a pair.
    pub fn unmatched(&self, elements: usize) -> BitSet {
        let mut out = BitSet::full(elements);
        for p in &self.pairs {
            out.remove(p.low);
            out.remove(p.high);
        }
        out
    }

    /// No pair of comparable unmatched elements is left.
    pub fn is_maximal(&self, order: &PartialOrder) -> bool {
        let free = self.unmatched(order.elements());
        free.iter().all(|a| order.successors(a).is_disjoint(&free))
    }
}

/// A maximal matching of the comparability graph of `order`.
///
/// Elements are visited in ascending order, and each unmatched element is
/// paired with its first unmatched neighbour.
pub fn maximal_matching(order: &PartialOrder) -> Matching {
    let mut free = BitSet::full(order.elements());
    let mut pairs = Vec::new();
    for a in 0..order.elements() {
        if !free.contains(a) {
            continue;
        }
        let mut candidates = order.neighbourhood(a);
        candidates.intersect_with(&free);
        if let Some(b) = candidates.iter().next() {
            free.remove(a);
            free.remove(b);
            pairs.extend(Pair::new(order, a, b));
        }
    }
    let matching = Matching { pairs };
    debug_assert!(matching.is_maximal(order));
    matching
}

/// A maximal matching of the bipartite graph between `left` and `0..right`,
/// where `adjacent(l, r)` decides whether `l` and `r` are joined.
///
/// Returns the matched `(l, r)`, in the order of `left`.
pub fn bipartite_maximal_matching<F>(left: &[usize], right: usize, adjacent: F) -> Vec<(usize, usize)>
where
    F: Fn(usize, usize) -> bool,
{
    let mut used = vec![false; right];
    let mut out = Vec::new();
    for &l in left {
        if let Some(r) = (0..right).find(|&r| !used[r] && adjacent(l, r)) {
            used[r] = true;
            out.push((l, r));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_order() {
        let po = PartialOrder::antichain(0);
        assert!(maximal_matching(&po).is_empty());
    }

    #[test]
    fn antichain_unmatched() {
        let po = PartialOrder::antichain(4);
        let m = maximal_matching(&po);
        assert!(m.is_empty());
        assert_eq!(m.unmatched(4), BitSet::full(4));
    }

    #[test]
    fn chain_pairs_up() {
        let po = PartialOrder::chain(&[0, 1, 2, 3, 4]).unwrap();
        let m = maximal_matching(&po);
        assert_eq!(m.pairs(), &[Pair { low: 0, high: 1 }, Pair { low: 2, high: 3 }]);
        assert_eq!(m.unmatched(5).iter().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn pairs_are_oriented() {
        let po = PartialOrder::chain(&[3, 2, 1, 0]).unwrap();
        let m = maximal_matching(&po);
        assert_eq!(m.pairs(), &[Pair { low: 1, high: 0 }, Pair { low: 3, high: 2 }]);
    }

    #[test]
    fn from_pairs_checks() {
        let po = PartialOrder::from_pairs(3, &[(0, 1), (0, 2)]).unwrap();
        assert!(Matching::from_pairs(&po, &[(1, 0)]).is_some());
        assert!(Matching::from_pairs(&po, &[(1, 2)]).is_none());
        assert!(Matching::from_pairs(&po, &[(0, 1), (0, 2)]).is_none());
        assert!(!Matching::from_pairs(&po, &[]).unwrap().is_maximal(&po));
    }

    #[test]
    fn bipartite_greedy() {
        // 10 only fits 0, 11 fits 0 and 1
        let adj = |l: usize, r: usize| matches!((l, r), (10, 0) | (11, 0) | (11, 1));
        assert_eq!(bipartite_maximal_matching(&[10, 11], 2, adj), vec![(10, 0), (11, 1)]);
        assert_eq!(bipartite_maximal_matching(&[11, 10], 2, adj), vec![(11, 0)]);
        assert!(bipartite_maximal_matching(&[], 2, adj).is_empty());
    }

    #[quickcheck]
    fn greedy_is_maximal(relations: Vec<(u8, u8)>) -> bool {
        let n = 12;
        let pairs: Vec<(usize, usize)> = relations
            .into_iter()
            .map(|(a, b)| (a as usize % n, b as usize % n))
            .filter(|(a, b)| a < b)
            .collect();
        let po = PartialOrder::from_relations(n, &pairs).unwrap();
        let m = maximal_matching(&po);
        m.is_maximal(&po) && m.len() * 2 + m.unmatched(n).len() == n
    }
}
