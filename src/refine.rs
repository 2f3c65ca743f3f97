//! Grouping unmatched elements with the matched structure around them, in two
//! rounds of bipartite matching.

use poset::{BitSet, PartialOrder};

use crate::matching::{bipartite_maximal_matching, Matching, Pair};

/// An unmatched element grouped with a matched pair it's comparable to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triplet {
    pub element: usize,
    pub pair: Pair,
}

/// An unmatched element grouped with a triplet it's comparable to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quartet {
    pub element: usize,
    pub triplet: Triplet,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Refinement {
    pub triplets: Vec<Triplet>,
    pub quartets: Vec<Quartet>,
}

impl Refinement {
    /// Number of elements taken out of the antichain.
    pub fn absorbed(&self) -> usize {
        self.triplets.len() + self.quartets.len()
    }
}

/// Match elements of `antichain` to the pairs of `matching` they are
/// comparable to, forming triplets. Then match the rest to the triplets,
/// forming quartets. Every grouped element is removed from `antichain`.
pub fn refine(matching: &Matching, antichain: &mut BitSet, order: &PartialOrder) -> Refinement {
    let pairs = matching.pairs();
    let left: Vec<usize> = antichain.iter().collect();
    let triplets: Vec<Triplet> =
        bipartite_maximal_matching(&left, pairs.len(), |a, m| pairs[m].touches(order, a))
            .into_iter()
            .map(|(element, m)| Triplet { element, pair: pairs[m] })
            .collect();
    for t in &triplets {
        antichain.remove(t.element);
    }

    let left: Vec<usize> = antichain.iter().collect();
    let quartets: Vec<Quartet> = bipartite_maximal_matching(&left, triplets.len(), |a, t| {
        let triplet = &triplets[t];
        order.comparable(a, triplet.element) || triplet.pair.touches(order, a)
    })
    .into_iter()
    .map(|(element, t)| Quartet { element, triplet: triplets[t] })
    .collect();
    for q in &quartets {
        antichain.remove(q.element);
    }
    Refinement { triplets, quartets }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_to_group() {
        // 0 < 1, and 2, 3, 4 incomparable to everything
        let po = PartialOrder::from_pairs(5, &[(0, 1)]).unwrap();
        let m = Matching::from_pairs(&po, &[(0, 1)]).unwrap();
        let mut a = m.unmatched(5);
        let r = refine(&m, &mut a, &po);
        assert_eq!(r, Refinement::default());
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn triplet_then_quartet() {
        // 0 < 1 is matched, 2 and 3 are both above 1
        let po = PartialOrder::from_relations(4, &[(0, 1), (1, 2), (1, 3)]).unwrap();
        let m = Matching::from_pairs(&po, &[(0, 1)]).unwrap();
        let mut a = m.unmatched(4);
        let r = refine(&m, &mut a, &po);
        let pair = Pair { low: 0, high: 1 };
        let triplet = Triplet { element: 2, pair };
        assert_eq!(r.triplets, vec![triplet]);
        assert_eq!(r.quartets, vec![Quartet { element: 3, triplet }]);
        assert!(a.is_empty());
        assert_eq!(r.absorbed(), 2);
    }

    #[test]
    fn quartet_through_triplet_element() {
        // 0 < 1 < 2 < 3 with 0 < 1 matched, 4 is isolated
        let po = PartialOrder::from_relations(5, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let m = Matching::from_pairs(&po, &[(0, 1)]).unwrap();
        let mut a = m.unmatched(5);
        let r = refine(&m, &mut a, &po);
        assert_eq!(r.triplets.len(), 1);
        assert_eq!(r.quartets.len(), 1);
        assert_eq!(a.iter().collect::<Vec<_>>(), vec![4]);
    }
}
