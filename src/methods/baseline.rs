// Any linear extension ends with some maximal element, so summing over which
// maximal element comes last and counting the rest recursively gives every
// extension exactly once.

use log::debug;
use num::{BigUint, One, Zero};
use poset::{BitSet, Order, PartialOrder, Restriction};
use rustc_hash::FxHashMap;

use super::CountingMethod;
use crate::CountError;

/// Exact counting for any partial order, exponential in the number of
/// elements. Results for every suborder reached are cached by the set of
/// remaining elements.
#[derive(Clone, Copy, Debug, Default)]
pub struct Baseline;

impl Baseline {
    pub fn count_order(order: &PartialOrder) -> BigUint {
        let mut restriction = order.restrict();
        let mut memo = FxHashMap::default();
        let total = count_remaining(&mut restriction, &mut memo);
        debug!(
            "baseline counted {} elements, {} suborders cached",
            order.elements(),
            memo.len()
        );
        total
    }
}

impl CountingMethod for Baseline {
    fn count(&self, order: &PartialOrder) -> Result<BigUint, CountError> {
        Ok(Baseline::count_order(order))
    }
}

fn count_remaining(
    restriction: &mut Restriction<'_>,
    memo: &mut FxHashMap<BitSet, BigUint>,
) -> BigUint {
    if restriction.len() <= 1 {
        return BigUint::one();
    }
    if let Some(count) = memo.get(restriction.remaining()) {
        return count.clone();
    }

    let maximal: Vec<usize> = restriction.maximal().collect();
    let mut total = BigUint::zero();
    for v in maximal {
        let mut removed = restriction.remove(v);
        total += count_remaining(&mut removed, memo);
    }
    memo.insert(restriction.remaining().clone(), total.clone());
    total
}

#[cfg(test)]
mod tests {
    use num::ToPrimitive;

    use super::*;
    use crate::twins::factorial;

    fn count(po: &PartialOrder) -> u64 {
        Baseline::count_order(po).to_u64().unwrap()
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(count(&PartialOrder::antichain(0)), 1);
        assert_eq!(count(&PartialOrder::antichain(1)), 1);
    }

    #[test]
    fn chain() {
        assert_eq!(count(&PartialOrder::chain(&[4, 2, 0, 1, 3]).unwrap()), 1);
    }

    #[test]
    fn antichain() {
        for n in 0..9 {
            assert_eq!(Baseline::count_order(&PartialOrder::antichain(n)), factorial(n));
        }
    }

    #[test]
    fn one_relation() {
        // (2, 0, 1), (0, 2, 1) and (0, 1, 2)
        let po = PartialOrder::from_pairs(3, &[(0, 1)]).unwrap();
        assert_eq!(count(&po), 3);
    }

    #[test]
    fn n_shape() {
        let po = PartialOrder::from_pairs(4, &[(0, 2), (1, 2), (1, 3)]).unwrap();
        assert_eq!(count(&po), 5);
    }

    #[test]
    fn two_by_two() {
        let po = PartialOrder::from_realizer(&[0, 1, 2, 3], &[1, 0, 3, 2]).unwrap();
        assert_eq!(count(&po), 4);
    }

    #[test]
    fn three_chains_overflow_u64() {
        // Three chains of 15 elements each, 45! / (15!)^3 interleavings
        let mut pairs = Vec::new();
        for start in [0, 15, 30] {
            for i in start..(start + 14) {
                pairs.push((i, i + 1));
            }
        }
        let po = PartialOrder::from_relations(45, &pairs).unwrap();
        let total = Baseline::count_order(&po);
        assert_eq!(total.to_string(), "53494979785374631680");
        assert!(total.to_u64().is_none());
    }

    #[test]
    fn order_untouched() {
        let po = PartialOrder::from_pairs(4, &[(0, 2), (1, 2), (1, 3)]).unwrap();
        let before = po.clone();
        let mut restriction = po.restrict();
        let mut memo = FxHashMap::default();
        count_remaining(&mut restriction, &mut memo);
        assert_eq!(restriction.remaining(), &BitSet::full(4));
        assert_eq!(po, before);
    }

    #[quickcheck]
    fn extensions_are_counted(po: Vec<(u8, u8)>) -> bool {
        // Compare with brute force over all permutations of a small order
        let n = 6;
        let pairs: Vec<(usize, usize)> = po
            .into_iter()
            .map(|(a, b)| (a as usize % n, b as usize % n))
            .filter(|(a, b)| a < b)
            .collect();
        let po = PartialOrder::from_relations(n, &pairs).unwrap();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut brute = 0u64;
        permutations(&mut perm, 0, &mut |p| {
            if po.is_linear_extension(p) {
                brute += 1;
            }
        });
        count(&po) == brute
    }

    fn permutations(v: &mut Vec<usize>, k: usize, f: &mut dyn FnMut(&[usize])) {
        if k == v.len() {
            f(v);
            return;
        }
        for i in k..v.len() {
            v.swap(k, i);
            permutations(v, k + 1, f);
            v.swap(k, i);
        }
    }
}
