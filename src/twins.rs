//! Collapsing twins: elements with the same comparabilities are
//! interchangeable in every linear extension, so a class of `k` twins can be
//! put in one fixed order if the count is multiplied by `k!`.

use log::debug;
use num::{BigUint, One};
use poset::{BitSet, PartialOrder};
use rustc_hash::FxHashMap;

use crate::CountError;

/// `k!`
pub fn factorial(k: usize) -> BigUint {
    (2..=k).fold(BigUint::one(), |acc, i| acc * i)
}

/// Partition `candidates` by neighbourhood in `order`. Classes are sorted
/// internally, and listed by their smallest element.
pub fn twin_classes(candidates: &BitSet, order: &PartialOrder) -> Vec<Vec<usize>> {
    let mut by_signature: FxHashMap<BitSet, Vec<usize>> = FxHashMap::default();
    for v in candidates {
        by_signature.entry(order.neighbourhood(v)).or_default().push(v);
    }
    let mut classes: Vec<Vec<usize>> = by_signature.into_values().collect();
    classes.sort_unstable_by_key(|c| c[0]);
    classes
}

/// Chain every class of twins in ascending order, adding the relations to
/// `order`. Returns the product of `k!` over the classes.
///
/// The classes have to come from [`twin_classes`] on the same order, before
/// any of them were chained.
pub fn collapse(classes: &[Vec<usize>], order: &mut PartialOrder) -> Result<BigUint, CountError> {
    let mut multiplier = BigUint::one();
    for class in classes.iter().filter(|c| c.len() > 1) {
        debug!("chaining {} twins starting at {}", class.len(), class[0]);
        multiplier *= factorial(class.len());
        order.add_chain(class)?;
    }
    Ok(multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use poset::Order;

    #[test]
    fn factorials() {
        assert_eq!(factorial(0), BigUint::one());
        assert_eq!(factorial(1), BigUint::one());
        assert_eq!(factorial(5), BigUint::from(120u32));
        assert_eq!(factorial(25).to_string(), "15511210043330985984000000");
    }

    #[test]
    fn classes_by_neighbourhood() {
        // 0 < 2, 0 < 3, 1 < 4. 2 and 3 are twins, and so are the isolated 5 and 6.
        let po = PartialOrder::from_pairs(7, &[(0, 2), (0, 3), (1, 4)]).unwrap();
        let classes = twin_classes(&BitSet::full(7), &po);
        assert_eq!(classes, vec![vec![0], vec![1], vec![2, 3], vec![4], vec![5, 6]]);
    }

    #[test]
    fn classes_of_subset() {
        let po = PartialOrder::antichain(6);
        let candidates: BitSet = [1, 4, 5].into_iter().collect();
        assert_eq!(twin_classes(&candidates, &po), vec![vec![1, 4, 5]]);
    }

    #[test]
    fn collapse_chains_classes() {
        let mut po = PartialOrder::from_pairs(7, &[(0, 2), (0, 3), (1, 4)]).unwrap();
        let classes = twin_classes(&BitSet::full(7), &po);
        let multiplier = collapse(&classes, &mut po).unwrap();
        assert_eq!(multiplier, BigUint::from(4u32));
        assert!(po.lt(2, 3));
        assert!(po.lt(5, 6));
        assert!(!po.comparable(3, 5));
        assert_eq!(po.elements(), 7);
        assert_eq!(po.comparabilities(), 5);
    }
}
