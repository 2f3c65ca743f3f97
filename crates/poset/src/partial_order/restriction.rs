use std::ops::{Deref, DerefMut};

use super::PartialOrder;
use crate::{BitSet, Order};

/// The suborder of a [`PartialOrder`] induced by its remaining elements.
///
/// The underlying order is never modified. Elements are taken out either for
/// the lifetime of a [`Removed`] guard, or for good with
/// [`Restriction::discard`].
#[derive(Debug, Clone)]
pub struct Restriction<'a> {
    order: &'a PartialOrder,
    remaining: BitSet,
}

impl<'a> Restriction<'a> {
    pub fn new(order: &'a PartialOrder) -> Self {
        Restriction { order, remaining: BitSet::full(order.elements()) }
    }

    /// The elements still part of this suborder.
    pub fn remaining(&self) -> &BitSet {
        &self.remaining
    }

    pub fn contains(&self, v: usize) -> bool {
        self.remaining.contains(v)
    }

    /// `v` is remaining, and no remaining element is larger than it.
    pub fn is_maximal(&self, v: usize) -> bool {
        self.contains(v) && self.order.successors(v).is_disjoint(&self.remaining)
    }

    /// Every maximal element of the suborder, in ascending order.
    pub fn maximal(&self) -> impl Iterator<Item = usize> + '_ {
        self.remaining.iter().filter(|&v| self.is_maximal(v))
    }

    /// Take `v` out of the suborder until the returned guard is dropped.
    ///
    /// # Panics
    ///
    /// If `v` is not remaining.
    pub fn remove(&mut self, v: usize) -> Removed<'_, 'a> {
        assert!(self.remaining.remove(v), "element {v} already removed");
        Removed { restriction: self, element: v }
    }

    /// Take `v` out of the suborder permanently.
    pub fn discard(&mut self, v: usize) {
        assert!(self.remaining.remove(v), "element {v} already removed");
    }
}

impl Order for Restriction<'_> {
    fn elements(&self) -> usize {
        self.order.elements()
    }

    fn len(&self) -> usize {
        self.remaining.len()
    }

    /// The induced suborder on its own, with the remaining elements renumbered
    /// `0..len()` in ascending order.
    fn to_partial(self) -> PartialOrder {
        let kept: Vec<usize> = self.remaining.iter().collect();
        let mut index = vec![usize::MAX; self.elements()];
        for (i, &v) in kept.iter().enumerate() {
            index[v] = i;
        }
        let mut pairs = Vec::new();
        for &a in &kept {
            for b in self.order.successors(a) {
                if self.remaining.contains(b) {
                    pairs.push((index[a], index[b]));
                }
            }
        }
        let mut po = PartialOrder::antichain(kept.len());
        for (a, b) in pairs {
            po.above.set(a, b);
            po.below.set(b, a);
        }
        debug_assert!(po.valid());
        po
    }
}

/// Guard returned by [`Restriction::remove`]. Derefs to the restriction with
/// the element taken out, and puts the element back when dropped.
pub struct Removed<'r, 'a> {
    restriction: &'r mut Restriction<'a>,
    element: usize,
}

impl<'a> Deref for Removed<'_, 'a> {
    type Target = Restriction<'a>;

    fn deref(&self) -> &Self::Target {
        self.restriction
    }
}

impl<'a> DerefMut for Removed<'_, 'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.restriction
    }
}

impl Drop for Removed<'_, '_> {
    fn drop(&mut self) {
        let restored = self.restriction.remaining.insert(self.element);
        debug_assert!(restored);
    }
}
