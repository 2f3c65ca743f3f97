//! Finite strict partial orders, stored with every transitive relation
//! recorded, together with the small pieces needed to walk through their
//! suborders.
//!
//! The main type is [`PartialOrder`](partial_order::PartialOrder), an order on
//! the elements `0..n`. It can be built from
//! - a list of comparisons which is already transitively closed
//!   ([`PartialOrder::from_pairs`](partial_order::PartialOrder::from_pairs)),
//! - generating comparisons whose closure is computed
//!   ([`PartialOrder::from_relations`](partial_order::PartialOrder::from_relations)),
//! - two total orders, whose intersection is an order of dimension at most 2
//!   ([`PartialOrder::from_realizer`](partial_order::PartialOrder::from_realizer)).
//!
//! A [`Restriction`](partial_order::Restriction) is a view of the suborder
//! induced by a subset of the elements, where elements can be removed for the
//! duration of a scope and come back when the guard is dropped.

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod bitset;
mod error;
pub mod partial_order;
mod tarjan;

pub use bitset::BitSet;
pub use error::OrderError;
pub use partial_order::{PartialOrder, Removed, Restriction};

pub trait Order {
    /// The number of elements that can be in this order.
    fn elements(&self) -> usize;

    /// The number of elements currently part of this order.
    fn len(&self) -> usize;

    /// Shorthand for `self.len() == 0`
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn to_partial(self) -> PartialOrder;
}

// Every value is less than `order.len()` and appears once.
pub(crate) fn is_permutation(order: &[usize]) -> bool {
    let mut seen = vec![false; order.len()];
    for &a in order {
        if a >= order.len() || seen[a] {
            return false;
        }
        seen[a] = true;
    }
    true
}
