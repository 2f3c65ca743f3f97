//! Repairing a maximal matching until no unmatched element sits strictly
//! inside a matched pair.
//!
//! A pair `(u, v)` with `u < v` is separated by an unmatched `a` if
//! `u < a < v`. The repair swaps `u` out for `a`, so the pair becomes `(a, v)`
//! and `u` becomes unmatched. Each repair strictly shrinks the interval of the
//! repaired pair and leaves the others alone, so a fixpoint is always reached
//! after at most `n²` repairs. The limit is still checked.

use log::trace;
use poset::{BitSet, PartialOrder};

use crate::{matching::Matching, CountError};

/// Find the first matched pair (by position) separated by some element of
/// `antichain`, and the smallest such element.
pub fn find_separation(
    matching: &Matching,
    antichain: &BitSet,
    order: &PartialOrder,
) -> Option<(usize, usize)> {
    matching.pairs.iter().enumerate().find_map(|(i, pair)| {
        // Elements above `low` and below `high` that are unmatched
        let mut inside = order.successors(pair.low).clone();
        inside.intersect_with(order.predecessors(pair.high));
        inside.intersect_with(antichain);
        inside.iter().next().map(|a| (i, a))
    })
}

/// Repair `matching` and `antichain` until no pair is separated. Returns the
/// number of repairs made.
///
/// Fails with [`CountError::CanonicalizationDiverged`] if more than `limit`
/// repairs would be needed. An already canonical matching is left unchanged.
pub fn canonicalize(
    matching: &mut Matching,
    antichain: &mut BitSet,
    order: &PartialOrder,
    limit: usize,
) -> Result<usize, CountError> {
    let mut repairs = 0;
    while let Some((i, a)) = find_separation(matching, antichain, order) {
        if repairs == limit {
            return Err(CountError::CanonicalizationDiverged { repairs });
        }
        let pair = &mut matching.pairs[i];
        trace!("{a} separates ({}, {}), swapping out {}", pair.low, pair.high, pair.low);
        debug_assert!(pair.separated_by(order, a));
        antichain.remove(a);
        antichain.insert(pair.low);
        pair.low = a;
        repairs += 1;
    }
    Ok(repairs)
}
