//! Counting orders of dimension 2 by first shrinking them.
//!
//! When a maximal matching of the comparability graph covers less than two
//! thirds of the elements, many elements are left unmatched. The matching is
//! canonicalized, optionally refined into triplets and quartets, and whatever
//! is still unmatched is split into classes of twins. Every class is put in a
//! fixed order, and the baseline counts what's left.

use log::debug;
use num::BigUint;
use poset::{BitSet, Order, PartialOrder};

use super::{Baseline, CountingMethod};
use crate::{
    canonical::canonicalize,
    matching::{maximal_matching, Matching},
    refine::{refine, Refinement},
    twins::{collapse, twin_classes},
    CountError,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecompositionConfig {
    /// Run the triplet and quartet rounds before collapsing twins
    pub refinement: bool,
    /// Most repairs allowed while canonicalizing the matching. `None` picks a
    /// limit from the number of elements.
    pub repair_limit: Option<usize>,
}

impl Default for DecompositionConfig {
    fn default() -> Self {
        DecompositionConfig { refinement: true, repair_limit: None }
    }
}

impl DecompositionConfig {
    /// Refinement on, repair limit picked from the size of the order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn the triplet and quartet rounds on or off.
    pub fn refinement(mut self, refinement: bool) -> Self {
        self.refinement = refinement;
        self
    }

    /// Fail with [`CountError::CanonicalizationDiverged`] after more than
    /// `limit` repairs.
    pub fn repair_limit(mut self, limit: usize) -> Self {
        self.repair_limit = Some(limit);
        self
    }

    fn limit_for(&self, elements: usize) -> usize {
        self.repair_limit.unwrap_or(elements * elements + elements + 16)
    }
}

/// The shrunk order and what it took to get there.
#[derive(Clone, Debug)]
pub struct Reduction {
    /// The canonical matching
    pub matching: Matching,
    pub repairs: usize,
    pub refinement: Option<Refinement>,
    /// Unmatched elements left after refinement
    pub residual: BitSet,
    /// Twin classes of `residual`, in the original order
    pub classes: Vec<Vec<usize>>,
    /// Product of `k!` over the twin classes
    pub multiplier: BigUint,
    /// The original order with every twin class chained
    pub reduced: PartialOrder,
}

/// How [`Decomposition`] counts a given order.
#[derive(Clone, Debug)]
pub enum Plan {
    /// The matching covers at least two thirds of the elements, so the
    /// baseline counts the whole order
    Direct(Matching),
    Reduced(Reduction),
}

// |M| / n >= 1/3
pub(crate) fn large_matching(matched: usize, elements: usize) -> bool {
    3 * matched >= elements
}

/// Counting specialised to orders of dimension 2. Correct for any order, but
/// only faster than [`Baseline`] when the order has large sets of twins.
#[derive(Clone, Debug, Default)]
pub struct Decomposition {
    config: DecompositionConfig,
}

impl Decomposition {
    pub fn new(config: DecompositionConfig) -> Self {
        Decomposition { config }
    }

    /// Decide how to count `order`, and build the reduced order if it's
    /// worth it.
    pub fn plan(&self, order: &PartialOrder) -> Result<Plan, CountError> {
        let n = order.elements();
        let mut matching = maximal_matching(order);
        if large_matching(matching.len(), n) {
            debug!("matching of {} pairs on {n} elements is large, counting directly", matching.len());
            return Ok(Plan::Direct(matching));
        }
        debug!("matching of {} pairs on {n} elements is small, reducing", matching.len());

        let mut residual = matching.unmatched(n);
        let repairs = canonicalize(&mut matching, &mut residual, order, self.config.limit_for(n))?;
        debug!("canonical matching after {repairs} repairs");

        let refinement = self.config.refinement.then(|| refine(&matching, &mut residual, order));
        if let Some(r) = &refinement {
            debug!(
                "{} triplets and {} quartets absorbed {} unmatched elements",
                r.triplets.len(),
                r.quartets.len(),
                r.absorbed()
            );
        }

        let classes = twin_classes(&residual, order);
        let mut reduced = order.clone();
        let multiplier = collapse(&classes, &mut reduced)?;
        debug!(
            "{} residual elements in {} twin classes, multiplier {multiplier}",
            residual.len(),
            classes.len()
        );
        Ok(Plan::Reduced(Reduction {
            matching,
            repairs,
            refinement,
            residual,
            classes,
            multiplier,
            reduced,
        }))
    }

    pub fn count_order(&self, order: &PartialOrder) -> Result<BigUint, CountError> {
        match self.plan(order)? {
            Plan::Direct(_) => Ok(Baseline::count_order(order)),
            Plan::Reduced(reduction) => {
                Ok(reduction.multiplier * Baseline::count_order(&reduction.reduced))
            }
        }
    }
}

impl CountingMethod for Decomposition {
    fn count(&self, order: &PartialOrder) -> Result<BigUint, CountError> {
        self.count_order(order)
    }
}
