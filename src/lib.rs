//! This is a crate for counting the linear extensions of finite partial
//! orders, i.e. the number of ways to list the elements so that every element
//! comes after everything smaller than it.
//!
//! There are two methods:
//! - [`Baseline`](methods::Baseline) works for every order, in time
//!   exponential in the number of elements.
//! - [`Decomposition`](methods::Decomposition) is meant for orders of
//!   dimension 2. It shrinks the order using matchings of its comparability
//!   graph and collapses classes of twins before calling the baseline.
//!
//! Both give the same count for every order.
//!
//! Example usage:
//! ```
//! use linext::poset::PartialOrder;
//!
//! // 0 < 1, and 2 is incomparable to both
//! let order = PartialOrder::from_pairs(3, &[(0, 1)]).unwrap();
//! assert_eq!(linext::count_baseline(&order).to_string(), "3");
//! assert_eq!(linext::count_decomposition(&order, true).unwrap().to_string(), "3");
//!
//! // The intersection of two total orders has dimension 2
//! let order = PartialOrder::from_realizer(&[0, 1, 2, 3], &[1, 0, 3, 2]).unwrap();
//! assert_eq!(linext::count_decomposition(&order, false).unwrap().to_string(), "4");
//! ```
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod canonical;
mod error;
pub mod matching;
pub mod methods;
pub mod refine;
pub mod twins;

pub use error::CountError;
use methods::{Baseline, Decomposition, DecompositionConfig};
use num::BigUint;
pub use poset;
use poset::PartialOrder;

/// Commonly used traits
pub mod prelude {
    pub use super::methods::CountingMethod;
    pub use poset::Order;
}

/// Number of linear extensions of `order`, using the exact exponential method.
pub fn count_baseline(order: &PartialOrder) -> BigUint {
    Baseline::count_order(order)
}

/// Number of linear extensions of `order`, shrinking it first.
/// `use_refinement` turns the triplet and quartet rounds on or off, which
/// never changes the result.
pub fn count_decomposition(order: &PartialOrder, use_refinement: bool) -> Result<BigUint, CountError> {
    count_decomposition_with(order, &DecompositionConfig::new().refinement(use_refinement))
}

/// Number of linear extensions of `order`, shrinking it first as set up by
/// `config`.
pub fn count_decomposition_with(
    order: &PartialOrder,
    config: &DecompositionConfig,
) -> Result<BigUint, CountError> {
    Decomposition::new(config.clone()).count_order(order)
}
