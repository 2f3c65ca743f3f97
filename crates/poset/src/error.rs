use thiserror::Error;

/// Reasons a relation is rejected as a strict partial order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// An element identifier is not in `0..elements`
    #[error("element {element} is out of range for an order on {elements} elements")]
    OutOfRange { element: usize, elements: usize },
    /// `a < a` was given
    #[error("element {0} is related to itself")]
    Reflexive(usize),
    /// The elements lie on a common cycle of the relation
    #[error("the relation contains a cycle through {0:?}")]
    Cycle(Vec<usize>),
    /// `a < b` and `b < c` are recorded, but not `a < c`
    #[error("the relation is not transitive: {a} < {b} < {c} but not {a} < {c}")]
    NotTransitive { a: usize, b: usize, c: usize },
    /// A total order was not a permutation of `0..len`
    #[error("total order is not a permutation of its elements")]
    NotPermutation,
    /// Two orders combined over different element sets
    #[error("orders have different numbers of elements ({left} and {right})")]
    ElementMismatch { left: usize, right: usize },
}
