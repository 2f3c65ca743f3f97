use poset::OrderError;
use thiserror::Error;

/// The ways counting can fail. Counting never returns a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountError {
    /// Canonicalizing the matching did not reach a fixpoint within the repair
    /// limit
    #[error("matching canonicalization did not reach a fixpoint after {repairs} repairs")]
    CanonicalizationDiverged { repairs: usize },
    /// Fixing the order of twin elements broke the order
    #[error(transparent)]
    Order(#[from] OrderError),
}
