use num::BigUint;
use poset::PartialOrder;

use crate::CountError;

mod baseline;
mod decomposition;

pub use baseline::Baseline;
pub use decomposition::{Decomposition, DecompositionConfig, Plan, Reduction};

/// Trait shared by every method of counting linear extensions.
pub trait CountingMethod {
    /// Count the linear extensions of `order`. The order is only read, every
    /// method works on its own copy when it needs to change it.
    fn count(&self, order: &PartialOrder) -> Result<BigUint, CountError>;
}
