//! Contract generation seam.
//!
//! Contracts can be produced by anything that looks at a dataset profile: a
//! deterministic rule-of-thumb suggester, or an external AI-assistance service.
//! The evaluator does not care which; it only consumes the resulting [`Contract`].

use crate::{Contract, DatasetProfile, Result};

/// Produces a contract from a dataset profile.
///
/// # Example
///
/// ```rust
/// use dq_core::{Contract, ContractGenerator, DatasetProfile, Result};
///
/// struct EmptyGenerator;
///
/// impl ContractGenerator for EmptyGenerator {
///     fn generate(&self, _profile: &DatasetProfile) -> Result<Contract> {
///         Ok(Contract::empty())
///     }
/// }
///
/// let contract = EmptyGenerator.generate(&DatasetProfile::default()).unwrap();
/// assert!(contract.is_empty());
/// ```
pub trait ContractGenerator: Send + Sync {
    /// Generates a contract for the profiled dataset.
    fn generate(&self, profile: &DatasetProfile) -> Result<Contract>;

    /// Short name used in logs.
    fn name(&self) -> &str {
        "generator"
    }
}
