//! Validation capability port

use crate::error::ValidationError;

/// A business record that can validate its own field invariants.
pub trait DomainObject {
    /// Check field invariants, in a fixed order.
    ///
    /// Returns the first violation found; later rules are not evaluated.
    fn validate(&self) -> Result<(), ValidationError>;
}
