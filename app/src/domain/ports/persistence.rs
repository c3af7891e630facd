//! Persistence capability port

/// A record that can be persisted.
///
/// `save` has no preconditions and no error conditions; its only observable
/// effect is a confirmation event. Persistence itself is out of scope, so
/// implementations stop at that confirmation.
pub trait Entity {
    /// Persist the record, emitting a confirmation event.
    fn save(&self);
}
