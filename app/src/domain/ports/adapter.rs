//! Entity-to-domain adapter port
//!
//! Adapters convert persistence-shaped records into validation-oriented
//! domain objects. Conversion is pure and total: no validation happens here,
//! bad field values pass through and are caught by `DomainObject::validate`.

use super::{DomainObject, Entity};

/// Converter from a persistence entity to its domain counterpart.
pub trait EntityAdapter<E: Entity> {
    /// The domain object this adapter produces.
    type Domain: DomainObject;

    /// Build a domain object from the entity, copying fields verbatim.
    fn adapt(&self, entity: &E) -> Self::Domain;
}
