//! User entity adapter
//!
//! Converts a `UserEntity` into a `UserDomainObject`.

use crate::domain::entities::{UserDomainObject, UserEntity};
use crate::domain::ports::EntityAdapter;

/// Stateless converter from `UserEntity` to `UserDomainObject`.
///
/// Fields are copied verbatim; validation is deferred to the domain object.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserAdapter;

impl UserAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl EntityAdapter<UserEntity> for UserAdapter {
    type Domain = UserDomainObject;

    fn adapt(&self, entity: &UserEntity) -> UserDomainObject {
        tracing::info!("Adapting UserEntity to UserDomainObject.");
        UserDomainObject::new(entity.username.clone(), entity.email.clone())
    }
}
