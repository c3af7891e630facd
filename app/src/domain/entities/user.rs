//! User records
//!
//! Two structurally identical but semantically distinct records:
//! `UserEntity` represents the persisted shape, `UserDomainObject` the
//! business shape with field invariants. Keeping them separate lets
//! persistence and validation evolve independently; the `UserAdapter`
//! bridges the two.

use serde::{Deserialize, Serialize};

use crate::domain::ports::{DomainObject, Entity};
use crate::error::ValidationError;

/// A persisted user record
///
/// No invariants are enforced at construction; validation happens on the
/// domain side after adaptation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntity {
    pub username: String,
    pub email: String,
}

impl UserEntity {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}

impl Entity for UserEntity {
    fn save(&self) {
        tracing::info!("User entity saved.");
    }
}

/// A validated business user
///
/// After a successful `validate`, the username is non-empty and the email
/// contains an `'@'`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDomainObject {
    pub username: String,
    pub email: String,
}

impl UserDomainObject {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }

    fn validate_username(&self) -> Result<(), ValidationError> {
        if self.username.is_empty() {
            return Err(ValidationError::EmptyUsername);
        }
        Ok(())
    }

    fn validate_email(&self) -> Result<(), ValidationError> {
        // Deliberately weak rule: presence of '@' only.
        if self.email.is_empty() || !self.email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

impl DomainObject for UserDomainObject {
    /// Username is checked before email, so when both fields are invalid the
    /// reported error is always `EmptyUsername`.
    fn validate(&self) -> Result<(), ValidationError> {
        self.validate_username()?;
        self.validate_email()?;
        tracing::info!("User domain object validated.");
        Ok(())
    }
}
