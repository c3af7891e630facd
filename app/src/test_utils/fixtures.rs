//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::UserEntity;

/// Create the canonical valid user
pub fn sample_user() -> UserEntity {
    UserEntity::new("SampleUser", "sample@email.com")
}

/// Create a user with specific fields
pub fn user_with(username: &str, email: &str) -> UserEntity {
    UserEntity::new(username, email)
}
