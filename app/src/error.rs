//! Error types for the user intake pipeline
//!
//! The only fallible step in the pipeline is domain validation, so there is a
//! single error family: `ValidationError`. It is raised by
//! `UserDomainObject::validate` and consumed exactly once, in
//! `UserService::process_user`.

use thiserror::Error;

/// Domain validation errors
///
/// Variants carry the user-visible message; callers report them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Username cannot be null or empty.")]
    EmptyUsername,

    #[error("Email is not in a valid format.")]
    InvalidEmail,
}
