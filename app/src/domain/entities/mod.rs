//! Domain entities
//!
//! Concrete records for the user intake pipeline. `UserEntity` is the
//! persistence-shaped record; `UserDomainObject` is its validation-oriented
//! counterpart produced by the adapter.

pub mod user;

pub use user::{UserDomainObject, UserEntity};
