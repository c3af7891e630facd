//! Shared test utilities
//!
//! Fixtures create records with sensible defaults; mocks record calls so
//! tests can verify pipeline behavior.

pub mod fixtures;
pub mod mocks;

pub use fixtures::{sample_user, user_with};
pub use mocks::{RecordingAdapter, RecordingEntity};
