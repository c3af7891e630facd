//! Application layer
//!
//! Contains use cases and service orchestration.

pub mod user_service;

pub use user_service::{ProcessOutcome, UserService};
