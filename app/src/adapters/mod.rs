//! Adapter implementations
//!
//! Concrete implementations of the `EntityAdapter` port.

pub mod user;

pub use user::UserAdapter;
