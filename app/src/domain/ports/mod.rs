//! Domain ports (traits)
//!
//! Port traits define the capabilities the application layer orchestrates.
//! Concrete implementations live in `domain::entities` (records) and
//! `adapters` (converters).

pub mod adapter;
pub mod persistence;
pub mod validation;

pub use adapter::EntityAdapter;
pub use persistence::Entity;
pub use validation::DomainObject;
