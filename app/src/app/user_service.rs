//! User intake service
//!
//! Orchestrates the adapt -> validate -> save pipeline. This is the single
//! place where a validation failure is intercepted: the error is reported
//! and returned as a terminal outcome, never re-raised.

use crate::domain::ports::{DomainObject, Entity, EntityAdapter};
use crate::error::ValidationError;

/// Terminal state of one `process_user` call.
///
/// `Saved` means the entity passed validation and its `save` ran;
/// `Failed` means validation rejected it and `save` was never reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    Saved,
    Failed(ValidationError),
}

impl ProcessOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, ProcessOutcome::Saved)
    }
}

/// Service for processing incoming user entities
pub struct UserService<A> {
    adapter: A,
}

impl<A> UserService<A> {
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }

    /// Run one entity through the pipeline.
    ///
    /// Adaptation is total and cannot fail. Validation failures are reported
    /// here and short-circuit the save step.
    pub fn process_user<E>(&self, entity: &E) -> ProcessOutcome
    where
        E: Entity,
        A: EntityAdapter<E>,
    {
        let domain_object = self.adapter.adapt(entity);

        match domain_object.validate() {
            Ok(()) => {
                entity.save();
                ProcessOutcome::Saved
            }
            Err(err) => {
                tracing::warn!("Validation failed: {}", err);
                ProcessOutcome::Failed(err)
            }
        }
    }
}
