//! Mock implementations of port traits
//!
//! Recording doubles that count calls, letting tests assert that `save`
//! runs exactly once on success and never on failure.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::entities::UserDomainObject;
use crate::domain::ports::{Entity, EntityAdapter};

/// Entity double that counts `save` invocations instead of persisting.
pub struct RecordingEntity {
    pub username: String,
    pub email: String,
    saves: AtomicUsize,
}

impl RecordingEntity {
    pub fn new(username: &str, email: &str) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
            saves: AtomicUsize::new(0),
        }
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl Entity for RecordingEntity {
    fn save(&self) {
        self.saves.fetch_add(1, Ordering::SeqCst);
    }
}

/// Adapter double that counts adaptations while copying fields verbatim.
#[derive(Default)]
pub struct RecordingAdapter {
    adaptations: AtomicUsize,
}

impl RecordingAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn adapt_count(&self) -> usize {
        self.adaptations.load(Ordering::SeqCst)
    }
}

impl EntityAdapter<RecordingEntity> for RecordingAdapter {
    type Domain = UserDomainObject;

    fn adapt(&self, entity: &RecordingEntity) -> UserDomainObject {
        self.adaptations.fetch_add(1, Ordering::SeqCst);
        UserDomainObject::new(entity.username.clone(), entity.email.clone())
    }
}
