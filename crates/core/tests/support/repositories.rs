//! Mock repository implementations for testing
//!
//! Provides an in-memory `IdentityRepository` that records lookups and saves,
//! enabling deterministic service tests without database dependencies.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use profilegate_core::IdentityRepository;
use profilegate_domain::{Identity, ProfileError, Result as DomainResult};

/// In-memory mock for `IdentityRepository`.
///
/// Stores identities by id and keeps a log of every `find` and `save` call.
/// The save log holds snapshots as submitted; the store holds them with the
/// version advanced. Version conflicts are not simulated here.
#[derive(Default)]
pub struct RecordingIdentityRepository {
    records: Mutex<HashMap<i64, Identity>>,
    finds: Mutex<Vec<i64>>,
    saves: Mutex<Vec<Identity>>,
    fail_saves: AtomicBool,
}

impl RecordingIdentityRepository {
    /// Create a new mock seeded with the provided identities.
    pub fn new(identities: impl IntoIterator<Item = Identity>) -> Self {
        let repo = Self::default();
        repo.records.lock().extend(identities.into_iter().map(|identity| (identity.id, identity)));
        repo
    }

    /// Make every subsequent `save` fail with a persistence error.
    pub fn failing_saves(self) -> Self {
        self.fail_saves.store(true, Ordering::SeqCst);
        self
    }

    /// Current stored snapshot for `id`.
    pub fn stored(&self, id: i64) -> Option<Identity> {
        self.records.lock().get(&id).cloned()
    }

    /// Ids passed to `find`, in call order.
    pub fn find_calls(&self) -> Vec<i64> {
        self.finds.lock().clone()
    }

    /// Snapshots passed to `save`, in call order.
    pub fn saved(&self) -> Vec<Identity> {
        self.saves.lock().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.lock().len()
    }
}

#[async_trait]
impl IdentityRepository for RecordingIdentityRepository {
    async fn find(&self, id: i64) -> DomainResult<Option<Identity>> {
        self.finds.lock().push(id);
        Ok(self.records.lock().get(&id).cloned())
    }

    async fn save(&self, identity: Identity) -> DomainResult<Identity> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(ProfileError::Persistence("disk full".into()));
        }
        self.saves.lock().push(identity.clone());
        let stored = identity.next_version();
        self.records.lock().insert(stored.id, stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_records_lookup() {
        let repo = RecordingIdentityRepository::new([Identity::new(1, "Ann", "70000000000")]);

        let found = repo.find(1).await.unwrap();
        let missing = repo.find(2).await.unwrap();

        assert_eq!(found.map(|i| i.name), Some("Ann".to_string()));
        assert!(missing.is_none());
        assert_eq!(repo.find_calls(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_failing_saves_leave_store_untouched() {
        let repo = RecordingIdentityRepository::new([Identity::new(1, "Ann", "70000000000")])
            .failing_saves();

        let result = repo.save(Identity::new(1, "Bob", "70000000000")).await;

        assert!(matches!(result, Err(ProfileError::Persistence(_))));
        assert_eq!(repo.stored(1).unwrap().name, "Ann");
        assert_eq!(repo.save_count(), 0);
    }
}
