//! In-memory identity store
//!
//! Used when the database path is `:memory:` and by tests that want real
//! repository semantics without a file. The version check and the write
//! happen under one write lock, so of two saves built from the same snapshot
//! only the first lands.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use profilegate_core::IdentityRepository;
use profilegate_domain::{Identity, ProfileError, Result as DomainResult};

/// `IdentityRepository` backed by a `HashMap`
#[derive(Debug, Default)]
pub struct InMemoryIdentityRepository {
    records: RwLock<HashMap<i64, Identity>>,
}

impl InMemoryIdentityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `identities`.
    pub fn with_identities(identities: impl IntoIterator<Item = Identity>) -> Self {
        let repo = Self::new();
        for identity in identities {
            repo.insert(identity);
        }
        repo
    }

    /// Insert or replace a record directly.
    pub fn insert(&self, identity: Identity) {
        self.records.write().insert(identity.id, identity);
    }

    /// Insert a record unless its id is already present.
    ///
    /// Returns `true` if the record was inserted.
    pub fn insert_if_absent(&self, identity: Identity) -> bool {
        let mut records = self.records.write();
        if records.contains_key(&identity.id) {
            return false;
        }
        records.insert(identity.id, identity);
        true
    }

    /// Snapshot of the stored record, bypassing the async port.
    pub fn get(&self, id: i64) -> Option<Identity> {
        self.records.read().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn find(&self, id: i64) -> DomainResult<Option<Identity>> {
        Ok(self.get(id))
    }

    async fn save(&self, identity: Identity) -> DomainResult<Identity> {
        let mut records = self.records.write();
        let Some(slot) = records.get_mut(&identity.id) else {
            return Err(ProfileError::Persistence(format!(
                "identity {} does not exist",
                identity.id
            )));
        };

        if slot.version != identity.version {
            return Err(ProfileError::Persistence(format!(
                "identity {} was modified concurrently (expected version {}, found {})",
                identity.id, identity.version, slot.version
            )));
        }

        *slot = identity.next_version();
        Ok(slot.clone())
    }
}
