//! Port interfaces for identity access
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations for identity lookups and writes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use profilegate_domain::{Identity, Result};

/// Trait for identity persistence and retrieval
///
/// Lookups are effect-free: recording that a record was viewed is a separate
/// step performed by the caller and persisted through [`save`].
///
/// A `find` followed by a `save` of the same id must not silently discard a
/// save made by another writer in between. Implementations compare the
/// snapshot's `version` with the stored one and reject a mismatch with
/// `ProfileError::Persistence`.
///
/// [`save`]: IdentityRepository::save
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Get an identity by ID, `None` when no such record exists
    async fn find(&self, id: i64) -> Result<Option<Identity>>;

    /// Persist the full snapshot of an existing identity
    ///
    /// Succeeds only if `identity.version` equals the stored version, and
    /// returns the snapshot as stored (with the version advanced).
    async fn save(&self, identity: Identity) -> Result<Identity>;
}

/// Wall-clock source for the viewed timestamp
pub trait Clock: Send + Sync {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Real system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
