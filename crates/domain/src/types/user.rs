//! Identity record
//!
//! One account as stored by the repository. The service only ever reads and
//! writes complete snapshots of this struct.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity as seen by the profile service.
///
/// Serialized with camelCase keys (`id`, `name`, `phone`, `isAdmin`,
/// `lastViewedAt`, `version`); `lastViewedAt` is RFC 3339 or `null` when the
/// record has never been viewed.
///
/// `version` counts successful saves. Repositories only accept a snapshot
/// whose version matches the stored one, so a writer holding a stale copy
/// cannot overwrite a newer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub is_admin: bool,
    pub last_viewed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub version: i64,
}

impl Identity {
    /// Create a regular (non-admin) identity that has never been viewed.
    pub fn new(id: i64, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
            is_admin: false,
            last_viewed_at: None,
            version: 0,
        }
    }

    /// Builder: grant the admin privilege.
    #[must_use]
    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    /// Builder: set the last viewed timestamp.
    #[must_use]
    pub fn with_last_viewed_at(mut self, at: DateTime<Utc>) -> Self {
        self.last_viewed_at = Some(at);
        self
    }

    /// Record an authorized access at `at`.
    pub fn mark_viewed(&mut self, at: DateTime<Utc>) {
        self.last_viewed_at = Some(at);
    }

    /// The snapshot a repository stores after accepting `self`.
    #[must_use]
    pub fn next_version(mut self) -> Self {
        self.version += 1;
        self
    }
}
