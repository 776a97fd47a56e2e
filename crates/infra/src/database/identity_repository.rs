//! Identity repository implementation using SQLite
//!
//! Every statement binds its values as parameters; ids and payload strings
//! are never spliced into SQL text.
//!
//! `save` is a compare-and-swap on the `version` column: the UPDATE only
//! matches the row the caller read, so a save built from a stale snapshot
//! changes nothing and is reported as a conflict.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use profilegate_core::IdentityRepository;
use profilegate_domain::{Identity, ProfileError, Result as DomainResult};
use rusqlite::{params, OptionalExtension, Row};
use tokio::task;

use super::manager::{DbConnection, DbManager};
use crate::errors::InfraError;

/// SQLite-backed implementation of `IdentityRepository`
pub struct SqliteIdentityRepository {
    db: Arc<DbManager>,
}

impl SqliteIdentityRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    /// Insert a new identity record.
    ///
    /// Record creation belongs to the storage layer, so this lives on the
    /// adapter rather than the port.
    pub async fn insert(&self, identity: Identity) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            insert_identity(&conn, &identity)
        })
        .await
        .map_err(InfraError::from)?
    }

    /// Insert a record unless its id is already present.
    ///
    /// Returns `true` if the record was inserted.
    pub async fn insert_if_absent(&self, identity: Identity) -> DomainResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<bool> {
            let conn = db.get_connection()?;
            let inserted = conn
                .execute(
                    "INSERT OR IGNORE INTO identities (id, name, phone, is_admin, last_viewed_at, version)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    params![
                        identity.id,
                        identity.name,
                        identity.phone,
                        identity.is_admin,
                        identity.last_viewed_at.map(|at| at.timestamp_millis()),
                        identity.version,
                    ],
                )
                .map_err(InfraError::from)?;
            Ok(inserted > 0)
        })
        .await
        .map_err(InfraError::from)?
    }
}

#[async_trait]
impl IdentityRepository for SqliteIdentityRepository {
    async fn find(&self, id: i64) -> DomainResult<Option<Identity>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Option<Identity>> {
            let conn = db.get_connection()?;

            let identity = conn
                .query_row(
                    "SELECT id, name, phone, is_admin, last_viewed_at, version
                     FROM identities WHERE id = ?1",
                    params![id],
                    map_identity_row,
                )
                .optional()
                .map_err(InfraError::from)?;

            Ok(identity)
        })
        .await
        .map_err(InfraError::from)?
    }

    async fn save(&self, identity: Identity) -> DomainResult<Identity> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Identity> {
            let conn = db.get_connection()?;
            update_identity(&conn, &identity)
        })
        .await
        .map_err(InfraError::from)?
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Map a row to an Identity
fn map_identity_row(row: &Row<'_>) -> rusqlite::Result<Identity> {
    Ok(Identity {
        id: row.get(0)?,
        name: row.get(1)?,
        phone: row.get(2)?,
        is_admin: row.get(3)?,
        last_viewed_at: row.get::<_, Option<i64>>(4)?.and_then(DateTime::<Utc>::from_timestamp_millis),
        version: row.get(5)?,
    })
}

fn insert_identity(conn: &DbConnection, identity: &Identity) -> DomainResult<()> {
    conn.execute(
        "INSERT INTO identities (id, name, phone, is_admin, last_viewed_at, version)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            identity.id,
            identity.name,
            identity.phone,
            identity.is_admin,
            identity.last_viewed_at.map(|at| at.timestamp_millis()),
            identity.version,
        ],
    )
    .map_err(InfraError::from)?;

    Ok(())
}

/// Overwrite the full snapshot of an existing record, if it is still at the
/// version the snapshot was read at.
fn update_identity(conn: &DbConnection, identity: &Identity) -> DomainResult<Identity> {
    let changed = conn
        .execute(
            "UPDATE identities SET
                name = ?1, phone = ?2, is_admin = ?3, last_viewed_at = ?4, version = version + 1
             WHERE id = ?5 AND version = ?6",
            params![
                identity.name,
                identity.phone,
                identity.is_admin,
                identity.last_viewed_at.map(|at| at.timestamp_millis()),
                identity.id,      // WHERE clause
                identity.version, // WHERE clause
            ],
        )
        .map_err(InfraError::from)?;

    if changed == 0 {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM identities WHERE id = ?1)",
                params![identity.id],
                |row| row.get(0),
            )
            .map_err(InfraError::from)?;

        return Err(ProfileError::Persistence(if exists {
            format!(
                "identity {} was modified concurrently (expected version {})",
                identity.id, identity.version
            )
        } else {
            format!("identity {} does not exist", identity.id)
        }));
    }
    Ok(identity.clone().next_version())
}

// =============================================================================
// Tests
// =============================================================================
