//! Application context - dependency injection container

use std::sync::Arc;

use profilegate_core::{IdentityRepository, ProfileUpdateService};
use profilegate_domain::{AppConfig, Result};
use profilegate_infra::{
    load_seed_file, DbManager, InMemoryIdentityRepository, InfraError, SqliteIdentityRepository,
};
use tracing::info;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: AppConfig,
    pub service: Arc<ProfileUpdateService>,
    /// Present when identities live in SQLite; `None` for `:memory:`.
    pub db: Option<Arc<DbManager>>,
}

impl AppContext {
    /// Wire the context from configuration.
    ///
    /// `:memory:` selects the in-memory repository; any other path opens
    /// the SQLite pool and applies the schema. When `database.seed_path` is
    /// set, the listed identities are inserted unless their id already
    /// exists. Without a seed file the in-memory store starts empty.
    pub async fn new(config: AppConfig) -> Result<Self> {
        let seed = match &config.database.seed_path {
            Some(path) => load_seed_file(path)?,
            None => Vec::new(),
        };

        if config.database.is_in_memory() {
            info!("using in-memory identity store");
            let repository = InMemoryIdentityRepository::new();
            let mut inserted = 0_usize;
            for identity in seed {
                if repository.insert_if_absent(identity) {
                    inserted += 1;
                }
            }
            info!(inserted, "identity store seeded");
            return Ok(Self::with_repository(config, Arc::new(repository)));
        }

        let db = Arc::new(DbManager::new(&config.database.path, config.database.pool_size)?);
        db.run_migrations()?;
        let repository = SqliteIdentityRepository::new(Arc::clone(&db));
        let mut inserted = 0_usize;
        for identity in seed {
            if repository.insert_if_absent(identity).await? {
                inserted += 1;
            }
        }
        info!(inserted, "identity store seeded");

        let mut ctx = Self::with_repository(config, Arc::new(repository));
        ctx.db = Some(db);
        Ok(ctx)
    }

    /// Build a context around an already constructed repository.
    pub fn with_repository(config: AppConfig, repository: Arc<dyn IdentityRepository>) -> Self {
        let service = Arc::new(ProfileUpdateService::new(repository, config.service));
        Self { config, service, db: None }
    }

    /// Check that the backing store answers queries.
    pub async fn health_check(&self) -> Result<()> {
        let Some(db) = self.db.clone() else {
            return Ok(());
        };

        tokio::task::spawn_blocking(move || db.health_check())
            .await
            .map_err(InfraError::from)?
    }
}
