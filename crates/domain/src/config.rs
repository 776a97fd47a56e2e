//! Configuration management

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
}

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file path; `:memory:` selects the in-memory repository.
    pub path: String,
    pub pool_size: u32,
    /// JSON array of identities loaded into the store at startup. Records
    /// whose id already exists are left as they are.
    pub seed_path: Option<String>,
}

/// Options recognized by the profile update service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Emit per-request decision events at `info` instead of `debug`.
    pub verbose_logging: bool,
}

/// Tracing subscriber configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// JSON lines (production) instead of the human formatter (development).
    pub json: bool,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl DatabaseConfig {
    pub const IN_MEMORY: &'static str = ":memory:";

    pub fn is_in_memory(&self) -> bool {
        self.path == Self::IN_MEMORY
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: "127.0.0.1:8080".to_string() }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: "profilegate.db".to_string(), pool_size: 8, seed_path: None }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { json: false, filter: "info".to_string() }
    }
}
