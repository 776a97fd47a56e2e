//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `PROFILEGATE_DB_PATH` is unset, falls back to a config file
//! 3. If no config file exists either, uses built-in defaults
//!
//! ## Environment Variables
//! - `PROFILEGATE_DB_PATH`: Database file path, or `:memory:` (required)
//! - `PROFILEGATE_DB_POOL_SIZE`: Connection pool size
//! - `PROFILEGATE_DB_SEED_PATH`: JSON file of identities loaded at startup
//! - `PROFILEGATE_BIND_ADDR`: HTTP listen address
//! - `PROFILEGATE_VERBOSE_LOGGING`: Service decision events at info (true/false)
//! - `PROFILEGATE_LOG_JSON`: JSON log lines (true/false)
//! - `PROFILEGATE_LOG_FILTER`: Default `EnvFilter` directive
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./profilegate.toml` or `./profilegate.json`
//! 2. `./config.toml` or `./config.json`
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use profilegate_domain::{AppConfig, ProfileError, Result};

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `ProfileError::Config` if an environment value or a found config
/// file is invalid.
pub fn load() -> Result<AppConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) if std::env::var_os("PROFILEGATE_DB_PATH").is_some() => Err(e),
        Err(e) => {
            tracing::debug!(error = %e, "Environment incomplete, trying file");
            match probe_config_paths() {
                Some(path) => load_from_file(Some(path)),
                None => {
                    tracing::info!("No configuration found, using defaults");
                    Ok(AppConfig::default())
                }
            }
        }
    }
}

/// Load configuration from environment variables
///
/// `PROFILEGATE_DB_PATH` must be present; every other variable falls back to
/// its default.
///
/// # Errors
/// Returns `ProfileError::Config` if the required variable is missing or a
/// value does not parse.
pub fn load_from_env() -> Result<AppConfig> {
    let defaults = AppConfig::default();
    let mut config = defaults.clone();

    config.database.path = env_var("PROFILEGATE_DB_PATH")?;
    if let Ok(raw) = std::env::var("PROFILEGATE_DB_POOL_SIZE") {
        config.database.pool_size = raw
            .parse::<u32>()
            .map_err(|e| ProfileError::Config(format!("Invalid pool size: {e}")))?;
    }
    config.database.seed_path = std::env::var("PROFILEGATE_DB_SEED_PATH").ok();
    if let Ok(addr) = std::env::var("PROFILEGATE_BIND_ADDR") {
        config.server.bind_addr = addr;
    }
    config.service.verbose_logging =
        env_bool("PROFILEGATE_VERBOSE_LOGGING", defaults.service.verbose_logging);
    config.logging.json = env_bool("PROFILEGATE_LOG_JSON", defaults.logging.json);
    if let Ok(filter) = std::env::var("PROFILEGATE_LOG_FILTER") {
        config.logging.filter = filter;
    }

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Supports JSON and
/// TOML (detected by file extension). Missing sections take their defaults.
///
/// # Errors
/// Returns `ProfileError::Config` if the file is missing, unreadable, or
/// malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<AppConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ProfileError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ProfileError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ProfileError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<AppConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ProfileError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ProfileError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(ProfileError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    const NAMES: [&str; 4] = ["profilegate.toml", "profilegate.json", "config.toml", "config.json"];

    let mut dirs = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
        dirs.push(exe_dir);
    }

    dirs.iter().flat_map(|dir| NAMES.iter().map(move |name| dir.join(name))).find(|p| p.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| ProfileError::Config(format!("Missing required environment variable: {key}")))
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use tempfile::TempDir;

    use super::*;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const VARS: [&str; 7] = [
        "PROFILEGATE_DB_PATH",
        "PROFILEGATE_DB_POOL_SIZE",
        "PROFILEGATE_DB_SEED_PATH",
        "PROFILEGATE_BIND_ADDR",
        "PROFILEGATE_VERBOSE_LOGGING",
        "PROFILEGATE_LOG_JSON",
        "PROFILEGATE_LOG_FILTER",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("PROFILEGATE_TEST_BOOL", "YES");
        assert!(env_bool("PROFILEGATE_TEST_BOOL", false));
        std::env::set_var("PROFILEGATE_TEST_BOOL", "off");
        assert!(!env_bool("PROFILEGATE_TEST_BOOL", true));
        std::env::remove_var("PROFILEGATE_TEST_BOOL");
        assert!(env_bool("PROFILEGATE_TEST_BOOL", true));
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("PROFILEGATE_DB_PATH", "/tmp/profiles.db");
        std::env::set_var("PROFILEGATE_DB_POOL_SIZE", "3");
        std::env::set_var("PROFILEGATE_DB_SEED_PATH", "/tmp/seed.json");
        std::env::set_var("PROFILEGATE_BIND_ADDR", "0.0.0.0:9000");
        std::env::set_var("PROFILEGATE_VERBOSE_LOGGING", "1");
        std::env::set_var("PROFILEGATE_LOG_JSON", "true");
        std::env::set_var("PROFILEGATE_LOG_FILTER", "debug");

        let config = load_from_env();
        clear_env();

        let config = config.expect("config from env");
        assert_eq!(config.database.path, "/tmp/profiles.db");
        assert_eq!(config.database.pool_size, 3);
        assert_eq!(config.database.seed_path.as_deref(), Some("/tmp/seed.json"));
        assert_eq!(config.server.bind_addr, "0.0.0.0:9000");
        assert!(config.service.verbose_logging);
        assert!(config.logging.json);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_load_from_env_missing_db_path() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let result = load_from_env();

        assert!(matches!(result, Err(ProfileError::Config(_))));
    }

    #[test]
    fn test_load_from_env_invalid_number() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        std::env::set_var("PROFILEGATE_DB_PATH", ":memory:");
        std::env::set_var("PROFILEGATE_DB_POOL_SIZE", "lots");

        let result = load();
        clear_env();

        assert!(matches!(result, Err(ProfileError::Config(_))));
    }

    #[test]
    fn test_load_from_file_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profilegate.toml");
        std::fs::write(
            &path,
            r#"
[database]
path = ":memory:"
seed_path = "seed.json"

[service]
verbose_logging = true
"#,
        )
        .unwrap();

        let config = load_from_file(Some(path)).expect("toml config");

        assert!(config.database.is_in_memory());
        assert_eq!(config.database.pool_size, 8);
        assert_eq!(config.database.seed_path.as_deref(), Some("seed.json"));
        assert!(config.service.verbose_logging);
        assert!(!config.logging.json);
    }

    #[test]
    fn test_load_from_file_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"server":{"bind_addr":"127.0.0.1:0"},"logging":{"json":true}}"#)
            .unwrap();

        let config = load_from_file(Some(path)).expect("json config");

        assert_eq!(config.server.bind_addr, "127.0.0.1:0");
        assert!(config.logging.json);
    }

    #[test]
    fn test_load_from_file_missing() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/profilegate.toml")));
        assert!(matches!(result, Err(ProfileError::Config(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profilegate.yaml");
        std::fs::write(&path, "database: {}").unwrap();

        assert!(matches!(load_from_file(Some(path)), Err(ProfileError::Config(_))));
    }
}
