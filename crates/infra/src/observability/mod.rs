//! Tracing subscriber bootstrap
//!
//! `RUST_LOG` wins over the configured filter when it is set. The subscriber
//! is global, so only the first successful call installs it; later calls are
//! no-ops.

use profilegate_domain::{LoggingConfig, ProfileError, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber described by `config`.
///
/// Returns `true` if this call installed the subscriber and `false` if one
/// was already present.
///
/// # Errors
/// Returns `ProfileError::Config` if the configured filter directive does not
/// parse.
pub fn init_tracing(config: &LoggingConfig) -> Result<bool> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&config.filter)?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.json {
        registry.with(fmt::layer().json().with_current_span(false)).try_init().is_ok()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init().is_ok()
    };

    if installed {
        tracing::debug!(json = config.json, filter = %config.filter, "tracing initialised");
    }
    Ok(installed)
}

fn build_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive)
        .map_err(|e| ProfileError::Config(format!("invalid log filter '{directive}': {e}")))
}
