//! Startup seed data
//!
//! A seed file is a JSON array of identities in the same shape the API
//! returns (`id`, `name`, `phone`, `isAdmin`, optional `lastViewedAt`).

use std::path::Path;

use profilegate_domain::{Identity, ProfileError, Result};

/// Read the identities listed in a JSON seed file.
///
/// # Errors
/// Returns `ProfileError::Config` if the file cannot be read or is not a
/// JSON array of identities.
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<Identity>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ProfileError::Config(format!("Failed to read seed file {}: {e}", path.display()))
    })?;

    let identities: Vec<Identity> = serde_json::from_str(&contents).map_err(|e| {
        ProfileError::Config(format!("Invalid seed file {}: {e}", path.display()))
    })?;

    tracing::info!(path = %path.display(), count = identities.len(), "seed file loaded");
    Ok(identities)
}
