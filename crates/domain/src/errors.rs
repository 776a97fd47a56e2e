//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{FieldErrors, IdentityRole};

/// Main error type for ProfileGate
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum ProfileError {
    #[error("Identity {acting_id} may not access identity {target_id}")]
    AuthorizationDenied { acting_id: i64, target_id: i64 },

    #[error("Validation failed: {0}")]
    ValidationFailed(FieldErrors),

    #[error("{role} identity {id} not found")]
    RecordNotFound { role: IdentityRole, id: i64 },

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProfileError {
    /// Stable label suitable for logging and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AuthorizationDenied { .. } => "authorization_denied",
            Self::ValidationFailed(_) => "validation_failed",
            Self::RecordNotFound { .. } => "record_not_found",
            Self::Persistence(_) => "persistence",
            Self::Config(_) => "config",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for ProfileGate operations
pub type Result<T> = std::result::Result<T, ProfileError>;
